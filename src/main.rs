//! Todo Frontend Entry Point

mod app;
mod components;
mod datetime;
mod env;
mod error;
mod forms;
mod models;
mod reconcile;
mod services;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
