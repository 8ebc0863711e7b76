//! Todo Detail Page
//!
//! Fetches one todo by the id route param. A failed fetch renders the
//! not-found state rather than a toast.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::components::{Footer, Header};
use crate::datetime::pipe_date;
use crate::env;
use crate::models::Todo;
use crate::services;

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Todo),
    NotFound,
}

#[component]
pub fn TodoDetailPage() -> impl IntoView {
    let params = use_params_map();
    let (state, set_state) = signal(DetailState::Loading);

    Effect::new(move |_| {
        let id = params.get().get("id").unwrap_or_default();
        spawn_local(async move {
            match services::get_todo(&id).await {
                Ok(todo) => set_state.set(DetailState::Loaded(todo)),
                Err(_) => set_state.set(DetailState::NotFound),
            }
        });
    });

    view! {
        <Header with_back_button="/todo"/>
        <div class="page-body">
            {move || match state.get() {
                DetailState::Loading => ().into_any(),
                DetailState::NotFound => view! {
                    <p class="no-data">"Data is not found"</p>
                }.into_any(),
                DetailState::Loaded(todo) => view! {
                    <div class="detail">
                        <figure class="thumb large">
                            {if todo.has_image() {
                                let src = format!(
                                    "{}{}",
                                    env::image_path(),
                                    todo.snapshoot_image.clone().unwrap_or_default()
                                );
                                view! { <img src=src alt=""/> }.into_any()
                            } else {
                                view! { <span class="thumb-placeholder"></span> }.into_any()
                            }}
                        </figure>
                        <div>
                            <h2>"#" {todo.id.clone()}</h2>
                            <p class="deadline">{pipe_date(&todo.deadline)}</p>
                            <p class="description">{todo.description.clone()}</p>
                            {if todo.done {
                                view! { <div class="badge done">"DONE ALREADY"</div> }.into_any()
                            } else {
                                view! { <div class="badge open">"NOT COMPLETE"</div> }.into_any()
                            }}
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
        <Footer/>
    }
}
