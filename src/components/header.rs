//! Header Component
//!
//! Fixed page header with the app title, an optional back link on the left
//! and an optional add link on the right.

use leptos::prelude::*;

#[component]
pub fn Header(
    /// Route the back link points at; no link when absent
    #[prop(optional)]
    with_back_button: Option<&'static str>,
    #[prop(optional)]
    with_add_button: bool,
) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="header-slot">
                {with_back_button.map(|target| view! {
                    <a href=target class="back-btn">"\u{2B9C} Back"</a>
                })}
            </div>
            <h1>"Todo"</h1>
            <div class="header-slot right">
                <Show when=move || with_add_button>
                    <a href="/todo/add" class="add-btn">"Add"</a>
                </Show>
            </div>
        </header>
    }
}
