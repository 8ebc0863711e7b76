//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div class="app-footer">
            <p>"\u{a9} Pande Nengah | Leptos Green Belt Exercise"</p>
        </div>
    }
}
