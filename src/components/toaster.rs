//! Toaster Component
//!
//! Renders the active notices from the store as a stack of toasts. Notices
//! dismiss themselves after a few seconds (see the store helper) or on click.

use leptos::prelude::*;

use crate::store::{store_remove_notice, use_app_store, AppStateStoreFields, NoticeKind};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "toast success",
                        NoticeKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_remove_notice(&store, notice.id)>
                            {notice.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
