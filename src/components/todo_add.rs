//! Add Todo Page
//!
//! Deadline + description form. Validation runs on submit; the POST only
//! goes out once every field passes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

use crate::components::{Footer, Header};
use crate::datetime::input_datetime_to_utc;
use crate::forms::{validate_todo_form, TodoFormErrors};
use crate::services;
use crate::services::TodoDraft;
use crate::store::{store_notify_error, use_app_store};

#[component]
pub fn AddTodoPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (deadline, set_deadline) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (errors, set_errors) = signal(TodoFormErrors::default());
    let (is_submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let now = chrono::Local::now().naive_local();
        let checked = validate_todo_form(
            &deadline.get_untracked(),
            &description.get_untracked(),
            None,
            now,
        );
        set_errors.set(checked.clone());
        if !checked.is_empty() {
            return;
        }
        let Some(deadline_utc) = input_datetime_to_utc(&deadline.get_untracked()) else {
            return;
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let draft = TodoDraft {
                description: description.get_untracked(),
                deadline_utc,
                done: None,
                image: None,
            };
            match services::post_todo(&draft).await {
                Ok(_) => navigate(
                    "/todo",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                ),
                Err(err) => {
                    store_notify_error(&store, err.to_string());
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Header with_back_button="/todo"/>
        <div class="page-body">
            <form on:submit=on_submit>
                <label class="field">
                    <p>"Deadline"</p>
                    <input
                        type="datetime-local"
                        prop:value=move || deadline.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_deadline.set(input.value());
                        }
                    />
                    {move || errors.get().deadline.map(|msg| view! {
                        <small class="field-error">{msg}</small>
                    })}
                </label>

                <label class="field">
                    <p>"Description"</p>
                    <textarea
                        rows=5
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_description.set(input.value());
                        }
                    ></textarea>
                    {move || errors.get().description.map(|msg| view! {
                        <small class="field-error">{msg}</small>
                    })}
                </label>

                <button
                    type="submit"
                    class=move || if errors.get().is_empty() { "submit-btn" } else { "submit-btn invalid" }
                >
                    {move || if is_submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </div>
        <Footer/>
    }
}
