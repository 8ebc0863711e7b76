//! Edit Todo Page
//!
//! Loads the todo named by the id route param, prefills the form, and PUTs
//! the edited fields plus an optional replacement image (capped at 10KB).

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::components::{Footer, Header};
use crate::datetime::{input_datetime_to_utc, pipe_date_to_input_datetime};
use crate::forms::{validate_todo_form, TodoFormErrors};
use crate::models::Todo;
use crate::services;
use crate::services::{ImageUpload, TodoDraft};
use crate::store::{store_notify_error, use_app_store};

async fn read_image(file: web_sys::File) -> Option<ImageUpload> {
    let buffer = JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(ImageUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes,
    })
}

#[component]
pub fn EditTodoPage() -> impl IntoView {
    let store = use_app_store();
    // Stored so the submit handler stays Copy inside the Show closure
    let navigate = StoredValue::new_local(use_navigate());
    let params = use_params_map();

    let (loaded, set_loaded) = signal(None::<Todo>);
    let (deadline, set_deadline) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (done, set_done) = signal(false);
    let (errors, set_errors) = signal(TodoFormErrors::default());
    let (is_submitting, set_submitting) = signal(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    // Fetch the todo being edited; entering this page directly by URL works
    // the same as coming from the list
    Effect::new(move |_| {
        let id = params.get().get("id").unwrap_or_default();
        spawn_local(async move {
            match services::get_todo(&id).await {
                Ok(todo) => {
                    set_deadline.set(pipe_date_to_input_datetime(&todo.deadline));
                    set_description.set(todo.description.clone());
                    set_done.set(todo.done);
                    set_loaded.set(Some(todo));
                }
                Err(err) => {
                    store_notify_error(&store, err.to_string());
                    navigate.with_value(|nav| nav("/todo", NavigateOptions::default()));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let Some(todo) = loaded.get_untracked() else {
            return;
        };

        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let now = chrono::Local::now().naive_local();
        let checked = validate_todo_form(
            &deadline.get_untracked(),
            &description.get_untracked(),
            file.as_ref().map(|f| f.size()),
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
        spawn_local(async move {
            let image = match file {
                Some(file) => read_image(file).await,
                None => None,
            };
            let draft = TodoDraft {
                description: description.get_untracked(),
                deadline_utc,
                done: Some(done.get_untracked()),
                image,
            };
            match services::put_todo(&todo.id, &draft).await {
                Ok(_) => navigate.with_value(|nav| nav(
                    "/todo",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                )),
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
            <Show when=move || loaded.get().is_some()>
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

                    <label class="field">
                        <p>"Is Done?"</p>
                        <select
                            prop:value=move || done.get().to_string()
                            on:change=move |ev| {
                                let target = ev.target().unwrap();
                                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                set_done.set(select.value() == "true");
                            }
                        >
                            <option value="true">"Yes"</option>
                            <option value="false">"No"</option>
                        </select>
                    </label>

                    <label class="field">
                        <p>"Snapshoot Image"</p>
                        <input type="file" node_ref=file_input/>
                        {move || errors.get().image.map(|msg| view! {
                            <small class="field-error">{msg}</small>
                        })}
                    </label>

                    <button
                        type="submit"
                        class=move || if errors.get().is_empty() { "submit-btn" } else { "submit-btn invalid" }
                    >
                        {move || if is_submitting.get() { "Updating..." } else { "Update" }}
                    </button>
                </form>
            </Show>
        </div>
        <Footer/>
    }
}
