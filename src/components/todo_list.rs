//! Todo List Page
//!
//! The main view: loads the list for the sort order in the URL, renders the
//! rows, and runs the optimistic toggle-done and delete flows. Mutations
//! never patch a row in place; a successful remote call always ends in a
//! full refetch that replaces the row vector.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::components::{Footer, Header};
use crate::datetime::pipe_date;
use crate::env;
use crate::models::{SortType, Todo};
use crate::reconcile::{self, TodoRow};
use crate::services;
use crate::services::TodoDraft;
use crate::store::{store_notify_error, use_app_store};

/// Matches the CSS fade-out duration on deleted rows
const FADE_OUT_MS: u32 = 500;

#[component]
pub fn TodoListPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();
    let query = use_query_map();
    let sort_type = Memo::new(move |_| SortType::from_query(query.get().get("sort").as_deref()));

    let (rows, set_rows) = signal(Vec::<TodoRow>::new());
    let user = services::get_user();

    // Load the list whenever the sort query changes
    Effect::new(move |_| {
        let sort = sort_type.get();
        spawn_local(async move {
            web_sys::console::log_1(&format!("[TODO] Loading list, sort={}", sort.as_str()).into());
            match services::get_todos(sort).await {
                Ok(todos) => set_rows.set(reconcile::rows_from(todos)),
                Err(err) => {
                    set_rows.set(Vec::new());
                    store_notify_error(&store, err.to_string());
                }
            }
        });
    });

    let on_click_sort = move |_| {
        let next = sort_type.get_untracked().toggled();
        navigate(
            &format!("/todo?sort={}", next.as_str()),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    // Invert `done` remotely, then replace the list with fresh data. The
    // flag is keyed by id so a refresh landing mid-flight cannot misroute
    // the revert.
    let on_toggle_done = move |todo: Todo| {
        let id = todo.id.clone();
        let mut accepted = false;
        set_rows.update(|rows| accepted = reconcile::begin_update(rows, &id));
        if !accepted {
            return;
        }
        let sort = sort_type.get_untracked();
        spawn_local(async move {
            let draft = TodoDraft {
                description: todo.description.clone(),
                deadline_utc: todo.deadline.clone(),
                done: Some(!todo.done),
                image: None,
            };
            match services::put_todo(&id, &draft).await {
                Ok(_) => match services::get_todos(sort).await {
                    Ok(todos) => set_rows.set(reconcile::rows_from(todos)),
                    Err(err) => {
                        set_rows.update(|rows| reconcile::fail_update(rows, &id));
                        store_notify_error(&store, err.to_string());
                    }
                },
                Err(err) => {
                    set_rows.update(|rows| reconcile::fail_update(rows, &id));
                    store_notify_error(&store, err.to_string());
                }
            }
        });
    };

    let on_click_delete = move |id: String| {
        let mut accepted = false;
        set_rows.update(|rows| accepted = reconcile::begin_delete(rows, &id));
        if !accepted {
            return;
        }
        let sort = sort_type.get_untracked();
        spawn_local(async move {
            match services::delete_todo(&id).await {
                Err(err) => {
                    set_rows.update(|rows| reconcile::fail_delete(rows, &id));
                    store_notify_error(&store, err.to_string());
                }
                Ok(()) => {
                    // hold the row in its fade-out state until the
                    // transition has run, then refresh
                    set_rows.update(|rows| reconcile::finish_delete(rows, &id));
                    TimeoutFuture::new(FADE_OUT_MS).await;
                    match services::get_todos(sort).await {
                        Ok(todos) => set_rows.set(reconcile::rows_from(todos)),
                        Err(err) => store_notify_error(&store, err.to_string()),
                    }
                }
            }
        });
    };

    view! {
        <Header with_add_button=true/>
        <div class="page-body">
            <p class="welcome">"Welcome back, " {user.full_name.clone()}</p>
            <div class="sort-row">
                <p>"Sort by date"</p>
                <button class="sort-btn" on:click=on_click_sort>
                    {move || sort_type.get().as_str().to_uppercase()}
                </button>
            </div>

            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <p class="no-data">"No data"</p> }
            >
                <ul class="todo-list">
                    <For
                        each=move || rows.get()
                        key=|row| {
                            // Key on every field the row can change under so
                            // flag flips re-render it
                            (
                                row.todo.id.clone(),
                                row.todo.done,
                                row.todo.description.clone(),
                                row.is_deleting,
                                row.is_delete_done,
                                row.is_updating,
                            )
                        }
                        children=move |row| {
                            let todo = row.todo.clone();
                            let delete_id = todo.id.clone();
                            let toggle_todo = todo.clone();
                            let li_class = if row.is_delete_done {
                                "todo-item fade-out"
                            } else {
                                "todo-item"
                            };
                            view! {
                                <li class=li_class>
                                    <div class="todo-item-main">
                                        <Show
                                            when={let updating = row.is_updating; move || !updating}
                                            fallback=|| view! { <span class="busy-indicator"></span> }
                                        >
                                            <input
                                                type="checkbox"
                                                prop:checked=todo.done
                                                on:change={let toggle_todo = toggle_todo.clone(); move |_| on_toggle_done(toggle_todo.clone())}
                                            />
                                        </Show>
                                        <a href=format!("/todo/{}", todo.id) class="todo-link">
                                            <figure class="thumb">
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
                                                <p class="deadline">{pipe_date(&todo.deadline)}</p>
                                                <p class=if todo.done { "description done" } else { "description" }>
                                                    {todo.description.clone()}
                                                </p>
                                            </div>
                                        </a>
                                    </div>
                                    <div class="todo-item-actions">
                                        <a href=format!("/todo/edit/{}", todo.id) class="edit-btn">"Edit"</a>
                                        <button
                                            class="delete-btn"
                                            on:click=move |_| on_click_delete(delete_id.clone())
                                        >
                                            {if row.is_deleting { "Deleting..." } else { "Delete" }}
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
        <Footer/>
    }
}
