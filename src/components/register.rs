//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

use crate::forms::{validate_register, RegisterErrors};
use crate::models::RegisterInput;
use crate::services;
use crate::store::{store_notify_error, store_notify_success, use_app_store};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(RegisterErrors::default());
    let (is_submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let checked = validate_register(
            &email.get_untracked(),
            &full_name.get_untracked(),
            &password.get_untracked(),
        );
        set_errors.set(checked.clone());
        if !checked.is_empty() {
            return;
        }

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let input = RegisterInput {
                email: email.get_untracked(),
                full_name: full_name.get_untracked(),
                password: password.get_untracked(),
            };
            let result = services::post_register(&input).await;
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    store_notify_success(
                        &store,
                        "Your account is registered successfully. Now you can login",
                    );
                    navigate(
                        "/auth/login",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => store_notify_error(&store, err.to_string()),
            }
        });
    };

    view! {
        <div class="page-body">
            <h1 class="auth-title">"Register New Account"</h1>
            <form on:submit=on_submit>
                <label class="field">
                    <p>"Email"</p>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_email.set(input.value());
                        }
                    />
                    {move || errors.get().email.map(|msg| view! {
                        <small class="field-error">{msg}</small>
                    })}
                </label>

                <label class="field">
                    <p>"Full Name"</p>
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_full_name.set(input.value());
                        }
                    />
                    {move || errors.get().full_name.map(|msg| view! {
                        <small class="field-error">{msg}</small>
                    })}
                </label>

                <label class="field">
                    <p>"Password"</p>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                        }
                    />
                    {move || errors.get().password.map(|msg| view! {
                        <small class="field-error">{msg}</small>
                    })}
                </label>

                <button
                    type="submit"
                    class=move || if errors.get().is_empty() { "submit-btn" } else { "submit-btn invalid" }
                >
                    {move || if is_submitting.get() { "Registering..." } else { "Register" }}
                </button>

                <p class="auth-switch">
                    "Already have an account? "
                    <a href="/auth/login">"Login here"</a>
                </p>
            </form>
        </div>
    }
}
