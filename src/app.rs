//! Todo Frontend App
//!
//! Root component: global store, toaster, and the route map. Guarding
//! mirrors the usual middleware rules: todo views need a session token,
//! auth views bounce an already-logged-in user back to the list.

use leptos::prelude::*;
use leptos_router::components::{ProtectedRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{
    AddTodoPage, EditTodoPage, LoginPage, RegisterPage, Toaster, TodoDetailPage, TodoListPage,
};
use crate::services;
use crate::store::AppState;

fn logged_in() -> Option<bool> {
    Some(services::has_access_token())
}

fn logged_out() -> Option<bool> {
    Some(!services::has_access_token())
}

#[component]
pub fn App() -> impl IntoView {
    // Seed the store from the session cookie so the welcome line is right
    // on a hard reload
    let user = services::get_user();
    let store = Store::new(AppState {
        user: (!user.access_token.is_empty()).then_some(user),
        ..Default::default()
    });
    provide_context(store);

    view! {
        <Router>
            <Toaster/>
            <main class="page">
                <Routes fallback=|| view! { <p class="no-data">"Data is not found"</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/todo"/> }/>
                    <Route path=path!("/auth") view=|| view! { <Redirect path="/auth/login"/> }/>
                    <ProtectedRoute
                        path=path!("/auth/login")
                        condition=logged_out
                        redirect_path=|| "/todo"
                        view=LoginPage
                    />
                    <ProtectedRoute
                        path=path!("/auth/register")
                        condition=logged_out
                        redirect_path=|| "/todo"
                        view=RegisterPage
                    />
                    <ProtectedRoute
                        path=path!("/todo")
                        condition=logged_in
                        redirect_path=|| "/auth/login"
                        view=TodoListPage
                    />
                    <ProtectedRoute
                        path=path!("/todo/add")
                        condition=logged_in
                        redirect_path=|| "/auth/login"
                        view=AddTodoPage
                    />
                    <ProtectedRoute
                        path=path!("/todo/edit/:id")
                        condition=logged_in
                        redirect_path=|| "/auth/login"
                        view=EditTodoPage
                    />
                    <ProtectedRoute
                        path=path!("/todo/:id")
                        condition=logged_in
                        redirect_path=|| "/auth/login"
                        view=TodoDetailPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
