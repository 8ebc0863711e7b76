//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! session user mirror and the transient toast notices; the todo list
//! itself is page-local state.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::models::User;

/// How long a toast notice stays on screen
const NOTICE_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A single toast notice
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authenticated user, mirrored from the session cookie
    pub user: Option<User>,
    /// Active toast notices, newest last
    pub notices: Vec<Notice>,
    /// Monotonic id source for notices
    pub next_notice_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Push a notice and schedule its auto-dismiss
pub fn store_push_notice(store: &AppStore, kind: NoticeKind, message: impl Into<String>) {
    let id = store.next_notice_id().get_untracked();
    store.next_notice_id().set(id + 1);
    store.notices().write().push(Notice {
        id,
        kind,
        message: message.into(),
    });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_MS).await;
        store_remove_notice(&store, id);
    });
}

pub fn store_notify_error(store: &AppStore, message: impl Into<String>) {
    store_push_notice(store, NoticeKind::Error, message);
}

pub fn store_notify_success(store: &AppStore, message: impl Into<String>) {
    store_push_notice(store, NoticeKind::Success, message);
}

/// Remove a notice by id
pub fn store_remove_notice(store: &AppStore, id: u32) {
    store.notices().write().retain(|n| n.id != id);
}

/// Record the logged-in user
pub fn store_set_user(store: &AppStore, user: User) {
    store.user().set(Some(user));
}
