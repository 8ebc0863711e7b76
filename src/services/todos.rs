//! Todo Service
//!
//! CRUD calls against the todos endpoint. Create and update are multipart
//! (the backend accepts an optional image alongside the fields), list and
//! get are plain JSON.

use reqwest::multipart::{Form, Part};

use crate::env;
use crate::error::FetchResult;
use crate::models::{SortType, Todo};

use super::{bearer, check_status, client, parse_json};

/// A picked image file, alive only for the duration of one submit
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Outgoing create/update payload
#[derive(Debug, Clone)]
pub struct TodoDraft {
    pub description: String,
    /// Already converted to UTC RFC 3339 by the form layer
    pub deadline_utc: String,
    /// Only the update endpoint takes `done`
    pub done: Option<bool>,
    pub image: Option<ImageUpload>,
}

fn draft_form(draft: &TodoDraft) -> FetchResult<Form> {
    let mut form = Form::new()
        .text("description", draft.description.clone())
        .text("deadline", draft.deadline_utc.clone());
    if let Some(done) = draft.done {
        form = form.text("done", done.to_string());
    }
    if let Some(image) = &draft.image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)?;
        form = form.part("snapshootImage", part);
    }
    Ok(form)
}

pub async fn get_todos(sort: SortType) -> FetchResult<Vec<Todo>> {
    let url = format!("{}todos?sortType={}", env::api_url(), sort.as_str());
    let response = bearer(client().get(&url)).send().await?;
    parse_json(response).await
}

pub async fn get_todo(id: &str) -> FetchResult<Todo> {
    let url = format!("{}todos/{}", env::api_url(), id);
    let response = bearer(client().get(&url)).send().await?;
    parse_json(response).await
}

pub async fn post_todo(draft: &TodoDraft) -> FetchResult<Todo> {
    let url = format!("{}todos", env::api_url());
    let response = bearer(client().post(&url))
        .multipart(draft_form(draft)?)
        .send()
        .await?;
    parse_json(response).await
}

pub async fn put_todo(id: &str, draft: &TodoDraft) -> FetchResult<Todo> {
    let url = format!("{}todos/{}", env::api_url(), id);
    let response = bearer(client().put(&url))
        .multipart(draft_form(draft)?)
        .send()
        .await?;
    parse_json(response).await
}

pub async fn delete_todo(id: &str) -> FetchResult<()> {
    let url = format!("{}todos/{}", env::api_url(), id);
    let response = bearer(client().delete(&url)).send().await?;
    check_status(response).await
}
