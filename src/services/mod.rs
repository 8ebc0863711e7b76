//! Remote Service Wrappers
//!
//! Thin async bindings to the REST backend, organized by domain. Every call
//! resolves to `Result<T, FetchError>`; callers never see a raw transport
//! failure.

mod auth;
mod session;
mod todos;

use serde::de::DeserializeOwned;

use crate::error::{FetchError, FetchResult};

pub(crate) fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Attach the bearer token from the session cookie, when present
pub(crate) fn bearer(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    req.header("Authorization", format!("Bearer {}", session::access_token()))
}

/// Uniform response handling: non-success statuses are classified through
/// `FetchError::from_status` with whatever body the backend sent along.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> FetchResult<T> {
    let status = response.status().as_u16();
    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::from_status(status, &body));
    }
    Ok(response.json::<T>().await?)
}

/// Same classification for calls whose response body is not used
pub(crate) async fn check_status(response: reqwest::Response) -> FetchResult<()> {
    let status = response.status().as_u16();
    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::from_status(status, &body));
    }
    Ok(())
}

// Re-export all public items
pub use auth::*;
pub use session::*;
pub use todos::*;
