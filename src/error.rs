//! Fetch Error Taxonomy
//!
//! Every remote call resolves to `Result<T, FetchError>`; callers only ever
//! branch on success vs failure and show the message. Nothing here aborts
//! the page.

use serde::Deserialize;
use thiserror::Error;

pub type FetchResult<T> = core::result::Result<T, FetchError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Your time access is over. Please login again")]
    Unauthorized,
    /// First message out of the backend's structured validation list
    #[error("{0}")]
    Validation(String),
    #[error("Data is not found")]
    NotFound,
    /// Anything transport-level: connection refused, DNS, malformed body
    #[error("{0}")]
    Transport(String),
}

/// Shape of the backend's validation error body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    message: String,
}

impl FetchError {
    /// Classify a non-success HTTP response. 401 always wins, then the
    /// first structured message if the body carries one, then 404.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return FetchError::Unauthorized;
        }
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(first) = parsed.errors.first() {
                if !first.message.is_empty() {
                    return FetchError::Validation(first.message.clone());
                }
            }
        }
        if status == 404 {
            return FetchError::NotFound;
        }
        FetchError::Transport(format!("Request failed with status code {}", status))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_fixed_message() {
        let err = FetchError::from_status(401, "");
        assert_eq!(err, FetchError::Unauthorized);
        assert_eq!(
            err.to_string(),
            "Your time access is over. Please login again"
        );
    }

    #[test]
    fn first_structured_message_is_extracted() {
        let body = r#"{"errors":[{"message":"Description is too long"},{"message":"second"}]}"#;
        let err = FetchError::from_status(400, body);
        assert_eq!(err, FetchError::Validation("Description is too long".into()));
        assert_eq!(err.to_string(), "Description is too long");
    }

    #[test]
    fn missing_resource_maps_to_not_found() {
        let err = FetchError::from_status(404, "");
        assert!(err.is_not_found());
    }

    #[test]
    fn structured_message_beats_not_found_status() {
        let body = r#"{"errors":[{"message":"No such todo"}]}"#;
        let err = FetchError::from_status(404, body);
        assert_eq!(err, FetchError::Validation("No such todo".into()));
    }

    #[test]
    fn unparsable_body_falls_back_to_status_message() {
        let err = FetchError::from_status(500, "<html>oops</html>");
        assert_eq!(
            err,
            FetchError::Transport("Request failed with status code 500".into())
        );
    }
}
