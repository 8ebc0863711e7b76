//! Frontend Models
//!
//! Data structures matching the remote API wire format (camelCase JSON).

use serde::{Deserialize, Serialize};

/// Todo entity as delivered by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub description: String,
    /// RFC 3339 timestamp string, parsed only for display
    pub deadline: String,
    pub done: bool,
    #[serde(default)]
    pub snapshoot_image: Option<String>,
}

impl Todo {
    /// Empty means no image was ever uploaded
    pub fn has_image(&self) -> bool {
        self.snapshoot_image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Session user as returned by the auth endpoints and held in the cookie
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub access_token: String,
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Register request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Backend list ordering, carried as the `sort` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortType {
    #[default]
    Asc,
    Desc,
}

impl SortType {
    pub fn as_str(self) -> &'static str {
        match self {
            SortType::Asc => "asc",
            SortType::Desc => "desc",
        }
    }

    /// Absent or unrecognized query values fall back to ascending
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortType::Desc,
            _ => SortType::Asc,
        }
    }

    /// Sort button contract: desc flips to asc, anything else flips to desc
    pub fn toggled(self) -> Self {
        match self {
            SortType::Desc => SortType::Asc,
            _ => SortType::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_asc_when_query_absent() {
        assert_eq!(SortType::from_query(None), SortType::Asc);
        assert_eq!(SortType::from_query(Some("sideways")), SortType::Asc);
        assert_eq!(SortType::from_query(Some("desc")), SortType::Desc);
    }

    #[test]
    fn sort_toggle_returns_after_two_applications() {
        assert_eq!(SortType::Asc.toggled(), SortType::Desc);
        assert_eq!(SortType::Desc.toggled(), SortType::Asc);
        assert_eq!(SortType::Asc.toggled().toggled(), SortType::Asc);
    }

    #[test]
    fn todo_deserializes_wire_names() {
        let json = r#"{
            "id": "5819866c-45a6-48ee-b305-c54d77fc7b91",
            "description": "Do Something 1",
            "deadline": "2022-12-21T19:56:00Z",
            "done": false,
            "snapshootImage": ""
        }"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.description, "Do Something 1");
        assert!(!todo.has_image());
    }
}
