//! Session Store
//!
//! The authenticated user lives as percent-encoded JSON in a single cookie.
//! Only this module touches the cookie; everything else goes through the
//! accessors.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;

use crate::env;
use crate::models::User;

/// Pull one value out of a `Cookie:`-style header string
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}

pub fn encode_cookie_value(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

pub fn decode_cookie_value(value: &str) -> String {
    percent_decode_str(value)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_default()
}

fn html_document() -> web_sys::HtmlDocument {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .unchecked_into::<web_sys::HtmlDocument>()
}

/// Current session user; a missing or unreadable cookie yields the default
/// (empty) user, mirroring the `|| '{}'` fallback on the original cookie read
pub fn get_user() -> User {
    let cookies = html_document().cookie().unwrap_or_default();
    cookie_value(&cookies, env::user_cookie_name())
        .map(|raw| decode_cookie_value(&raw))
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

pub fn set_user(user: &User) {
    if let Ok(json) = serde_json::to_string(user) {
        let cookie = format!(
            "{}={}; path=/",
            env::user_cookie_name(),
            encode_cookie_value(&json)
        );
        let _ = html_document().set_cookie(&cookie);
    }
}

pub fn remove_user() {
    let cookie = format!("{}=; path=/; max-age=0", env::user_cookie_name());
    let _ = html_document().set_cookie(&cookie);
}

pub fn access_token() -> String {
    get_user().access_token
}

pub fn has_access_token() -> bool {
    !access_token().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_named_pair() {
        let header = "theme=dark; todo-user=abc%7D; other=1";
        assert_eq!(cookie_value(header, "todo-user").as_deref(), Some("abc%7D"));
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn cookie_value_ignores_name_prefixes() {
        let header = "todo-user-old=x; todo-user=y";
        assert_eq!(cookie_value(header, "todo-user").as_deref(), Some("y"));
    }

    #[test]
    fn user_json_round_trips_through_cookie_encoding() {
        let user = User {
            full_name: "Pande Nengah Purnawan".to_string(),
            email: "pande@example.com".to_string(),
            access_token: "token; with={braces}".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let encoded = encode_cookie_value(&json);
        assert!(!encoded.contains(';'));
        assert!(!encoded.contains('='));

        let decoded: User = serde_json::from_str(&decode_cookie_value(&encoded)).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn unreadable_cookie_yields_default_user() {
        let decoded = decode_cookie_value("%FF%FE");
        assert_eq!(decoded, "");
        let user: User = serde_json::from_str::<User>(&decoded).unwrap_or_default();
        assert!(user.access_token.is_empty());
    }
}
