//! Form Validation
//!
//! Per-field validation for the add/edit/login/register forms. Each field
//! resolves to the first failing rule's message, shown under the input; a
//! form submits only when every field is `None`.

use chrono::NaiveDateTime;

const MSG_REQUIRED: &str = "This field is required";
const MSG_EMAIL: &str = "This field must be a valid email";
const MSG_PASSWORD_MIN: &str = "This field value must contain minimal 6 characters";
const MSG_DESCRIPTION_MAX: &str = "This field value must be less than 100 characters";
const MSG_DATETIME: &str = "This field must be a datetime";
const MSG_FUTURE: &str = "This field value must be in the future";
const MSG_IMAGE_SIZE: &str = "This field size must be less than 10KB";

const DESCRIPTION_MAX_CHARS: usize = 100;
const PASSWORD_MIN_CHARS: usize = 6;
const IMAGE_MAX_BYTES: f64 = 10.0 * 1024.0;

/// Accepts the browser's datetime-local value, with or without seconds
pub fn parse_input_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

fn validate_email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(MSG_REQUIRED.to_string());
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if local.is_empty() || !domain_ok || value.contains(char::is_whitespace) {
        return Some(MSG_EMAIL.to_string());
    }
    None
}

fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(MSG_REQUIRED.to_string());
    }
    if value.chars().count() < PASSWORD_MIN_CHARS {
        return Some(MSG_PASSWORD_MIN.to_string());
    }
    None
}

fn validate_required(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(MSG_REQUIRED.to_string())
    } else {
        None
    }
}

fn validate_description(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(MSG_REQUIRED.to_string());
    }
    if value.chars().count() > DESCRIPTION_MAX_CHARS {
        return Some(MSG_DESCRIPTION_MAX.to_string());
    }
    None
}

fn validate_deadline(value: &str, now: NaiveDateTime) -> Option<String> {
    if value.trim().is_empty() {
        return Some(MSG_REQUIRED.to_string());
    }
    let Some(parsed) = parse_input_datetime(value) else {
        return Some(MSG_DATETIME.to_string());
    };
    if parsed <= now {
        return Some(MSG_FUTURE.to_string());
    }
    None
}

/// No file selected is fine; the cap applies only to a chosen file
pub fn validate_image_size(size: Option<f64>) -> Option<String> {
    match size {
        Some(bytes) if bytes > IMAGE_MAX_BYTES => Some(MSG_IMAGE_SIZE.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_login(email: &str, password: &str) -> LoginErrors {
    LoginErrors {
        email: validate_email(email),
        password: validate_password(password),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterErrors {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.full_name.is_none() && self.password.is_none()
    }
}

pub fn validate_register(email: &str, full_name: &str, password: &str) -> RegisterErrors {
    RegisterErrors {
        email: validate_email(email),
        full_name: validate_required(full_name),
        password: validate_password(password),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFormErrors {
    pub deadline: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl TodoFormErrors {
    pub fn is_empty(&self) -> bool {
        self.deadline.is_none() && self.description.is_none() && self.image.is_none()
    }
}

/// `image_size` is the chosen file's byte length, `None` when no file picked
pub fn validate_todo_form(
    deadline: &str,
    description: &str,
    image_size: Option<f64>,
    now: NaiveDateTime,
) -> TodoFormErrors {
    TodoFormErrors {
        deadline: validate_deadline(deadline, now),
        description: validate_description(description),
        image: validate_image_size(image_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        parse_input_datetime("2022-12-01T12:00").unwrap()
    }

    #[test]
    fn login_accepts_valid_input() {
        assert!(validate_login("user@example.com", "secret1").is_empty());
    }

    #[test]
    fn login_rejects_malformed_email() {
        let errors = validate_login("not-an-email", "secret1");
        assert_eq!(errors.email.as_deref(), Some(MSG_EMAIL));
        let errors = validate_login("a@b", "secret1");
        assert_eq!(errors.email.as_deref(), Some(MSG_EMAIL));
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = validate_login("", "");
        assert_eq!(errors.email.as_deref(), Some(MSG_REQUIRED));
        assert_eq!(errors.password.as_deref(), Some(MSG_REQUIRED));
    }

    #[test]
    fn short_password_gets_minimum_message() {
        let errors = validate_login("user@example.com", "12345");
        assert_eq!(errors.password.as_deref(), Some(MSG_PASSWORD_MIN));
    }

    #[test]
    fn register_requires_full_name() {
        let errors = validate_register("user@example.com", "  ", "secret1");
        assert_eq!(errors.full_name.as_deref(), Some(MSG_REQUIRED));
    }

    #[test]
    fn todo_form_accepts_valid_input() {
        let errors = validate_todo_form("2022-12-21T19:56", "Do Something 1", None, now());
        assert!(errors.is_empty());
    }

    #[test]
    fn deadline_must_parse_as_datetime() {
        let errors = validate_todo_form("next tuesday", "x", None, now());
        assert_eq!(errors.deadline.as_deref(), Some(MSG_DATETIME));
    }

    #[test]
    fn deadline_must_be_in_the_future() {
        let errors = validate_todo_form("2022-11-30T09:00", "x", None, now());
        assert_eq!(errors.deadline.as_deref(), Some(MSG_FUTURE));
    }

    #[test]
    fn description_over_100_chars_is_rejected() {
        let long = "x".repeat(101);
        let errors = validate_todo_form("2022-12-21T19:56", &long, None, now());
        assert_eq!(errors.description.as_deref(), Some(MSG_DESCRIPTION_MAX));

        let exactly = "x".repeat(100);
        assert!(validate_todo_form("2022-12-21T19:56", &exactly, None, now()).is_empty());
    }

    #[test]
    fn image_cap_is_10kb_and_optional() {
        assert!(validate_image_size(None).is_none());
        assert!(validate_image_size(Some(10.0 * 1024.0)).is_none());
        assert_eq!(
            validate_image_size(Some(10.0 * 1024.0 + 1.0)).as_deref(),
            Some(MSG_IMAGE_SIZE)
        );
    }
}
