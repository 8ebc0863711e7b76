//! Build-time Configuration
//!
//! The API base, image base, and session cookie name are baked in at compile
//! time, overridable through environment variables when building.

/// REST API base, always with a trailing slash
pub fn api_url() -> &'static str {
    option_env!("TODO_API_URL").unwrap_or("https://localhost:5001/api/")
}

/// Base path prepended to `snapshootImage` filenames
pub fn image_path() -> &'static str {
    option_env!("TODO_IMAGE_PATH").unwrap_or("https://localhost:5001/images/")
}

/// Cookie holding the serialized session user
pub fn user_cookie_name() -> &'static str {
    option_env!("TODO_USER_COOKIE").unwrap_or("todo-user")
}
