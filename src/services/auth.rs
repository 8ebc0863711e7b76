//! Auth Service
//!
//! Login and register JSON posts. Login returns the session payload that
//! goes straight into the cookie; the register response body is not used.

use crate::env;
use crate::error::FetchResult;
use crate::models::{LoginInput, RegisterInput, User};

use super::{check_status, client, parse_json};

pub async fn post_login(input: &LoginInput) -> FetchResult<User> {
    let url = format!("{}auth/login", env::api_url());
    let response = client().post(&url).json(input).send().await?;
    parse_json(response).await
}

pub async fn post_register(input: &RegisterInput) -> FetchResult<()> {
    let url = format!("{}auth/register", env::api_url());
    let response = client().post(&url).json(input).send().await?;
    check_status(response).await
}
