use crate::errors::{AppError, AppResult};
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

/// Resource owner credentials for the password grant.
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// OAuth2 password grant against `auth_url`.
///
/// `client_auth` is the full `Authorization` header value for the client
/// (`Basic ...`). Any status other than 200 is reported as invalid
/// credentials.
pub fn login(
    http: &Client,
    auth_url: &str,
    client_auth: &str,
    creds: &Credentials<'_>,
) -> AppResult<TokenResponse> {
    let form = [
        ("username", creds.username),
        ("password", creds.password),
        ("grant_type", "password"),
    ];

    debug!("POST {auth_url} (password grant for '{}')", creds.username);

    let response = http
        .post(auth_url)
        .header(AUTHORIZATION, client_auth)
        .form(&form)
        .send()?;

    let status = response.status();
    debug!("POST {auth_url} -> {status}");

    if status != StatusCode::OK {
        warn!("token endpoint refused login for '{}': {status}", creds.username);
        return Err(AppError::InvalidCredentials);
    }

    Ok(response.json::<TokenResponse>()?)
}
