pub mod config;
pub mod delete;
pub mod export;
pub mod init;
pub mod login;
pub mod logout;
pub mod status;
pub mod submit;
pub mod template;
pub mod upload;

use crate::api::HttpApi;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use reqwest::blocking::Client;

/// Shared blocking HTTP client, default timeouts.
pub(crate) fn http_client() -> AppResult<Client> {
    Ok(Client::builder()
        .user_agent(concat!("paycode-portal/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Authorized API client for the current session.
pub(crate) fn api_for(cfg: &Config, session: &Session) -> AppResult<HttpApi> {
    Ok(HttpApi::new(
        http_client()?,
        cfg.base_url.clone(),
        cfg.paycodes_url(),
        session.token.clone(),
    ))
}
