use super::http_client;
use crate::api::{Credentials, login};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages::success;
use log::info;

pub const PASSWORD_ENV: &str = "PAYCODE_PASSWORD";

/// Handle the `login` command: password grant, then a fresh session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::InvalidCredentials);
        }

        let client_auth = Config::client_auth()?;

        let password = match password {
            Some(p) => p.clone(),
            None => match std::env::var(PASSWORD_ENV) {
                Ok(p) => p,
                Err(_) => rpassword::prompt_password("Password: ")?,
            },
        };

        let http = http_client()?;

        let token = login(
            &http,
            &cfg.auth_url,
            &client_auth,
            &Credentials {
                username,
                password: &password,
            },
        )?;

        info!(
            "token issued for '{username}' (type {:?}, expires in {:?}s)",
            token.token_type, token.expires_in
        );

        // A new login always starts with an empty batch.
        Session::new(username, token.access_token).save(cfg)?;

        success(format!("Logged in as {username}"));
    }

    Ok(())
}
