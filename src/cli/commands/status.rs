use crate::config::{CLIENT_AUTH_ENV, Config};
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{detail, header, info, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    header("Configuration");
    detail(format!("config file : {}", cfg.config_file().display()));
    detail(format!("auth url    : {}", cfg.auth_url));
    detail(format!("base url    : {}", cfg.base_url));
    detail(format!("paycodes    : {}", cfg.paycodes_url()));
    detail(format!("start date  : {}", cfg.start_date));
    detail(format!("strict dates: {}", cfg.strict_dates));
    if Config::client_auth().is_err() {
        warning(format!("{CLIENT_AUTH_ENV} is not set"));
    }

    header("Session");
    match Session::load(cfg)? {
        None => info("Not logged in."),
        Some(s) => {
            info(format!(
                "Logged in as {} since {}",
                s.username,
                s.logged_in_at.format("%Y-%m-%d %H:%M")
            ));
            match &s.batch_source {
                Some(src) if !s.batch.is_empty() => detail(format!(
                    "pending batch: {} events from {}",
                    s.batch.len(),
                    src
                )),
                _ => detail("pending batch: none"),
            }
        }
    }

    Ok(())
}
