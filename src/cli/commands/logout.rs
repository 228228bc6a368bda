use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{info, success};

/// Handle the `logout` command: drops the token and any pending batch.
pub fn handle(cfg: &Config) -> AppResult<()> {
    if Session::clear(cfg)? {
        success("Logged out; pending batch discarded.");
    } else {
        info("No active session.");
    }
    Ok(())
}
