//! Logged-in state shared between commands.
//!
//! A session starts with `login`, holds the bearer token and the batch of
//! events from the latest upload, and ends with `logout`.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::PaycodeEvent;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub token: String,
    pub logged_in_at: DateTime<Local>,
    /// Consolidated events from the latest upload, waiting to be submitted.
    #[serde(default)]
    pub batch: Vec<PaycodeEvent>,
    /// File the batch was read from.
    #[serde(default)]
    pub batch_source: Option<String>,
}

impl Session {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
            logged_in_at: Local::now(),
            batch: Vec::new(),
            batch_source: None,
        }
    }

    /// Current session, if any.
    pub fn load(cfg: &Config) -> AppResult<Option<Self>> {
        let path = cfg.session_file();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Current session, or [`AppError::NotLoggedIn`].
    pub fn require(cfg: &Config) -> AppResult<Self> {
        Self::load(cfg)?.ok_or(AppError::NotLoggedIn)
    }

    pub fn save(&self, cfg: &Config) -> AppResult<()> {
        fs::create_dir_all(&cfg.home)?;
        let json = serde_json::to_string_pretty(self)?;
        write_private(&cfg.session_file(), json.as_bytes())?;
        Ok(())
    }

    /// Replace the pending batch with a fresh upload.
    pub fn replace_batch(&mut self, events: Vec<PaycodeEvent>, source: &Path) {
        self.batch = events;
        self.batch_source = Some(source.display().to_string());
    }

    /// Remove the session file. Returns whether a session existed.
    pub fn clear(cfg: &Config) -> AppResult<bool> {
        let path = cfg.session_file();
        if path.exists() {
            fs::remove_file(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(unix)]
fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(data)
}

#[cfg(not(unix))]
fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()> {
    fs::write(path, data)
}
