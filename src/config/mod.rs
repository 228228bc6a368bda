use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_AUTH_URL: &str =
    "https://saas-beeforce.labour.tech/authorization-server/oauth/token";
pub const DEFAULT_BASE_URL: &str =
    "https://saas-beeforce.labour.tech/resource-server/api/paycode_events";
pub const DEFAULT_START_DATE: &str = "2026-01-01";

/// Environment variable overriding the application directory.
pub const HOME_ENV: &str = "PAYCODE_PORTAL_HOME";
/// Environment variable carrying the OAuth client credentials.
pub const CLIENT_AUTH_ENV: &str = "PAYCODE_CLIENT_AUTH";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Reference endpoint for paycodes; derived from `base_url` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paycodes_url: Option<String>,
    /// Start date stamped on every uploaded schedule (YYYY-MM-DD).
    #[serde(default = "default_start_date")]
    pub start_date: String,
    /// Reject days outside 1..=31 and months outside 1..=12.
    #[serde(default)]
    pub strict_dates: bool,

    /// Application directory this config was loaded from.
    #[serde(skip)]
    pub home: PathBuf,
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_start_date() -> String {
    DEFAULT_START_DATE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            base_url: default_base_url(),
            paycodes_url: None,
            start_date: default_start_date(),
            strict_dates: false,
            home: Self::config_dir(),
        }
    }
}

impl Config {
    /// Return the standard application directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("paycode-portal")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".paycode-portal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file(&self) -> PathBuf {
        self.home.join("paycode-portal.conf")
    }

    /// Return the full path of the session file
    pub fn session_file(&self) -> PathBuf {
        self.home.join("session.json")
    }

    /// Load configuration from `home`, or return defaults if no file exists
    pub fn load(home: Option<PathBuf>) -> AppResult<Self> {
        let home = home.unwrap_or_else(Self::config_dir);
        let path = home.join("paycode-portal.conf");

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Config::default()
            } else {
                serde_yaml::from_str::<Config>(&content)?
            }
        } else {
            Config::default()
        };

        cfg.home = home;
        cfg.start_date()?;
        Ok(cfg)
    }

    /// Write the configuration file, creating the directory if needed
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(&self.home)?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(self.config_file(), yaml)?;
        Ok(())
    }

    /// Parsed default start date for uploaded schedules
    pub fn start_date(&self) -> AppResult<NaiveDate> {
        NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::Config(format!("invalid start_date '{}'", self.start_date)))
    }

    /// URL of the paycodes reference collection.
    ///
    /// Uses `paycodes_url` when set, otherwise replaces `paycode_events` in
    /// the base URL, otherwise swaps the last path segment for `paycodes`.
    pub fn paycodes_url(&self) -> String {
        if let Some(url) = &self.paycodes_url {
            return url.clone();
        }

        let base = self.base_url.trim_end_matches('/');
        if base.contains("paycode_events") {
            return base.replace("paycode_events", "paycodes");
        }

        match base.rsplit_once('/') {
            Some((parent, _)) => format!("{parent}/paycodes"),
            None => format!("{base}/paycodes"),
        }
    }

    /// Client credentials for the token endpoint, from the environment.
    ///
    /// A bare credential string is sent as HTTP Basic.
    pub fn client_auth() -> AppResult<String> {
        let raw = env::var(CLIENT_AUTH_ENV).map_err(|_| AppError::MissingClientAuth)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::MissingClientAuth);
        }

        if raw.starts_with("Basic ") {
            Ok(raw.to_string())
        } else {
            Ok(format!("Basic {raw}"))
        }
    }

    /// Initialize the application directory and default configuration file
    pub fn init_all(home: Option<PathBuf>) -> AppResult<Self> {
        let home = home.unwrap_or_else(Self::config_dir);
        fs::create_dir_all(&home)?;

        let cfg = Config {
            home,
            ..Config::default()
        };

        if cfg.config_file().exists() {
            return Self::load(Some(cfg.home));
        }

        cfg.save()?;
        Ok(cfg)
    }
}
