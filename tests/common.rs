#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use paycode_portal::api::{ApiResponse, PaycodeEventApi};
use paycode_portal::config::Config;
use paycode_portal::core::NormalizeOptions;
use paycode_portal::errors::{AppError, AppResult};
use paycode_portal::models::{CellValue, Paycode, PaycodeEvent, RawRow};
use paycode_portal::session::Session;
use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const EVENT_HEADER: &str = "id,Paycode Event Name,Description,paycode_id,holiday_name,holiday_date(DD-MM-YYYY or YYYY-MM-DD),repeatWeek,repeatWeekday";

pub fn ptl() -> Command {
    let mut cmd = cargo_bin_cmd!("paycode-portal");
    cmd.env("NO_COLOR", "1")
        .env_remove("PAYCODE_CLIENT_AUTH")
        .env_remove("PAYCODE_PORTAL_HOME")
        .env_remove("RUST_LOG");
    cmd
}

/// Fresh application directory inside the system temp dir
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_paycode_portal", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Temporary output file path, removed if it already exists
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write a fixture file in the temp dir and return its path
pub fn write_fixture(name: &str, content: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// Store a session for `home` without going through the token endpoint
pub fn fake_login(home: &PathBuf) -> Config {
    let cfg = Config::load(Some(home.clone())).expect("load config");
    Session::new("tester", "test-token")
        .save(&cfg)
        .expect("save session");
    cfg
}

pub fn opts() -> NormalizeOptions {
    NormalizeOptions::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
}

/// Row with text cells; blank values become empty cells like the CSV source
pub fn row(line: usize, cells: &[(&str, &str)]) -> RawRow {
    cells.iter().fold(RawRow::new(line), |r, (k, v)| {
        let value = if v.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(v.to_string())
        };
        r.with(k, value)
    })
}

/// Typical upload row
pub fn event_row(line: usize, id: &str, name: &str, paycode: &str, holiday: &str, date: &str) -> RawRow {
    row(
        line,
        &[
            ("id", id),
            ("Paycode Event Name", name),
            ("Description", ""),
            ("paycode_id", paycode),
            ("holiday_name", holiday),
            ("holiday_date(DD-MM-YYYY or YYYY-MM-DD)", date),
            ("repeatWeek", ""),
            ("repeatWeekday", ""),
        ],
    )
}

/// In-memory stand-in for the REST collection.
#[derive(Default)]
pub struct FakeApi {
    /// "POST", "PUT 7", "DELETE 3", "GET" in call order
    pub calls: RefCell<Vec<String>>,
    /// JSON bodies of create/update calls
    pub bodies: RefCell<Vec<serde_json::Value>>,
    /// Events (by name) whose write returns 500
    pub failing: Vec<String>,
    /// Ids whose delete returns 404
    pub missing_ids: Vec<i64>,
    /// Events (by name) whose write never gets a response
    pub unreachable: Vec<String>,
    /// `None` makes `list` fail
    pub listing: Option<Vec<PaycodeEvent>>,
    pub paycodes: Vec<Paycode>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn write(&self, call: String, event: &PaycodeEvent, ok: u16) -> AppResult<ApiResponse> {
        self.calls.borrow_mut().push(call);
        self.bodies
            .borrow_mut()
            .push(serde_json::to_value(event).expect("serialize event"));

        if self.unreachable.contains(&event.name) {
            return Err(AppError::Other("connection refused".into()));
        }
        if self.failing.contains(&event.name) {
            return Ok(ApiResponse::new(500, "{\"error\":\"boom\"}"));
        }
        Ok(ApiResponse::new(ok, "{\"id\":99}"))
    }
}

impl PaycodeEventApi for FakeApi {
    fn create(&self, event: &PaycodeEvent) -> AppResult<ApiResponse> {
        self.write("POST".into(), event, 201)
    }

    fn update(&self, id: i64, event: &PaycodeEvent) -> AppResult<ApiResponse> {
        self.write(format!("PUT {id}"), event, 200)
    }

    fn delete(&self, id: i64) -> AppResult<ApiResponse> {
        self.calls.borrow_mut().push(format!("DELETE {id}"));
        if self.missing_ids.contains(&id) {
            Ok(ApiResponse::new(404, "not found"))
        } else {
            Ok(ApiResponse::new(204, ""))
        }
    }

    fn list(&self) -> AppResult<Vec<PaycodeEvent>> {
        self.calls.borrow_mut().push("GET".into());
        self.listing.clone().ok_or(AppError::Api {
            status: 503,
            message: "unavailable".into(),
        })
    }

    fn list_paycodes(&self) -> AppResult<Vec<Paycode>> {
        Ok(self.paycodes.clone())
    }
}
