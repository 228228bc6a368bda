use serde::Serialize;
use std::fmt;

/// Write call made for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Create,
    Update,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of submitting one event.
///
/// `http_status` is `None` when the request never got a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub event_name: String,
    pub action: Action,
    pub http_status: Option<u16>,
    pub success: bool,
    pub message: Option<String>,
}

/// Result of deleting one event id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub id: i64,
    pub http_status: Option<u16>,
    pub success: bool,
    pub message: Option<String>,
}
