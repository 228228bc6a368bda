use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Reference to the payroll code an event is tied to (`{"id": 5}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycodeRef {
    pub id: i64,
}

/// One recurring occurrence rule attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    pub repeat_day: u32,
    pub repeat_month: u32,
    pub repeat_year: i32,
    #[serde(default = "wildcard", deserialize_with = "lenient_token")]
    pub repeat_week: String,
    #[serde(default = "wildcard", deserialize_with = "lenient_token")]
    pub repeat_weekday: String,
}

impl ScheduleEntry {
    /// Canonical `DD-MM-YYYY` rendering of the holiday date.
    pub fn holiday_date(&self) -> String {
        format!(
            "{:02}-{:02}-{}",
            self.repeat_day, self.repeat_month, self.repeat_year
        )
    }
}

/// A named, described recurrence rule set tied to a paycode.
///
/// `id` present means the event already exists remotely (update intent);
/// absent means it has to be created. The field is left out of the JSON body
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycodeEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub paycode: PaycodeRef,
    #[serde(default)]
    pub schedules: Vec<ScheduleEntry>,
}

impl PaycodeEvent {
    /// Id to update, if any. A zero id counts as absent.
    pub fn update_id(&self) -> Option<i64> {
        self.id.filter(|id| *id != 0)
    }

    /// Copy of the event suitable as a create body.
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

/// Deduplication key of an event within one upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKey {
    Id(i64),
    Name(String),
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKey::Id(id) => write!(f, "#{id}"),
            EventKey::Name(name) => write!(f, "{name}"),
        }
    }
}

fn wildcard() -> String {
    "*".to_string()
}

/// The listing endpoint may return week tokens as numbers, strings or null.
fn lenient_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => wildcard(),
        serde_json::Value::String(s) if s.trim().is_empty() => wildcard(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
