// src/export/model.rs

use crate::models::PaycodeEvent;
use serde::Serialize;

/// Flat export row: one per schedule entry.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleExport {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub paycode_id: i64,
    pub holiday_name: String,
    pub holiday_date: String,
    #[serde(rename = "repeatWeek")]
    pub repeat_week: String,
    #[serde(rename = "repeatWeekday")]
    pub repeat_weekday: String,
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "name",
        "description",
        "paycode_id",
        "holiday_name",
        "holiday_date",
        "repeatWeek",
        "repeatWeekday",
    ]
}

/// Denormalize the listing: events without schedules produce no rows.
pub fn flatten(events: &[PaycodeEvent]) -> Vec<ScheduleExport> {
    events
        .iter()
        .flat_map(|e| {
            e.schedules.iter().map(move |s| ScheduleExport {
                id: e.id,
                name: e.name.clone(),
                description: e.description.clone(),
                paycode_id: e.paycode.id,
                holiday_name: s.name.clone(),
                holiday_date: s.holiday_date(),
                repeat_week: s.repeat_week.clone(),
                repeat_weekday: s.repeat_weekday.clone(),
            })
        })
        .collect()
}

/// Row as a list of strings, in header order.
pub(crate) fn schedule_to_row(s: &ScheduleExport) -> Vec<String> {
    vec![
        s.id.map(|id| id.to_string()).unwrap_or_default(),
        s.name.clone(),
        s.description.clone(),
        s.paycode_id.to_string(),
        s.holiday_name.clone(),
        s.holiday_date.clone(),
        s.repeat_week.clone(),
        s.repeat_weekday.clone(),
    ]
}
