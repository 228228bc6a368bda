//! Row validation: one raw spreadsheet record → one schedule entry.

use crate::models::row::float_to_i64;
use crate::models::{CellValue, EventKey, RawRow, ScheduleEntry};
use crate::utils::date::holiday_date_from_cell;
use chrono::NaiveDate;
use std::fmt;

pub const COL_ID: &str = "id";
pub const COL_EVENT_NAME: &str = "Paycode Event Name";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_PAYCODE_ID: &str = "paycode_id";
pub const COL_HOLIDAY_NAME: &str = "holiday_name";
/// Prefix of the date column; variants differ in the format hint.
pub const COL_HOLIDAY_DATE_PREFIX: &str = "holiday_date";
pub const COL_HOLIDAY_DATE: &str = "holiday_date(DD-MM-YYYY or YYYY-MM-DD)";
pub const COL_REPEAT_WEEK: &str = "repeatWeek";
pub const COL_REPEAT_WEEKDAY: &str = "repeatWeekday";

/// Upload template header, in column order.
pub const UPLOAD_HEADERS: [&str; 8] = [
    COL_ID,
    COL_EVENT_NAME,
    COL_DESCRIPTION,
    COL_PAYCODE_ID,
    COL_HOLIDAY_NAME,
    COL_HOLIDAY_DATE,
    COL_REPEAT_WEEK,
    COL_REPEAT_WEEKDAY,
];

/// Why a row was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    MissingField(&'static str),
    InvalidDate(String),
    DateOutOfRange(String),
    InvalidPaycodeId(String),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::MissingField(col) => write!(f, "missing field '{col}'"),
            RejectionReason::InvalidDate(raw) => write!(f, "invalid date '{raw}'"),
            RejectionReason::DateOutOfRange(raw) => write!(f, "date out of range '{raw}'"),
            RejectionReason::InvalidPaycodeId(raw) => write!(f, "invalid paycode id '{raw}'"),
        }
    }
}

/// A rejected row together with its line in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub row: usize,
    pub reason: RejectionReason,
}

/// Event-level fields carried by every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub name: String,
    pub description: String,
    pub paycode_id: i64,
}

/// A validated row, ready to be merged into an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub key: EventKey,
    pub id: Option<i64>,
    pub fields: EventFields,
    pub entry: ScheduleEntry,
}

/// Options that change how rows are validated.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    pub start_date: NaiveDate,
    pub strict_dates: bool,
}

impl NormalizeOptions {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            strict_dates: false,
        }
    }
}

/// Validate one row and build its schedule entry.
pub fn normalize(row: &RawRow, opts: &NormalizeOptions) -> Result<NormalizedRow, RejectionReason> {
    let name = required_text(row, COL_EVENT_NAME)?;
    let holiday_name = required_text(row, COL_HOLIDAY_NAME)?;

    let date_cell = row.get_by_prefix(COL_HOLIDAY_DATE_PREFIX);
    if date_cell.is_blank() {
        return Err(RejectionReason::MissingField(COL_HOLIDAY_DATE_PREFIX));
    }

    let paycode_cell = row.get(COL_PAYCODE_ID);
    if paycode_cell.is_blank() {
        return Err(RejectionReason::MissingField(COL_PAYCODE_ID));
    }
    let paycode_id = paycode_cell
        .as_truncated_int()
        .ok_or_else(|| RejectionReason::InvalidPaycodeId(paycode_cell.as_text()))?;

    let date = holiday_date_from_cell(date_cell)
        .ok_or_else(|| RejectionReason::InvalidDate(date_cell.as_text()))?;
    if opts.strict_dates && !date.in_calendar_range() {
        return Err(RejectionReason::DateOutOfRange(date_cell.as_text()));
    }

    let id = parse_id(row.get(COL_ID));

    let description = match row.get(COL_DESCRIPTION).as_text() {
        d if d.is_empty() => name.clone(),
        d => d,
    };

    let entry = ScheduleEntry {
        name: holiday_name,
        start_date: opts.start_date.format("%Y-%m-%d").to_string(),
        repeat_day: date.day,
        repeat_month: date.month,
        repeat_year: date.year,
        repeat_week: token_or_wildcard(row.get(COL_REPEAT_WEEK)),
        repeat_weekday: token_or_wildcard(row.get(COL_REPEAT_WEEKDAY)),
    };

    let key = match id {
        Some(id) => EventKey::Id(id),
        None => EventKey::Name(name.clone()),
    };

    Ok(NormalizedRow {
        key,
        id,
        fields: EventFields {
            name,
            description,
            paycode_id,
        },
        entry,
    })
}

fn required_text(row: &RawRow, column: &'static str) -> Result<String, RejectionReason> {
    let value = row.get(column).as_text();
    if value.is_empty() {
        Err(RejectionReason::MissingField(column))
    } else {
        Ok(value)
    }
}

/// Non-negative whole ids signal update intent; anything else is ignored,
/// whichever backend produced the cell.
fn parse_id(cell: &CellValue) -> Option<i64> {
    match cell {
        CellValue::Int(i) if *i >= 0 => Some(*i),
        CellValue::Float(f) => float_to_i64(*f).filter(|i| *i >= 0),
        CellValue::Text(s) => {
            let s = s.trim();
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                s.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}

fn token_or_wildcard(cell: &CellValue) -> String {
    match cell.as_text() {
        t if t.is_empty() => "*".to_string(),
        t => t,
    }
}
