use crate::models::CellValue;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// `D-M-Y` or `Y-M-D`, digits only, one separator throughout.
static DASHED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-([0-9]+)-([0-9]+)$").expect("static regex"));
static SLASHED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)/([0-9]+)/([0-9]+)$").expect("static regex"));

/// Day, month and year of a holiday date, not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMonthYear {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl DayMonthYear {
    pub fn in_calendar_range(&self) -> bool {
        (1..=31).contains(&self.day) && (1..=12).contains(&self.month)
    }
}

impl From<NaiveDate> for DayMonthYear {
    fn from(d: NaiveDate) -> Self {
        Self {
            day: d.day(),
            month: d.month(),
            year: d.year(),
        }
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a holiday date string.
///
/// A 4-digit first segment means `YYYY-MM-DD`, anything else `DD-MM-YYYY`.
/// Values are passed through without calendar validation, so `45-13-2026`
/// yields day 45, month 13.
pub fn parse_holiday_date(s: &str) -> Option<DayMonthYear> {
    let s = s.trim();
    let caps = DASHED_DATE
        .captures(s)
        .or_else(|| SLASHED_DATE.captures(s))?;
    let (a, b, c) = (&caps[1], &caps[2], &caps[3]);

    let (day, month, year) = if a.len() == 4 { (c, b, a) } else { (a, b, c) };

    Some(DayMonthYear {
        day: day.parse().ok()?,
        month: month.parse().ok()?,
        year: year.parse().ok()?,
    })
}

/// Holiday date from a raw cell: date cells are taken as-is, text is parsed.
pub fn holiday_date_from_cell(cell: &CellValue) -> Option<DayMonthYear> {
    match cell {
        CellValue::Date(d) => Some(DayMonthYear::from(*d)),
        CellValue::Text(s) => parse_holiday_date(s),
        _ => None,
    }
}
