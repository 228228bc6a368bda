use super::TabularSource;
use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, RawRow};
use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto};
use chrono::NaiveDate;
use std::path::Path;

/// Spreadsheet backend (`.xlsx`, `.xls`, ...). Reads the first worksheet.
pub struct SpreadsheetSource {
    headers: Vec<String>,
    rows: std::vec::IntoIter<(usize, Vec<Data>)>,
}

impl SpreadsheetSource {
    pub fn open(path: &Path) -> AppResult<Self> {
        let mut workbook = open_workbook_auto(path)?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::Other(format!("{}: workbook has no sheets", path.display())))??;

        // Line numbers follow the sheet, even when the data does not start at A1.
        let first_line = range.start().map(|(r, _)| r as usize + 1).unwrap_or(1);

        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|r| r.iter().map(header_text).collect())
            .unwrap_or_default();

        let body: Vec<(usize, Vec<Data>)> = rows
            .enumerate()
            .map(|(i, r)| (first_line + i + 1, r.to_vec()))
            .collect();

        Ok(Self {
            headers,
            rows: body.into_iter(),
        })
    }
}

impl TabularSource for SpreadsheetSource {
    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn next_row(&mut self) -> Option<AppResult<RawRow>> {
        let (line, cells) = self.rows.next()?;

        let mut row = RawRow::new(line);
        for (i, header) in self.headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = cells.get(i).map(cell_value).unwrap_or(CellValue::Empty);
            row.cells.insert(header.clone(), value);
        }

        Some(Ok(row))
    }
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Convert a calamine cell into the source-neutral cell value
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) if s.trim().is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match excel_date(dt) {
            Some(d) => CellValue::Date(d),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match iso_date(s) {
            Some(d) => CellValue::Date(d),
            None => CellValue::Text(s.clone()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

/// Calendar date of a date-formatted cell, honouring the workbook's
/// 1900/1904 date system. Durations are not dates.
fn excel_date(dt: &ExcelDateTime) -> Option<NaiveDate> {
    if dt.is_duration() {
        return None;
    }
    let (year, month, day, ..) = dt.to_ymd_hms_milli();
    NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
}

/// Date part of an ISO datetime cell (`2026-01-01T00:00:00`).
fn iso_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
