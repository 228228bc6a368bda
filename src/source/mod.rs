//! Tabular sources: uniform row access over CSV and spreadsheet uploads.

mod csv;
mod spreadsheet;

pub use self::csv::CsvSource;
pub use self::spreadsheet::SpreadsheetSource;

use crate::errors::{AppError, AppResult};
use crate::models::RawRow;
use std::path::Path;

/// Anything that yields uploaded records as column → value mappings.
pub trait TabularSource {
    /// Column names from the header row, trimmed.
    fn headers(&self) -> &[String];

    /// Next record in file order, `None` at end of input.
    fn next_row(&mut self) -> Option<AppResult<RawRow>>;
}

/// Open the right backend for `path` based on its extension.
pub fn open(path: &Path) -> AppResult<Box<dyn TabularSource>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => Ok(Box::new(CsvSource::from_path(path)?)),
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Ok(Box::new(SpreadsheetSource::open(path)?)),
        _ => Err(AppError::UnsupportedFile(path.display().to_string())),
    }
}
