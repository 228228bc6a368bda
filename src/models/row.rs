use chrono::NaiveDate;
use std::collections::HashMap;

/// A single raw cell as read from a CSV or spreadsheet source.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl CellValue {
    /// Blank cells and whitespace-only text count as empty.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text rendering used for name-like fields.
    ///
    /// Whole floats lose their fractional part so that a spreadsheet cell
    /// holding `2` reads as `"2"` rather than `"2.0"`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
            CellValue::Float(f) => f.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Integer value after truncating any fractional part.
    ///
    /// Accepts `"5"`, `"-5"`, `"5.0"`, `"5.9"` (→ 5) and numeric cells.
    /// Exponents and values outside the `i64` range are refused.
    pub fn as_truncated_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) => float_to_i64(f.trunc()),
            CellValue::Text(s) => {
                let s = s.trim();
                let (int_part, frac_part) = match s.split_once('.') {
                    Some((i, f)) => (i, Some(f)),
                    None => (s, None),
                };
                let digits = int_part.strip_prefix(['+', '-']).unwrap_or(int_part);
                if !is_digits(digits) || frac_part.is_some_and(|f| !is_digits(f)) {
                    return None;
                }
                int_part.parse().ok()
            }
            _ => None,
        }
    }
}

/// Whole float to `i64`, `None` when fractional, non-finite or out of range.
pub(crate) fn float_to_i64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

static EMPTY: CellValue = CellValue::Empty;

/// One record of an uploaded file.
///
/// `line` is the 1-based line in the source where the header is line 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: usize,
    pub cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            cells: HashMap::new(),
        }
    }

    /// Builder used by tests and sources alike.
    pub fn with(mut self, column: &str, value: CellValue) -> Self {
        self.cells.insert(column.to_string(), value);
        self
    }

    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY)
    }

    /// First cell whose header starts with `prefix`, ignoring ASCII case.
    pub fn get_by_prefix(&self, prefix: &str) -> &CellValue {
        let prefix = prefix.to_ascii_lowercase();
        let mut matching: Vec<&String> = self
            .cells
            .keys()
            .filter(|k| k.trim().to_ascii_lowercase().starts_with(&prefix))
            .collect();
        matching.sort();

        matching
            .first()
            .map(|k| self.get(k))
            .unwrap_or(&EMPTY)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.values().all(CellValue::is_blank)
    }
}
