use super::TabularSource;
use crate::errors::AppResult;
use crate::models::{CellValue, RawRow};
use ::csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV backend. Every non-blank cell is read as text.
pub struct CsvSource<R: Read> {
    reader: Reader<R>,
    headers: Vec<String>,
    record: StringRecord,
    line: usize,
}

impl CsvSource<File> {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        Self::from_reader(File::open(path)?)
    }
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(rdr: R) -> AppResult<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(rdr);

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            line: 1,
        })
    }
}

impl<R: Read> TabularSource for CsvSource<R> {
    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn next_row(&mut self) -> Option<AppResult<RawRow>> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
            Ok(true) => {
                self.line = self
                    .record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(self.line + 1);

                let mut row = RawRow::new(self.line);
                for (i, header) in self.headers.iter().enumerate() {
                    let value = match self.record.get(i) {
                        Some(v) if !v.trim().is_empty() => CellValue::Text(v.to_string()),
                        _ => CellValue::Empty,
                    };
                    row.cells.insert(header.clone(), value);
                }

                Some(Ok(row))
            }
        }
    }
}
