use crate::core::consolidate::Consolidator;
use crate::core::normalize::{NormalizeOptions, Rejection, normalize};
use crate::errors::AppResult;
use crate::models::PaycodeEvent;
use crate::source::{self, TabularSource};
use log::{debug, info};
use std::path::Path;

/// Outcome of reading one uploaded file.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub events: Vec<PaycodeEvent>,
    pub rejections: Vec<Rejection>,
    pub rows_read: usize,
}

impl IngestReport {
    pub fn accepted(&self) -> usize {
        self.rows_read - self.rejections.len()
    }

    pub fn schedule_count(&self) -> usize {
        self.events.iter().map(|e| e.schedules.len()).sum()
    }
}

pub struct IngestLogic;

impl IngestLogic {
    /// Normalize and consolidate every row of `source`.
    ///
    /// Invalid rows are collected as rejections and skipped; blank rows are
    /// ignored. Only a read error from the source aborts the ingestion.
    pub fn run(source: &mut dyn TabularSource, opts: &NormalizeOptions) -> AppResult<IngestReport> {
        let mut consolidator = Consolidator::new();
        let mut rejections = Vec::new();
        let mut rows_read = 0;

        while let Some(row) = source.next_row() {
            let row = row?;
            if row.is_blank() {
                debug!("row {}: blank, skipped", row.line);
                continue;
            }
            rows_read += 1;

            match normalize(&row, opts) {
                Ok(n) => consolidator.push(n),
                Err(reason) => {
                    info!("row {} rejected: {}", row.line, reason);
                    rejections.push(Rejection {
                        row: row.line,
                        reason,
                    });
                }
            }
        }

        Ok(IngestReport {
            events: consolidator.finish(),
            rejections,
            rows_read,
        })
    }

    /// Open `path` with the matching backend and ingest it.
    pub fn from_file(path: &Path, opts: &NormalizeOptions) -> AppResult<IngestReport> {
        let mut src = source::open(path)?;
        debug!("{}: columns {:?}", path.display(), src.headers());
        Self::run(src.as_mut(), opts)
    }
}
