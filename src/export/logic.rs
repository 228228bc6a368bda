// src/export/logic.rs

use crate::api::PaycodeEventApi;
use crate::core::normalize::UPLOAD_HEADERS;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json, write_header_csv};
use crate::export::model::flatten;
use crate::export::notify_export_success;
use crate::export::xlsx::{export_xlsx, write_template_xlsx};
use crate::models::Paycode;
use crate::ui::messages::warning;
use log::debug;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the remote listing, one row per schedule.
    ///
    /// The listing is fetched before the output file is touched, so a fetch
    /// failure leaves no partial file behind. Returns the number of rows.
    pub fn export(
        api: &dyn PaycodeEventApi,
        format: &ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        let events = api.list()?;
        let rows = flatten(&events);
        debug!("{} events flattened into {} rows", events.len(), rows.len());

        if rows.is_empty() {
            warning("No schedules found on the server; writing header only.");
        }

        ensure_parent_dir(path)?;
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }

    /// Write the upload template.
    ///
    /// `paycodes`, when given, adds a lookup sheet to XLSX templates; CSV
    /// templates carry the header row only.
    pub fn template(
        format: &ExportFormat,
        path: &Path,
        paycodes: Option<&[Paycode]>,
        force: bool,
    ) -> AppResult<()> {
        if matches!(format, ExportFormat::Json) {
            return Err(AppError::Export(
                "templates are CSV or XLSX only".to_string(),
            ));
        }

        ensure_writable(path, force)?;
        ensure_parent_dir(path)?;

        if matches!(format, ExportFormat::Xlsx) {
            write_template_xlsx(&UPLOAD_HEADERS, paycodes, path)?;
        } else {
            write_header_csv(&UPLOAD_HEADERS, path)?;
        }

        notify_export_success("Template", path);
        Ok(())
    }
}
