// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ScheduleExport, get_headers, schedule_to_row};
use crate::export::notify_export_success;
use crate::models::Paycode;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Columns written as text even when they look numeric.
const TEXT_COLUMNS: [usize; 3] = [5, 6, 7];

/// Export XLSX with header styling, banded rows and auto column widths.
pub(crate) fn export_xlsx(rows: &[ScheduleExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Paycode Events")?;

    let headers = get_headers();
    let table: Vec<Vec<String>> = rows.iter().map(schedule_to_row).collect();
    write_table(worksheet, &headers, &table, &TEXT_COLUMNS)?;

    workbook.save(path_str(path)?)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Upload template: header sheet plus an optional paycode lookup sheet.
pub(crate) fn write_template_xlsx(
    headers: &[&str],
    paycodes: Option<&[Paycode]>,
    path: &Path,
) -> AppResult<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Paycode Events")?;
    write_table(sheet, headers, &[], &[])?;

    if let Some(paycodes) = paycodes {
        let lookup = workbook.add_worksheet();
        lookup.set_name("Paycodes")?;
        let table: Vec<Vec<String>> = paycodes
            .iter()
            .map(|p| vec![p.id.to_string(), p.code.clone()])
            .collect();
        write_table(lookup, &["id", "code"], &table, &[1])?;
    }

    workbook.save(path_str(path)?)?;
    Ok(())
}

fn write_table(
    worksheet: &mut Worksheet,
    headers: &[&str],
    rows: &[Vec<String>],
    text_columns: &[usize],
) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            let as_text = text_columns.contains(&col);
            write_xlsx_cell(worksheet, row, col as u16, value, band_color, as_text)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    Ok(())
}

/// Write one cell, as a number when it parses as one unless forced to text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    as_text: bool,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if !as_text && let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet.write_with_format(row, col, num, &fmt)?;
        return Ok(());
    }

    worksheet.write_with_format(row, col, s, &base)?;
    Ok(())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}
