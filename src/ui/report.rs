//! Human-readable summaries of uploads, submissions and deletions.

use crate::core::IngestReport;
use crate::models::{DeleteOutcome, SubmissionOutcome};
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::table::Table;

pub fn print_ingest(report: &IngestReport) {
    header("Upload");

    info(format!(
        "{} rows read, {} accepted, {} rejected",
        report.rows_read,
        report.accepted(),
        report.rejections.len()
    ));

    if !report.rejections.is_empty() {
        warning("Skipped rows:");
        let mut t = Table::new(["row", "reason"]);
        for r in &report.rejections {
            t.add_row(vec![r.row.to_string(), r.reason.to_string()]);
        }
        print!("{}", t.render());
    }

    if report.events.is_empty() {
        warning("No valid events in file.");
        return;
    }

    let mut t = Table::new(["id", "event", "paycode", "schedules", "action"]);
    for ev in &report.events {
        t.add_row(vec![
            ev.id.map(|i| i.to_string()).unwrap_or_else(|| "-".into()),
            ev.name.clone(),
            ev.paycode.id.to_string(),
            ev.schedules.len().to_string(),
            if ev.update_id().is_some() { "update" } else { "create" }.to_string(),
        ]);
    }
    print!("{}", t.render());

    success(format!(
        "{} events ({} schedules) ready to submit",
        report.events.len(),
        report.schedule_count()
    ));
}

pub fn print_submission(outcomes: &[SubmissionOutcome]) {
    header("Create / Update");

    let mut t = Table::new(["event", "action", "status", "result", "message"]);
    for o in outcomes {
        t.add_row(vec![
            o.event_name.clone(),
            o.action.to_string(),
            status_text(o.http_status),
            result_text(o.success),
            o.message.clone().unwrap_or_default(),
        ]);
    }
    print!("{}", t.render());

    summarize(outcomes.iter().filter(|o| o.success).count(), outcomes.len());
}

pub fn print_deletions(outcomes: &[DeleteOutcome]) {
    header("Delete");

    let mut t = Table::new(["id", "status", "result", "message"]);
    for o in outcomes {
        t.add_row(vec![
            o.id.to_string(),
            status_text(o.http_status),
            result_text(o.success),
            o.message.clone().unwrap_or_default(),
        ]);
    }
    print!("{}", t.render());

    summarize(outcomes.iter().filter(|o| o.success).count(), outcomes.len());
}

fn summarize(ok: usize, total: usize) {
    if ok == total {
        success(format!("{ok}/{total} succeeded"));
    } else {
        error(format!("{}/{total} failed", total - ok));
    }
}

fn status_text(status: Option<u16>) -> String {
    status.map(|s| s.to_string()).unwrap_or_else(|| "-".into())
}

fn result_text(ok: bool) -> String {
    if ok { "ok" } else { "FAILED" }.to_string()
}
