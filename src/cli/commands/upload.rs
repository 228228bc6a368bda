use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{IngestLogic, IngestReport, NormalizeOptions};
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::report::print_ingest;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Upload { file } = cmd {
        let mut session = Session::require(cfg)?;
        upload_into(&mut session, file, cfg)?;
    }
    Ok(())
}

/// Ingest `file`, print the report and make it the session's pending batch.
pub(crate) fn upload_into(
    session: &mut Session,
    file: &Path,
    cfg: &Config,
) -> AppResult<IngestReport> {
    let opts = NormalizeOptions {
        start_date: cfg.start_date()?,
        strict_dates: cfg.strict_dates,
    };

    let report = IngestLogic::from_file(file, &opts)?;
    print_ingest(&report);

    session.replace_batch(report.events.clone(), file);
    session.save(cfg)?;

    Ok(report)
}
