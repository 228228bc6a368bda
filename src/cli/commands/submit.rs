use super::api_for;
use super::upload::upload_into;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SubmitLogic;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::report::print_submission;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit { file } = cmd {
        let mut session = Session::require(cfg)?;

        if let Some(path) = file {
            upload_into(&mut session, path, cfg)?;
        }

        if session.batch.is_empty() {
            return Err(AppError::EmptyBatch);
        }

        let api = api_for(cfg, &session)?;
        let outcomes = SubmitLogic::submit(&session.batch, &api);
        print_submission(&outcomes);
    }
    Ok(())
}
