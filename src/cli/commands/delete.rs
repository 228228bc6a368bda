use super::api_for;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DeleteLogic;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::warning;
use crate::ui::report::print_deletions;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { ids } = cmd {
        let session = Session::require(cfg)?;

        let ids = DeleteLogic::parse_ids(ids);
        if ids.is_empty() {
            warning("No numeric ids given; nothing deleted.");
            return Ok(());
        }

        let api = api_for(cfg, &session)?;
        let outcomes = DeleteLogic::apply(&ids, &api);
        print_deletions(&outcomes);
    }
    Ok(())
}
