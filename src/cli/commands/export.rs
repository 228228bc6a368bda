use super::api_for;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::session::Session;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let session = Session::require(cfg)?;
        let api = api_for(cfg, &session)?;

        let rows = ExportLogic::export(&api, format, file, *force)?;
        info(format!("{rows} schedule rows exported"));
    }
    Ok(())
}
