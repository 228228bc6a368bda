use super::api_for;
use crate::api::PaycodeEventApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::models::Paycode;
use crate::session::Session;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template {
        file,
        format,
        force,
    } = cmd
    {
        let paycodes = match format {
            ExportFormat::Xlsx => fetch_paycodes(cfg)?,
            _ => None,
        };

        ExportLogic::template(format, file, paycodes.as_deref(), *force)?;
    }
    Ok(())
}

/// Paycode lookup for the XLSX template; best effort.
fn fetch_paycodes(cfg: &Config) -> AppResult<Option<Vec<Paycode>>> {
    let Some(session) = Session::load(cfg)? else {
        info("Not logged in: template written without the Paycodes sheet.");
        return Ok(None);
    };

    let api = api_for(cfg, &session)?;
    match api.list_paycodes() {
        Ok(list) => Ok(Some(list)),
        Err(e) => {
            warning(format!("Could not load paycodes ({e}); sheet omitted."));
            Ok(None)
        }
    }
}
