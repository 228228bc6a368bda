use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use crate::utils::date;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        auth_url,
        base_url,
        start_date,
    } = cmd
    {
        // ---- SET FIELDS ----
        if auth_url.is_some() || base_url.is_some() || start_date.is_some() {
            let mut updated = cfg.clone();

            if let Some(url) = auth_url {
                updated.auth_url = url.trim().to_string();
            }
            if let Some(url) = base_url {
                updated.base_url = url.trim().trim_end_matches('/').to_string();
            }
            if let Some(d) = start_date {
                let parsed = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                updated.start_date = parsed.format("%Y-%m-%d").to_string();
            }

            updated.save()?;
            success(format!("Configuration saved to {}", updated.config_file().display()));

            if *print_config {
                print(&updated)?;
            }
        } else if *print_config {
            print(cfg)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let path = cfg.config_file();
            if !path.exists() {
                cfg.save()?;
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{editor_to_use}'"));
                }
                _ => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            success(format!(
                                "Configuration file edited using fallback '{default_editor}'"
                            ));
                        }
                        _ => error(format!(
                            "Failed to edit configuration file using '{default_editor}'"
                        )),
                    }
                }
            }

            // Reject an edit that leaves the file unreadable.
            Config::load(Some(cfg.home.clone()))?;
        }
    }

    Ok(())
}

fn print(cfg: &Config) -> AppResult<()> {
    println!("📄 Current configuration ({}):\n", cfg.config_file().display());
    println!("{}", serde_yaml::to_string(cfg)?);
    println!("# paycodes lookup: {}", cfg.paycodes_url());
    Ok(())
}
