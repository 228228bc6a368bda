use crate::cli::parser::Cli;
use crate::config::{CLIENT_AUTH_ENV, Config};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the application directory and writes the default configuration
/// file unless one already exists.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let existed = cli
        .home
        .clone()
        .unwrap_or_else(Config::config_dir)
        .join("paycode-portal.conf")
        .exists();

    let cfg = Config::init_all(cli.home.clone())?;

    println!("⚙️  Initializing paycode-portal…");
    println!("📄 Config file : {}", cfg.config_file().display());
    println!("🔐 Auth URL    : {}", cfg.auth_url);
    println!("🌐 Base URL    : {}", cfg.base_url);
    println!("📅 Start date  : {}", cfg.start_date);

    if existed {
        info("Configuration file already present; left untouched.");
    }

    if Config::client_auth().is_err() {
        warning(format!(
            "{CLIENT_AUTH_ENV} is not set; `login` needs it (environment or .env file)."
        ));
    }

    success("paycode-portal initialization completed!");
    Ok(())
}
