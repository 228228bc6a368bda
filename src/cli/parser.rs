use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for paycode-portal
#[derive(Parser)]
#[command(
    name = "paycode-portal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Bulk create, update, delete and export Paycode Events from CSV/Excel files",
    long_about = None
)]
pub struct Cli {
    /// Override the application directory (config and session files)
    #[arg(global = true, long = "home", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG still applies)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the application directory and configuration file
    Init,

    /// Show or change the API configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(long = "auth-url", value_name = "URL", help = "Set the token endpoint URL")]
        auth_url: Option<String>,

        #[arg(
            long = "base-url",
            value_name = "URL",
            help = "Set the paycode_events collection URL"
        )]
        base_url: Option<String>,

        #[arg(
            long = "start-date",
            value_name = "YYYY-MM-DD",
            help = "Set the start date stamped on uploaded schedules"
        )]
        start_date: Option<String>,
    },

    /// Log in with the OAuth password grant and start a session
    Login {
        #[arg(long, short = 'u')]
        username: String,

        /// Password (falls back to $PAYCODE_PASSWORD, then a prompt)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// End the session and drop any pending batch
    Logout,

    /// Show session and configuration status
    Status,

    /// Write the upload template
    Template {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Read a CSV/Excel file into the pending batch
    Upload {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Create or update the pending batch (rows with an id are updated)
    Submit {
        /// Upload this file first, replacing the pending batch
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Delete events by id
    Delete {
        /// Comma separated ids, e.g. "3, 7"; non-numeric entries are ignored
        #[arg(long, value_name = "IDS")]
        ids: String,
    },

    /// Download all events, one row per schedule
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
