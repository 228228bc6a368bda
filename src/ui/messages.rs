use std::fmt;
use std::io::IsTerminal;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Colors only on a terminal, and never with NO_COLOR set.
fn use_color(stderr: bool) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if stderr {
        std::io::stderr().is_terminal()
    } else {
        std::io::stdout().is_terminal()
    }
}

fn line(color: &str, icon: &str, msg: impl fmt::Display, stderr: bool) -> String {
    if use_color(stderr) {
        format!("{color}{BOLD}{icon} {RESET}{msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg, false));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, ICON_OK, msg, false));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg, false));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg, true));
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    if use_color(false) {
        println!("\n{FG_BLUE}{BOLD}== {msg} =={RESET}");
    } else {
        println!("\n== {msg} ==");
    }
}

/// Indented secondary line under a message
pub fn detail<T: fmt::Display>(msg: T) {
    if use_color(false) {
        println!("{DIM}   {msg}{RESET}");
    } else {
        println!("   {msg}");
    }
}
