//! Terminal feedback for the CLI (ANSI colors + icons).
//! Every line printed here is mirrored to `tracing` at debug level so that
//! a session transcript can be reconstructed from the diagnostic log.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_CLOCK: &str = "🕒";

pub fn info<T: fmt::Display>(msg: T) {
    tracing::debug!(kind = "info", "{msg}");
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    tracing::debug!(kind = "success", "{msg}");
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    tracing::debug!(kind = "warning", "{msg}");
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    tracing::debug!(kind = "error", "{msg}");
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Punch confirmation line ("Ponto registrado ...").
pub fn punch<T: fmt::Display>(msg: T) {
    tracing::debug!(kind = "punch", "{msg}");
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_CLOCK, RESET, msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}{}====================== {}\n{}",
        FG_BLUE, BOLD, msg, RESET
    );
}
