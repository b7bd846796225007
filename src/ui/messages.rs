//! User-facing notifications. Store code never calls these; command handlers
//! turn results into messages.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

/// Print `msg` with the colour and icon of `level`.
/// Warnings and errors go to stderr.
pub fn notify<T: fmt::Display>(level: Level, msg: T) {
    let (color, icon) = level.style();
    let line = format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
    match level {
        Level::Info | Level::Success => println!("{line}"),
        Level::Warning | Level::Error => eprintln!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    notify(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    notify(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    notify(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    notify(Level::Error, msg);
}
