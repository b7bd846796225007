/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out the not-found sentinel and empty rows, leave real rows untouched.
pub fn colorize_row(value: &str, sentinel: &str) -> String {
    if value.trim().is_empty() || value == sentinel {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
