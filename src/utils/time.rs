//! Time utilities: capture moments, parse user supplied timestamps, format them.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// `Thu Feb 14 10:00:00 2013`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%a %b %-d %H:%M:%S %Y";

/// Shown in place of a timestamp that cannot be rendered.
pub const NOT_AVAILABLE: &str = "n/a";

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a moment typed on the command line.
///
/// Accepted: `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM:SS`,
/// RFC 3339 and a bare `YYYY-MM-DD` (midnight).
pub fn parse_moment(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// True when `fmt` only contains valid strftime specifiers.
pub fn is_valid_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Render `moment` with `fmt`; `None` when the format cannot be applied.
pub fn format_moment(moment: &NaiveDateTime, fmt: &str) -> Option<String> {
    if !is_valid_format(fmt) {
        return None;
    }
    let mut out = String::new();
    write!(out, "{}", moment.format(fmt)).ok()?;
    Some(out)
}
