//! Timestamp formatting for display.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::config::DATE_DISPLAY_FORMAT;

/// Formats an API timestamp as `DD Mon YYYY HH:MM` in UTC.
///
/// Accepts RFC 3339 timestamps and offset-less ISO timestamps (which are taken
/// to be UTC). Anything else is returned unchanged so the UI still shows it.
pub fn format_date(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => dt.format(DATE_DISPLAY_FORMAT).to_string(),
        None => {
            log::debug!("Unrecognised timestamp format: {}", timestamp);
            timestamp.to_string()
        }
    }
}

fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    let trimmed = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc())
}
