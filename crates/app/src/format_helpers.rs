//! Display formatting for the loosely typed values the API returns.
//!
//! Dates arrive either as RFC 3339 (`2026-01-20T21:35:00.000000Z`) or in the
//! API's `2026-01-20 21:35:00` database format; both are accepted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const PLACEHOLDER: &str = "\u{2014}";

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

/// "Jan 20, 2026". Unparseable input is shown as-is.
pub fn format_date_human(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Like [`format_date_human`] but renders a dash for missing dates.
pub fn format_date_opt(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => format_date_human(value),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Trimmed text, or `None` when the field was left blank.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse the value of an id `<select>`; the empty option means "none".
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
