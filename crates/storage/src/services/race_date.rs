use chrono::{DateTime, NaiveDate};

/// Rendering of a date the store handed back in a shape we cannot read.
pub const ZERO_DATE: &str = "01-01-0001";

/// Formats a race date from the store as `DD-MM-YYYY`.
///
/// Accepts RFC 3339 timestamps, Postgres `timestamptz` text and plain
/// `YYYY-MM-DD` dates. An unreadable value is logged and rendered as
/// [`ZERO_DATE`]; it never fails the request.
pub fn format_race_date(raw: &str) -> String {
    match parse_race_date(raw) {
        Some(date) => date.format("%d-%m-%Y").to_string(),
        None => {
            tracing::warn!(raw, "Unreadable race date, rendering zero date");
            ZERO_DATE.to_string()
        }
    }
}

fn parse_race_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    if let Ok(timestamp) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(timestamp.date_naive());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
