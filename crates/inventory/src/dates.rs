//! Lenient calendar date parsing.

use chrono::NaiveDate;

/// Parses a backend-supplied date string.
///
/// Accepts plain ISO dates (`2023-01-01`) and RFC 3339 timestamps
/// (`2023-01-01T09:30:00Z`), from which the date part is taken. Anything
/// else yields `None`; throughout the workspace an unparsable date is
/// treated exactly like a missing one.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    chrono::DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}
