//! WIQL query helpers.

use chrono::{DateTime, TimeZone, Utc};

/// Formats a timestamp as a WIQL datetime literal, normalized to UTC.
///
/// WIQL expects invariant `MM/DD/YYYY HH:MM:SS` formatting regardless of
/// server locale, so the output is safe to splice into query text.
#[must_use]
pub fn to_wiql_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    value
        .with_timezone(&Utc)
        .format("%m/%d/%Y %H:%M:%SZ")
        .to_string()
}
