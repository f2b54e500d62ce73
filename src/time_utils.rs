// SPDX-License-Identifier: MIT

//! Shared helpers for date/time parsing and formatting.
//!
//! All timestamps are stored as RFC3339 strings in UTC, which keeps
//! Firestore range queries correct under lexicographic ordering.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC3339 timestamp into UTC.
pub fn parse_rfc3339(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Truncate an RFC3339 timestamp to its calendar day (UTC).
pub fn calendar_day(raw: &str) -> Option<NaiveDate> {
    parse_rfc3339(raw).map(|dt| dt.date_naive())
}
