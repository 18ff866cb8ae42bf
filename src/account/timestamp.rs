//! Twitter timestamps
//!
//! The REST API renders instants as `Mon Sep 19 02:06:36 +0000 2011`.
//! Day and month names are always English, independent of the process locale.

use chrono::{DateTime, Utc};

/// chrono format string for the external timestamp format
pub const TWITTER_TIME_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse an external timestamp into a UTC instant
pub fn parse_twitter_time(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(value.trim(), TWITTER_TIME_FORMAT)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render a UTC instant in the external timestamp format
pub fn format_twitter_time(value: &DateTime<Utc>) -> String {
    value.format(TWITTER_TIME_FORMAT).to_string()
}
