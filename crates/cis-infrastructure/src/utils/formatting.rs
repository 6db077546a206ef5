//! Formatting utilities
//!
//! Number and time formatting shared by the web view models.

use chrono::{DateTime, Utc};

/// Time constants for formatting
pub mod time_constants {
    /// Number of seconds in one minute
    pub const SECONDS_PER_MINUTE: i64 = 60;
    /// Number of seconds in one hour
    pub const SECONDS_PER_HOUR: i64 = 3600;
    /// Number of seconds in one day (24 hours)
    pub const SECONDS_PER_DAY: i64 = 86400;
}

/// Formatting helpers
pub struct FormattingUtils;

impl FormattingUtils {
    /// Format a number with thousands separator (e.g., 1234567 -> "1,234,567")
    pub fn format_number(n: u64) -> String {
        let s = n.to_string();
        let mut result = String::with_capacity(s.len() + s.len() / 3);
        for (i, c) in s.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.insert(0, ',');
            }
            result.insert(0, c);
        }
        result
    }

    /// Format a percentage, `-` when undefined (e.g., Some(75.0) -> "75%")
    pub fn format_percentage(value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{v:.0}%"),
            None => "-".to_string(),
        }
    }

    /// Relative time of `then` as seen at `now` (e.g., "5 minutes ago")
    pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
        use time_constants::*;

        let seconds = (now - then).num_seconds();
        if seconds < SECONDS_PER_MINUTE {
            return "just now".to_string();
        }
        let (amount, unit) = if seconds < SECONDS_PER_HOUR {
            (seconds / SECONDS_PER_MINUTE, "minute")
        } else if seconds < SECONDS_PER_DAY {
            (seconds / SECONDS_PER_HOUR, "hour")
        } else if seconds < SECONDS_PER_DAY * 30 {
            (seconds / SECONDS_PER_DAY, "day")
        } else if seconds < SECONDS_PER_DAY * 365 {
            (seconds / (SECONDS_PER_DAY * 30), "month")
        } else {
            (seconds / (SECONDS_PER_DAY * 365), "year")
        };
        format!("{amount} {unit}{} ago", if amount == 1 { "" } else { "s" })
    }

    /// Relative time of an optional timestamp, `-` when absent
    pub fn format_last_indexed(then: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
        then.map_or_else(|| "-".to_string(), |t| Self::time_ago(t, now))
    }
}
