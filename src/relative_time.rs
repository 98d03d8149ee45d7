//! Relative Time Formatting
//!
//! "3 minutes ago" style labels for project timestamps.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Distance from `from` to the current instant, as a human label.
pub fn distance_to_now(from: DateTime<Utc>) -> String {
    distance(from, Utc::now())
}

fn distance(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    // Clock skew can put a fresh timestamp slightly in the future.
    let secs = (to - from).num_seconds().max(0);

    if secs < MINUTE {
        return "less than a minute ago".to_string();
    }

    let (count, unit) = if secs < HOUR {
        (secs / MINUTE, "minute")
    } else if secs < DAY {
        (secs / HOUR, "hour")
    } else if secs < MONTH {
        (secs / DAY, "day")
    } else if secs < YEAR {
        (secs / MONTH, "month")
    } else {
        (secs / YEAR, "year")
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
