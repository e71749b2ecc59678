//! Display formatting for timestamps.

use chrono::{DateTime, Utc};

/// Compact age of `timestamp` relative to `now`: `42s ago`, `5m ago`, `3h ago`, `2d ago`.
///
/// Future timestamps (clock skew) render as `0s ago`.
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - timestamp).num_seconds().max(0);

    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3_600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3_600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}

/// Time of day for the header clock, `HH:MM:SS` in UTC
pub fn format_utc_clock(now: DateTime<Utc>) -> String {
    now.format("%H:%M:%S").to_string()
}
