//! Time and timestamp helpers.

use chrono::{DateTime, Local};

/// Local wall-clock timestamp, as read from the host environment.
pub type Timestamp = DateTime<Local>;

/// Render format for timestamps: 24-hour clock, zero-padded fields.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now()
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
