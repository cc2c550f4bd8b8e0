//! Formatting utilities for log entry timestamps.

use chrono::{Datelike, Timelike};

/// Format a local time as `M/D/YYYY, H:M:S`.
///
/// Every field is the plain decimal value of the component, so nothing is
/// zero padded.
///
/// # Examples
/// - 2024-03-05 09:05:03 -> "3/5/2024, 9:5:3"
/// - 2023-12-31 23:59:59 -> "12/31/2023, 23:59:59"
pub fn format_timestamp<T: Datelike + Timelike>(time: &T) -> String {
    format!(
        "{}/{}/{}, {}:{}:{}",
        time.month(),
        time.day(),
        time.year(),
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Build one log entry: `[<timestamp>] <message>`.
///
/// The message is kept verbatim. A message containing a newline therefore
/// spans several physical lines.
pub fn format_entry<T: Datelike + Timelike>(time: &T, message: &str) -> String {
    format!("[{}] {}", format_timestamp(time), message)
}
