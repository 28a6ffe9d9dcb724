//! Presence labels shown next to online players.

use crate::constants::MILLIS_PER_MINUTE;

/// Whole minutes between `login_time` and `now`, both in Unix milliseconds.
///
/// A login time in the future (clock skew between caller and server) counts
/// as zero minutes.
pub fn minutes_since(login_time: u64, now: u64) -> u64 {
    now.saturating_sub(login_time) / MILLIS_PER_MINUTE
}

/// Render a minute count as "Just now" or "{n}m ago".
pub fn elapsed_label(minutes: u64) -> String {
    if minutes == 0 {
        "Just now".to_string()
    } else {
        format!("{minutes}m ago")
    }
}
