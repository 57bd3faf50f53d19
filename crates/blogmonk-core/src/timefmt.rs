//! Human-readable date formatting for list cards and the detail meta line.

use chrono::{DateTime, Utc};

/// Format a post date relative to `now` for list cards.
///
/// Tiers by whole elapsed days:
/// - 0 -> "Today"
/// - 1 -> "1 day ago"
/// - 2..=6 -> "N days ago"
/// - 7..=13 -> "1 week ago"
/// - 14..=29 -> "N weeks ago"
/// - otherwise the absolute long-form date
///
/// Future-dated posts (clock skew on the backend) render as "Today".
pub fn relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - date).num_days();

    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=13 => "1 week ago".to_string(),
        14..=29 => format!("{} weeks ago", days / 7),
        _ => long_date(date),
    }
}

/// Absolute long-form date, e.g. "January 5, 2024".
pub fn long_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
