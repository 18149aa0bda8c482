//! Relative-age rendering for note timestamps.

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Renders a creation timestamp as a coarse "n minutes ago" age.
///
/// Timestamps in the future (clock skew across reopens) render as "just now".
pub fn format_relative(created_at_ms: i64, now_ms: i64) -> String {
    let elapsed = now_ms - created_at_ms;
    if elapsed < MINUTE_MS {
        return "just now".to_string();
    }
    if elapsed < HOUR_MS {
        return pluralize(elapsed / MINUTE_MS, "minute");
    }
    if elapsed < DAY_MS {
        return pluralize(elapsed / HOUR_MS, "hour");
    }
    pluralize(elapsed / DAY_MS, "day")
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
