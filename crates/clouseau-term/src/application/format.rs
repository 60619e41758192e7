use std::fmt::Display;

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;

/// Full date and time, e.g. `Jan 15, 2024, 02:30 PM`.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    return date.format("%b %-d, %Y, %I:%M %p").to_string();
}

/// Coarse age of `date` relative to `now`. Anything a week or older falls
/// back to [`format_date`].
pub fn format_relative_date(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*date).num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    if days < 7 {
        return format!("{days}d ago");
    }

    return format_date(date);
}

pub fn format_token_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    if count < 1_000_000 {
        return format!("{:.1}K", count as f64 / 1_000.0);
    }

    return format!("{:.1}M", count as f64 / 1_000_000.0);
}

pub fn format_duration(millis: u64) -> String {
    if millis < 1_000 {
        return format!("{millis}ms");
    }

    return format!("{:.2}s", millis as f64 / 1_000.0);
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    return grouped;
}

pub fn format_context_usage(used: u64, total: u64) -> String {
    let pct = if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    };

    return format!(
        "Context: {} / {} tokens ({pct:.1}%)",
        group_thousands(used),
        group_thousands(total)
    );
}
