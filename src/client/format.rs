//! Display helpers shared by the dashboard views.

use chrono::{DateTime, Duration, Utc};

pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Countdown text such as `5h 02m`, or `now` once elapsed.
pub fn format_remaining(remaining: Duration) -> String {
    if remaining <= Duration::zero() {
        return "now".to_string();
    }

    let minutes = (remaining.num_seconds() + 59) / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Balance with thousands separators, `12 500`.
pub fn format_balance(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// `3h 12m` style rendering of a playtime counter.
pub fn format_playtime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

/// Human label for an action log entry's `action` field.
pub fn action_label(action: &str) -> &str {
    match action {
        "promote" => "Promotion",
        "demote" => "Demotion",
        "warn" => "Warning",
        "kick" => "Kick",
        "loa_approved" => "LOA approved",
        "loa_rejected" => "LOA rejected",
        "appeal_approved" => "Appeal approved",
        "appeal_rejected" => "Appeal rejected",
        "adjust" => "Balance adjusted",
        other => other,
    }
}
