// src/time_format.rs
//
// Timestamp parsing and duration formatting for the timeline report.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

// Unix values below this are taken as seconds, at or above as milliseconds.
const UNIX_SECONDS_CUTOFF: f64 = 1e10;

/// Parse a timestamp cell into a UTC instant.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.fff]` (with either a space or a
/// `T` separator), bare dates, and bare unix numbers. Returns `None` for
/// anything unparseable rather than erroring.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(num) = trimmed.parse::<f64>() {
        if !num.is_finite() {
            return None;
        }
        let ms = if num.abs() < UNIX_SECONDS_CUTOFF {
            num * 1000.0
        } else {
            num
        };
        return Utc.timestamp_millis_opt(ms as i64).single();
    }

    None
}

/// Milliseconds between two timestamp cells, `None` when either fails to parse.
pub fn duration_between_ms(start: &str, end: &str) -> Option<i64> {
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    Some(end.signed_duration_since(start).num_milliseconds())
}

/// Format a millisecond duration into the smart human-readable tiers:
/// under an hour "45m", under a day "2h 30m", otherwise "1d 5h 20m".
/// Missing durations render as "N/A", non-positive ones as "0m".
pub fn format_duration(ms: Option<i64>) -> String {
    let ms = match ms {
        Some(value) => value,
        None => return "N/A".to_string(),
    };
    if ms <= 0 {
        return "0m".to_string();
    }

    let total_minutes = ms / (1000 * 60);
    let total_hours = ms / (1000 * 60 * 60);
    let total_days = ms / (1000 * 60 * 60 * 24);

    let minutes = total_minutes % 60;
    let hours = total_hours % 24;

    if total_days >= 1 {
        let mut parts = vec![format!("{}d", total_days)];
        if hours > 0 {
            parts.push(format!("{}h", hours));
        }
        if minutes > 0 {
            parts.push(format!("{}m", minutes));
        }
        parts.join(" ")
    } else if total_hours >= 1 {
        if minutes > 0 {
            format!("{}h {}m", total_hours, minutes)
        } else {
            format!("{}h", total_hours)
        }
    } else {
        format!("{}m", total_minutes)
    }
}

/// Compact single-unit form: "1.5d", "3.2h", "42m".
pub fn format_duration_compact(ms: Option<i64>) -> String {
    let ms = match ms {
        Some(value) => value,
        None => return "N/A".to_string(),
    };

    let total_minutes = (ms as f64 / 60_000.0).round() as i64;
    let total_hours = ms as f64 / 3_600_000.0;
    let total_days = ms as f64 / 86_400_000.0;

    if total_days >= 1.0 {
        format!("{:.1}d", total_days)
    } else if total_hours >= 1.0 {
        format!("{:.1}h", total_hours)
    } else {
        format!("{}m", total_minutes)
    }
}


// src/time_format.rs
