//! Time utilities: parsing HH:MM, punch timestamps, minute arithmetic.

use chrono::{DateTime, Local, NaiveTime, SecondsFormat, Utc};

/// Parse a punch time-of-day (`HH:MM`, optionally with seconds).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Signed minutes from `start` to `end`, keeping fractions of a minute.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> f64 {
    (end - start).num_seconds() as f64 / 60.0
}

/// Time-of-day stored in the daily record (`HH:MM`, 24h).
pub fn time_of_day(now: &DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

/// Instant hashed into the punch fingerprint: UTC, millisecond precision,
/// `Z` suffix (e.g. `2024-01-05T11:05:00.000Z`).
pub fn punch_timestamp(now: &DateTime<Local>) -> String {
    now.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
