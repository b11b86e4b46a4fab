use chrono::{DateTime, Duration, DurationRound, Utc};

use crate::error::{ScheduleError, ScheduleResult};

/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Truncate an instant to the top of its hour (UTC).
///
/// The timetable usually anchors its pixel origin here.
pub fn snap_to_hour(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .duration_trunc(Duration::hours(1))
        .unwrap_or(instant)
}

/// Minutes elapsed from `origin` to `instant`, at millisecond resolution.
///
/// Negative when `instant` precedes the origin.
pub fn minutes_between(origin: DateTime<Utc>, instant: DateTime<Utc>) -> f64 {
    (instant - origin).num_milliseconds() as f64 / MILLIS_PER_MINUTE
}

/// Convert a fractional minute count into a chrono duration (microsecond resolution).
pub fn minutes_to_duration(minutes: f64) -> ScheduleResult<Duration> {
    let micros = (minutes * 60_000_000.0).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return Err(ScheduleError::TimeOutOfRange(format!(
            "{} minutes cannot be represented as a duration",
            minutes
        )));
    }
    Ok(Duration::microseconds(micros as i64))
}

/// Instant `minutes` after `start`.
pub fn add_minutes(start: DateTime<Utc>, minutes: f64) -> ScheduleResult<DateTime<Utc>> {
    let delta = minutes_to_duration(minutes)?;
    start.checked_add_signed(delta).ok_or_else(|| {
        ScheduleError::TimeOutOfRange(format!("{} + {} minutes overflows", start, minutes))
    })
}
