//! Greedy lane packing for the arena timetable.
//!
//! Events are swept in start order and dropped into the lowest-numbered lane
//! that is already free when they begin. For intervals this greedy sweep is
//! optimal: the number of lanes opened equals the peak number of events that
//! are live at the same instant.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::config::TimelineSettings;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{minutes_between, LaneAssignment, TimedEvent};

/// Event paired with its resolved end instant.
struct Interval<'a> {
    event: &'a TimedEvent,
    end: DateTime<Utc>,
}

/// Validate every event and resolve its end time.
///
/// Fails on the first invalid event so that no partial layout is ever produced.
fn resolve_intervals(events: &[TimedEvent]) -> ScheduleResult<Vec<Interval<'_>>> {
    let mut intervals = Vec::with_capacity(events.len());
    let mut seen = HashSet::with_capacity(events.len());

    for event in events {
        event.validate()?;
        if !seen.insert(event.id.as_str()) {
            log::warn!("Duplicate timetable event id '{}'", event.id);
        }
        let end = event.end_time()?;
        if end <= event.start_time {
            return Err(ScheduleError::ValidationError(format!(
                "event '{}' duration {} min is below timeline resolution",
                event.id, event.duration_minutes
            )));
        }
        intervals.push(Interval { event, end });
    }

    Ok(intervals)
}

/// Assign each event a lane so that no two events sharing a lane overlap.
///
/// Events are ordered by start time, ties broken by id, and each one takes
/// the first lane whose previous occupant has ended by the time it starts
/// (an event ending exactly when another begins leaves the lane free).
/// Geometry is derived from `settings`:
///
/// * `left_pixels = start_offset_minutes * pixels_per_hour / 60`
/// * `width_pixels = duration_minutes * pixels_per_hour / 60 - gap_pixels`
/// * `top_pixels = lane * (lane_height_pixels + lane_gap_pixels)`
///
/// The returned assignments follow the sorted order, so any permutation of
/// the same input yields the same output.
///
/// # Errors
///
/// Returns [`ScheduleError::ValidationError`] if any event has an empty id,
/// a non-positive duration, or a duration too short to move its end past
/// its start (below one microsecond), or if the
/// settings describe an invalid scale.
pub fn assign_lanes(
    events: &[TimedEvent],
    origin_time: DateTime<Utc>,
    settings: &TimelineSettings,
) -> ScheduleResult<Vec<LaneAssignment>> {
    settings.validate()?;

    let mut intervals = resolve_intervals(events)?;
    intervals.sort_by(|a, b| {
        a.event
            .start_time
            .cmp(&b.event.start_time)
            .then_with(|| a.event.id.cmp(&b.event.id))
            .then_with(|| a.event.duration_minutes.total_cmp(&b.event.duration_minutes))
    });

    let px_per_minute = settings.pixels_per_minute();
    let mut lane_free_at: Vec<DateTime<Utc>> = Vec::new();
    let mut assignments = Vec::with_capacity(intervals.len());

    for Interval { event, end } in intervals {
        let lane = match lane_free_at
            .iter()
            .position(|free_at| *free_at <= event.start_time)
        {
            Some(lane) => {
                lane_free_at[lane] = end;
                lane
            }
            None => {
                lane_free_at.push(end);
                lane_free_at.len() - 1
            }
        };

        let start_offset_minutes = minutes_between(origin_time, event.start_time);
        assignments.push(LaneAssignment {
            id: event.id.clone(),
            lane,
            start_time: event.start_time,
            end_time: end,
            start_offset_minutes,
            left_pixels: start_offset_minutes * px_per_minute,
            width_pixels: event.duration_minutes * px_per_minute - settings.gap_pixels,
            top_pixels: lane as f64 * settings.lane_pitch(),
        });
    }

    log::debug!(
        "Packed {} timetable events into {} lanes",
        assignments.len(),
        lane_free_at.len()
    );

    Ok(assignments)
}

/// Maximum number of events live at any single instant.
///
/// Intervals are half-open, so an event ending at `t` and another starting at
/// `t` are never counted together. This is the lane count [`assign_lanes`]
/// will produce for the same input.
pub fn peak_concurrency(events: &[TimedEvent]) -> ScheduleResult<usize> {
    let intervals = resolve_intervals(events)?;

    // Ends (-1) sort before starts (+1) at the same instant.
    let mut boundaries: Vec<(DateTime<Utc>, i8)> = Vec::with_capacity(intervals.len() * 2);
    for interval in &intervals {
        boundaries.push((interval.event.start_time, 1));
        boundaries.push((interval.end, -1));
    }
    boundaries.sort();

    let mut live: usize = 0;
    let mut peak: usize = 0;
    for (_, delta) in boundaries {
        if delta > 0 {
            live += 1;
            peak = peak.max(live);
        } else {
            live = live.saturating_sub(1);
        }
    }

    Ok(peak)
}

/// Number of distinct lanes used by a set of assignments.
pub fn lane_count(assignments: &[LaneAssignment]) -> usize {
    assignments
        .iter()
        .map(|a| a.lane + 1)
        .max()
        .unwrap_or(0)
}
