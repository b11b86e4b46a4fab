use chrono::{DateTime, Duration, Utc};

use crate::config::TimelineSettings;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{ArenaTimetableData, HourTick, TimedEvent};
use crate::scheduler::{assign_lanes, lane_count};

/// Compute arena timetable data with layout and header metadata.
/// This function takes the raw events and computes everything needed for visualization.
///
/// The content width always covers at least `visible_hours` from the origin
/// and extends to the right edge of the latest-ending event.
pub fn compute_arena_timetable(
    events: &[TimedEvent],
    origin_time: DateTime<Utc>,
    settings: &TimelineSettings,
) -> ScheduleResult<ArenaTimetableData> {
    let assignments = assign_lanes(events, origin_time, settings)?;
    let lanes = lane_count(&assignments);

    let window_width = settings.visible_hours as f64 * settings.pixels_per_hour;
    let furthest_right = assignments
        .iter()
        .map(|a| a.left_pixels + a.width_pixels + settings.gap_pixels)
        .fold(0.0_f64, f64::max);
    let content_width_pixels = furthest_right.max(window_width);

    let hour_ticks = build_hour_ticks(origin_time, content_width_pixels, settings);

    Ok(ArenaTimetableData {
        origin_time,
        total_count: assignments.len(),
        lane_count: lanes,
        content_width_pixels,
        content_height_pixels: lanes as f64 * settings.lane_pitch(),
        hour_ticks,
        assignments,
    })
}

/// Hour markers from the origin to the right edge of the content, stopping
/// at `max_hours` so a far-off arena cannot inflate the header.
fn build_hour_ticks(
    origin_time: DateTime<Utc>,
    content_width_pixels: f64,
    settings: &TimelineSettings,
) -> Vec<HourTick> {
    let hours = (content_width_pixels / settings.pixels_per_hour)
        .ceil()
        .min(settings.max_hours as f64) as i64;

    (0..=hours)
        .filter_map(|h| {
            let instant = origin_time.checked_add_signed(Duration::hours(h))?;
            Some(HourTick {
                offset_minutes: (h * 60) as f64,
                left_pixels: h as f64 * settings.pixels_per_hour,
                label: instant.format("%H:%M").to_string(),
            })
        })
        .collect()
}

/// Parse a JSON array of arena slots into timetable events.
///
/// Missing or mistyped fields are reported as validation errors naming the
/// offending path (for example `[2].durationMinutes`).
pub fn parse_timed_events_json(json: &str) -> ScheduleResult<Vec<TimedEvent>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(deserializer).map_err(|e| {
        ScheduleError::ValidationError(format!(
            "Invalid timetable event at {}: {}",
            e.path(),
            e.inner()
        ))
    })
}

/// Parse arena slots from JSON and lay them out in one step.
pub fn compute_arena_timetable_from_json(
    json: &str,
    origin_time: DateTime<Utc>,
    settings: &TimelineSettings,
) -> ScheduleResult<ArenaTimetableData> {
    let events = parse_timed_events_json(json)?;
    compute_arena_timetable(&events, origin_time, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn origin() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap()
    }

    fn event(id: &str, start_min: i64, duration_min: f64) -> TimedEvent {
        TimedEvent::new(id, origin() + Duration::minutes(start_min), duration_min)
    }

    #[test]
    fn test_compute_timetable_empty() {
        let result =
            compute_arena_timetable(&[], origin(), &TimelineSettings::default()).unwrap();
        assert_eq!(result.total_count, 0);
        assert_eq!(result.lane_count, 0);
        assert_eq!(result.content_height_pixels, 0.0);
        // 6 visible hours at 240 px/hour
        assert_eq!(result.content_width_pixels, 1440.0);
        assert_eq!(result.hour_ticks.len(), 7);
        assert_eq!(result.hour_ticks[0].label, "20:00");
        assert_eq!(result.hour_ticks[6].label, "02:00");
    }

    #[test]
    fn test_compute_timetable() {
        let events = vec![event("a", 0, 60.0), event("b", 30, 60.0), event("c", 90, 30.0)];
        let result =
            compute_arena_timetable(&events, origin(), &TimelineSettings::default()).unwrap();

        assert_eq!(result.total_count, 3);
        assert_eq!(result.lane_count, 2);
        assert_eq!(result.content_height_pixels, 112.0);
        assert_eq!(result.origin_time, origin());
    }

    #[test]
    fn test_content_extends_past_window() {
        let events = vec![event("late", 480, 90.0)];
        let result =
            compute_arena_timetable(&events, origin(), &TimelineSettings::default()).unwrap();

        // ends 570 minutes after origin => 2280 px
        assert_eq!(result.content_width_pixels, 2280.0);
        assert_eq!(result.hour_ticks.len(), 11);
        assert_eq!(result.hour_ticks[10].left_pixels, 2400.0);
        assert_eq!(result.hour_ticks[10].offset_minutes, 600.0);
    }

    #[test]
    fn test_hour_ticks_stop_at_horizon() {
        // One arena twenty years out must not produce a tick per hour.
        let far = TimedEvent::new("far", origin() + Duration::days(365 * 20), 30.0);
        let result =
            compute_arena_timetable(&[far], origin(), &TimelineSettings::default()).unwrap();

        assert_eq!(result.lane_count, 1);
        assert_eq!(result.hour_ticks.len(), 169);
        assert_eq!(result.hour_ticks[168].offset_minutes, 168.0 * 60.0);
        assert!(result.content_width_pixels > result.hour_ticks[168].left_pixels);
    }

    #[test]
    fn test_hour_ticks_at_horizon_boundary() {
        let settings = TimelineSettings {
            visible_hours: 2,
            max_hours: 4,
            ..TimelineSettings::default()
        };
        let exact = [event("a", 180, 60.0)];
        let result = compute_arena_timetable(&exact, origin(), &settings).unwrap();
        assert_eq!(result.hour_ticks.len(), 5);

        let past = [event("a", 180, 120.0)];
        let result = compute_arena_timetable(&past, origin(), &settings).unwrap();
        assert_eq!(result.hour_ticks.len(), 5);
        assert_eq!(result.hour_ticks[4].label, "00:00");
    }

    #[test]
    fn test_compute_timetable_propagates_validation() {
        let result = compute_arena_timetable(
            &[event("broken", 0, 0.0)],
            origin(),
            &TimelineSettings::default(),
        );
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_events_json() {
        let json = r#"[
            {"id": "arena-1", "startTime": "2024-06-01T20:15:00Z", "durationMinutes": 45, "title": "Rookie Rumble"},
            {"id": "arena-2", "startTime": "2024-06-01T20:30:00.250Z", "durationMinutes": 30.5}
        ]"#;

        let events = parse_timed_events_json(json).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title.as_deref(), Some("Rookie Rumble"));
        assert_eq!(events[1].duration_minutes, 30.5);
        assert_eq!(events[1].start_time.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_events_json_missing_field() {
        let json = r#"[
            {"id": "arena-1", "startTime": "2024-06-01T20:15:00Z", "durationMinutes": 45},
            {"id": "arena-2", "startTime": "2024-06-01T20:30:00Z"}
        ]"#;

        let err = parse_timed_events_json(json).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("[1]"), "{err}");
        assert!(err.to_string().contains("durationMinutes"), "{err}");
    }

    #[test]
    fn test_parse_events_json_wrong_type() {
        let json = r#"[{"id": "arena-1", "startTime": "2024-06-01T20:15:00Z", "durationMinutes": "long"}]"#;
        let err = parse_timed_events_json(json).unwrap_err();
        assert!(err.to_string().contains("[0].durationMinutes"), "{err}");
    }

    #[test]
    fn test_compute_from_json() {
        let json = r#"[
            {"id": "b", "startTime": "2024-06-01T20:00:00Z", "durationMinutes": 60},
            {"id": "a", "startTime": "2024-06-01T20:00:00Z", "durationMinutes": 60}
        ]"#;
        let result =
            compute_arena_timetable_from_json(json, origin(), &TimelineSettings::default())
                .unwrap();
        assert_eq!(result.assignments[0].id, "a");
        assert_eq!(result.assignments[1].lane, 1);
    }
}
