use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::LaneAssignment;

// =========================================================
// Arena timetable types
// =========================================================

/// Hour marker drawn along the timetable header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourTick {
    pub offset_minutes: f64,
    pub left_pixels: f64,
    pub label: String, // "HH:MM", UTC
}

/// Arena timetable dataset handed to the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaTimetableData {
    pub origin_time: DateTime<Utc>,
    pub assignments: Vec<LaneAssignment>,
    pub lane_count: usize,
    pub total_count: usize,
    pub content_width_pixels: f64,
    pub content_height_pixels: f64,
    pub hour_ticks: Vec<HourTick>,
}
