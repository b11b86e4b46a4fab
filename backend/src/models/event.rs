use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::add_minutes;
use crate::error::{ScheduleError, ScheduleResult};

/// An arena slot placed on the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedEvent {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TimedEvent {
    pub fn new(id: impl Into<String>, start_time: DateTime<Utc>, duration_minutes: f64) -> Self {
        Self {
            id: id.into(),
            start_time,
            duration_minutes,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Instant at which the event releases its lane.
    pub fn end_time(&self) -> ScheduleResult<DateTime<Utc>> {
        add_minutes(self.start_time, self.duration_minutes)
    }

    /// Check the structural invariants the lane scheduler relies on.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.id.trim().is_empty() {
            return Err(ScheduleError::ValidationError(format!(
                "event starting at {} has an empty id",
                self.start_time
            )));
        }
        if !self.duration_minutes.is_finite() {
            return Err(ScheduleError::ValidationError(format!(
                "event '{}' has a non-finite duration",
                self.id
            )));
        }
        if self.duration_minutes <= 0.0 {
            return Err(ScheduleError::ValidationError(format!(
                "event '{}' has non-positive duration {} min",
                self.id, self.duration_minutes
            )));
        }
        Ok(())
    }
}

/// Placement of one event on the timetable grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneAssignment {
    pub id: String,
    pub lane: usize,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub start_offset_minutes: f64,
    pub left_pixels: f64,
    pub width_pixels: f64,
    pub top_pixels: f64,
}

impl LaneAssignment {
    /// Whether two assignments' half-open intervals intersect.
    pub fn overlaps(&self, other: &LaneAssignment) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}
