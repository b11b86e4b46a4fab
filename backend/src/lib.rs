//! # Arena Timetable Backend
//!
//! Lane layout engine for the arena lobby timetable.
//!
//! Arenas are time slots that may overlap. To draw them on a horizontal
//! timeline, each slot is placed in a lane (row) so that no two slots in the
//! same lane overlap, using as few lanes as possible, and given pixel geometry
//! for a configurable scale.
//!
//! ## Architecture
//!
//! - [`models`]: Timed events, lane assignments, timetable DTOs and time helpers
//! - [`scheduler`]: Greedy interval lane packing
//! - [`services`]: Timetable orchestration (parsing, layout, header metadata)
//! - [`config`]: TOML-backed rendering scale
//! - [`error`]: Error taxonomy
//!
//! ## Example
//!
//! ```
//! use arena_timetable::config::TimelineSettings;
//! use arena_timetable::models::{snap_to_hour, TimedEvent};
//! use arena_timetable::scheduler::assign_lanes;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 20, 17, 0).unwrap();
//! let origin = snap_to_hour(now);
//! let events = vec![
//!     TimedEvent::new("A", origin, 60.0),
//!     TimedEvent::new("B", origin + Duration::minutes(30), 60.0),
//!     TimedEvent::new("C", origin + Duration::minutes(90), 30.0),
//! ];
//!
//! let lanes = assign_lanes(&events, origin, &TimelineSettings::default()).unwrap();
//! let placed: Vec<usize> = lanes.iter().map(|a| a.lane).collect();
//! assert_eq!(placed, vec![0, 1, 0]);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod services;

pub use config::{TimelineSettings, TimetableConfig};
pub use error::{ScheduleError, ScheduleResult};
