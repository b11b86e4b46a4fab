//! Lane scheduling for the arena timetable.
//!
//! Overlapping arena slots are spread across horizontal lanes so the view can
//! draw them without collisions. Everything here is a pure function of its
//! inputs: no clock is read and no state survives between calls.

pub mod lanes;

pub use lanes::{assign_lanes, lane_count, peak_concurrency};
