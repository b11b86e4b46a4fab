//! Service layer for timetable orchestration.
//!
//! Services sit between callers holding raw arena listings and the lane
//! scheduler, adding parsing and the header metadata the view needs.

pub mod timeline;

pub use timeline::{
    compute_arena_timetable, compute_arena_timetable_from_json, parse_timed_events_json,
};
