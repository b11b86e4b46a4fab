pub mod event;
pub mod time;
pub mod timetable;

pub use event::*;
pub use time::*;
pub use timetable::*;
