//! Services: the parts of the core with side effects (time, shared history).

pub mod match_timer;
pub mod recorder;

pub use match_timer::{format_elapsed, MatchTimer};
pub use recorder::MatchRecorder;
