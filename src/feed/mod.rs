//! Parsers for the public timing and scoring feed documents.
//!
//! These only turn feed JSON into model types; fetching and caching the
//! documents is left to the caller.

pub mod lap_times;
pub mod schedule;
pub mod stage_points;

pub use lap_times::parse_lap_times;
pub use schedule::parse_schedule_feed;
pub use stage_points::parse_stage_points;
