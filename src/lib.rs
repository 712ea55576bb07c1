//! Scoring engine for a three-driver motorsport pick'em league.
//!
//! Players pick three competitors per race. Each pick scores position points
//! on a 40, 35, 34, ... curve plus stage bonuses; repeating two picks from the
//! previous race forfeits points; playoff races hand out tiered bonuses to
//! the top of the standings.

pub use config::{ScoringConfig, SeasonConfig};
pub use engine::{Collaborators, PickemEngine};
pub use error::{PickemError, Result};
pub use model::*;
pub use scoring::{
    aggregate_player, allocate_playoff_points, build_event_standings, position_points,
    rank_players, score_pick, stage_points, DEFAULT_PLAYOFF_BONUS,
};

mod config;
mod engine;
mod error;
pub mod feed;
pub mod model;
mod schedule;
pub mod scoring;
pub mod source;
