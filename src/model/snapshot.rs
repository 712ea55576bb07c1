use serde::Serialize;

use super::event::ScheduleEvent;
use super::picks::{Pick, PlayerPicksRecord};
use super::telemetry::{RunningOrder, StageResult};

/// Everything needed to score one event, resolved from a single consistent
/// read of the collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct EventSnapshot {
    pub event: ScheduleEvent,
    pub running_order: RunningOrder,
    pub stages: Vec<StageResult>,
    pub entries: Vec<PlayerEntry>,
}

/// A player's picks for the event together with their display name and the
/// picks they made in the prior scored event (empty when there is none).
#[derive(Debug, Clone, Serialize)]
pub struct PlayerEntry {
    pub record: PlayerPicksRecord,
    pub player_name: String,
    pub prior_picks: Vec<Pick>,
}
