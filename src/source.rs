//! Collaborators the engine reads from. Implementations own fetching,
//! caching and persistence; the engine only asks for snapshots.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{PlayerPicksRecord, RunningOrder, ScheduleEvent, StageResult};

#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn event_by_id(&self, event_id: u32) -> Result<Option<ScheduleEvent>>;

    /// The whole season in start order.
    async fn ordered_schedule(&self) -> Result<Vec<ScheduleEvent>>;
}

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Current or final running order. An event that hasn't started yields
    /// an empty order with no flags.
    async fn running_order(&self, event_id: u32) -> Result<RunningOrder>;

    /// Results of every completed stage, possibly none.
    async fn stage_results(&self, event_id: u32) -> Result<Vec<StageResult>>;
}

#[async_trait]
pub trait PicksStore: Send + Sync {
    async fn picks_for_event(&self, event_id: u32) -> Result<Vec<PlayerPicksRecord>>;

    async fn picks_for_event_and_player(
        &self,
        event_id: u32,
        player_id: &str,
    ) -> Result<Option<PlayerPicksRecord>>;
}

#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    async fn player_name(&self, player_id: &str) -> Result<Option<String>>;
}
