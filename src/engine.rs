use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::config::ScoringConfig;
use crate::error::{PickemError, Result};
use crate::model::*;
use crate::schedule::{prior_scored_event, race_by_id};
use crate::scoring::build_event_standings;
use crate::source::{PicksStore, PlayerDirectory, ScheduleSource, TelemetrySource};

/// The external data the engine scores from.
#[derive(Clone)]
pub struct Collaborators {
    pub schedule: Arc<dyn ScheduleSource>,
    pub telemetry: Arc<dyn TelemetrySource>,
    pub picks: Arc<dyn PicksStore>,
    pub players: Arc<dyn PlayerDirectory>,
}

/// The main entry point for scoring a league event.
///
/// `PickemEngine` reads one snapshot of the schedule, telemetry and picks
/// for an event and turns it into sorted standings. Nothing is cached
/// between calls.
///
/// # Examples
///
/// ```no_run
/// # async fn example(sources: race_pickem::Collaborators) -> race_pickem::Result<()> {
/// use race_pickem::{PickemEngine, ScoringConfig};
///
/// let engine = PickemEngine::new(sources, ScoringConfig::default());
/// let standings = engine.build_standings(5314).await?;
/// for player in &standings {
///     println!("{}: {}", player.name, player.total_points);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PickemEngine {
    sources: Collaborators,
    config: ScoringConfig,
}

impl PickemEngine {
    pub fn new(sources: Collaborators, config: ScoringConfig) -> Self {
        Self { sources, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Standings for an event, best first, with playoff bonuses applied
    /// when the event is a started playoff race.
    #[instrument(skip(self))]
    pub async fn build_standings(&self, event_id: u32) -> Result<Vec<PlayerScore>> {
        let snapshot = self.snapshot(event_id).await?;
        Ok(build_event_standings(
            &snapshot,
            &self.config.playoff_bonus,
            self.config.display_timezone,
        ))
    }

    /// Resolve everything needed to score `event_id`.
    ///
    /// Only an unknown event, an id with no race session, or a failure
    /// listing the event's picks is an error. Missing telemetry, names or
    /// prior picks degrade per player.
    #[instrument(skip(self))]
    pub async fn snapshot(&self, event_id: u32) -> Result<EventSnapshot> {
        let event = self.race_event(event_id).await?;

        let running_order = self
            .sources
            .telemetry
            .running_order(event_id)
            .await
            .unwrap_or_else(|err| {
                warn!(event_id, error = %err, "running order unavailable, scoring as not started");
                RunningOrder::not_started()
            });
        let stages = self
            .sources
            .telemetry
            .stage_results(event_id)
            .await
            .unwrap_or_else(|err| {
                warn!(event_id, error = %err, "stage results unavailable");
                Vec::new()
            });

        let records = self.sources.picks.picks_for_event(event_id).await?;
        let prior_event_id = self.prior_event_id(event_id).await;

        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let player_name = self.player_name(&record.player_id).await;
            let prior_picks = match prior_event_id {
                Some(prior_id) => self.prior_picks(prior_id, &record.player_id).await,
                None => Vec::new(),
            };
            entries.push(PlayerEntry {
                record,
                player_name,
                prior_picks,
            });
        }

        debug!(
            event_id,
            prior_event_id = ?prior_event_id,
            players = entries.len(),
            competitors = running_order.competitors.len(),
            stages = stages.len(),
            "resolved event snapshot"
        );

        Ok(EventSnapshot {
            event,
            running_order,
            stages,
            entries,
        })
    }

    /// Resolve `event_id` to its race session. A source may hand back a
    /// practice or qualifying session that shares the race's id; the race is
    /// then looked up in the full schedule.
    async fn race_event(&self, event_id: u32) -> Result<ScheduleEvent> {
        let event = self
            .sources
            .schedule
            .event_by_id(event_id)
            .await?
            .ok_or(PickemError::UnknownEvent { event_id })?;
        if event.is_race_event() {
            return Ok(event);
        }

        let schedule = self.sources.schedule.ordered_schedule().await?;
        match race_by_id(&schedule, event_id) {
            Some(race) => {
                debug!(event_id, session = %event.kind, "resolved session to its race");
                Ok(race.clone())
            }
            None => Err(PickemError::NotARace {
                event_id,
                kind: event.kind,
            }),
        }
    }

    async fn prior_event_id(&self, event_id: u32) -> Option<u32> {
        match self.sources.schedule.ordered_schedule().await {
            Ok(schedule) => prior_scored_event(&schedule, event_id).map(|e| e.id),
            Err(err) => {
                warn!(event_id, error = %err, "schedule unavailable, no repeated-pick check");
                None
            }
        }
    }

    async fn prior_picks(&self, prior_event_id: u32, player_id: &str) -> Vec<Pick> {
        match self
            .sources
            .picks
            .picks_for_event_and_player(prior_event_id, player_id)
            .await
        {
            Ok(Some(record)) => record.picks.to_vec(),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(prior_event_id, player_id, error = %err, "prior picks unavailable");
                Vec::new()
            }
        }
    }

    async fn player_name(&self, player_id: &str) -> String {
        match self.sources.players.player_name(player_id).await {
            Ok(Some(name)) => name,
            Ok(None) => {
                warn!(player_id, "player not in directory");
                self.config.unknown_player_label.clone()
            }
            Err(err) => {
                warn!(player_id, error = %err, "player name lookup failed");
                self.config.unknown_player_label.clone()
            }
        }
    }
}
