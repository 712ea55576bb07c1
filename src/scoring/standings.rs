use chrono_tz::Tz;
use itertools::Itertools;
use tracing::debug;

use crate::model::{EventSnapshot, PlayerEntry, PlayerScore, RunningOrder, StageResult};
use crate::scoring::{aggregate_player, allocate_playoff_points, score_pick};

/// Score every player in the snapshot and return the final standings, best
/// first. Playoff bonuses are allocated only for playoff events that have
/// seen a green flag.
pub fn build_event_standings(
    snapshot: &EventSnapshot,
    playoff_bonus: &[u32],
    display_tz: Tz,
) -> Vec<PlayerScore> {
    let is_playoff = snapshot.event.is_playoff;

    let mut players = rank_players(
        snapshot
            .entries
            .iter()
            .map(|entry| {
                score_entry(
                    entry,
                    &snapshot.running_order,
                    &snapshot.stages,
                    is_playoff,
                    display_tz,
                )
            })
            .collect_vec(),
    );

    if is_playoff && snapshot.running_order.is_started() {
        allocate_playoff_points(&mut players, playoff_bonus);
    }

    debug!(
        event_id = snapshot.event.id,
        players = players.len(),
        started = snapshot.running_order.is_started(),
        is_playoff,
        "built standings"
    );
    players
}

/// Sort by total points, best first. Ties keep their incoming order.
pub fn rank_players(mut players: Vec<PlayerScore>) -> Vec<PlayerScore> {
    players.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    players
}

fn score_entry(
    entry: &PlayerEntry,
    order: &RunningOrder,
    stages: &[StageResult],
    is_playoff: bool,
    display_tz: Tz,
) -> PlayerScore {
    let scores = entry
        .record
        .picks
        .each_ref()
        .map(|pick| score_pick(order, stages, pick, &entry.prior_picks));
    aggregate_player(
        &entry.record,
        &entry.player_name,
        scores,
        is_playoff,
        display_tz,
    )
}
