use crate::model::{Pick, PickScore, RunningOrder, StageResult};
use crate::scoring::{position::position_points, stage::stage_points};

/// Score one pick against the event's running order and stage results.
///
/// `prior_picks` are the same player's picks from the prior scored event;
/// a match by competitor id marks the pick as repeated. Before the event
/// produces any telemetry the score is a zero-valued placeholder.
pub fn score_pick(
    order: &RunningOrder,
    stages: &[StageResult],
    pick: &Pick,
    prior_picks: &[Pick],
) -> PickScore {
    let mut score = PickScore::placeholder(pick.competitor.clone());
    if !order.has_data() {
        return score;
    }

    score.repeated_pick = prior_picks.iter().any(|prior| prior.id() == pick.id());
    score.position_points = position_points(order, pick.id());
    stage_points(stages, pick.id(), &mut score);

    score
}
