use crate::model::{CompetitorId, PickScore, StageResult};

/// Positions 1 through 10 in a stage score `11 - position`.
pub const STAGE_POINTS_CUTOFF: u32 = 10;

/// Stage bonus for `competitor` summed over every stage of the event.
///
/// Points and stage wins are also added to `score`. With no stage data the
/// accumulator is left untouched and 0 is returned.
pub fn stage_points(
    stages: &[StageResult],
    competitor: CompetitorId,
    score: &mut PickScore,
) -> u32 {
    let mut total = 0;

    for stage in stages {
        let Some(finish) = stage
            .results
            .iter()
            .find(|finish| finish.competitor.id == competitor)
        else {
            continue;
        };

        if finish.position == 1 {
            score.stage_wins += 1;
        }
        if (1..=STAGE_POINTS_CUTOFF).contains(&finish.position) {
            let points = STAGE_POINTS_CUTOFF + 1 - finish.position;
            total += points;
            score.stage_points += points;
        }
    }

    total
}
