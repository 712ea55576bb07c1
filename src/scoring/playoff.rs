use crate::model::{CompetitorId, PlayerScore};

/// Bonus per tier, best first.
pub const DEFAULT_PLAYOFF_BONUS: [u32; 6] = [10, 5, 3, 0, 0, 0];

/// Allocation stops once this many players and this many distinct pick
/// combinations have both been seen.
const PLAYOFF_TIERS: usize = 3;

/// Award tiered playoff bonuses to the top of a standings list sorted best first.
///
/// A player whose three picks are identical to the player directly above
/// shares that player's tier. Otherwise each new pick combination moves one
/// tier down `bonus_schedule`. Tiers past the end of the schedule award 0.
pub fn allocate_playoff_points(players: &mut [PlayerScore], bonus_schedule: &[u32]) {
    let mut position_scores = 0;
    let mut points_position = 0;
    let mut last_picks: Option<[CompetitorId; 3]> = None;

    for player in players.iter_mut() {
        if position_scores >= PLAYOFF_TIERS && points_position >= PLAYOFF_TIERS {
            break;
        }
        position_scores += 1;

        let picks = player.picks().map(|pick| pick.competitor.id);
        if last_picks.is_some_and(|last| last != picks) {
            points_position += 1;
        }

        player.total_playoff_points += bonus_schedule.get(points_position).copied().unwrap_or(0);
        last_picks = Some(picks);
    }
}
