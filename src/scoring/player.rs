use chrono_tz::Tz;

use crate::model::{PickScore, PlayerPicksRecord, PlayerScore, RankedPick};
use crate::scoring::position::LEADER_POINTS;

/// Playoff points for a pick that won the event.
pub const WIN_PLAYOFF_POINTS: u32 = 5;

/// Once this many repeated picks have been seen, no further pick counts.
const REPEAT_LIMIT: u32 = 2;

/// Fold a player's three pick scores into their standings row.
///
/// Picks are walked from lowest to highest value. The first repeated pick
/// still scores; from the second repeated pick on, picks are shown but
/// contribute nothing. Provisional playoff points (a win bonus plus stage
/// wins per counted pick) are only recorded for non-playoff events; for
/// playoff events they are left at zero for [`allocate_playoff_points`].
///
/// [`allocate_playoff_points`]: crate::allocate_playoff_points
pub fn aggregate_player(
    record: &PlayerPicksRecord,
    name: &str,
    scores: [PickScore; 3],
    is_playoff: bool,
    display_tz: Tz,
) -> PlayerScore {
    let mut ascending = scores;
    ascending.sort_by_key(PickScore::total_points);

    let mut repeats = 0;
    let ranked = ascending.map(|score| {
        if score.repeated_pick {
            repeats += 1;
        }
        let counted = repeats < REPEAT_LIMIT;
        let playoff_points = if counted && !is_playoff {
            provisional_playoff_points(&score)
        } else {
            0
        };

        RankedPick {
            total_points: score.total_points(),
            competitor: score.competitor,
            repeated_pick: score.repeated_pick,
            stage_points: score.stage_points,
            stage_wins: score.stage_wins,
            position_points: score.position_points,
            playoff_points,
            counted,
        }
    });

    let counted = || ranked.iter().filter(|pick| pick.counted);
    let stage_points: u32 = counted().map(|pick| pick.stage_points).sum();
    let position_points: u32 = counted().map(|pick| pick.position_points).sum();
    let total_playoff_points: u32 = ranked.iter().map(|pick| pick.playoff_points).sum();
    let penalty = repeats >= REPEAT_LIMIT;

    let [pick_3, pick_2, pick_1] = ranked;

    PlayerScore {
        player_id: record.player_id.clone(),
        name: name.to_string(),
        stage_points,
        position_points,
        total_points: stage_points + position_points,
        total_playoff_points,
        pick_1,
        pick_2,
        pick_3,
        penalty,
        submitted_at: record
            .submitted_at
            .map(|at| at.with_timezone(&display_tz)),
    }
}

fn provisional_playoff_points(score: &PickScore) -> u32 {
    let win = if score.position_points == LEADER_POINTS {
        WIN_PLAYOFF_POINTS
    } else {
        0
    };
    win + score.stage_wins
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::{Competitor, Pick};

    fn eastern() -> Tz {
        chrono_tz::America::New_York
    }

    fn record(ids: [u32; 3]) -> PlayerPicksRecord {
        PlayerPicksRecord::new(
            "p1",
            10,
            ids.iter().map(|&id| Pick::new(id, format!("Driver {id}"))).collect(),
            None,
        )
        .unwrap()
    }

    fn score(id: u32, position_points: u32, stage_points: u32, stage_wins: u32) -> PickScore {
        PickScore {
            competitor: Competitor::new(id, format!("Driver {id}")),
            repeated_pick: false,
            stage_wins,
            stage_points,
            position_points,
        }
    }

    fn placeholder(id: u32) -> PickScore {
        PickScore::placeholder(Competitor::new(id, format!("Driver {id}")))
    }

    fn repeated(mut score: PickScore) -> PickScore {
        score.repeated_pick = true;
        score
    }

    #[test]
    fn test_picks_ordered_by_value() {
        let scores = [score(1, 10, 5, 0), score(2, 4, 10, 1), score(3, 35, 0, 0)];
        let player = aggregate_player(&record([1, 2, 3]), "player", scores, false, eastern());

        assert_eq!(player.pick_names(), ["Driver 3", "Driver 1", "Driver 2"]);
        assert_eq!(player.pick_1.total_points, 35);
        assert_eq!(player.pick_2.total_points, 15);
        assert_eq!(player.pick_3.total_points, 14);
        assert_eq!(player.stage_points, 15);
        assert_eq!(player.position_points, 49);
        assert_eq!(player.total_points, 64);
        assert_eq!(player.total_playoff_points, 1);
        assert_eq!(player.pick_3.playoff_points, 1);
        assert!(!player.penalty);
    }

    #[test]
    fn test_single_repeat_still_scores() {
        let scores = [score(1, 40, 0, 0), repeated(score(2, 35, 10, 1)), score(3, 34, 0, 0)];
        let player = aggregate_player(&record([1, 2, 3]), "player", scores, false, eastern());

        assert!(!player.penalty);
        assert!(player.picks().iter().all(|pick| pick.counted));
        assert_eq!(player.total_points, 40 + 45 + 34);
        // win bonus for the leader plus one stage win
        assert_eq!(player.total_playoff_points, 6);
    }

    #[test]
    fn test_second_repeat_is_zeroed() {
        let scores = [
            repeated(score(1, 30, 0, 0)),
            repeated(score(2, 20, 0, 0)),
            score(3, 10, 0, 0),
        ];
        let player = aggregate_player(&record([1, 2, 3]), "player", scores, false, eastern());

        assert!(player.penalty);
        // ascending: 3 (10, counted), 2 (20, first repeat, counted), 1 (30, second repeat)
        assert!(!player.pick_1.counted);
        assert!(player.pick_1.repeated_pick);
        assert_eq!(player.pick_1.total_points, 30);
        assert!(player.pick_2.counted);
        assert!(player.pick_3.counted);
        assert_eq!(player.total_points, 30);
    }

    #[test]
    fn test_picks_after_second_repeat_do_not_count() {
        let scores = [
            repeated(score(1, 2, 0, 0)),
            repeated(score(2, 3, 0, 0)),
            score(3, 40, 0, 0),
        ];
        let player = aggregate_player(&record([1, 2, 3]), "player", scores, false, eastern());

        assert!(player.penalty);
        assert_eq!(player.total_points, 2);
        assert_eq!(player.total_playoff_points, 0);
        assert_eq!(player.pick_1.playoff_points, 0);
    }

    #[test]
    fn test_playoff_event_leaves_playoff_points_unset() {
        let scores = [score(1, 40, 10, 1), score(2, 35, 0, 0), score(3, 34, 0, 0)];
        let player = aggregate_player(&record([1, 2, 3]), "player", scores, true, eastern());

        assert_eq!(player.total_playoff_points, 0);
        assert!(player.picks().iter().all(|pick| pick.playoff_points == 0));
        assert_eq!(player.total_points, 119);
    }

    #[test]
    fn test_placeholders_aggregate_to_zero() {
        let scores = [1, 2, 3].map(placeholder);
        let player = aggregate_player(&record([1, 2, 3]), "player", scores, false, eastern());

        assert_eq!(player.total_points, 0);
        assert_eq!(player.total_playoff_points, 0);
        assert!(!player.penalty);
        assert!(player.submitted_at.is_none());
    }

    #[test]
    fn test_submission_time_follows_daylight_saving() {
        let shown_at = |at| {
            let mut record = record([1, 2, 3]);
            record.submitted_at = Some(at);
            let scores = [1, 2, 3].map(placeholder);
            aggregate_player(&record, "player", scores, false, eastern())
                .submitted_at
                .unwrap()
                .to_rfc3339()
        };

        let summer = Utc.with_ymd_and_hms(2023, 5, 28, 22, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2023, 2, 19, 19, 30, 0).unwrap();

        assert_eq!(shown_at(summer), "2023-05-28T18:00:00-04:00");
        assert_eq!(shown_at(winter), "2023-02-19T14:30:00-05:00");
    }
}
