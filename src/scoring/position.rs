use crate::model::{CompetitorId, RunningOrder};

/// Points for running first.
pub const LEADER_POINTS: u32 = 40;
/// Points never drop below this, including for competitors missing from the order.
pub const FLOOR_POINTS: u32 = 1;
/// Gap between first and second.
const FIRST_STEP: u32 = 5;
/// Gap between every later pair of positions.
const STEP: u32 = 1;

/// Points for `competitor`'s place in the running order: 40, 35, 34, 33, ...
/// down to a floor of 1.
pub fn position_points(order: &RunningOrder, competitor: CompetitorId) -> u32 {
    let mut points = LEADER_POINTS;
    let mut step = FIRST_STEP;

    for entry in &order.competitors {
        if entry.id == competitor {
            return points;
        }
        points = points.saturating_sub(step).max(FLOOR_POINTS);
        step = STEP;
    }

    // Not in the order at all (did not qualify, withdrew): worst case.
    FLOOR_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Competitor;

    fn order(len: u32) -> RunningOrder {
        RunningOrder::new(
            (1..=len).map(|i| Competitor::new(i, format!("Driver {i}"))).collect(),
            vec![],
        )
    }

    #[test]
    fn test_position_decay() {
        let order = order(8);
        assert_eq!(position_points(&order, CompetitorId(1)), 40);
        assert_eq!(position_points(&order, CompetitorId(2)), 35);
        assert_eq!(position_points(&order, CompetitorId(3)), 34);
        assert_eq!(position_points(&order, CompetitorId(8)), 29);
    }

    #[test]
    fn test_curve_is_non_increasing_with_floor() {
        let order = order(60);
        let points: Vec<u32> = (1..=60)
            .map(|id| position_points(&order, CompetitorId(id)))
            .collect();

        assert_eq!(points[0], LEADER_POINTS);
        assert!(points.windows(2).all(|w| w[0] >= w[1]));
        assert!(points.iter().all(|&p| p >= FLOOR_POINTS));
        assert_eq!(points[36], 1);
        assert_eq!(points[59], 1);
    }

    #[test]
    fn test_missing_competitor_scores_floor() {
        assert_eq!(position_points(&order(40), CompetitorId(99)), FLOOR_POINTS);
        assert_eq!(position_points(&order(3), CompetitorId(99)), FLOOR_POINTS);
        assert_eq!(
            position_points(&RunningOrder::not_started(), CompetitorId(1)),
            FLOOR_POINTS
        );
    }
}
