use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use super::competitor::Competitor;

/// Points earned by a single pick in one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickScore {
    pub competitor: Competitor,
    pub repeated_pick: bool,
    pub stage_wins: u32,
    pub stage_points: u32,
    pub position_points: u32,
}

impl PickScore {
    /// A zero-valued score for an event that hasn't started.
    pub fn placeholder(competitor: Competitor) -> Self {
        Self {
            competitor,
            repeated_pick: false,
            stage_wins: 0,
            stage_points: 0,
            position_points: 0,
        }
    }

    pub fn total_points(&self) -> u32 {
        self.position_points + self.stage_points
    }
}

/// A pick as displayed on a player's standings row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPick {
    pub competitor: Competitor,
    pub repeated_pick: bool,
    pub stage_points: u32,
    pub stage_wins: u32,
    pub position_points: u32,
    pub total_points: u32,
    /// Share of the provisional playoff points; 0 when not counted.
    pub playoff_points: u32,
    /// False when the repeated-pick penalty removed this pick from the totals.
    pub counted: bool,
}

impl RankedPick {
    pub fn name(&self) -> &str {
        &self.competitor.name
    }
}

/// One player's standings row for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    pub player_id: String,
    pub name: String,
    pub stage_points: u32,
    pub position_points: u32,
    pub total_points: u32,
    pub total_playoff_points: u32,
    /// Highest-value pick.
    pub pick_1: RankedPick,
    pub pick_2: RankedPick,
    /// Lowest-value pick.
    pub pick_3: RankedPick,
    pub penalty: bool,
    /// Submission time in the league's display timezone.
    pub submitted_at: Option<DateTime<Tz>>,
}

impl PlayerScore {
    pub fn picks(&self) -> [&RankedPick; 3] {
        [&self.pick_1, &self.pick_2, &self.pick_3]
    }

    pub fn pick_names(&self) -> [&str; 3] {
        [self.pick_1.name(), self.pick_2.name(), self.pick_3.name()]
    }
}
