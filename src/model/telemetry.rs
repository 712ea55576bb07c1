use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use super::competitor::Competitor;

/// Track condition reported by the timing feed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRepr)]
#[repr(u8)]
pub enum FlagState {
    Green = 1,
    Caution = 2,
    Red = 3,
    Checkered = 4,
    WarmUp = 8,
    NotActive = 9,
    #[default]
    Unknown = 0,
}

impl FlagState {
    pub fn from_code(code: u8) -> Self {
        Self::from_repr(code).unwrap_or_default()
    }
}

/// Snapshot of an event's order, best first, plus the flag history so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningOrder {
    pub competitors: Vec<Competitor>,
    pub flags: Vec<FlagState>,
}

impl RunningOrder {
    pub fn new(competitors: Vec<Competitor>, flags: Vec<FlagState>) -> Self {
        Self { competitors, flags }
    }

    /// An event that has produced no telemetry yet.
    pub fn not_started() -> Self {
        Self::default()
    }

    /// The event is officially underway once any green flag has been shown.
    pub fn is_started(&self) -> bool {
        self.flags.contains(&FlagState::Green)
    }

    /// Whether there is anything to score from.
    pub fn has_data(&self) -> bool {
        !self.competitors.is_empty() || !self.flags.is_empty()
    }
}

/// One competitor's finishing position within a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFinish {
    pub competitor: Competitor,
    pub position: u32,
}

/// Results of one stage of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResult {
    pub stage_number: u32,
    pub results: Vec<StageFinish>,
}
