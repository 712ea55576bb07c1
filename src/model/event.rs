use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// The kind of session a schedule entry describes. Only races are scored.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum EventKind {
    Race,
    Practice,
    Qualifying,
    Heat,
    #[default]
    Other,
}

impl EventKind {
    /// Parse a schedule label such as `"Race"` or `"Practice 1"`.
    pub fn from_label(label: &str) -> Self {
        let head = label.split_whitespace().next().unwrap_or_default();
        head.parse().unwrap_or_default()
    }
}

/// One entry of the season schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: u32,
    pub name: String,
    pub track_name: Option<String>,
    pub kind: EventKind,
    pub start_time: Option<DateTime<Utc>>,
    pub is_season_opener: bool,
    pub is_playoff: bool,
}

impl ScheduleEvent {
    /// A regular-season race with no start time or track.
    pub fn race(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            track_name: None,
            kind: EventKind::Race,
            start_time: None,
            is_season_opener: false,
            is_playoff: false,
        }
    }

    pub fn is_race_event(&self) -> bool {
        self.kind == EventKind::Race
    }
}
