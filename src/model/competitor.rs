use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a competitor (driver) across events.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompetitorId(pub u32);

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CompetitorId {
    fn from(id: u32) -> Self {
        CompetitorId(id)
    }
}

/// A competitor entered in an event. Identity is the [`CompetitorId`];
/// the name is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
}

impl Competitor {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: CompetitorId(id),
            name: name.into(),
        }
    }

    /// Whether both values refer to the same competitor, ignoring the display name.
    pub fn is_same(&self, other: &Competitor) -> bool {
        self.id == other.id
    }
}
