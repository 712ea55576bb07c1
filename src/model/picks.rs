use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::competitor::{Competitor, CompetitorId};
use crate::error::{PickemError, Result};

/// Number of competitors every player picks per event.
pub const PICKS_PER_PLAYER: usize = 3;

/// A competitor chosen by a player for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub competitor: Competitor,
}

impl From<Competitor> for Pick {
    fn from(competitor: Competitor) -> Self {
        Self { competitor }
    }
}

impl Pick {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Competitor::new(id, name).into()
    }

    pub fn id(&self) -> CompetitorId {
        self.competitor.id
    }
}

/// A player's submitted picks for one event. A later submission for the same
/// player and event replaces this one wholesale.
///
/// Deserializing goes through [`PlayerPicksRecord::new`], so a stored record
/// with the wrong number of picks or a repeated competitor fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlayerPicksRecord")]
pub struct PlayerPicksRecord {
    pub player_id: String,
    pub event_id: u32,
    pub picks: [Pick; PICKS_PER_PLAYER],
    pub submitted_at: Option<DateTime<Utc>>,
}

impl PlayerPicksRecord {
    /// Build a record from a raw submission, rejecting anything other than
    /// exactly three distinct competitors.
    pub fn new(
        player_id: impl Into<String>,
        event_id: u32,
        picks: Vec<Pick>,
        submitted_at: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let player_id = player_id.into();
        let count = picks.len();
        let picks: [Pick; PICKS_PER_PLAYER] =
            picks
                .try_into()
                .map_err(|_| PickemError::MalformedPickRecord {
                    player_id: player_id.clone(),
                    event_id,
                    count,
                })?;

        if let Some(dup) = picks.iter().map(Pick::id).duplicates().next() {
            return Err(PickemError::DuplicatePick {
                player_id,
                competitor_id: dup.0,
            });
        }

        Ok(Self {
            player_id,
            event_id,
            picks,
            submitted_at,
        })
    }

    /// Check every pick against the event's entry list.
    pub fn validate(&self, field: &[Competitor]) -> Result<()> {
        match self
            .picks
            .iter()
            .find(|pick| !field.iter().any(|c| c.is_same(&pick.competitor)))
        {
            Some(unknown) => Err(PickemError::UnknownCompetitor {
                player_id: self.player_id.clone(),
                competitor_id: unknown.id().0,
            }),
            None => Ok(()),
        }
    }
}

#[derive(Deserialize)]
struct RawPlayerPicksRecord {
    player_id: String,
    event_id: u32,
    picks: Vec<Pick>,
    #[serde(default)]
    submitted_at: Option<DateTime<Utc>>,
}

impl TryFrom<RawPlayerPicksRecord> for PlayerPicksRecord {
    type Error = PickemError;

    fn try_from(raw: RawPlayerPicksRecord) -> Result<Self> {
        Self::new(raw.player_id, raw.event_id, raw.picks, raw.submitted_at)
    }
}
