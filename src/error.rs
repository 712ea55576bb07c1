use crate::model::EventKind;

/// All errors that can occur while validating picks or building standings.
#[derive(thiserror::Error, Debug)]
pub enum PickemError {
    /// A pick submission did not contain exactly three picks.
    #[error("player {player_id} submitted {count} picks for event {event_id}, expected 3")]
    MalformedPickRecord {
        player_id: String,
        event_id: u32,
        count: usize,
    },

    /// A pick named a competitor that is not entered in the event.
    #[error("player {player_id} picked unknown competitor {competitor_id}")]
    UnknownCompetitor {
        player_id: String,
        competitor_id: u32,
    },

    /// The same competitor appears more than once in one submission.
    #[error("player {player_id} picked competitor {competitor_id} more than once")]
    DuplicatePick {
        player_id: String,
        competitor_id: u32,
    },

    /// The schedule has no event with this id.
    #[error("no scheduled event with id {event_id}")]
    UnknownEvent { event_id: u32 },

    /// An external collaborator (schedule, telemetry, picks store, directory) failed.
    #[error("{collaborator} lookup failed: {message}")]
    Source {
        collaborator: &'static str,
        message: String,
    },

    /// A feed document could not be deserialized.
    #[error("failed to parse feed: {0}")]
    FeedParse(#[from] serde_json::Error),

    /// The scoring configuration could not be deserialized.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to read a configuration file.
    #[error("failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// The event exists but is not a race session, and no race shares its id.
    #[error("event {event_id} is a {kind} session, not a race")]
    NotARace { event_id: u32, kind: EventKind },
}

impl PickemError {
    /// Build a [`PickemError::Source`] from any displayable collaborator error.
    pub fn collaborator(collaborator: &'static str, err: impl std::fmt::Display) -> Self {
        PickemError::Source {
            collaborator,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PickemError>;
