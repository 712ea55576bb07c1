use std::path::Path;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::scoring::DEFAULT_PLAYOFF_BONUS;

/// Scoring settings for a league season.
///
/// Every field has a default, so a config file only needs the values it changes:
///
/// ```
/// let config = race_pickem::ScoringConfig::from_toml_str(
///     r#"
///     playoff_bonus = [15, 10, 5]
///
///     [season]
///     opener_race_id = 5314
///     playoff_race_ids = [5340, 5341]
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.display_timezone, chrono_tz::America::New_York);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Playoff bonus per tier, best first.
    pub playoff_bonus: Vec<u32>,
    /// IANA zone used to display submission times, e.g. `"America/New_York"`.
    pub display_timezone: Tz,
    /// Shown for players the directory can't name.
    pub unknown_player_label: String,
    pub season: SeasonConfig,
}

/// Which schedule entries open the season and which belong to the playoffs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    pub opener_race_id: Option<u32>,
    pub playoff_race_ids: Vec<u32>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            playoff_bonus: DEFAULT_PLAYOFF_BONUS.to_vec(),
            display_timezone: chrono_tz::America::New_York,
            unknown_player_label: "Unknown player".to_string(),
            season: SeasonConfig::default(),
        }
    }
}

impl ScoringConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded scoring config");
        Ok(config)
    }
}
