use itertools::Itertools;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::model::{Competitor, StageFinish, StageResult};

#[derive(Debug, Deserialize)]
struct StageEntry {
    stage_number: u32,
    #[serde(default)]
    results: Vec<StageDriver>,
}

#[derive(Debug, Deserialize)]
struct StageDriver {
    driver_id: u32,
    full_name: String,
    position: u32,
}

/// Parse a stage-points feed. Events without stages yield an empty list.
pub fn parse_stage_points(json: &str) -> Result<Vec<StageResult>> {
    let entries: Vec<StageEntry> = serde_json::from_str(json)?;

    let stages = entries
        .into_iter()
        .map(|entry| StageResult {
            stage_number: entry.stage_number,
            results: entry
                .results
                .into_iter()
                .map(|driver| StageFinish {
                    competitor: Competitor::new(driver.driver_id, driver.full_name),
                    position: driver.position,
                })
                .collect_vec(),
        })
        .collect_vec();

    debug!(stages = stages.len(), "parsed stage points");
    Ok(stages)
}
