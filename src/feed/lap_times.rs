use itertools::Itertools;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::model::{Competitor, FlagState, RunningOrder};

#[derive(Debug, Deserialize)]
struct LapTimesFeed {
    #[serde(default)]
    laps: Vec<DriverLaps>,
    #[serde(default)]
    flags: Vec<FlagEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DriverLaps {
    #[serde(rename = "NASCARDriverID")]
    driver_id: u32,
    full_name: String,
    running_pos: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FlagEntry {
    flag_state: u8,
}

/// Parse a lap-times feed into a running order, leader first.
pub fn parse_lap_times(json: &str) -> Result<RunningOrder> {
    let feed: LapTimesFeed = serde_json::from_str(json)?;

    let competitors = feed
        .laps
        .into_iter()
        .sorted_by_key(|driver| driver.running_pos)
        .map(|driver| Competitor::new(driver.driver_id, driver.full_name))
        .collect_vec();
    let flags = feed
        .flags
        .iter()
        .map(|flag| FlagState::from_code(flag.flag_state))
        .collect_vec();

    let order = RunningOrder::new(competitors, flags);
    debug!(
        competitors = order.competitors.len(),
        started = order.is_started(),
        "parsed lap times"
    );
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CompetitorId;

    #[test]
    fn test_running_order_from_positions() {
        let json = r#"{
            "laps": [
                {"Number": "20", "FullName": "Christopher Bell", "NASCARDriverID": 4065, "RunningPos": 2, "Laps": []},
                {"Number": "5", "FullName": "Kyle Larson", "NASCARDriverID": 3989, "RunningPos": 3, "Laps": []},
                {"Number": "11", "FullName": "Denny Hamlin", "NASCARDriverID": 1361, "RunningPos": 1, "Laps": []}
            ],
            "flags": [
                {"LapsCompleted": 0, "FlagState": 8},
                {"LapsCompleted": 1, "FlagState": 1},
                {"LapsCompleted": 20, "FlagState": 2}
            ]
        }"#;

        let order = parse_lap_times(json).unwrap();

        let ids = order.competitors.iter().map(|c| c.id).collect_vec();
        assert_eq!(ids, vec![CompetitorId(1361), CompetitorId(4065), CompetitorId(3989)]);
        assert_eq!(order.competitors[0].name, "Denny Hamlin");
        assert_eq!(
            order.flags,
            vec![FlagState::WarmUp, FlagState::Green, FlagState::Caution]
        );
        assert!(order.is_started());
    }

    #[test]
    fn test_empty_feed_is_not_started() {
        let order = parse_lap_times("{}").unwrap();
        assert!(!order.has_data());
        assert!(!order.is_started());
    }
}
