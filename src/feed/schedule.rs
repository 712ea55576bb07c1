use chrono::{DateTime, NaiveDateTime, Utc};
use itertools::Itertools;
use serde::Deserialize;
use tracing::debug;

use crate::config::SeasonConfig;
use crate::error::Result;
use crate::model::{EventKind, ScheduleEvent};

const FEED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Deserialize)]
struct ScheduleItem {
    race_id: u32,
    race_name: String,
    #[serde(default)]
    track_name: Option<String>,
    event_name: String,
    #[serde(default)]
    start_time_utc: Option<String>,
}

/// Parse the season schedule feed into events ordered by start time.
///
/// The feed lists every session of a race weekend (practice, qualifying, the
/// race) under the race's id. Only the `Race` session can be marked as the
/// season opener or a playoff event.
pub fn parse_schedule_feed(json: &str, season: &SeasonConfig) -> Result<Vec<ScheduleEvent>> {
    let items: Vec<ScheduleItem> = serde_json::from_str(json)?;

    let events = items
        .into_iter()
        .map(|item| to_event(item, season))
        .sorted_by_key(|event| event.start_time)
        .collect_vec();

    debug!(
        count = events.len(),
        races = events.iter().filter(|e| e.is_race_event()).count(),
        "parsed schedule feed"
    );
    Ok(events)
}

fn to_event(item: ScheduleItem, season: &SeasonConfig) -> ScheduleEvent {
    let kind = EventKind::from_label(&item.event_name);
    let is_race = kind == EventKind::Race;

    ScheduleEvent {
        id: item.race_id,
        name: item.race_name,
        track_name: item.track_name.filter(|t| !t.is_empty()),
        kind,
        start_time: item.start_time_utc.as_deref().and_then(parse_feed_time),
        is_season_opener: is_race && season.opener_race_id == Some(item.race_id),
        is_playoff: is_race && season.playoff_race_ids.contains(&item.race_id),
    }
}

fn parse_feed_time(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, FEED_TIME_FORMAT)
        .ok()
        .map(|t| t.and_utc())
}
