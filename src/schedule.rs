use itertools::Itertools;

use crate::model::ScheduleEvent;

/// The race session carrying `event_id`. Schedule feeds list every session of
/// a race weekend under the race's id, so the id alone is not unique.
pub(crate) fn race_by_id(schedule: &[ScheduleEvent], event_id: u32) -> Option<&ScheduleEvent> {
    schedule
        .iter()
        .find(|e| e.id == event_id && e.is_race_event())
}

/// The race whose picks `event_id`'s picks are compared against for repeats.
///
/// Only race events count; practice, qualifying and heats are skipped. The
/// season opener and anything scheduled before it (exhibitions) have no prior
/// event, and the opener is never the prior of an exhibition. With no
/// designated opener every race but the first has a prior.
pub(crate) fn prior_scored_event(
    schedule: &[ScheduleEvent],
    event_id: u32,
) -> Option<&ScheduleEvent> {
    let races = schedule.iter().filter(|e| e.is_race_event()).collect_vec();
    let current = races.iter().position(|e| e.id == event_id)?;
    let first_scored = races
        .iter()
        .position(|e| e.is_season_opener)
        .unwrap_or_default();

    if current <= first_scored {
        return None;
    }
    Some(races[current - 1])
}
