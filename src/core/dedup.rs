//! Deduplicator: exact-duplicate removal, the strict time-format gate and
//! the proximity-window filter.

use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, RawEvent};
use chrono::NaiveTime;

/// Remove exact duplicates and near-duplicate timestamps, parsing times
/// on the way.
///
/// The proximity filter is a single pass over deltas computed against the
/// original adjacent-row spacing: deltas are NOT recomputed after a
/// removal. A run of events at +0, +3 and +6 minutes keeps only the first
/// one, because both later rows see a 3-minute gap to their original
/// neighbour.
pub fn deduplicate(events: Vec<RawEvent>, proximity_minutes: i64) -> AppResult<Vec<Event>> {
    // exact duplicates across all columns, first occurrence wins
    let mut unique: Vec<RawEvent> = Vec::with_capacity(events.len());
    for ev in events {
        if !unique.contains(&ev) {
            unique.push(ev);
        }
    }

    // hard validation gate: every time value must be HH:MM:SS, a single
    // bad value aborts the whole run
    let mut timed: Vec<Event> = Vec::with_capacity(unique.len());
    for ev in unique {
        let time = NaiveTime::parse_from_str(&ev.time_raw, "%H:%M:%S").map_err(|_| {
            AppError::InvalidTime {
                value: ev.time_raw.clone(),
                user: ev.user.clone(),
                date: ev.date_str(),
            }
        })?;

        timed.push(Event {
            user: ev.user,
            date: ev.date,
            time,
            group: ev.group,
            role: ev.role,
            extras: ev.extras,
        });
    }

    timed.sort_by(|a, b| {
        a.user
            .cmp(&b.user)
            .then(a.date.cmp(&b.date))
            .then(a.time.cmp(&b.time))
    });

    // all rows of a user-day share the date, so the adjacent delta is just
    // the time-of-day difference
    let threshold_secs = proximity_minutes * 60;
    let mut keep = Vec::with_capacity(timed.len());
    for i in 0..timed.len() {
        let first_in_group = i == 0 || timed[i].day_key() != timed[i - 1].day_key();
        if first_in_group {
            keep.push(true);
        } else {
            let delta = (timed[i].time - timed[i - 1].time).num_seconds();
            keep.push(delta >= threshold_secs);
        }
    }

    Ok(timed
        .into_iter()
        .zip(keep)
        .filter_map(|(ev, k)| k.then_some(ev))
        .collect())
}
