//! Pairer: propagates entry/exit times within each user-day and keeps one
//! attendance record per entry-tagged event.

use crate::models::attendance::AttendanceRecord;
use crate::models::event::LabeledEvent;
use chrono::NaiveTime;

/// Fallback group label for rows with no group value.
pub const UNDEFINED_GROUP: &str = "undefined";

/// Build attendance records from tagged events.
///
/// Within each user-day, entry times are forward-filled and exit times
/// backward-filled, so every entry row sees its own time plus the time of
/// the NEXT exit event. When entries and exits are unbalanced this can
/// pair two consecutive entries with the same exit; that nearest-
/// following-exit approximation is intentional and must not be
/// "corrected" here.
///
/// Non-entry rows are dropped after propagation. An entry with no
/// following exit yields a null exit time and a null duration.
pub fn pair_events(labeled: Vec<LabeledEvent>) -> Vec<AttendanceRecord> {
    let mut records = Vec::new();

    let mut start = 0usize;
    while start < labeled.len() {
        let key = labeled[start].event.day_key();
        let mut end = start + 1;
        while end < labeled.len() && labeled[end].event.day_key() == key {
            end += 1;
        }

        pair_group(&labeled[start..end], &mut records);
        start = end;
    }

    records
}

fn pair_group(group: &[LabeledEvent], records: &mut Vec<AttendanceRecord>) {
    let n = group.len();

    // own time on the matching side, None on the other
    let mut entries: Vec<Option<NaiveTime>> = group
        .iter()
        .map(|row| row.tag.is_entry().then_some(row.event.time))
        .collect();
    let mut exits: Vec<Option<NaiveTime>> = group
        .iter()
        .map(|row| row.tag.is_exit().then_some(row.event.time))
        .collect();

    // forward-fill entries, backward-fill exits
    for i in 1..n {
        if entries[i].is_none() {
            entries[i] = entries[i - 1];
        }
    }
    for i in (0..n.saturating_sub(1)).rev() {
        if exits[i].is_none() {
            exits[i] = exits[i + 1];
        }
    }

    for (i, row) in group.iter().enumerate() {
        if !row.tag.is_entry() {
            continue;
        }

        let entry_time = entries[i].unwrap_or(row.event.time);
        let exit_time = exits[i];
        // raw seconds; totals would lose sub-minute remainders if this
        // were floored to minutes here
        let duration_secs = exit_time.map(|exit| (exit - entry_time).num_seconds());

        records.push(AttendanceRecord {
            user: row.event.user.clone(),
            date: row.event.date,
            group: row
                .event
                .group
                .clone()
                .unwrap_or_else(|| UNDEFINED_GROUP.to_string()),
            role: row.event.role.clone(),
            entry_time,
            exit_time,
            duration_secs,
            extras: row.event.extras.clone(),
        });
    }
}
