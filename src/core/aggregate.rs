//! Aggregator: rolls paired durations into per-user, per-group and
//! per-role+group totals.

use crate::models::attendance::AttendanceRecord;
use crate::models::report::AggregateRow;
use std::collections::BTreeMap;

/// The three aggregate tables, keys in ascending order.
#[derive(Debug, Default)]
pub struct Aggregates {
    pub by_user: Vec<AggregateRow>,
    pub by_group: Vec<AggregateRow>,
    pub by_role_group: Vec<AggregateRow>,
}

/// Sum durations across the three grouping keys.
///
/// Sums run over the raw seconds so sub-minute remainders accumulate;
/// two 59.5-minute intervals total 119 minutes, not 118. Null durations
/// contribute 0, so a group containing only open entries still shows up
/// with a "00:00" total instead of propagating the null.
pub fn aggregate(records: &[AttendanceRecord]) -> Aggregates {
    let mut by_user: BTreeMap<String, i64> = BTreeMap::new();
    let mut by_group: BTreeMap<String, i64> = BTreeMap::new();
    let mut by_role_group: BTreeMap<(String, String), i64> = BTreeMap::new();

    for rec in records {
        let secs = rec.duration_secs.unwrap_or(0);

        *by_user.entry(rec.user.clone()).or_insert(0) += secs;
        *by_group.entry(rec.group.clone()).or_insert(0) += secs;
        *by_role_group
            .entry((rec.role.clone(), rec.group.clone()))
            .or_insert(0) += secs;
    }

    Aggregates {
        by_user: by_user
            .into_iter()
            .map(|(user, total_secs)| AggregateRow {
                keys: vec![user],
                total_secs,
            })
            .collect(),
        by_group: by_group
            .into_iter()
            .map(|(group, total_secs)| AggregateRow {
                keys: vec![group],
                total_secs,
            })
            .collect(),
        by_role_group: by_role_group
            .into_iter()
            .map(|((role, group), total_secs)| AggregateRow {
                keys: vec![role, group],
                total_secs,
            })
            .collect(),
    }
}
