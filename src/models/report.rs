use super::attendance::AttendanceRecord;
use crate::utils::formatting::mins2hhmm;

/// One aggregate total: grouping key(s) plus the summed raw seconds.
/// Flooring to whole minutes happens only at format time.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub keys: Vec<String>,
    pub total_secs: i64,
}

impl AggregateRow {
    pub fn total_minutes(&self) -> i64 {
        self.total_secs / 60
    }

    pub fn total_str(&self) -> String {
        mins2hhmm(self.total_minutes())
    }
}

/// Final result of a pipeline run: the per-event report plus the three
/// aggregate tables. Recomputed fully on every run, nothing persists.
#[derive(Debug, Default)]
pub struct Report {
    /// Headers of the pass-through columns, in input order.
    pub extra_columns: Vec<String>,
    pub records: Vec<AttendanceRecord>,
    pub by_user: Vec<AggregateRow>,
    pub by_group: Vec<AggregateRow>,
    pub by_role_group: Vec<AggregateRow>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
