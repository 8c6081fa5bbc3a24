use super::value::CellValue;
use crate::utils::formatting::mins2hhmm;
use chrono::{NaiveDate, NaiveTime};

/// One paired attendance interval for a user-day.
///
/// Created from every entry-tagged event after entry/exit propagation.
/// `exit_time` is `None` when no exit follows within the same user-day,
/// in which case the duration is null as well.
///
/// The duration is carried in raw seconds; flooring to whole minutes
/// happens only when formatting, so sub-minute remainders still
/// accumulate in the aggregate totals.
#[derive(Debug, Clone)]
pub struct AttendanceRecord {
    pub user: String,
    pub date: Option<NaiveDate>,
    pub group: String,
    pub role: String,
    pub entry_time: NaiveTime,
    pub exit_time: Option<NaiveTime>,
    pub duration_secs: Option<i64>,
    pub extras: Vec<CellValue>,
}

impl AttendanceRecord {
    /// Whole minutes of the interval, floored.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.duration_secs.map(|s| s / 60)
    }

    /// Duration as zero-padded "HH:MM", empty when there is no exit.
    pub fn duration_str(&self) -> String {
        match self.duration_minutes() {
            Some(m) => mins2hhmm(m),
            None => String::new(),
        }
    }

    pub fn date_str(&self) -> String {
        match self.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => String::new(),
        }
    }

    pub fn entry_str(&self) -> String {
        self.entry_time.format("%H:%M:%S").to_string()
    }

    pub fn exit_str(&self) -> String {
        match self.exit_time {
            Some(t) => t.format("%H:%M:%S").to_string(),
            None => String::new(),
        }
    }
}
