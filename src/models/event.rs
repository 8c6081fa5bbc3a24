use super::tag::EventTag;
use super::value::CellValue;
use chrono::{NaiveDate, NaiveTime};

/// Normalized event row: values lowercased, date parsed, time still raw.
///
/// `date` is `None` when the original value could not be parsed; such rows
/// are kept and grouped under their own null-date bucket rather than
/// dropped (null dates sort before real ones).
///
/// `extras` holds the pass-through columns, aligned with the extra-column
/// header list resolved at normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    pub user: String,
    pub date: Option<NaiveDate>,
    pub time_raw: String,
    pub group: Option<String>,
    pub role: String,
    pub extras: Vec<CellValue>,
}

impl RawEvent {
    /// (user, date) key identifying the user-day this row belongs to.
    pub fn day_key(&self) -> (&str, Option<NaiveDate>) {
        (self.user.as_str(), self.date)
    }

    pub fn date_str(&self) -> String {
        match self.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "<null date>".to_string(),
        }
    }
}

/// Event surviving deduplication, with the time-of-day parsed.
#[derive(Debug, Clone)]
pub struct Event {
    pub user: String,
    pub date: Option<NaiveDate>,
    pub time: NaiveTime,
    pub group: Option<String>,
    pub role: String,
    pub extras: Vec<CellValue>,
}

impl Event {
    pub fn day_key(&self) -> (&str, Option<NaiveDate>) {
        (self.user.as_str(), self.date)
    }
}

/// Event plus its entry/exit tag.
#[derive(Debug, Clone)]
pub struct LabeledEvent {
    pub event: Event,
    pub tag: EventTag,
}
