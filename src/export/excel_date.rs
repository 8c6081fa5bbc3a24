// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Try to interpret a cell string as a date or time-of-day, returning the
/// Excel serial number plus its number format.
///
/// Only the shapes our own tables emit are recognized (ISO dates,
/// HH:MM:SS times and HH:MM durations); everything else is written as
/// text or number by the caller.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let serial = naive_date_to_excel_serial(&d);
        return Some(("yyyy-mm-dd", serial));
    }

    let time_formats = ["%H:%M:%S", "%H:%M"];

    for fmt in time_formats.iter() {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            let seconds = t.num_seconds_from_midnight() as f64;
            return Some(("hh:mm", seconds / 86400.0));
        }
    }

    None
}

fn naive_date_to_excel_serial(d: &NaiveDate) -> f64 {
    // Excel's day zero, accounting for the 1900 leap-year bug
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default();
    (*d - excel_epoch).num_days() as f64
}
