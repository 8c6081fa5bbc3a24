//! Record normalizer: exclusion filtering, lowercasing, permissive date
//! parsing, schema resolution and the global (user, date, time) sort.

use crate::config::PipelineConfig;
use crate::errors::{AppError, AppResult};
use crate::ingest::RawTable;
use crate::models::event::RawEvent;
use crate::models::value::CellValue;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

/// Normalizer output: typed events plus the pass-through column headers.
#[derive(Debug, Default)]
pub struct Normalized {
    pub events: Vec<RawEvent>,
    pub extra_columns: Vec<String>,
}

/// Resolved column positions after header lowercasing.
struct Schema {
    user: usize,
    date: usize,
    time: usize,
    role: usize,
    group: Option<usize>,
    extras: Vec<(usize, String)>,
}

fn resolve_schema(headers: &[String]) -> AppResult<Schema> {
    let find = |name: &str| headers.iter().position(|h| h == name);

    let user = find("user").ok_or_else(|| AppError::MissingColumn("user".into()))?;
    let date = find("event_date").ok_or_else(|| AppError::MissingColumn("event_date".into()))?;
    let time = find("event_time").ok_or_else(|| AppError::MissingColumn("event_time".into()))?;
    let role = find("role").ok_or_else(|| AppError::MissingColumn("role".into()))?;
    // group is the only soft column: when absent every row gets the
    // "undefined" fill downstream
    let group = find("group");

    let consumed = [Some(user), Some(date), Some(time), Some(role), group];
    let extras = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| !consumed.contains(&Some(*i)))
        .map(|(i, h)| (i, h.clone()))
        .collect();

    Ok(Schema {
        user,
        date,
        time,
        role,
        group,
        extras,
    })
}

/// Build the case-insensitive exclusion matcher from the pattern list.
/// Patterns combine as a regex alternation, matched as substrings.
fn build_exclusion(patterns: &[String]) -> AppResult<Option<Regex>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let joined = patterns.join("|");
    Ok(Some(Regex::new(&format!("(?i)({})", joined))?))
}

/// Permissive calendar-date parser; unparseable values become None.
pub fn parse_date_permissive(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    None
}

/// Normalize the raw table into typed events.
///
/// - drops rows whose `user` matches an exclusion pattern (missing or
///   non-text user cells never match and are kept)
/// - lowercases every column name and every text cell
/// - parses `event_date` permissively; failures become a null date marker
/// - sorts ascending by (user, date, raw time); null dates sort first
pub fn normalize(table: RawTable, cfg: &PipelineConfig) -> AppResult<Normalized> {
    let headers: Vec<String> = table.headers.iter().map(|h| h.to_lowercase()).collect();
    let schema = resolve_schema(&headers)?;
    let exclusion = build_exclusion(&cfg.exclude_patterns)?;

    let mut events = Vec::with_capacity(table.rows.len());

    for row in table.rows {
        let row: Vec<CellValue> = row.into_iter().map(CellValue::lowercased).collect();

        if let Some(re) = &exclusion {
            if let Some(user_text) = row[schema.user].as_text() {
                if re.is_match(user_text) {
                    continue;
                }
            }
        }

        let user = row[schema.user].to_string();
        let date = parse_date_permissive(&row[schema.date].to_string());
        let time_raw = row[schema.time].to_string();
        let role = row[schema.role].to_string();

        let group = match schema.group {
            Some(i) if !row[i].is_empty() => Some(row[i].to_string()),
            _ => None,
        };

        let extras = schema
            .extras
            .iter()
            .map(|(i, _)| row[*i].clone())
            .collect();

        events.push(RawEvent {
            user,
            date,
            time_raw,
            group,
            role,
            extras,
        });
    }

    events.sort_by(|a, b| {
        a.user
            .cmp(&b.user)
            .then(a.date.cmp(&b.date))
            .then(a.time_raw.cmp(&b.time_raw))
    });

    Ok(Normalized {
        events,
        extra_columns: schema.extras.into_iter().map(|(_, h)| h).collect(),
    })
}
