//! Core pipeline: normalize → deduplicate → assign → pair → aggregate.
//!
//! Each stage consumes the full in-memory table produced by the previous
//! one; a run is a single synchronous batch with no shared state between
//! runs.

pub mod aggregate;
pub mod assign;
pub mod dedup;
pub mod normalize;
pub mod pair;

use crate::config::PipelineConfig;
use crate::errors::AppResult;
use crate::ingest::RawTable;
use crate::models::report::Report;

/// Run the whole pipeline over a raw table and produce the report.
pub fn run_pipeline(table: RawTable, cfg: &PipelineConfig) -> AppResult<Report> {
    let normalized = normalize::normalize(table, cfg)?;
    let events = dedup::deduplicate(normalized.events, cfg.proximity_minutes)?;
    let labeled = assign::assign_tags(events);
    let records = pair::pair_events(labeled);
    let aggregates = aggregate::aggregate(&records);

    Ok(Report {
        extra_columns: normalized.extra_columns,
        records,
        by_user: aggregates.by_user,
        by_group: aggregates.by_group,
        by_role_group: aggregates.by_role_group,
    })
}
