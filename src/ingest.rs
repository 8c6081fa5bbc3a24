//! CSV ingestion: reads the raw event table into memory.
//! Cell typing happens here; schema resolution and all cleanup belong to
//! the normalize stage.

use crate::errors::{AppError, AppResult};
use crate::models::value::CellValue;
use std::path::Path;

/// Raw in-memory table: header row plus typed cells.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Read a CSV file with a header row into a RawTable.
///
/// Rows whose width differs from the header are a hard error (reported
/// by the csv crate with the offending line); nothing is truncated or
/// padded silently.
pub fn read_csv(path: &Path) -> AppResult<RawTable> {
    let mut rdr = csv::Reader::from_path(path)?;

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(AppError::EmptyHeader);
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::parse).collect());
    }

    Ok(RawTable { headers, rows })
}
