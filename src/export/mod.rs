// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub use model::{Sheet, report_sheets};

use crate::errors::AppResult;
use crate::models::report::Report;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every writer.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

/// Write the report artifact in the requested format.
///
/// An existing output file is only overwritten with `force` or after
/// interactive confirmation.
pub fn write_report(
    report: &Report,
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => json_csv::export_csv(report, path),
        ExportFormat::Json => json_csv::export_json(report, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(report, path),
    }
}
