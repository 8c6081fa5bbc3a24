// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{Sheet, report_sheets};
use crate::export::notify_export_success;
use crate::models::report::Report;
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON export: one pretty-printed object with the four tables as arrays
/// of header-keyed objects.
pub(crate) fn export_json(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut root = Map::new();
    for sheet in report_sheets(report) {
        root.insert(sheet.slug.to_string(), sheet_to_json(&sheet));
    }

    let json_data = serde_json::to_string_pretty(&Value::Object(root))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

fn sheet_to_json(sheet: &Sheet) -> Value {
    let rows: Vec<Value> = sheet
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (header, cell) in sheet.headers.iter().zip(row) {
                obj.insert(header.clone(), Value::String(cell.clone()));
            }
            Value::Object(obj)
        })
        .collect();
    Value::Array(rows)
}

/// CSV export: four files derived from the output stem, one per table
/// (`<stem>_records.csv`, `<stem>_sum_by_user.csv`, ...).
pub(crate) fn export_csv(report: &Report, path: &Path) -> AppResult<()> {
    for sheet in report_sheets(report) {
        let sheet_path = csv_sheet_path(path, sheet.slug);
        info(format!("Exporting to CSV: {}", sheet_path.display()));

        let mut wtr = csv::Writer::from_path(&sheet_path)?;
        wtr.write_record(&sheet.headers)?;
        for row in &sheet.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;

        notify_export_success("CSV", &sheet_path);
    }

    Ok(())
}

/// `out.csv` + `records` → `out_records.csv`, in the same directory.
pub(crate) fn csv_sheet_path(path: &Path, slug: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "report".to_string());

    let file_name = format!("{stem}_{slug}.csv");
    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}
