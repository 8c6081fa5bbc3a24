// src/export/model.rs

use crate::models::attendance::AttendanceRecord;
use crate::models::report::{AggregateRow, Report};

/// One named output table shaped as strings, shared by every writer.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Human-readable table name (worksheet title).
    pub name: &'static str,
    /// File-name friendly identifier (CSV suffix, JSON key).
    pub slug: &'static str,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn records_headers(report: &Report) -> Vec<String> {
    let mut headers: Vec<String> = [
        "user",
        "date",
        "group",
        "role",
        "entry_time",
        "exit_time",
        "duration",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();
    headers.extend(report.extra_columns.iter().cloned());
    headers
}

fn record_to_row(rec: &AttendanceRecord) -> Vec<String> {
    let mut row = vec![
        rec.user.clone(),
        rec.date_str(),
        rec.group.clone(),
        rec.role.clone(),
        rec.entry_str(),
        rec.exit_str(),
        rec.duration_str(),
    ];
    row.extend(rec.extras.iter().map(|c| c.to_string()));
    row
}

fn aggregate_to_row(row: &AggregateRow) -> Vec<String> {
    let mut out = row.keys.clone();
    out.push(row.total_str());
    out
}

/// Shape the report into its four named tables.
pub fn report_sheets(report: &Report) -> Vec<Sheet> {
    vec![
        Sheet {
            name: "Processed Records",
            slug: "records",
            headers: records_headers(report),
            rows: report.records.iter().map(record_to_row).collect(),
        },
        Sheet {
            name: "Sum by User",
            slug: "sum_by_user",
            headers: vec!["user".to_string(), "total".to_string()],
            rows: report.by_user.iter().map(aggregate_to_row).collect(),
        },
        Sheet {
            name: "Sum by Group",
            slug: "sum_by_group",
            headers: vec!["group".to_string(), "total".to_string()],
            rows: report.by_group.iter().map(aggregate_to_row).collect(),
        },
        Sheet {
            name: "Sum by Role and Group",
            slug: "sum_by_role_group",
            headers: vec![
                "role".to_string(),
                "group".to_string(),
                "total".to_string(),
            ],
            rows: report.by_role_group.iter().map(aggregate_to_row).collect(),
        },
    ]
}
