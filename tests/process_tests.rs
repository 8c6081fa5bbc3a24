mod common;
use common::{atl, sample_csv, temp_out, write_input};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_process_csv_artifact() {
    let input = write_input("process_csv", sample_csv());
    let out = temp_out("process_csv", "csv");

    atl()
        .args(["process", &input, "--file", &out, "--format", "csv", "--force"])
        .assert()
        .success();

    let stem = out.trim_end_matches(".csv");
    let records = fs::read_to_string(format!("{stem}_records.csv")).expect("records csv");
    assert!(records.contains("alice"));
    assert!(records.contains("09:00"));
    // exclusion filter applied end to end
    assert!(!records.to_lowercase().contains("unknown"));

    let by_user = fs::read_to_string(format!("{stem}_sum_by_user.csv")).expect("sum csv");
    assert!(by_user.contains("alice,09:00"));

    // bob has a lone entry and an empty group
    let by_group = fs::read_to_string(format!("{stem}_sum_by_group.csv")).expect("group csv");
    assert!(by_group.contains("undefined,00:00"));
}

#[test]
fn test_process_json_artifact() {
    let input = write_input("process_json", sample_csv());
    let out = temp_out("process_json", "json");

    atl()
        .args(["process", &input, "--file", &out, "--format", "json", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert!(parsed.get("records").is_some());
    assert!(parsed.get("sum_by_user").is_some());
    assert!(parsed.get("sum_by_group").is_some());
    assert!(parsed.get("sum_by_role_group").is_some());

    let records = parsed["records"].as_array().expect("records array");
    assert_eq!(records.len(), 2);
}

#[test]
fn test_process_xlsx_artifact() {
    let input = write_input("process_xlsx", sample_csv());
    let out = temp_out("process_xlsx", "xlsx");

    atl()
        .args(["process", &input, "--file", &out, "--force"])
        .assert()
        .success();

    assert!(Path::new(&out).exists());
    // xlsx files are zip archives
    let bytes = fs::read(&out).expect("read workbook");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_process_rejects_malformed_time() {
    let input = write_input(
        "bad_time",
        "user,event_date,event_time,group,role\n\
         alice,2024-01-10,morning,sales,clerk\n",
    );
    let out = temp_out("bad_time", "csv");

    atl()
        .args(["process", &input, "--file", &out, "--format", "csv", "--force"])
        .assert()
        .failure()
        .stderr(contains("Invalid time 'morning'"));

    // hard gate: no partial output
    let stem = out.trim_end_matches(".csv");
    assert!(!Path::new(&format!("{stem}_records.csv")).exists());
}

#[test]
fn test_process_rejects_ragged_rows() {
    // a row wider than the header must fail loudly, not lose cells
    let input = write_input(
        "ragged_row",
        "user,event_date,event_time,group,role\n\
         alice,2024-01-10,08:00:00,sales,clerk,stray\n",
    );
    let out = temp_out("ragged_row", "csv");

    atl()
        .args(["process", &input, "--file", &out, "--format", "csv", "--force"])
        .assert()
        .failure()
        .stderr(contains("CSV error"));

    let stem = out.trim_end_matches(".csv");
    assert!(!Path::new(&format!("{stem}_records.csv")).exists());
}

#[test]
fn test_process_rejects_missing_role_column() {
    let input = write_input(
        "no_role",
        "user,event_date,event_time,group\n\
         alice,2024-01-10,08:00:00,sales\n",
    );
    let out = temp_out("no_role", "csv");

    atl()
        .args(["process", &input, "--file", &out, "--format", "csv", "--force"])
        .assert()
        .failure()
        .stderr(contains("Missing required column: role"));
}

#[test]
fn test_process_empty_input_succeeds() {
    let input = write_input("empty_input", "user,event_date,event_time,group,role\n");
    let out = temp_out("empty_input", "csv");

    atl()
        .args(["process", &input, "--file", &out, "--format", "csv", "--force"])
        .assert()
        .success();

    let stem = out.trim_end_matches(".csv");
    let records = fs::read_to_string(format!("{stem}_records.csv")).expect("records csv");
    assert_eq!(records.lines().count(), 1); // header only
}

#[test]
fn test_process_custom_threshold_and_exclude() {
    let input = write_input(
        "custom_opts",
        "user,event_date,event_time,group,role\n\
         alice,2024-01-10,08:00:00,sales,clerk\n\
         alice,2024-01-10,08:07:00,sales,clerk\n\
         carol,2024-01-10,09:00:00,sales,intern\n",
    );
    let out = temp_out("custom_opts", "csv");

    // 10-minute window collapses the 7-minute pair, custom pattern drops carol
    atl()
        .args([
            "process", &input, "--file", &out, "--format", "csv", "--force",
            "--threshold", "10", "--exclude", "carol",
        ])
        .assert()
        .success();

    let stem = out.trim_end_matches(".csv");
    let records = fs::read_to_string(format!("{stem}_records.csv")).expect("records csv");
    assert!(!records.contains("carol"));
    assert!(records.contains("08:00:00"));
    assert!(!records.contains("08:07:00"));
}

#[test]
fn test_show_prints_records() {
    let input = write_input("show_records", sample_csv());

    atl()
        .args(["show", &input])
        .assert()
        .success()
        .stdout(contains("Processed Records").and(contains("alice")));
}

#[test]
fn test_show_prints_totals() {
    let input = write_input("show_totals", sample_csv());

    atl()
        .args(["show", &input, "--totals"])
        .assert()
        .success()
        .stdout(contains("Sum by User").and(contains("Sum by Role and Group")));
}
