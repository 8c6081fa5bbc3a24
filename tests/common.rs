#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn atl() -> Command {
    let mut cmd = cargo_bin_cmd!("attlog");
    // point at a nonexistent config so tests always run on built-in defaults
    cmd.args(["--config", "__attlog_no_config__.yaml"]);
    cmd
}

/// Create a unique input CSV path inside the system temp dir and write the
/// given content to it.
pub fn write_input(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attlog_input.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write input csv");
    p
}

/// Create a temporary output file path and ensure it's removed.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Small dataset useful for many tests: one clean day for alice plus a
/// noise row that the exclusion filter must drop.
pub fn sample_csv() -> &'static str {
    "User,Event_Date,Event_Time,Group,Role\n\
     alice,2024-01-10,08:00:00,sales,clerk\n\
     alice,2024-01-10,17:00:00,sales,clerk\n\
     Unknown User,2024-01-10,09:00:00,sales,clerk\n\
     bob,2024-01-10,09:00:00,,manager\n"
}
