//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a raw minute total as zero-padded "HH:MM".
///
/// Totals are durations, not clock times: values above 24 hours keep
/// growing (no day wraparound).
pub fn mins2hhmm(mins: i64) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;
    format!("{:02}:{:02}", hours, minutes)
}
