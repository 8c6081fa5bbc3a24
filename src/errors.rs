//! Unified application error type.
//! All modules (ingest, core, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Schema errors
    // ---------------------------
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Input file has no header row")]
    EmptyHeader,

    // ---------------------------
    // Parsing errors (pipeline gates)
    // ---------------------------
    #[error("Invalid time '{value}' for user '{user}' on {date} (deduplicate stage)")]
    InvalidTime {
        value: String,
        user: String,
        date: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid exclusion pattern: {0}")]
    Pattern(#[from] regex::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type AppResult<T> = Result<T, AppError>;
