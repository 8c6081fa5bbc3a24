use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attlog
/// CLI application to derive attendance reports from raw access-log events
#[derive(Parser)]
#[command(
    name = "attlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pair raw access-log events into entry/exit attendance records and aggregate totals",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Process an event log and write the report artifact
    Process {
        /// Input CSV file with raw access events
        input: String,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Output format (defaults to the configured default_format)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Proximity window in minutes; same-user-day events closer than
        /// this are deduplicated away
        #[arg(long, value_name = "MINUTES")]
        threshold: Option<i64>,

        /// Case-insensitive pattern excluding rows by user (repeatable,
        /// replaces the configured pattern list)
        #[arg(long = "exclude", value_name = "PATTERN")]
        exclude: Vec<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Process an event log and print the result to stdout
    Show {
        /// Input CSV file with raw access events
        input: String,

        /// Print the aggregate totals instead of the processed records
        #[arg(long, help = "Show aggregate totals instead of processed records")]
        totals: bool,

        /// Proximity window in minutes
        #[arg(long, value_name = "MINUTES")]
        threshold: Option<i64>,

        /// Case-insensitive pattern excluding rows by user (repeatable)
        #[arg(long = "exclude", value_name = "PATTERN")]
        exclude: Vec<String>,
    },
}
