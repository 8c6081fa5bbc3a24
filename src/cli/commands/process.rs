use crate::cli::commands::pipeline_config;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::run_pipeline;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, write_report};
use crate::ingest::read_csv;
use crate::ui::messages::warning;
use clap::ValueEnum;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        input,
        file,
        format,
        threshold,
        exclude,
        force,
    } = cmd
    {
        let pipeline_cfg = pipeline_config(cfg, *threshold, exclude);

        let format = match format {
            Some(f) => f.clone(),
            None => ExportFormat::from_str(&cfg.default_format, true).map_err(|_| {
                AppError::Config(format!(
                    "invalid default_format '{}' in config file",
                    cfg.default_format
                ))
            })?,
        };

        let table = read_csv(Path::new(input))?;
        let report = run_pipeline(table, &pipeline_cfg)?;

        if report.is_empty() {
            warning("No records survived filtering; writing an empty report.");
        }

        write_report(&report, &format, Path::new(file), *force)?;
    }
    Ok(())
}
