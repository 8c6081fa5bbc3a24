pub mod config;
pub mod init;
pub mod process;
pub mod show;

use crate::config::{Config, PipelineConfig};

/// Merge CLI overrides into the configured pipeline settings.
pub(crate) fn pipeline_config(
    cfg: &Config,
    threshold: Option<i64>,
    exclude: &[String],
) -> PipelineConfig {
    let mut pipeline = cfg.pipeline();
    if let Some(minutes) = threshold {
        pipeline.proximity_minutes = minutes;
    }
    if !exclude.is_empty() {
        pipeline.exclude_patterns = exclude.to_vec();
    }
    pipeline
}
