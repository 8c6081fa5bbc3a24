use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// On-disk configuration (YAML).
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
    #[serde(default = "default_proximity_minutes")]
    pub proximity_minutes: i64,
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_exclude_patterns() -> Vec<String> {
    vec!["unknown".to_string(), "access denied".to_string()]
}
fn default_proximity_minutes() -> i64 {
    5
}
fn default_format() -> String {
    "xlsx".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude_patterns: default_exclude_patterns(),
            proximity_minutes: default_proximity_minutes(),
            default_format: default_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("attlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".attlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attlog.conf")
    }

    /// Load configuration from the default location, or return defaults if
    /// not found or unreadable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path (used by `--config`).
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Ignoring unreadable config file {}: {}",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Ignoring unreadable config file {}: {}",
                    path.display(),
                    e
                ));
                Config::default()
            }
        }
    }

    /// Write the default configuration file
    pub fn init_all() -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;

        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        println!("✅ Config file: {:?}", Self::config_file());

        Ok(())
    }

    /// Pipeline settings derived from this configuration.
    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            exclude_patterns: self.exclude_patterns.clone(),
            proximity_minutes: self.proximity_minutes,
        }
    }
}

/// Settings consumed by the core pipeline, passed explicitly into the
/// entry point instead of living in ambient global state.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Case-insensitive patterns excluding rows by their `user` value.
    pub exclude_patterns: Vec<String>,
    /// Minimum spacing between same-user-day events; closer events are
    /// deduplicated away.
    pub proximity_minutes: i64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Config::default().pipeline()
    }
}
