pub mod model;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::tracker::{HistorySeed, RandomSeed, SeriesSeed, ZeroSeed, WEEK_LEN};

pub use model::{AppConfig, LoggingConfig, SeedMode};

/// Most history entries a config may supply: every day but today.
pub const MAX_HISTORY: usize = WEEK_LEN - 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("seed history has {len} entries, at most {max} are allowed")]
    HistoryTooLong { len: usize, max: usize },
    #[error("invalid day label format: {0:?}")]
    InvalidLabelFormat(String),
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("coffee-tracker")
        .join("config.toml")
}

/// Load the config from `path`, or from the default location when `None`.
///
/// A missing file at the default location yields defaults; an explicitly
/// requested file must exist.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (config_path(), false),
    };
    if !explicit && !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config = parse_config(&contents)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(contents).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let len = config.seed.history.len();
    if len > MAX_HISTORY {
        return Err(ConfigError::HistoryTooLong {
            len,
            max: MAX_HISTORY,
        });
    }
    // Day labels come from a bare date, so time and zone specifiers fail too
    let format = &config.ui.label_format;
    let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
    if write!(String::new(), "{}", sample.format(format)).is_err() {
        return Err(ConfigError::InvalidLabelFormat(format.clone()));
    }
    Ok(())
}

/// Build the seeder selected by the config.
pub fn build_seed(config: &AppConfig) -> Box<dyn SeriesSeed> {
    match config.seed.mode {
        SeedMode::Zero => Box::new(ZeroSeed),
        SeedMode::Random => Box::new(RandomSeed::new(config.seed.max_random_cups)),
        SeedMode::History => Box::new(HistorySeed::new(config.seed.history.clone())),
    }
}
