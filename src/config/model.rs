//! Configuration data model.
//!
//! All structs derive `Deserialize` for reading the TOML config file.
//! Every field has a sensible default so the application works out of the box.

use serde::Deserialize;

use crate::tracker::DEFAULT_LABEL_FORMAT;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the six days before today get their counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    #[default]
    Zero,
    Random,
    History,
}

/// Series seeding settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub mode: SeedMode,
    #[serde(default = "default_max_random_cups")]
    pub max_random_cups: u32,
    /// Oldest first; the last entry is yesterday.
    #[serde(default)]
    pub history: Vec<u32>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            mode: SeedMode::default(),
            max_random_cups: default_max_random_cups(),
            history: Vec::new(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub show_stats: bool,
    #[serde(default = "default_label_format")]
    pub label_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_stats: false,
            label_format: default_label_format(),
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_max_random_cups() -> u32 {
    4
}
fn default_label_format() -> String {
    DEFAULT_LABEL_FORMAT.to_string()
}
fn default_log_file() -> String {
    "~/.local/share/coffee-tracker/coffee-tracker.log".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
