//! Report configuration
//!
//! Defaults, then `fleet-report.toml` (or an explicit file), then
//! `FLEET_REPORT__*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use session::{ChartConfig, BAR_CHART_FILE, CLEANED_CSV_FILE, PIE_CHART_FILE};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

/// Config file looked up in the working directory (any supported extension)
pub const DEFAULT_CONFIG_NAME: &str = "fleet-report";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "FLEET_REPORT";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory exports are written to
    pub output_dir: PathBuf,

    /// Cleaned CSV file name
    pub csv_file_name: String,

    /// Version pie chart file name
    pub pie_chart_file_name: String,

    /// Vehicle × version bar chart file name
    pub bar_chart_file_name: String,

    /// Max log level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Log line format
    pub log_format: LogFormat,

    /// Chart canvas
    pub chart: ChartConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            csv_file_name: CLEANED_CSV_FILE.to_string(),
            pie_chart_file_name: PIE_CHART_FILE.to_string(),
            bar_chart_file_name: BAR_CHART_FILE.to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            chart: ChartConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Load configuration; an explicit file must exist, the default one may not
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match explicit {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Max tracing level; unknown names fall back to INFO
    pub fn max_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    /// Cleaned CSV export path
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file_name)
    }

    /// Pie chart export path
    pub fn pie_chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.pie_chart_file_name)
    }

    /// Bar chart export path
    pub fn bar_chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.bar_chart_file_name)
    }
}
