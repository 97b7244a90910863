use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use clima_aggregate::{DEFAULT_EPOCH_YEAR, EXTREMITY_RANK};
use clima_source::{DEFAULT_BASE_URL, DEFAULT_VARIABLE, Location};

/// Top-level clima configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ClimaConfig {
    /// Upstream archive settings.
    #[serde(default)]
    pub source: SourceToml,

    /// Location the series is fetched for. Required by `fetch`.
    #[serde(default)]
    pub location: Option<Location>,

    /// Aggregation settings.
    #[serde(default)]
    pub stats: StatsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceToml {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_variable")]
    pub variable: String,
    #[serde(default = "default_end_date")]
    pub end_date: String,
}

impl Default for SourceToml {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timezone: default_timezone(),
            variable: default_variable(),
            end_date: default_end_date(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timezone() -> String {
    "Europe%2FBerlin".to_string()
}
fn default_variable() -> String {
    DEFAULT_VARIABLE.to_string()
}
fn default_end_date() -> String {
    "2022-12-31".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsToml {
    #[serde(default = "default_epoch_year")]
    pub epoch_year: i32,
    #[serde(default = "default_extremity_rank")]
    pub extremity_rank: usize,
    #[serde(default)]
    pub selected_year: Option<i32>,
}

impl Default for StatsToml {
    fn default() -> Self {
        Self {
            epoch_year: default_epoch_year(),
            extremity_rank: default_extremity_rank(),
            selected_year: None,
        }
    }
}

fn default_epoch_year() -> i32 {
    DEFAULT_EPOCH_YEAR
}
fn default_extremity_rank() -> usize {
    EXTREMITY_RANK
}

/// Loads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<ClimaConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
