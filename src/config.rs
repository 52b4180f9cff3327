use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use dimdate_calendar::DateRange;
use serde::Deserialize;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "dimdate.toml";

/// Top-level dimdate configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DimDateConfig {
    /// Date range settings.
    #[serde(default)]
    pub range: RangeToml,

    /// Output table settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Batch loading settings.
    #[serde(default)]
    pub load: LoadToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "default_start")]
    pub start: NaiveDate,
    #[serde(default = "default_end")]
    pub end: NaiveDate,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

fn default_start() -> NaiveDate {
    DateRange::dimension_default().start()
}
fn default_end() -> NaiveDate {
    DateRange::dimension_default().end()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_batch_size")]
    pub row_group_size: usize,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            compression: default_compression(),
            row_group_size: default_batch_size(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("dim_date.parquet")
}
fn default_compression() -> String {
    "snappy".to_string()
}
fn default_batch_size() -> usize {
    1000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadToml {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default)]
    pub max_retries: u32,
}

impl Default for LoadToml {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            max_retries: 0,
        }
    }
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// read if present and built-in defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<DimDateConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                return Ok(DimDateConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
