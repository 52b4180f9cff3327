//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use dimdate_calendar::DateRange;
use dimdate_io::{Compression, LoaderConfig, WriterConfig};

use crate::config::{LoadToml, OutputToml, RangeToml};

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Builds the validated [`DateRange`] from the TOML range section.
pub fn build_range(range: &RangeToml) -> Result<DateRange> {
    Ok(DateRange::new(range.start, range.end)?)
}

/// Builds a [`WriterConfig`] from the TOML output section.
pub fn build_writer_config(output: &OutputToml) -> Result<WriterConfig> {
    if output.row_group_size == 0 {
        bail!("[output].row_group_size must be greater than 0");
    }
    Ok(WriterConfig::default()
        .with_compression(parse_compression(&output.compression)?)
        .with_row_group_size(output.row_group_size))
}

/// Builds a [`LoaderConfig`] from the TOML load section.
pub fn build_loader_config(load: &LoadToml) -> Result<LoaderConfig> {
    let cfg = LoaderConfig::default()
        .with_batch_size(load.batch_size)
        .with_max_retries(load.max_retries);
    cfg.validate()?;
    Ok(cfg)
}
