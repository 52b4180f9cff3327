//! Parquet table sink and its configuration.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::datatypes::Schema;
use dimdate_calendar::DateRow;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use tracing::debug;

use crate::error::IoError;
use crate::parquet_write;
use crate::sink::RowSink;

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    /// Converts to the corresponding `parquet::basic::Compression` variant.
    fn to_parquet(self) -> Result<parquet::basic::Compression, IoError> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level = parquet::basic::ZstdLevel::try_new(3)?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

/// Configuration for writing the date dimension to Parquet.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Compression algorithm to use.
    compression: Compression,
    /// Maximum number of rows per row group.
    row_group_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            row_group_size: 1_000,
        }
    }
}

impl WriterConfig {
    /// Sets the compression algorithm.
    pub fn with_compression(mut self, comp: Compression) -> Self {
        self.compression = comp;
        self
    }

    /// Sets the maximum number of rows per row group.
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `row_group_size` is zero.
    fn validate(&self) -> Result<(), IoError> {
        if self.row_group_size == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "row_group_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Writes dimension rows to a Parquet file, one row group per batch.
pub struct ParquetSink {
    path: PathBuf,
    schema: Arc<Schema>,
    writer: ArrowWriter<File>,
    rows_written: usize,
}

impl std::fmt::Debug for ParquetSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParquetSink")
            .field("path", &self.path)
            .field("rows_written", &self.rows_written)
            .finish_non_exhaustive()
    }
}

impl ParquetSink {
    /// Creates (or truncates) the file at `path` and prepares the writer.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the configuration is invalid,
    /// [`IoError::Io`] if the file cannot be created, or
    /// [`IoError::Parquet`] if the writer cannot be initialised.
    pub fn create(path: &Path, config: &WriterConfig) -> Result<Self, IoError> {
        config.validate()?;

        let schema = Arc::new(parquet_write::build_schema());
        let props = WriterProperties::builder()
            .set_compression(config.compression.to_parquet()?)
            .set_max_row_group_size(config.row_group_size)
            .build();

        let file = File::create(path)?;
        let writer = ArrowWriter::try_new(file, Arc::clone(&schema), Some(props))?;
        debug!(path = %path.display(), "opened parquet sink");

        Ok(Self {
            path: path.to_path_buf(),
            schema,
            writer,
            rows_written: 0,
        })
    }

    /// Path of the output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows accepted so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }
}

impl RowSink for ParquetSink {
    fn write_batch(&mut self, rows: &[DateRow]) -> Result<(), IoError> {
        let batch = parquet_write::rows_to_record_batch(rows, &self.schema)?;
        self.writer.write(&batch)?;
        // Close the row group so each batch lands as its own unit.
        self.writer.flush()?;
        self.rows_written += rows.len();
        Ok(())
    }

    fn finish(self) -> Result<(), IoError> {
        self.writer.close()?;
        debug!(
            path = %self.path.display(),
            rows = self.rows_written,
            "closed parquet sink"
        );
        Ok(())
    }
}

/// Writes every row of `rows` to a new Parquet file in a single pass.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid, or
/// [`IoError::Parquet`] / [`IoError::Io`] if conversion or file I/O fails.
pub fn write_parquet(
    path: &Path,
    rows: &[DateRow],
    config: &WriterConfig,
) -> Result<(), IoError> {
    let mut sink = ParquetSink::create(path, config)?;
    for chunk in rows.chunks(config.row_group_size) {
        sink.write_batch(chunk)?;
    }
    sink.finish()
}
