//! Error types for dimdate-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the dimdate-io crate.
///
/// This enum covers Parquet and file-system failures, sink rejections,
/// loader configuration problems, and calendar errors raised while
/// producing rows for a load.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Wraps a file-system error.
    #[error("i/o error: {reason}")]
    Io {
        /// Description of the underlying failure.
        reason: String,
        /// Whether retrying the same operation may succeed.
        transient: bool,
    },

    /// Returned by a sink that refused a batch.
    #[error("sink rejected batch: {reason}")]
    Sink {
        /// Description of the rejection.
        reason: String,
        /// Whether retrying the same batch may succeed.
        transient: bool,
    },

    /// Wraps an error originating from the dimdate-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl IoError {
    /// Returns `true` if the failed operation may succeed when retried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            IoError::Io {
                transient: true,
                ..
            } | IoError::Sink {
                transient: true,
                ..
            }
        )
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        use std::io::ErrorKind;
        let transient = matches!(
            e.kind(),
            ErrorKind::Interrupted | ErrorKind::TimedOut | ErrorKind::WouldBlock
        );
        IoError::Io {
            reason: e.to_string(),
            transient,
        }
    }
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<dimdate_calendar::CalendarError> for IoError {
    fn from(e: dimdate_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}
