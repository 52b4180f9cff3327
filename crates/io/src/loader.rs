//! Batched loading of a row sequence into a [`RowSink`].

use dimdate_calendar::DateRow;
use tracing::{info, warn};

use crate::error::IoError;
use crate::sink::RowSink;

/// Configuration for [`load_rows`].
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Rows per batch handed to the sink.
    batch_size: usize,
    /// Extra attempts for a batch that failed with a transient error.
    max_retries: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 1_000,
            max_retries: 0,
        }
    }
}

impl LoaderConfig {
    /// Sets the number of rows per batch.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Sets how many times a transiently failing batch is retried.
    pub fn with_max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `batch_size` is zero.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.batch_size == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "batch_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Outcome of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows accepted by the sink.
    pub inserted: usize,
    /// Rows the caller expected to load.
    pub expected: usize,
    /// Batches accepted by the sink.
    pub batches: usize,
    /// Retries spent on transient failures.
    pub retries: u32,
}

impl LoadReport {
    /// Returns `true` if every expected row was inserted.
    pub fn is_complete(&self) -> bool {
        self.inserted == self.expected
    }
}

/// Pulls `rows` in batches of `config.batch_size` and writes each batch to
/// `sink`.
///
/// At most one batch is buffered at a time, so a lazy row sequence is never
/// materialised beyond what the sink has accepted. A batch that fails with a
/// transient error is retried up to `config.max_retries` times. The sink is
/// not finished; call [`RowSink::finish`] afterwards.
///
/// # Errors
///
/// Returns [`IoError::Validation`] for an invalid configuration, or the
/// sink's error for a permanent failure or exhausted retries. Batches written
/// before the failure stay in the sink; finish it to make them durable.
pub fn load_rows<I, S>(
    rows: I,
    expected: usize,
    sink: &mut S,
    config: &LoaderConfig,
) -> Result<LoadReport, IoError>
where
    I: IntoIterator<Item = DateRow>,
    S: RowSink,
{
    config.validate()?;

    let mut rows = rows.into_iter();
    let mut batch: Vec<DateRow> = Vec::with_capacity(config.batch_size);
    let mut report = LoadReport {
        inserted: 0,
        expected,
        batches: 0,
        retries: 0,
    };

    loop {
        batch.clear();
        batch.extend(rows.by_ref().take(config.batch_size));
        if batch.is_empty() {
            break;
        }

        let mut attempt = 0;
        loop {
            match sink.write_batch(&batch) {
                Ok(()) => break,
                Err(e) if e.is_transient() && attempt < config.max_retries => {
                    attempt += 1;
                    report.retries += 1;
                    warn!(
                        batch = report.batches,
                        attempt,
                        error = %e,
                        "transient sink failure, retrying batch"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        report.inserted += batch.len();
        report.batches += 1;
        info!(
            batch = report.batches,
            inserted = report.inserted,
            "inserted {} rows",
            report.inserted
        );
    }

    info!(
        inserted = report.inserted,
        expected = report.expected,
        batches = report.batches,
        "load finished"
    );
    Ok(report)
}
