//! Row sink abstraction.

use dimdate_calendar::DateRow;

use crate::error::IoError;

/// Destination for batches of dimension rows.
///
/// Each successful [`write_batch`](RowSink::write_batch) call is a unit of
/// persistence: once it returns `Ok`, the whole batch is accepted, and a
/// failing call must leave no part of the batch behind so it can be retried.
pub trait RowSink {
    /// Persists one batch of rows.
    ///
    /// # Errors
    ///
    /// Returns an [`IoError`]; [`IoError::is_transient`] tells the loader
    /// whether the same batch may be retried.
    fn write_batch(&mut self, rows: &[DateRow]) -> Result<(), IoError>;

    /// Completes the load and releases the destination.
    ///
    /// # Errors
    ///
    /// Returns an [`IoError`] if finalisation fails.
    fn finish(self) -> Result<(), IoError>
    where
        Self: Sized;
}

/// Sink that keeps every row in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    rows: Vec<DateRow>,
    batches: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows accepted so far, in write order.
    pub fn rows(&self) -> &[DateRow] {
        &self.rows
    }

    /// Number of batches accepted so far.
    pub fn batches(&self) -> usize {
        self.batches
    }

    /// Consumes the sink and returns its rows.
    pub fn into_rows(self) -> Vec<DateRow> {
        self.rows
    }
}

impl RowSink for MemorySink {
    fn write_batch(&mut self, rows: &[DateRow]) -> Result<(), IoError> {
        self.rows.extend_from_slice(rows);
        self.batches += 1;
        Ok(())
    }

    fn finish(self) -> Result<(), IoError> {
        Ok(())
    }
}
