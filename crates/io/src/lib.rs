//! # dimdate-io
//!
//! Persist date dimension rows. A [`RowSink`] accepts rows one batch at a
//! time; [`load_rows`] drives a lazy row sequence into any sink with
//! batching, transient-failure retry, and an inserted-vs-expected report.
//! [`ParquetSink`] writes the `dim_date` table as a Parquet file with one
//! row group per batch.

mod error;
mod loader;
mod parquet_read;
mod parquet_write;
mod sink;
mod writer;

pub use error::IoError;
pub use loader::{LoadReport, LoaderConfig, load_rows};
pub use parquet_read::{TableSummary, read_summary};
pub use sink::{MemorySink, RowSink};
pub use writer::{Compression, ParquetSink, WriterConfig, write_parquet};
