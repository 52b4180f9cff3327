//! Reading a written `dim_date` Parquet file back for verification.

use std::fs::File;
use std::path::Path;

use arrow::array::{AsArray, RecordBatch};
use arrow::datatypes::Int32Type;
use dimdate_calendar::DateRow;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;
use crate::parquet_write::build_schema;

const DATE_KEY: usize = 0;
const IS_FEDERAL_HOLIDAY: usize = 20;
const IS_IDAHO_STATE_HOLIDAY: usize = 21;

/// Aggregate view of a `dim_date` table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableSummary {
    /// Total rows in the file.
    pub rows: usize,
    /// Number of row groups.
    pub row_groups: usize,
    /// Smallest `date_key`, if any rows exist.
    pub first_key: Option<i32>,
    /// Largest `date_key`, if any rows exist.
    pub last_key: Option<i32>,
    /// Rows flagged as federal holidays.
    pub federal_holidays: usize,
    /// Rows flagged as Idaho state holidays.
    pub idaho_holidays: usize,
}

/// Checks that a batch carries exactly the dimension columns, in order and
/// with the expected Arrow types.
///
/// # Errors
///
/// Returns [`IoError::Validation`] listing every mismatching column.
pub(crate) fn validate_schema(batch: &RecordBatch) -> Result<(), IoError> {
    let schema = batch.schema();
    let num_cols = schema.fields().len();
    if num_cols != DateRow::COLUMNS.len() {
        return Err(IoError::Validation {
            count: 1,
            details: format!(
                "expected {} columns, got {num_cols}",
                DateRow::COLUMNS.len()
            ),
        });
    }

    let expected = build_schema();
    let mismatches: Vec<String> = expected
        .fields()
        .iter()
        .zip(schema.fields().iter())
        .enumerate()
        .filter_map(|(i, (want, got))| {
            if want.name() != got.name() {
                Some(format!(
                    "column {i}: expected '{}', got '{}'",
                    want.name(),
                    got.name()
                ))
            } else if want.data_type() != got.data_type() {
                Some(format!(
                    "column {i} '{}': expected {}, got {}",
                    want.name(),
                    want.data_type(),
                    got.data_type()
                ))
            } else {
                None
            }
        })
        .collect();

    if !mismatches.is_empty() {
        return Err(IoError::Validation {
            count: mismatches.len(),
            details: mismatches.join("; "),
        });
    }
    Ok(())
}

/// Reads a `dim_date` Parquet file and summarises its contents.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist,
/// [`IoError::Validation`] if the columns do not match the dimension table,
/// or [`IoError::Parquet`] if the file cannot be read.
pub fn read_summary(path: &Path) -> Result<TableSummary, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let row_groups = builder.metadata().num_row_groups();
    let reader = builder.build()?;

    let mut summary = TableSummary {
        row_groups,
        ..TableSummary::default()
    };

    for batch in reader {
        let batch = batch?;
        validate_schema(&batch)?;

        let keys = batch.column(DATE_KEY).as_primitive::<Int32Type>();
        for &key in keys.values().iter() {
            summary.first_key = Some(summary.first_key.map_or(key, |k| k.min(key)));
            summary.last_key = Some(summary.last_key.map_or(key, |k| k.max(key)));
        }

        summary.federal_holidays += batch
            .column(IS_FEDERAL_HOLIDAY)
            .as_boolean()
            .true_count();
        summary.idaho_holidays += batch
            .column(IS_IDAHO_STATE_HOLIDAY)
            .as_boolean()
            .true_count();
        summary.rows += batch.num_rows();
    }

    Ok(summary)
}
