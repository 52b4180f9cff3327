//! Low-level Parquet column building.

use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanArray, Date32Array, Int32Array, RecordBatch, StringArray, UInt8Array,
    UInt16Array,
};
use arrow::datatypes::{DataType, Date32Type, Field, Schema};
use dimdate_calendar::DateRow;

use crate::error::IoError;

/// Builds the Arrow schema of the `dim_date` table.
///
/// Column order follows [`DateRow::COLUMNS`]. Only `holiday_name` is nullable.
pub(crate) fn build_schema() -> Schema {
    use DataType::{Boolean, Date32, Int32, UInt8, UInt16, Utf8};

    let types = [
        Int32,   // date_key
        Date32,  // date_value
        Int32,   // year
        UInt8,   // quarter
        UInt8,   // month
        Utf8,    // month_name
        Utf8,    // month_name_short
        UInt8,   // day_of_month
        UInt16,  // day_of_year
        UInt8,   // week_of_year
        UInt8,   // iso_week
        UInt8,   // day_of_week
        Utf8,    // day_name
        Utf8,    // day_name_short
        Boolean, // is_weekend
        Boolean, // is_weekday
        Int32,   // fiscal_year
        UInt8,   // fiscal_quarter
        UInt8,   // fiscal_month
        UInt8,   // fiscal_week
        Boolean, // is_federal_holiday
        Boolean, // is_idaho_state_holiday
        Utf8,    // holiday_name
        Boolean, // is_last_day_of_month
        Boolean, // is_last_day_of_quarter
        Boolean, // is_last_day_of_year
    ];

    let fields: Vec<Field> = DateRow::COLUMNS
        .iter()
        .zip(types)
        .map(|(&name, dt)| Field::new(name, dt, name == "holiday_name"))
        .collect();

    Schema::new(fields)
}

fn u8_col(rows: &[DateRow], f: impl Fn(&DateRow) -> u8) -> ArrayRef {
    Arc::new(UInt8Array::from_iter_values(rows.iter().map(f)))
}

fn i32_col(rows: &[DateRow], f: impl Fn(&DateRow) -> i32) -> ArrayRef {
    Arc::new(Int32Array::from_iter_values(rows.iter().map(f)))
}

fn str_col(rows: &[DateRow], f: impl Fn(&DateRow) -> &'static str) -> ArrayRef {
    Arc::new(StringArray::from_iter_values(rows.iter().map(f)))
}

fn bool_col(rows: &[DateRow], f: impl Fn(&DateRow) -> bool) -> ArrayRef {
    Arc::new(BooleanArray::from(rows.iter().map(f).collect::<Vec<_>>()))
}

/// Converts a slice of rows into an Arrow [`RecordBatch`].
///
/// The batch schema must match the one returned by [`build_schema`];
/// otherwise the call will fail.
pub(crate) fn rows_to_record_batch(
    rows: &[DateRow],
    schema: &Arc<Schema>,
) -> Result<RecordBatch, IoError> {
    let columns: Vec<ArrayRef> = vec![
        i32_col(rows, |r| r.date_key as i32),
        Arc::new(Date32Array::from_iter_values(
            rows.iter().map(|r| Date32Type::from_naive_date(r.date_value)),
        )),
        i32_col(rows, |r| r.year),
        u8_col(rows, |r| r.quarter),
        u8_col(rows, |r| r.month),
        str_col(rows, |r| r.month_name),
        str_col(rows, |r| r.month_name_short),
        u8_col(rows, |r| r.day_of_month),
        Arc::new(UInt16Array::from_iter_values(
            rows.iter().map(|r| r.day_of_year),
        )),
        u8_col(rows, |r| r.week_of_year),
        u8_col(rows, |r| r.iso_week),
        u8_col(rows, |r| r.day_of_week),
        str_col(rows, |r| r.day_name),
        str_col(rows, |r| r.day_name_short),
        bool_col(rows, |r| r.is_weekend),
        bool_col(rows, |r| r.is_weekday),
        i32_col(rows, |r| r.fiscal_year),
        u8_col(rows, |r| r.fiscal_quarter),
        u8_col(rows, |r| r.fiscal_month),
        u8_col(rows, |r| r.fiscal_week),
        bool_col(rows, |r| r.is_federal_holiday),
        bool_col(rows, |r| r.is_idaho_state_holiday),
        Arc::new(StringArray::from(
            rows.iter().map(|r| r.holiday_name).collect::<Vec<_>>(),
        )),
        bool_col(rows, |r| r.is_last_day_of_month),
        bool_col(rows, |r| r.is_last_day_of_quarter),
        bool_col(rows, |r| r.is_last_day_of_year),
    ];

    Ok(RecordBatch::try_new(Arc::clone(schema), columns)?)
}
