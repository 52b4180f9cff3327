//! Error types for the dimdate-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the dimdate-calendar crate.
///
/// Per-date attribute computation never produces one of these. They surface
/// from range construction (inverted range, or a year a `YYYYMMDD` key cannot
/// encode) and from the standalone nth-weekday resolver when it is handed
/// raw, unvalidated inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date range starts after it ends.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day.
        end: NaiveDate,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a Monday-based weekday index is outside 0..=6.
    #[error("invalid weekday index: {index} (must be 0..=6, 0 = Monday)")]
    InvalidWeekdayIndex {
        /// The invalid index that was provided.
        index: u8,
    },

    /// Returned when an occurrence is neither positive nor -1 (last).
    #[error("invalid occurrence: {n} (must be >= 1, or -1 for last)")]
    InvalidOccurrence {
        /// The invalid occurrence that was provided.
        n: i8,
    },

    /// Returned when a date cannot be represented, or lies outside the
    /// years 0..=9999 that a `YYYYMMDD` key encodes.
    #[error("date out of range: {year:04}-{month:02}-{day:02}")]
    DateOutOfRange {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },
}
