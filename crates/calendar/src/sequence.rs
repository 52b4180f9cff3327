//! Lazy generation of dimension rows over an inclusive date range.

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;

use crate::error::CalendarError;
use crate::row::{DateRow, attributes_for, check_key_year};

/// Validated inclusive date range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRange`] if `start` is after `end`, or
    /// [`CalendarError::DateOutOfRange`] if either end lies outside the
    /// years a `YYYYMMDD` key can encode.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        check_key_year(start)?;
        check_key_year(end)?;
        Ok(Self { start, end })
    }

    /// The standard dimension range, 2000-01-01 through 2040-12-31.
    pub fn dimension_default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2000, 1, 1).expect("2000-01-01 is valid"),
            end: NaiveDate::from_ymd_opt(2040, 12, 31).expect("2040-12-31 is valid"),
        }
    }

    /// First day of the range.
    pub fn start(self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    pub fn end(self) -> NaiveDate {
        self.end
    }

    /// Inclusive day count. Never zero.
    pub fn len(self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Always `false`; a valid range holds at least one day.
    pub fn is_empty(self) -> bool {
        false
    }

    /// Returns a lazy iterator of rows in increasing date order.
    ///
    /// Each call starts a fresh sequence from the first day.
    pub fn rows(self) -> DateRows {
        DateRows {
            front: self.start,
            back: self.end,
            remaining: self.len(),
        }
    }

    /// Splits the range into consecutive sub-ranges at calendar-year boundaries.
    pub fn years(self) -> Vec<DateRange> {
        let mut chunks = Vec::new();
        let mut start = self.start;
        loop {
            let year_end = NaiveDate::from_ymd_opt(start.year(), 12, 31)
                .map_or(self.end, |d| d.min(self.end));
            chunks.push(DateRange {
                start,
                end: year_end,
            });
            match year_end.succ_opt() {
                Some(next) if year_end < self.end => start = next,
                _ => break,
            }
        }
        chunks
    }

    /// Materializes all rows, computing calendar years in parallel.
    ///
    /// The result is identical to `self.rows().collect::<Vec<_>>()`.
    pub fn par_rows(self) -> Vec<DateRow> {
        self.years()
            .into_par_iter()
            .flat_map_iter(DateRange::rows)
            .collect()
    }
}

/// Iterator over the rows of a [`DateRange`], produced one date at a time.
#[derive(Debug, Clone)]
pub struct DateRows {
    front: NaiveDate,
    back: NaiveDate,
    remaining: usize,
}

impl Iterator for DateRows {
    type Item = DateRow;

    fn next(&mut self) -> Option<DateRow> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            if let Some(next) = date.succ_opt() {
                self.front = next;
            }
        }
        Some(attributes_for(date))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for DateRows {
    fn next_back(&mut self) -> Option<DateRow> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            if let Some(prev) = date.pred_opt() {
                self.back = prev;
            }
        }
        Some(attributes_for(date))
    }
}

impl ExactSizeIterator for DateRows {}

impl FusedIterator for DateRows {}

/// Generates one row per day in `[start, end]`, lazily and in date order.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRange`] if `start` is after `end`, or
/// [`CalendarError::DateOutOfRange`] for a year outside 0..=9999; nothing is
/// generated in either case.
///
/// # Example
///
/// ```ignore
/// let rows: Vec<_> = generate(jan1, jan3)?.collect();
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[0].date_key, 20240101);
/// ```
pub fn generate(start: NaiveDate, end: NaiveDate) -> Result<DateRows, CalendarError> {
    Ok(DateRange::new(start, end)?.rows())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day() {
        let rows: Vec<_> = generate(ymd(2024, 2, 29), ymd(2024, 2, 29))
            .unwrap()
            .collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date_key, 20240229);
    }

    #[test]
    fn invalid_range() {
        let err = generate(ymd(2024, 1, 2), ymd(2024, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidRange {
                start: ymd(2024, 1, 2),
                end: ymd(2024, 1, 1),
            }
        );
    }

    #[test]
    fn exact_size() {
        let mut rows = generate(ymd(2024, 1, 1), ymd(2024, 12, 31)).unwrap();
        assert_eq!(rows.len(), 366);
        rows.next();
        assert_eq!(rows.len(), 365);
    }

    #[test]
    fn reversed_matches_forward() {
        let range = DateRange::new(ymd(2023, 12, 25), ymd(2024, 1, 5)).unwrap();
        let forward: Vec<_> = range.rows().collect();
        let mut backward: Vec<_> = range.rows().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn meet_in_the_middle() {
        let mut rows = generate(ymd(2024, 1, 1), ymd(2024, 1, 3)).unwrap();
        assert_eq!(rows.next().unwrap().day_of_month, 1);
        assert_eq!(rows.next_back().unwrap().day_of_month, 3);
        assert_eq!(rows.next().unwrap().day_of_month, 2);
        assert!(rows.next().is_none());
        assert!(rows.next_back().is_none());
    }

    #[test]
    fn fused_after_end() {
        let mut rows = generate(ymd(2024, 1, 1), ymd(2024, 1, 1)).unwrap();
        assert!(rows.next().is_some());
        assert!(rows.next().is_none());
        assert!(rows.next().is_none());
    }

    #[test]
    fn ends_at_last_key_year() {
        let rows: Vec<_> = generate(ymd(9999, 12, 30), ymd(9999, 12, 31))
            .unwrap()
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].date_key, 99_991_231);
        assert!(rows[1].is_last_day_of_year);
    }

    #[test]
    fn starts_at_year_zero() {
        let rows: Vec<_> = generate(ymd(0, 1, 1), ymd(0, 1, 2)).unwrap().collect();
        assert_eq!(rows[0].date_key, 101);
        assert_eq!(rows[1].date_key, 102);
    }

    #[test]
    fn negative_year_rejected() {
        let err = generate(ymd(-1, 12, 30), ymd(0, 1, 2)).unwrap_err();
        assert_eq!(
            err,
            CalendarError::DateOutOfRange {
                year: -1,
                month: 12,
                day: 30,
            }
        );
    }

    #[test]
    fn five_digit_year_rejected() {
        let err = DateRange::new(ymd(9999, 12, 31), ymd(10_000, 1, 1)).unwrap_err();
        assert!(matches!(err, CalendarError::DateOutOfRange { year: 10_000, .. }));
    }

    #[test]
    fn years_split_at_boundaries() {
        let range = DateRange::new(ymd(2023, 11, 1), ymd(2025, 2, 1)).unwrap();
        let years = range.years();
        assert_eq!(years.len(), 3);
        assert_eq!(years[0].start(), ymd(2023, 11, 1));
        assert_eq!(years[0].end(), ymd(2023, 12, 31));
        assert_eq!(years[1].start(), ymd(2024, 1, 1));
        assert_eq!(years[1].end(), ymd(2024, 12, 31));
        assert_eq!(years[2].start(), ymd(2025, 1, 1));
        assert_eq!(years[2].end(), ymd(2025, 2, 1));
        let total: usize = years.iter().map(|r| r.len()).sum();
        assert_eq!(total, range.len());
    }

    #[test]
    fn years_single_partial_year() {
        let range = DateRange::new(ymd(2024, 3, 1), ymd(2024, 3, 31)).unwrap();
        assert_eq!(range.years(), vec![range]);
    }

    #[test]
    fn par_rows_matches_sequential() {
        let range = DateRange::new(ymd(2019, 6, 15), ymd(2022, 8, 1)).unwrap();
        let sequential: Vec<_> = range.rows().collect();
        assert_eq!(range.par_rows(), sequential);
    }
}
