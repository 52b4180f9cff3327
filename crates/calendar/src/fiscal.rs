//! Fiscal calendar for a fiscal year beginning July 1.
//!
//! A fiscal year is labelled by the calendar year in which it ends, so July
//! 2024 through June 2025 is fiscal year 2025.

use chrono::{Datelike, NaiveDate};

/// Calendar month in which the fiscal year starts.
pub const FISCAL_YEAR_START_MONTH: u32 = 7;

/// Fiscal attributes of a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiscalPeriod {
    /// Fiscal year label.
    pub year: i32,
    /// Fiscal quarter (1 = Jul-Sep .. 4 = Apr-Jun).
    pub quarter: u8,
    /// Fiscal month (1 = July .. 12 = June).
    pub month: u8,
    /// Week number since July 1, capped at 53.
    pub week: u8,
}

/// Returns the fiscal year containing `date`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(fiscal_year(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()), 2025);
/// assert_eq!(fiscal_year(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()), 2025);
/// ```
pub fn fiscal_year(date: NaiveDate) -> i32 {
    if date.month() >= FISCAL_YEAR_START_MONTH {
        date.year() + 1
    } else {
        date.year()
    }
}

/// Returns the fiscal month, July = 1 .. June = 12.
pub fn fiscal_month(date: NaiveDate) -> u8 {
    let month = date.month();
    if month >= FISCAL_YEAR_START_MONTH {
        (month - 6) as u8
    } else {
        (month + 6) as u8
    }
}

/// Returns the fiscal quarter: Jul-Sep = 1, Oct-Dec = 2, Jan-Mar = 3, Apr-Jun = 4.
pub fn fiscal_quarter(date: NaiveDate) -> u8 {
    (fiscal_month(date) - 1) / 3 + 1
}

/// First day of the fiscal year containing `date`.
///
/// `None` only for the first half of the earliest representable year.
pub fn fiscal_year_start(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(fiscal_year(date) - 1, FISCAL_YEAR_START_MONTH, 1)
}

/// Days elapsed since July 1 of the fiscal year containing `date`.
fn days_since_fiscal_start(date: NaiveDate) -> i64 {
    let start = fiscal_year_start(date).unwrap_or(NaiveDate::MIN);
    (date - start).num_days()
}

/// Returns the fiscal week: whole weeks since July 1 plus one, capped at 53.
pub fn fiscal_week(date: NaiveDate) -> u8 {
    (days_since_fiscal_start(date) / 7 + 1).min(53) as u8
}

/// Computes all fiscal attributes of `date`.
pub fn fiscal_period(date: NaiveDate) -> FiscalPeriod {
    FiscalPeriod {
        year: fiscal_year(date),
        quarter: fiscal_quarter(date),
        month: fiscal_month(date),
        week: fiscal_week(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn year_rolls_over_in_july() {
        assert_eq!(fiscal_year(ymd(2024, 6, 30)), 2024);
        assert_eq!(fiscal_year(ymd(2024, 7, 1)), 2025);
        assert_eq!(fiscal_year(ymd(2024, 12, 31)), 2025);
        assert_eq!(fiscal_year(ymd(2025, 1, 1)), 2025);
    }

    #[test]
    fn month_july_is_one_june_is_twelve() {
        assert_eq!(fiscal_month(ymd(2024, 7, 15)), 1);
        assert_eq!(fiscal_month(ymd(2024, 12, 15)), 6);
        assert_eq!(fiscal_month(ymd(2025, 1, 15)), 7);
        assert_eq!(fiscal_month(ymd(2025, 6, 15)), 12);
    }

    #[test]
    fn quarters() {
        let expected = [3, 3, 3, 4, 4, 4, 1, 1, 1, 2, 2, 2];
        for (i, &q) in expected.iter().enumerate() {
            let date = ymd(2024, i as u32 + 1, 1);
            assert_eq!(fiscal_quarter(date), q, "month {}", i + 1);
        }
    }

    #[test]
    fn week_one_starts_july_first() {
        assert_eq!(fiscal_week(ymd(2024, 7, 1)), 1);
        assert_eq!(fiscal_week(ymd(2024, 7, 7)), 1);
        assert_eq!(fiscal_week(ymd(2024, 7, 8)), 2);
    }

    #[test]
    fn week_across_calendar_year_boundary() {
        // Dec 31 is day 183 since July 1; Jan 1 is day 184.
        assert_eq!(fiscal_week(ymd(2024, 12, 31)), 27);
        assert_eq!(fiscal_week(ymd(2025, 1, 1)), 27);
        assert_eq!(fiscal_week(ymd(2025, 1, 5)), 27);
        assert_eq!(fiscal_week(ymd(2025, 1, 6)), 28);
    }

    #[test]
    fn last_day_of_fiscal_year_is_week_53() {
        // FY2025 has 365 days: June 30 is day 364 -> week 53.
        assert_eq!(fiscal_week(ymd(2025, 6, 30)), 53);
        // FY2024 contains Feb 29 2024: June 30 is day 365 -> week 53.
        assert_eq!(fiscal_week(ymd(2024, 6, 30)), 53);
        assert_eq!(fiscal_week(ymd(2024, 6, 29)), 53);
    }

    #[test]
    fn fiscal_year_start_is_prior_july_first() {
        assert_eq!(fiscal_year_start(ymd(2025, 3, 15)), Some(ymd(2024, 7, 1)));
        assert_eq!(fiscal_year_start(ymd(2024, 7, 1)), Some(ymd(2024, 7, 1)));
        assert_eq!(fiscal_year_start(ymd(2024, 6, 30)), Some(ymd(2023, 7, 1)));
    }

    #[test]
    fn earliest_representable_dates_do_not_panic() {
        assert_eq!(fiscal_year_start(NaiveDate::MIN), None);
        assert_eq!(fiscal_week(NaiveDate::MIN), 1);
    }

    #[test]
    fn leap_year_july_first() {
        assert_eq!(fiscal_week(ymd(2024, 7, 1)), 1);
        assert_eq!(fiscal_week(ymd(2023, 7, 1)), 1);
    }

    #[test]
    fn week_matches_date_subtraction() {
        let mut date = ymd(2019, 1, 1);
        let end = ymd(2026, 12, 31);
        while date <= end {
            let start = ymd(fiscal_year(date) - 1, 7, 1);
            let days = (date - start).num_days();
            let expected = (days / 7 + 1).min(53) as u8;
            assert_eq!(fiscal_week(date), expected, "{date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn period_bundles_all_fields() {
        let p = fiscal_period(ymd(2024, 10, 15));
        assert_eq!(
            p,
            FiscalPeriod {
                year: 2025,
                quarter: 2,
                month: 4,
                week: 16,
            }
        );
    }
}
