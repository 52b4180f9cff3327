//! Period-boundary flags.

use chrono::{Datelike, NaiveDate};

/// Whether a date closes its month, calendar quarter, or calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PeriodBoundary {
    pub last_day_of_month: bool,
    pub last_day_of_quarter: bool,
    pub last_day_of_year: bool,
}

/// Returns `true` if the following day falls in a different month.
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    // The latest representable date is a December 31.
    date.succ_opt()
        .is_none_or(|next| next.month() != date.month())
}

/// Computes the period-boundary flags for `date`.
pub fn period_boundary(date: NaiveDate) -> PeriodBoundary {
    let last_day_of_month = is_last_day_of_month(date);
    PeriodBoundary {
        last_day_of_month,
        last_day_of_quarter: last_day_of_month && date.month() % 3 == 0,
        last_day_of_year: date.month() == 12 && date.day() == 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn february_leap_and_common() {
        assert!(!is_last_day_of_month(ymd(2024, 2, 28)));
        assert!(is_last_day_of_month(ymd(2024, 2, 29)));
        assert!(is_last_day_of_month(ymd(2023, 2, 28)));
        assert!(is_last_day_of_month(ymd(2100, 2, 28)));
    }

    #[test]
    fn quarter_ends() {
        for (m, d) in [(3, 31), (6, 30), (9, 30), (12, 31)] {
            let b = period_boundary(ymd(2024, m, d));
            assert!(b.last_day_of_month && b.last_day_of_quarter, "{m}-{d}");
        }
        let b = period_boundary(ymd(2024, 4, 30));
        assert!(b.last_day_of_month);
        assert!(!b.last_day_of_quarter);
        assert!(!period_boundary(ymd(2024, 3, 30)).last_day_of_quarter);
    }

    #[test]
    fn year_end() {
        let b = period_boundary(ymd(2024, 12, 31));
        assert_eq!(
            b,
            PeriodBoundary {
                last_day_of_month: true,
                last_day_of_quarter: true,
                last_day_of_year: true,
            }
        );
        assert_eq!(period_boundary(ymd(2024, 12, 30)), PeriodBoundary::default());
    }

    #[test]
    fn max_date_is_total() {
        let b = period_boundary(NaiveDate::MAX);
        assert!(b.last_day_of_month);
        assert!(b.last_day_of_year);
    }
}
