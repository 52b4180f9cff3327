//! The date dimension row and its per-date attribute computation.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::CalendarError;
use crate::fiscal::fiscal_period;
use crate::holiday::holidays_for;
use crate::period::period_boundary;
use crate::week::{iso_week, us_week_of_year};
use crate::weekday::DayOfWeek;

/// Earliest year whose dates fit the `YYYYMMDD` key.
pub const MIN_KEY_YEAR: i32 = 0;

/// Latest year whose dates fit the `YYYYMMDD` key.
pub const MAX_KEY_YEAR: i32 = 9999;

/// One row of the date dimension.
///
/// Fields appear in table column order. Every field is a pure function of
/// `date_value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DateRow {
    pub date_key: u32,
    pub date_value: NaiveDate,
    pub year: i32,
    pub quarter: u8,
    pub month: u8,
    pub month_name: &'static str,
    pub month_name_short: &'static str,
    pub day_of_month: u8,
    pub day_of_year: u16,
    pub week_of_year: u8,
    pub iso_week: u8,
    /// 1 = Sunday .. 7 = Saturday.
    pub day_of_week: u8,
    pub day_name: &'static str,
    pub day_name_short: &'static str,
    pub is_weekend: bool,
    pub is_weekday: bool,
    pub fiscal_year: i32,
    pub fiscal_quarter: u8,
    pub fiscal_month: u8,
    pub fiscal_week: u8,
    pub is_federal_holiday: bool,
    pub is_idaho_state_holiday: bool,
    /// Federal name if any, else the Idaho name.
    pub holiday_name: Option<&'static str>,
    pub is_last_day_of_month: bool,
    pub is_last_day_of_quarter: bool,
    pub is_last_day_of_year: bool,
}

impl DateRow {
    /// Persisted column names, in table order.
    pub const COLUMNS: [&'static str; 26] = [
        "date_key",
        "date_value",
        "year",
        "quarter",
        "month",
        "month_name",
        "month_name_short",
        "day_of_month",
        "day_of_year",
        "week_of_year",
        "iso_week",
        "day_of_week",
        "day_name",
        "day_name_short",
        "is_weekend",
        "is_weekday",
        "fiscal_year",
        "fiscal_quarter",
        "fiscal_month",
        "fiscal_week",
        "is_federal_holiday",
        "is_idaho_state_holiday",
        "holiday_name",
        "is_last_day_of_month",
        "is_last_day_of_quarter",
        "is_last_day_of_year",
    ];
}

/// Checks that `date` lies in years [`MIN_KEY_YEAR`]..=[`MAX_KEY_YEAR`].
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] carrying the offending date.
pub fn check_key_year(date: NaiveDate) -> Result<(), CalendarError> {
    if (MIN_KEY_YEAR..=MAX_KEY_YEAR).contains(&date.year()) {
        return Ok(());
    }
    Err(CalendarError::DateOutOfRange {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })
}

/// Encodes `date` as the integer `YYYYMMDD`.
///
/// Defined for years [`MIN_KEY_YEAR`]..=[`MAX_KEY_YEAR`]; see [`check_key_year`].
pub fn date_key(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Full English month name.
pub fn month_name(date: NaiveDate) -> &'static str {
    Month::try_from(date.month() as u8)
        .expect("NaiveDate month is always 1..=12")
        .name()
}

/// Three-letter English month abbreviation.
pub fn month_name_short(date: NaiveDate) -> &'static str {
    &month_name(date)[..3]
}

/// Full English day name.
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Three-letter English day abbreviation.
pub fn day_name_short(date: NaiveDate) -> &'static str {
    &day_name(date)[..3]
}

/// Computes every dimension attribute for `date`.
///
/// Pure: calling it twice with the same date yields identical rows. Every
/// attribute is well defined for dates that pass [`check_key_year`], which
/// [`DateRange::new`](crate::DateRange::new) enforces.
pub fn attributes_for(date: NaiveDate) -> DateRow {
    let day_of_week = DayOfWeek::from(date.weekday());
    let is_weekend = day_of_week.is_weekend();
    let fiscal = fiscal_period(date);
    let holidays = holidays_for(date);
    let boundary = period_boundary(date);

    DateRow {
        date_key: date_key(date),
        date_value: date,
        year: date.year(),
        quarter: (date.month0() / 3 + 1) as u8,
        month: date.month() as u8,
        month_name: month_name(date),
        month_name_short: month_name_short(date),
        day_of_month: date.day() as u8,
        day_of_year: date.ordinal() as u16,
        week_of_year: us_week_of_year(date),
        iso_week: iso_week(date),
        day_of_week: day_of_week.get(),
        day_name: day_name(date),
        day_name_short: day_name_short(date),
        is_weekend,
        is_weekday: !is_weekend,
        fiscal_year: fiscal.year,
        fiscal_quarter: fiscal.quarter,
        fiscal_month: fiscal.month,
        fiscal_week: fiscal.week,
        is_federal_holiday: holidays.is_federal(),
        is_idaho_state_holiday: holidays.is_idaho(),
        holiday_name: holidays.name(),
        is_last_day_of_month: boundary.last_day_of_month,
        is_last_day_of_quarter: boundary.last_day_of_quarter,
        is_last_day_of_year: boundary.last_day_of_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_key_encoding() {
        assert_eq!(date_key(ymd(2024, 1, 1)), 20240101);
        assert_eq!(date_key(ymd(2040, 12, 31)), 20401231);
        assert_eq!(date_key(ymd(2000, 2, 29)), 20000229);
    }

    #[test]
    fn key_year_bounds() {
        assert!(check_key_year(ymd(0, 1, 1)).is_ok());
        assert!(check_key_year(ymd(9999, 12, 31)).is_ok());
        assert_eq!(date_key(ymd(9999, 12, 31)), 99_991_231);
        assert_eq!(
            check_key_year(ymd(-1, 6, 15)).unwrap_err(),
            CalendarError::DateOutOfRange {
                year: -1,
                month: 6,
                day: 15,
            }
        );
        assert!(check_key_year(ymd(10_000, 1, 1)).is_err());
    }

    #[test]
    fn names_match_chrono_formatting() {
        let mut date = ymd(2024, 1, 1);
        for _ in 0..366 {
            assert_eq!(month_name(date), date.format("%B").to_string());
            assert_eq!(month_name_short(date), date.format("%b").to_string());
            assert_eq!(day_name(date), date.format("%A").to_string());
            assert_eq!(day_name_short(date), date.format("%a").to_string());
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn full_row_for_mlk_day_2025() {
        let row = attributes_for(ymd(2025, 1, 20));
        let expected = DateRow {
            date_key: 20250120,
            date_value: ymd(2025, 1, 20),
            year: 2025,
            quarter: 1,
            month: 1,
            month_name: "January",
            month_name_short: "Jan",
            day_of_month: 20,
            day_of_year: 20,
            week_of_year: 3,
            iso_week: 4,
            day_of_week: 2,
            day_name: "Monday",
            day_name_short: "Mon",
            is_weekend: false,
            is_weekday: true,
            fiscal_year: 2025,
            fiscal_quarter: 3,
            fiscal_month: 7,
            fiscal_week: 30,
            is_federal_holiday: true,
            is_idaho_state_holiday: true,
            holiday_name: Some("Martin Luther King Jr. Day"),
            is_last_day_of_month: false,
            is_last_day_of_quarter: false,
            is_last_day_of_year: false,
        };
        assert_eq!(row, expected);
    }

    #[test]
    fn weekend_row() {
        let row = attributes_for(ymd(2023, 3, 4));
        assert_eq!(row.day_of_week, 7);
        assert_eq!(row.day_name, "Saturday");
        assert!(row.is_weekend);
        assert!(!row.is_weekday);
        assert!(!row.is_idaho_state_holiday);
        assert_eq!(row.holiday_name, None);
    }

    #[test]
    fn idaho_only_row_uses_idaho_name() {
        let row = attributes_for(ymd(2023, 3, 3));
        assert!(!row.is_federal_holiday);
        assert!(row.is_idaho_state_holiday);
        assert_eq!(row.holiday_name, Some("Idaho Day"));
    }

    #[test]
    fn year_end_row() {
        let row = attributes_for(ymd(2024, 12, 31));
        assert_eq!(row.quarter, 4);
        assert_eq!(row.day_of_year, 366);
        assert_eq!(row.fiscal_year, 2025);
        assert_eq!(row.fiscal_quarter, 2);
        assert_eq!(row.fiscal_month, 6);
        assert!(row.is_last_day_of_month);
        assert!(row.is_last_day_of_quarter);
        assert!(row.is_last_day_of_year);
    }

    #[test]
    fn idempotent() {
        let date = ymd(2031, 11, 27);
        assert_eq!(attributes_for(date), attributes_for(date));
    }

    #[test]
    fn columns_are_unique() {
        let mut names = DateRow::COLUMNS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 26);
    }
}
