//! Week-of-year numbering.

use chrono::{Datelike, NaiveDate};

/// US week of year: week 1 starts on the year's first Sunday, and any days
/// before that Sunday also count as week 1. Capped at 53.
pub fn us_week_of_year(date: NaiveDate) -> u8 {
    let ordinal0 = date.ordinal0();
    // Weekday of January 1, Monday-based.
    let jan1 = (date.weekday().num_days_from_monday() + 7 - ordinal0 % 7) % 7;
    let first_sunday0 = (6 + 7 - jan1) % 7;
    if ordinal0 < first_sunday0 {
        return 1;
    }
    ((ordinal0 - first_sunday0) / 7 + 1).min(53) as u8
}

/// ISO-8601 week number (1..=53), delegated to the date library.
pub fn iso_week(date: NaiveDate) -> u8 {
    date.iso_week().week() as u8
}
