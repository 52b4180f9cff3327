//! Weekday encodings and the nth-weekday-of-month resolver.
//!
//! Two numeric weekday conventions coexist and are deliberately kept apart:
//!
//! - [`MondayIndex`]: 0 = Monday .. 6 = Sunday, the input convention of
//!   [`nth_weekday`] and the holiday rule tables.
//! - [`DayOfWeek`]: 1 = Sunday .. 7 = Saturday, the `day_of_week` column of
//!   the dimension table.
//!
//! Neither converts into the other directly; both are derived from
//! [`chrono::Weekday`].

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;

/// Monday-based weekday index (0 = Monday .. 6 = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MondayIndex(u8);

impl MondayIndex {
    pub const MONDAY: Self = Self(0);
    pub const TUESDAY: Self = Self(1);
    pub const WEDNESDAY: Self = Self(2);
    pub const THURSDAY: Self = Self(3);
    pub const FRIDAY: Self = Self(4);
    pub const SATURDAY: Self = Self(5);
    pub const SUNDAY: Self = Self(6);

    /// Creates a new `MondayIndex`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekdayIndex`] if `index` is not in 0..=6.
    pub fn new(index: u8) -> Result<Self, CalendarError> {
        if index > 6 {
            return Err(CalendarError::InvalidWeekdayIndex { index });
        }
        Ok(Self(index))
    }

    /// Returns the inner index (0..=6).
    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<Weekday> for MondayIndex {
    fn from(w: Weekday) -> Self {
        Self(w.num_days_from_monday() as u8)
    }
}

/// Sunday-based day-of-week number (1 = Sunday .. 7 = Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    /// Returns the inner number (1..=7).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        self.0 == 1 || self.0 == 7
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(w: Weekday) -> Self {
        Self(w.number_from_sunday() as u8)
    }
}

/// Which occurrence of a weekday within a month to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurrence {
    /// The n-th occurrence, 1-based.
    Nth(u8),
    /// The last occurrence in the month.
    Last,
}

impl Occurrence {
    /// Interprets the numeric occurrence convention: `n >= 1` is the n-th
    /// occurrence and `-1` is the last one.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidOccurrence`] for `0` and for anything
    /// below `-1`.
    pub fn from_n(n: i8) -> Result<Self, CalendarError> {
        match n {
            -1 => Ok(Self::Last),
            1.. => Ok(Self::Nth(n as u8)),
            _ => Err(CalendarError::InvalidOccurrence { n }),
        }
    }
}

/// Returns the last calendar day of `month` in `year`.
///
/// Returns `None` only when the date library cannot represent the month.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 12 {
        return NaiveDate::from_ymd_opt(year, 12, 31);
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()
}

/// Resolves a weekday occurrence in an already-validated month.
///
/// `None` means the occurrence does not exist in that month, e.g. a fifth
/// Monday in a month with only four.
pub(crate) fn resolve(
    year: i32,
    month: u32,
    weekday: MondayIndex,
    occurrence: Occurrence,
) -> Option<NaiveDate> {
    let target = u32::from(weekday.get());
    match occurrence {
        Occurrence::Nth(n) => {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            let offset = (7 + target - first.weekday().num_days_from_monday()) % 7;
            let day = 1 + offset + 7 * (u32::from(n) - 1);
            // from_ymd_opt rejects days past the end of the month.
            NaiveDate::from_ymd_opt(year, month, day)
        }
        Occurrence::Last => {
            let last = last_day_of_month(year, month)?;
            let back = (7 + last.weekday().num_days_from_monday() - target) % 7;
            NaiveDate::from_ymd_opt(year, month, last.day() - back)
        }
    }
}

/// Finds the `n`-th occurrence of `weekday` in `month` of `year`.
///
/// `n >= 1` counts forward from the 1st of the month; `n == -1` selects the
/// last occurrence. Returns `Ok(None)` when the requested occurrence falls
/// outside the month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
/// [`CalendarError::InvalidOccurrence`] if `n` is `0` or below `-1`, and
/// [`CalendarError::DateOutOfRange`] if the year cannot be represented.
///
/// # Examples
///
/// ```ignore
/// // Third Monday of January 2025 (Martin Luther King Jr. Day).
/// let mlk = nth_weekday(2025, 1, MondayIndex::MONDAY, 3)?;
/// assert_eq!(mlk, NaiveDate::from_ymd_opt(2025, 1, 20));
/// ```
pub fn nth_weekday(
    year: i32,
    month: u32,
    weekday: MondayIndex,
    n: i8,
) -> Result<Option<NaiveDate>, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let occurrence = Occurrence::from_n(n)?;
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(CalendarError::DateOutOfRange {
            year,
            month,
            day: 1,
        });
    }
    Ok(resolve(year, month, weekday, occurrence))
}
