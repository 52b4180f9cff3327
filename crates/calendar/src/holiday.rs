//! Federal and Idaho state holiday classification.
//!
//! Each jurisdiction is a table of rules evaluated independently against a
//! date. Federal rules flag the literal date only. Idaho Day is the one rule
//! with a weekend observance shift.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::weekday::{MondayIndex, Occurrence, resolve};

/// First year in which June 19 is a federal holiday.
pub const JUNETEENTH_FIRST_YEAR: i32 = 2021;

/// US federal holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FederalHoliday {
    NewYearsDay,
    MartinLutherKingJrDay,
    PresidentsDay,
    MemorialDay,
    Juneteenth,
    IndependenceDay,
    LaborDay,
    ColumbusDay,
    VeteransDay,
    Thanksgiving,
    Christmas,
}

impl FederalHoliday {
    /// Display name as stored in the `holiday_name` column.
    pub fn name(self) -> &'static str {
        match self {
            Self::NewYearsDay => "New Year's Day",
            Self::MartinLutherKingJrDay => "Martin Luther King Jr. Day",
            Self::PresidentsDay => "Presidents' Day",
            Self::MemorialDay => "Memorial Day",
            Self::Juneteenth => "Juneteenth",
            Self::IndependenceDay => "Independence Day",
            Self::LaborDay => "Labor Day",
            Self::ColumbusDay => "Columbus Day",
            Self::VeteransDay => "Veterans Day",
            Self::Thanksgiving => "Thanksgiving",
            Self::Christmas => "Christmas",
        }
    }
}

/// Idaho state holidays that are not already federal holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdahoHoliday {
    HumanRightsDay,
    IdahoDay,
}

impl IdahoHoliday {
    /// Display name as stored in the `holiday_name` column.
    pub fn name(self) -> &'static str {
        match self {
            Self::HumanRightsDay => "Idaho Human Rights Day",
            Self::IdahoDay => "Idaho Day",
        }
    }
}

/// How a holiday's date is determined for a given year.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Same month and day every year.
    Fixed { month: u32, day: u32 },
    /// Same month and day, recognised from `first_year` onward.
    FixedSince { month: u32, day: u32, first_year: i32 },
    /// An occurrence of a weekday within a month.
    Floating {
        month: u32,
        weekday: MondayIndex,
        occurrence: Occurrence,
    },
}

impl Rule {
    fn matches(self, date: NaiveDate) -> bool {
        match self {
            Rule::Fixed { month, day } => date.month() == month && date.day() == day,
            Rule::FixedSince {
                month,
                day,
                first_year,
            } => date.year() >= first_year && date.month() == month && date.day() == day,
            Rule::Floating {
                month,
                weekday,
                occurrence,
            } => {
                date.month() == month
                    && resolve(date.year(), month, weekday, occurrence) == Some(date)
            }
        }
    }
}

const FEDERAL_RULES: [(FederalHoliday, Rule); 11] = [
    (FederalHoliday::NewYearsDay, Rule::Fixed { month: 1, day: 1 }),
    (FederalHoliday::IndependenceDay, Rule::Fixed { month: 7, day: 4 }),
    (FederalHoliday::VeteransDay, Rule::Fixed { month: 11, day: 11 }),
    (FederalHoliday::Christmas, Rule::Fixed { month: 12, day: 25 }),
    (
        FederalHoliday::Juneteenth,
        Rule::FixedSince {
            month: 6,
            day: 19,
            first_year: JUNETEENTH_FIRST_YEAR,
        },
    ),
    (
        FederalHoliday::MartinLutherKingJrDay,
        Rule::Floating {
            month: 1,
            weekday: MondayIndex::MONDAY,
            occurrence: Occurrence::Nth(3),
        },
    ),
    (
        FederalHoliday::PresidentsDay,
        Rule::Floating {
            month: 2,
            weekday: MondayIndex::MONDAY,
            occurrence: Occurrence::Nth(3),
        },
    ),
    (
        FederalHoliday::MemorialDay,
        Rule::Floating {
            month: 5,
            weekday: MondayIndex::MONDAY,
            occurrence: Occurrence::Last,
        },
    ),
    (
        FederalHoliday::LaborDay,
        Rule::Floating {
            month: 9,
            weekday: MondayIndex::MONDAY,
            occurrence: Occurrence::Nth(1),
        },
    ),
    (
        FederalHoliday::ColumbusDay,
        Rule::Floating {
            month: 10,
            weekday: MondayIndex::MONDAY,
            occurrence: Occurrence::Nth(2),
        },
    ),
    (
        FederalHoliday::Thanksgiving,
        Rule::Floating {
            month: 11,
            weekday: MondayIndex::THURSDAY,
            occurrence: Occurrence::Nth(4),
        },
    ),
];

const HUMAN_RIGHTS_DAY: Rule = Rule::Floating {
    month: 1,
    weekday: MondayIndex::MONDAY,
    occurrence: Occurrence::Nth(3),
};

/// Classifies `date` as a federal holiday. First matching rule wins.
///
/// No weekend observance shift is applied: a holiday falling on a Saturday
/// is flagged on that Saturday.
pub fn federal_holiday(date: NaiveDate) -> Option<FederalHoliday> {
    FEDERAL_RULES
        .iter()
        .find(|(_, rule)| rule.matches(date))
        .map(|&(holiday, _)| holiday)
}

/// Returns the observed Idaho Day for `year`.
///
/// March 4 moves to Friday March 3 when it falls on a Saturday and to
/// Monday March 5 when it falls on a Sunday.
pub fn idaho_day_observed(year: i32) -> Option<NaiveDate> {
    let march_4 = NaiveDate::from_ymd_opt(year, 3, 4)?;
    match march_4.weekday() {
        Weekday::Sat => march_4.pred_opt(),
        Weekday::Sun => march_4.succ_opt(),
        _ => Some(march_4),
    }
}

/// Classifies `date` as an Idaho state holiday.
pub fn idaho_holiday(date: NaiveDate) -> Option<IdahoHoliday> {
    if HUMAN_RIGHTS_DAY.matches(date) {
        return Some(IdahoHoliday::HumanRightsDay);
    }
    if date.month() == 3 && idaho_day_observed(date.year()) == Some(date) {
        return Some(IdahoHoliday::IdahoDay);
    }
    None
}

/// Both holiday classifications for a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HolidayFlags {
    /// Federal holiday on this date, if any.
    pub federal: Option<FederalHoliday>,
    /// Idaho state holiday on this date, if any.
    pub idaho: Option<IdahoHoliday>,
}

impl HolidayFlags {
    pub fn is_federal(&self) -> bool {
        self.federal.is_some()
    }

    pub fn is_idaho(&self) -> bool {
        self.idaho.is_some()
    }

    /// Name to store for the date; the federal name takes precedence.
    pub fn name(&self) -> Option<&'static str> {
        self.federal
            .map(FederalHoliday::name)
            .or_else(|| self.idaho.map(IdahoHoliday::name))
    }
}

/// Evaluates both jurisdictions for `date`.
pub fn holidays_for(date: NaiveDate) -> HolidayFlags {
    HolidayFlags {
        federal: federal_holiday(date),
        idaho: idaho_holiday(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fixed_federal_holidays() {
        assert_eq!(
            federal_holiday(ymd(2024, 1, 1)),
            Some(FederalHoliday::NewYearsDay)
        );
        assert_eq!(
            federal_holiday(ymd(2024, 7, 4)),
            Some(FederalHoliday::IndependenceDay)
        );
        assert_eq!(
            federal_holiday(ymd(2024, 11, 11)),
            Some(FederalHoliday::VeteransDay)
        );
        assert_eq!(
            federal_holiday(ymd(2024, 12, 25)),
            Some(FederalHoliday::Christmas)
        );
    }

    #[test]
    fn juneteenth_starts_2021() {
        assert_eq!(federal_holiday(ymd(2020, 6, 19)), None);
        assert_eq!(
            federal_holiday(ymd(2021, 6, 19)),
            Some(FederalHoliday::Juneteenth)
        );
        assert_eq!(FederalHoliday::Juneteenth.name(), "Juneteenth");
    }

    #[test]
    fn floating_federal_holidays_2025() {
        let cases = [
            (ymd(2025, 1, 20), FederalHoliday::MartinLutherKingJrDay),
            (ymd(2025, 2, 17), FederalHoliday::PresidentsDay),
            (ymd(2025, 5, 26), FederalHoliday::MemorialDay),
            (ymd(2025, 9, 1), FederalHoliday::LaborDay),
            (ymd(2025, 10, 13), FederalHoliday::ColumbusDay),
            (ymd(2025, 11, 27), FederalHoliday::Thanksgiving),
        ];
        for (date, expected) in cases {
            assert_eq!(federal_holiday(date), Some(expected), "{date}");
        }
    }

    #[test]
    fn adjacent_days_are_not_holidays() {
        assert_eq!(federal_holiday(ymd(2025, 1, 13)), None);
        assert_eq!(federal_holiday(ymd(2025, 1, 27)), None);
        assert_eq!(federal_holiday(ymd(2025, 5, 19)), None);
        assert_eq!(federal_holiday(ymd(2025, 11, 20)), None);
        assert_eq!(federal_holiday(ymd(2025, 11, 28)), None);
    }

    #[test]
    fn no_federal_weekend_observance() {
        // 2026-07-04 is a Saturday; neither Friday nor Monday is flagged.
        assert_eq!(
            federal_holiday(ymd(2026, 7, 4)),
            Some(FederalHoliday::IndependenceDay)
        );
        assert_eq!(federal_holiday(ymd(2026, 7, 3)), None);
        assert_eq!(federal_holiday(ymd(2026, 7, 6)), None);
    }

    #[test]
    fn human_rights_day_coincides_with_mlk() {
        let date = ymd(2025, 1, 20);
        let flags = holidays_for(date);
        assert_eq!(flags.federal, Some(FederalHoliday::MartinLutherKingJrDay));
        assert_eq!(flags.idaho, Some(IdahoHoliday::HumanRightsDay));
        assert_eq!(flags.name(), Some("Martin Luther King Jr. Day"));
    }

    #[test]
    fn idaho_day_saturday_moves_to_friday() {
        assert_eq!(idaho_day_observed(2023), Some(ymd(2023, 3, 3)));
        assert_eq!(idaho_holiday(ymd(2023, 3, 3)), Some(IdahoHoliday::IdahoDay));
        assert_eq!(idaho_holiday(ymd(2023, 3, 4)), None);
    }

    #[test]
    fn idaho_day_sunday_moves_to_monday() {
        // 2018-03-04 is a Sunday.
        assert_eq!(idaho_day_observed(2018), Some(ymd(2018, 3, 5)));
        assert_eq!(idaho_holiday(ymd(2018, 3, 5)), Some(IdahoHoliday::IdahoDay));
        assert_eq!(idaho_holiday(ymd(2018, 3, 4)), None);
    }

    #[test]
    fn idaho_day_weekday_not_moved() {
        // 2025-03-04 is a Tuesday.
        assert_eq!(idaho_day_observed(2025), Some(ymd(2025, 3, 4)));
        let flags = holidays_for(ymd(2025, 3, 4));
        assert!(!flags.is_federal());
        assert!(flags.is_idaho());
        assert_eq!(flags.name(), Some("Idaho Day"));
    }

    #[test]
    fn ordinary_day_has_no_flags() {
        let flags = holidays_for(ymd(2025, 8, 12));
        assert_eq!(flags, HolidayFlags::default());
        assert_eq!(flags.name(), None);
    }

    #[test]
    fn every_year_has_eleven_or_ten_federal_holidays() {
        for year in 2000..=2040 {
            let count = (1..=366)
                .filter_map(|ord| NaiveDate::from_yo_opt(year, ord))
                .filter(|&d| federal_holiday(d).is_some())
                .count();
            let expected = if year >= JUNETEENTH_FIRST_YEAR { 11 } else { 10 };
            assert_eq!(count, expected, "year {year}");
        }
    }

    #[test]
    fn every_year_has_two_idaho_holidays() {
        for year in 2000..=2040 {
            let count = (1..=366)
                .filter_map(|ord| NaiveDate::from_yo_opt(year, ord))
                .filter(|&d| idaho_holiday(d).is_some())
                .count();
            assert_eq!(count, 2, "year {year}");
        }
    }
}
