//! # dimdate-calendar
//!
//! Pure date-attribute computation for a calendar date dimension: calendar
//! decomposition, US and ISO week numbers, a July-start fiscal calendar,
//! federal and Idaho state holidays, and period-boundary flags.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"holidays_for()"| B["HolidayFlags"]
//!     A -->|"fiscal_period()"| C["FiscalPeriod"]
//!     A -->|"period_boundary()"| D["PeriodBoundary"]
//!     A -->|"attributes_for()"| E["DateRow"]
//!     B --> E
//!     C --> E
//!     D --> E
//!     F["DateRange"] -->|".rows()"| G["DateRows (lazy)"]
//!     G -->|"per date"| E
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use dimdate_calendar::{attributes_for, generate};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//! for row in generate(start, end)? {
//!     println!("{} {}", row.date_key, row.day_name);
//! }
//!
//! let row = attributes_for(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
//! assert_eq!(row.holiday_name, Some("Martin Luther King Jr. Day"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `weekday` | Weekday encodings and the nth-weekday resolver |
//! | `holiday` | Federal and Idaho holiday classifiers |
//! | `fiscal` | July-start fiscal year, quarter, month, week |
//! | `week` | US and ISO week of year |
//! | `period` | Month, quarter, and year end flags |
//! | `row` | `DateRow` and `attributes_for` |
//! | `sequence` | `DateRange` and lazy row generation |
//! | `error` | Error types |

mod error;
mod fiscal;
mod holiday;
mod period;
mod row;
mod sequence;
mod week;
mod weekday;

pub use error::CalendarError;
pub use fiscal::{
    FISCAL_YEAR_START_MONTH, FiscalPeriod, fiscal_month, fiscal_period, fiscal_quarter,
    fiscal_week, fiscal_year, fiscal_year_start,
};
pub use holiday::{
    FederalHoliday, HolidayFlags, IdahoHoliday, JUNETEENTH_FIRST_YEAR, federal_holiday,
    holidays_for, idaho_day_observed, idaho_holiday,
};
pub use period::{PeriodBoundary, is_last_day_of_month, period_boundary};
pub use row::{
    DateRow, MAX_KEY_YEAR, MIN_KEY_YEAR, attributes_for, check_key_year, date_key, day_name,
    day_name_short, month_name, month_name_short,
};
pub use sequence::{DateRange, DateRows, generate};
pub use week::{iso_week, us_week_of_year};
pub use weekday::{DayOfWeek, MondayIndex, Occurrence, last_day_of_month, nth_weekday};
