//! Exact conversion between the proleptic Gregorian calendar and the Jalali
//! (Solar Hijri) calendar, with Persian month and weekday names and
//! pattern-based formatting.
//!
//! Both calendars convert through a shared day number (days since
//! 1970-01-01), so a round trip through either direction is lossless.
//!
//! ```
//! use jalali_date::{GregorianDate, format_jalali};
//!
//! let nowruz = GregorianDate::new(2024, 3, 20)?.to_jalali();
//! assert_eq!(nowruz.to_string(), "1403/01/01");
//! assert_eq!(format_jalali(&nowruz, "DD MMMM YYYY"), "01 فروردین 1403");
//! # Ok::<(), jalali_date::DateError>(())
//! ```

mod consts;
mod display;
mod format;
mod gregorian;
mod jalali;
mod locale;
mod names;
mod prelude;
mod types;

pub use consts::*;
pub use display::{CalendarContext, DisplayDate, GridCell, MonthGrid, Navigation};
pub use format::{format_gregorian, format_jalali, to_persian_digits};
pub use gregorian::GregorianDate;
pub use jalali::JalaliDate;
pub use locale::{
    CalendarSettings, CalendarSystem, SETTINGS_KEY_PREFIX, TextDirection, is_jalali_locale,
    resolve_calendar,
};
pub use names::{
    GREGORIAN_MONTHS, GREGORIAN_WEEKDAYS, JALALI_MONTHS, JALALI_WEEKDAYS, RangeError, Weekday,
    month_name, month_names, weekday_name, weekday_names,
};
pub use types::{
    Day, JalaliYear, Month, Year, days_in_month, is_jalali_leap_year, is_leap_year,
    jalali_days_in_month, jalali_days_in_year,
};

use crate::prelude::*;

/// Error for malformed or out-of-range dates in either calendar.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(
        fmt = "Invalid Jalali year: {} (must be between {} and {})",
        "_0",
        MIN_JALALI_YEAR,
        MAX_JALALI_YEAR
    )]
    InvalidJalaliYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid day of year {ordinal} for year {year}")]
    InvalidOrdinal { year: i32, ordinal: u16 },
    #[display(
        fmt = "Day number {} is outside the supported range ({}..={})",
        "_0",
        MIN_DAY_NUMBER,
        MAX_DAY_NUMBER
    )]
    OutOfRange(i64),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Converts a Gregorian date to the Jalali calendar.
pub fn to_jalali(gregorian: &GregorianDate) -> JalaliDate {
    gregorian.to_jalali()
}

/// Converts a Jalali date to the Gregorian calendar.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the date falls outside Gregorian 1..=9999.
pub fn from_jalali(jalali: &JalaliDate) -> Result<GregorianDate, DateError> {
    jalali.to_gregorian()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nowruz_1403() {
        let gregorian = GregorianDate::new(2024, 3, 20).unwrap();
        let jalali = to_jalali(&gregorian);
        assert_eq!(jalali, JalaliDate::new(1403, 1, 1).unwrap());
        assert_eq!(from_jalali(&jalali).unwrap(), gregorian);
    }

    #[test]
    fn test_known_fixed_point_1979() {
        let jalali = to_jalali(&GregorianDate::new(1979, 2, 11).unwrap());
        assert_eq!((jalali.year(), jalali.month(), jalali.day()), (1357, 11, 22));
    }

    #[test]
    fn test_esfand_30_boundary() {
        let leap_end = JalaliDate::new(1403, 12, 30).unwrap();
        assert_eq!(
            from_jalali(&leap_end).unwrap(),
            GregorianDate::new(2025, 3, 20).unwrap()
        );

        assert!(matches!(
            JalaliDate::new(1404, 12, 30),
            Err(DateError::InvalidDay {
                year: 1404,
                month: 12,
                day: 30
            })
        ));
        let common_end = JalaliDate::new(1404, 12, 29).unwrap();
        assert_eq!(
            from_jalali(&common_end).unwrap(),
            GregorianDate::new(2026, 3, 20).unwrap()
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DateError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            DateError::InvalidJalaliYear(9400).to_string(),
            "Invalid Jalali year: 9400 (must be between -621 and 9378)"
        );
        assert_eq!(
            DateError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            DateError::InvalidDay {
                year: 1404,
                month: 12,
                day: 30
            }
            .to_string(),
            "Invalid day 30 for month 1404-12"
        );
        assert_eq!(
            DateError::InvalidOrdinal {
                year: 1404,
                ordinal: 366
            }
            .to_string(),
            "Invalid day of year 366 for year 1404"
        );
        assert_eq!(DateError::EmptyInput.to_string(), "Empty date string");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<DateError>();
        assert_impl::<RangeError>();
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_YEAR, 9999);
        assert_eq!(MIN_JALALI_YEAR, -621);
        assert_eq!(MAX_JALALI_YEAR, 9378);
    }
}
