use std::str::FromStr;

use crate::consts::{DATE_SEPARATOR, MAX_DAY_NUMBER, MIN_DAY_NUMBER};
use crate::types::{Day, Month, Year};
use crate::{DateError, JalaliDate, Weekday, prelude::*};

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar
const CIVIL_EPOCH_SHIFT: i64 = 719_468;
/// Days in a 400-year Gregorian era
const DAYS_PER_ERA: i64 = 146_097;

/// A valid date in the proleptic Gregorian calendar, years 1..=9999.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year: Year,
    month: Month,
    day: Day,
}

impl GregorianDate {
    /// Creates a new Gregorian date
    ///
    /// # Errors
    /// Returns `DateError` if any component is out of range for the calendar.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_nz = Year::new(year)?;
        let month_nz = Month::new(month)?;
        let day_nz = Day::new(day, year, month)?;
        Ok(Self {
            year: year_nz,
            month: month_nz,
            day: day_nz,
        })
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Days since 1970-01-01 (negative before it)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn day_number(&self) -> i32 {
        days_from_civil(self.year.get() as i64, self.month.get(), self.day.get()) as i32
    }

    /// Creates a date from a day number
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` outside 0001-01-01..=9999-12-31.
    pub fn from_day_number(day_number: i32) -> Result<Self, DateError> {
        if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&day_number) {
            return Err(DateError::OutOfRange(i64::from(day_number)));
        }
        Ok(Self::from_day_number_in_range(i64::from(day_number)))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) const fn from_day_number_in_range(day_number: i64) -> Self {
        let (year, month, day) = civil_from_days(day_number);
        Self {
            year: Year::computed(year as u16),
            month: Month::computed(month),
            day: Day::computed(day),
        }
    }

    /// Day of the week, Saturday-first
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(i64::from(self.day_number()))
    }

    /// True if this date falls in a Gregorian leap year
    pub const fn is_leap_year(&self) -> bool {
        crate::types::is_leap_year(self.year.get())
    }

    /// Converts to the Jalali calendar. Every supported Gregorian date has
    /// a Jalali counterpart, so this cannot fail.
    pub const fn to_jalali(self) -> JalaliDate {
        JalaliDate::from_day_number_in_range(self.day_number() as i64)
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, DateError> {
        s.parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Counts from a March-based year so the leap day falls at the end.
pub(crate) const fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let (month, day) = (month as i64, day as i64);
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month_from_march = (month + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - CIVIL_EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn civil_from_days(day_number: i64) -> (i64, u8, u8) {
    let shifted = day_number + CIVIL_EPOCH_SHIFT;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 {
        month_from_march + 3
    } else {
        month_from_march - 9
    };
    let year = year_of_era + era * 400 + (month <= 2) as i64;
    (year, month as u8, day as u8)
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses strict ISO 8601 `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        }

        // Parse components - InvalidFormat if not numeric
        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
