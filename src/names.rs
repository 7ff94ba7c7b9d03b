//! Month and weekday names, and the Saturday-first week.

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, MAX_MONTH};

/// Jalali month names in Persian, Farvardin first.
pub const JALALI_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian weekday names, Saturday first.
pub const JALALI_WEEKDAYS: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
];

/// Gregorian months in English.
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekdays in English, Sunday first.
pub const GREGORIAN_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Error for name lookups with an index outside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Month index outside 1..=12.
    #[error("Month index out of range: {0} (must be 1-12)")]
    Month(u8),

    /// Weekday index outside 0..=6.
    #[error("Weekday index out of range: {0} (must be 0-6)")]
    Weekday(u8),
}

/// Day of the week, numbered from Saturday as in the Jalali calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    /// All days in Saturday-first order
    pub const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Saturday-first index of 1970-01-01, a Thursday
    const EPOCH_INDEX: i64 = 5;

    /// Creates a weekday from its Saturday-first index (Saturday = 0)
    ///
    /// # Errors
    /// Returns `RangeError::Weekday` if `index` is not 0..=6.
    pub const fn from_index(index: u8) -> Result<Self, RangeError> {
        if index >= DAYS_PER_WEEK {
            return Err(RangeError::Weekday(index));
        }
        Ok(Self::ALL[index as usize])
    }

    /// Creates a weekday from a Sunday-first index (Sunday = 0), the
    /// numbering most Gregorian APIs use
    ///
    /// # Errors
    /// Returns `RangeError::Weekday` if `index` is not 0..=6.
    pub const fn from_sunday_index(index: u8) -> Result<Self, RangeError> {
        if index >= DAYS_PER_WEEK {
            return Err(RangeError::Weekday(index));
        }
        Ok(Self::ALL[((index + 1) % DAYS_PER_WEEK) as usize])
    }

    /// Saturday-first index (Saturday = 0)
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sunday-first index (Sunday = 0)
    pub const fn sunday_index(self) -> u8 {
        (self as u8 + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK
    }

    /// Weekday of a day number (days since 1970-01-01)
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_day_number(day_number: i64) -> Self {
        let index = (day_number + Self::EPOCH_INDEX).rem_euclid(DAYS_PER_WEEK as i64);
        Self::ALL[index as usize]
    }

    /// The following day
    pub const fn next(self) -> Self {
        Self::ALL[((self as u8 + 1) % DAYS_PER_WEEK) as usize]
    }

    /// Persian name
    pub const fn name(self) -> &'static str {
        JALALI_WEEKDAYS[self as usize]
    }

    /// English name
    pub const fn english_name(self) -> &'static str {
        GREGORIAN_WEEKDAYS[self.sunday_index() as usize]
    }
}

/// Persian name of a Jalali month (1 = Farvardin)
///
/// # Errors
/// Returns `RangeError::Month` if `month` is not 1..=12.
pub const fn month_name(month: u8) -> Result<&'static str, RangeError> {
    if month == 0 || month > MAX_MONTH {
        return Err(RangeError::Month(month));
    }
    Ok(JALALI_MONTHS[month as usize - 1])
}

/// Persian name of a weekday by Saturday-first index (0 = Saturday)
///
/// # Errors
/// Returns `RangeError::Weekday` if `index` is not 0..=6.
pub const fn weekday_name(index: u8) -> Result<&'static str, RangeError> {
    match Weekday::from_index(index) {
        Ok(day) => Ok(day.name()),
        Err(err) => Err(err),
    }
}

/// Owned copy of the Persian month names
pub fn month_names() -> Vec<&'static str> {
    JALALI_MONTHS.to_vec()
}

/// Owned copy of the Persian weekday names, Saturday first
pub fn weekday_names() -> Vec<&'static str> {
    JALALI_WEEKDAYS.to_vec()
}
