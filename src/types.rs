use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JALALI_CYCLE_LEAPS, JALALI_CYCLE_YEARS,
    JALALI_DAYS_IN_MONTH, LEAP_YEAR_CYCLE, MAX_JALALI_YEAR, MAX_MONTH, MAX_YEAR, MIN_JALALI_YEAR,
};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Gregorian year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(DateError::InvalidYear(i32::from(value))),
        }
    }

    /// Wraps a year produced by day-number arithmetic over the supported range
    pub(crate) const fn computed(value: u16) -> Self {
        debug_assert!(value != 0 && value <= MAX_YEAR);
        match NonZeroU16::new(value) {
            Some(year) => Self(year),
            None => Self(NonZeroU16::MIN),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Jalali year in `MIN_JALALI_YEAR..=MAX_JALALI_YEAR`.
///
/// The arithmetic calendar is proleptic: years before 1 are counted
/// astronomically (0, -1, ...), with no gap at year zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliYear(i16);

impl JalaliYear {
    /// Creates a new `JalaliYear`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidJalaliYear` outside the supported range.
    pub fn new(value: i16) -> Result<Self, DateError> {
        if !(MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&value) {
            return Err(DateError::InvalidJalaliYear(i32::from(value)));
        }
        Ok(Self(value))
    }

    /// Wraps a year produced by day-number arithmetic over the supported range
    pub(crate) const fn computed(value: i16) -> Self {
        debug_assert!(value >= MIN_JALALI_YEAR && value <= MAX_JALALI_YEAR);
        Self(value)
    }

    /// Returns the year value as i16
    #[inline]
    pub const fn get(self) -> i16 {
        self.0
    }

    /// True if Esfand has 30 days this year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_jalali_leap_year(self.0 as i32)
    }
}

impl TryFrom<i16> for JalaliYear {
    type Error = DateError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JalaliYear> for i16 {
    fn from(year: JalaliYear) -> Self {
        year.0
    }
}

impl fmt::Display for JalaliYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12).
/// Shared by both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Wraps a month produced by calendar arithmetic
    pub(crate) const fn computed(value: u8) -> Self {
        debug_assert!(value != 0 && value <= MAX_MONTH);
        match NonZeroU8::new(value) {
            Some(month) => Self(month),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of month, valid for the year and month it was checked against.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against a Gregorian year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the month is not 1..=12, or
    /// `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let max_day = month_days(year, Month::new(month)?);
        Self::checked(value, i32::from(year), month, max_day)
    }

    /// Creates a new Day, validating it against a Jalali year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the month is not 1..=12, or
    /// `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn jalali(value: u8, year: i16, month: u8) -> Result<Self, DateError> {
        let year = i32::from(year);
        let max_day = jalali_month_days(year, Month::new(month)?);
        Self::checked(value, year, month, max_day)
    }

    fn checked(value: u8, year: i32, month: u8, max_day: u8) -> Result<Self, DateError> {
        match NonZeroU8::new(value) {
            Some(day) if value <= max_day => Ok(Self(day)),
            _ => Err(DateError::InvalidDay {
                year,
                month,
                day: value,
            }),
        }
    }

    /// Wraps a day produced by calendar arithmetic
    pub(crate) const fn computed(value: u8) -> Self {
        debug_assert!(value != 0);
        match NonZeroU8::new(value) {
            Some(day) => Self(day),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Gregorian leap year rule
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month
///
/// # Errors
/// Returns `DateError::InvalidMonth` if `month` is not 1..=12.
pub fn days_in_month(year: u16, month: u8) -> Result<u8, DateError> {
    Month::new(month).map(|month| month_days(year, month))
}

pub(crate) const fn month_days(year: u16, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// True if the Jalali year has a 30-day Esfand.
///
/// Uses the 33-year arithmetic cycle: years whose position in the cycle is
/// 1, 5, 9, 13, 17, 22, 26 or 30 are leap. Defined for every integer year,
/// but it matches the astronomical (equinox-based) calendar only for
/// 1178..=1633 AP. Outside that span some years are a cycle position off.
pub const fn is_jalali_leap_year(year: i32) -> bool {
    (25 * year as i64 + 11).rem_euclid(JALALI_CYCLE_YEARS) < JALALI_CYCLE_LEAPS
}

/// Days in a Jalali month
///
/// # Errors
/// Returns `DateError::InvalidMonth` if `month` is not 1..=12.
pub fn jalali_days_in_month(year: i32, month: u8) -> Result<u8, DateError> {
    Month::new(month).map(|month| jalali_month_days(year, month))
}

pub(crate) const fn jalali_month_days(year: i32, month: Month) -> u8 {
    if month.get() == ESFAND && is_jalali_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Days in a Jalali year, 365 or 366
pub const fn jalali_days_in_year(year: i32) -> u16 {
    if is_jalali_leap_year(year) {
        DAYS_IN_COMMON_YEAR + 1
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Number of Jalali leap years in `1..year` (negative for years before 1).
pub(crate) const fn jalali_leap_years_before(year: i64) -> i64 {
    (JALALI_CYCLE_LEAPS * year + 21).div_euclid(JALALI_CYCLE_YEARS)
}
