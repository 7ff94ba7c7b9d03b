use std::str::FromStr;

use crate::consts::{
    DAYS_IN_COMMON_YEAR, JALALI_CYCLE_DAYS, JALALI_CYCLE_YEARS, JALALI_DATE_SEPARATOR,
    JALALI_DAYS_BEFORE_MONTH, JALALI_EPOCH_DAY, MAX_DAY_NUMBER, MEHR, MIN_DAY, MIN_DAY_NUMBER,
};
use crate::types::{
    Day, JalaliYear, Month, jalali_days_in_year, jalali_leap_years_before, jalali_month_days,
};
use crate::{DateError, GregorianDate, Weekday, names, prelude::*};

/// Days in the first six (31-day) months of a Jalali year
const DAYS_BEFORE_MEHR: i64 = 186;
/// Days in each of Mehr through Bahman
const DAYS_IN_AUTUMN_MONTH: i64 = 30;
/// Days in each of Farvardin through Shahrivar
const DAYS_IN_SPRING_MONTH: i64 = 31;

/// A valid date in the Jalali (Solar Hijri) calendar.
///
/// Months 1-6 have 31 days, 7-11 have 30, and Esfand (12) has 29 or 30
/// depending on the 33-year leap cycle. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaliDate {
    year: JalaliYear,
    month: Month,
    day: Day,
}

impl JalaliDate {
    /// Creates a new Jalali date
    ///
    /// # Errors
    /// Returns `DateError` if the year is unsupported, the month is not 1..=12,
    /// or the day does not exist in that month (Esfand 30 outside leap years).
    pub fn new(year: i16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_typed = JalaliYear::new(year)?;
        let month_typed = Month::new(month)?;
        let day_typed = Day::jalali(day, year, month)?;
        Ok(Self {
            year: year_typed,
            month: month_typed,
            day: day_typed,
        })
    }

    /// Creates a date from a 1-based day of year
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` if `ordinal` is 0 or past the end of the year.
    pub fn from_ordinal(year: i16, ordinal: u16) -> Result<Self, DateError> {
        let year_typed = JalaliYear::new(year)?;
        if ordinal == 0 || ordinal > jalali_days_in_year(i32::from(year)) {
            return Err(DateError::InvalidOrdinal {
                year: i32::from(year),
                ordinal,
            });
        }
        let (month, day) = month_day_from_offset(i64::from(ordinal - 1));
        Ok(Self {
            year: year_typed,
            month: Month::computed(month),
            day: Day::computed(day),
        })
    }

    /// Returns the year
    pub const fn year(&self) -> i16 {
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

    /// Returns the `JalaliYear` type
    pub const fn year_typed(&self) -> JalaliYear {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// True if this date's year has a 30-day Esfand
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        jalali_month_days(self.year.get() as i32, self.month)
    }

    /// 1-based day of year (1..=366)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn ordinal(&self) -> u16 {
        JALALI_DAYS_BEFORE_MONTH[self.month.get() as usize] + self.day.get() as u16
    }

    /// Days since 1970-01-01 (negative before it)
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for the few dates of the first and
    /// last supported Jalali years that fall outside Gregorian 1..=9999.
    #[allow(clippy::cast_possible_truncation)]
    pub fn day_number(&self) -> Result<i32, DateError> {
        let day_number = self.day_number_i64();
        if !(i64::from(MIN_DAY_NUMBER)..=i64::from(MAX_DAY_NUMBER)).contains(&day_number) {
            return Err(DateError::OutOfRange(day_number));
        }
        Ok(day_number as i32)
    }

    pub(crate) const fn day_number_i64(&self) -> i64 {
        year_start(self.year.get() as i64) + self.ordinal() as i64 - 1
    }

    /// Creates a date from a day number
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` outside Gregorian 0001-01-01..=9999-12-31.
    pub fn from_day_number(day_number: i32) -> Result<Self, DateError> {
        if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&day_number) {
            return Err(DateError::OutOfRange(i64::from(day_number)));
        }
        Ok(Self::from_day_number_in_range(i64::from(day_number)))
    }

    /// Day number to Jalali date, without the range check.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_day_number_in_range(day_number: i64) -> Self {
        // Estimate from the mean year length, then settle on the exact year
        let since_epoch = day_number - JALALI_EPOCH_DAY as i64;
        let mut year = 1 + (JALALI_CYCLE_YEARS * since_epoch + 3).div_euclid(JALALI_CYCLE_DAYS);
        while day_number < year_start(year) {
            year -= 1;
        }
        while day_number >= year_start(year + 1) {
            year += 1;
        }
        let (month, day) = month_day_from_offset(day_number - year_start(year));
        Self {
            year: JalaliYear::computed(year as i16),
            month: Month::computed(month),
            day: Day::computed(day),
        }
    }

    /// Converts to the Gregorian calendar
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result would fall outside
    /// Gregorian 1..=9999.
    pub fn to_gregorian(self) -> Result<GregorianDate, DateError> {
        let day_number = self.day_number()?;
        Ok(GregorianDate::from_day_number_in_range(i64::from(day_number)))
    }

    /// Day of the week, Saturday-first
    pub const fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number_i64())
    }

    /// Persian name of this date's month
    pub const fn month_name(&self) -> &'static str {
        names::JALALI_MONTHS[self.month.get() as usize - 1]
    }

    /// Persian name of this date's weekday
    pub const fn weekday_name(&self) -> &'static str {
        self.weekday().name()
    }

    /// First day of this date's month
    pub const fn first_of_month(&self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: Day::computed(MIN_DAY),
        }
    }

    /// Last day of this date's month
    pub const fn last_of_month(&self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: Day::computed(self.days_in_month()),
        }
    }

    /// Moves forwards (or backwards, for negative `days`) by whole days
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` when the result leaves the supported range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_days(self, days: i32) -> Result<Self, DateError> {
        let target = self.day_number_i64() + i64::from(days);
        if !(i64::from(MIN_DAY_NUMBER)..=i64::from(MAX_DAY_NUMBER)).contains(&target) {
            return Err(DateError::OutOfRange(target));
        }
        Self::from_day_number(target as i32)
    }
}

/// Day number of 1 Farvardin of `year`
const fn year_start(year: i64) -> i64 {
    JALALI_EPOCH_DAY as i64
        + DAYS_IN_COMMON_YEAR as i64 * (year - 1)
        + jalali_leap_years_before(year)
}

/// Month and day for a 0-based offset into the year
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn month_day_from_offset(offset: i64) -> (u8, u8) {
    let month = if offset < DAYS_BEFORE_MEHR {
        offset / DAYS_IN_SPRING_MONTH + 1
    } else {
        (offset - DAYS_BEFORE_MEHR) / DAYS_IN_AUTUMN_MONTH + MEHR as i64
    };
    let day = offset - JALALI_DAYS_BEFORE_MONTH[month as usize] as i64 + 1;
    (month as u8, day as u8)
}

impl JalaliDate {
    /// Helper to parse i16 with better error messages
    fn parse_i16(s: &str) -> Result<i16, DateError> {
        s.parse::<i16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for JalaliDate {
    type Err = DateError;

    /// Parses `YYYY/MM/DD`, the way Jalali dates are written in Iran
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed
            .split(JALALI_DATE_SEPARATOR)
            .map(str::trim)
            .collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{JALALI_DATE_SEPARATOR}MM{JALALI_DATE_SEPARATOR}DD, found {trimmed}"
            )));
        }

        // Parse components - InvalidFormat if not numeric
        let year = Self::parse_i16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(value: GregorianDate) -> Self {
        value.to_jalali()
    }
}

impl TryFrom<JalaliDate> for GregorianDate {
    type Error = DateError;

    fn try_from(value: JalaliDate) -> Result<Self, Self::Error> {
        value.to_gregorian()
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_JALALI_YEAR, MIN_JALALI_YEAR};

    fn greg(year: u16, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    fn jal(year: i16, month: u8, day: u8) -> JalaliDate {
        JalaliDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_known_conversions() {
        let cases = [
            (greg(2024, 3, 20), jal(1403, 1, 1)),
            (greg(1979, 2, 11), jal(1357, 11, 22)),
            (greg(2025, 3, 20), jal(1403, 12, 30)),
            (greg(2025, 3, 21), jal(1404, 1, 1)),
            (greg(1978, 3, 21), jal(1357, 1, 1)),
            (greg(1970, 1, 1), jal(1348, 10, 11)),
            (greg(2000, 1, 1), jal(1378, 10, 11)),
            (greg(2024, 9, 22), jal(1403, 7, 1)),
            (greg(2024, 9, 21), jal(1403, 6, 31)),
            (greg(622, 3, 21), jal(1, 1, 1)),
        ];
        for (gregorian, jalali) in cases {
            assert_eq!(gregorian.to_jalali(), jalali, "{gregorian}");
            assert_eq!(jalali.to_gregorian().unwrap(), gregorian, "{jalali}");
        }
    }

    #[test]
    fn test_supported_range_edges() {
        let first = greg(1, 1, 1).to_jalali();
        assert_eq!(first, jal(MIN_JALALI_YEAR, 10, 11));
        let last = greg(9999, 12, 31).to_jalali();
        assert_eq!(last, jal(MAX_JALALI_YEAR, 10, 10));

        // Constructible, but before Gregorian year 1
        let before = jal(MIN_JALALI_YEAR, 10, 10);
        assert!(matches!(
            before.to_gregorian(),
            Err(DateError::OutOfRange(_))
        ));
        let after = jal(MAX_JALALI_YEAR, 10, 11);
        assert!(matches!(after.to_gregorian(), Err(DateError::OutOfRange(_))));
    }

    #[test]
    fn test_new_rejects_invalid() {
        assert!(matches!(
            JalaliDate::new(1403, 0, 1),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            JalaliDate::new(1403, 7, 31),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            JalaliDate::new(9379, 1, 1),
            Err(DateError::InvalidJalaliYear(9379))
        ));
        assert!(JalaliDate::new(1403, 6, 31).is_ok());
    }

    #[test]
    fn test_ordinal_round_trip() {
        for year in [1403, 1404] {
            let days = jalali_days_in_year(i32::from(year));
            for ordinal in 1..=days {
                let date = JalaliDate::from_ordinal(year, ordinal).unwrap();
                assert_eq!(date.ordinal(), ordinal);
            }
            assert_eq!(
                JalaliDate::from_ordinal(year, days + 1),
                Err(DateError::InvalidOrdinal {
                    year: i32::from(year),
                    ordinal: days + 1
                })
            );
            assert_eq!(
                JalaliDate::from_ordinal(year, 0),
                Err(DateError::InvalidOrdinal {
                    year: i32::from(year),
                    ordinal: 0
                })
            );
        }
        assert_eq!(JalaliDate::from_ordinal(1403, 186).unwrap(), jal(1403, 6, 31));
        assert_eq!(JalaliDate::from_ordinal(1403, 187).unwrap(), jal(1403, 7, 1));
        assert_eq!(JalaliDate::from_ordinal(1403, 366).unwrap(), jal(1403, 12, 30));
    }

    #[test]
    fn test_day_number_consecutive_across_nowruz() {
        let last = jal(1403, 12, 30);
        let first = jal(1404, 1, 1);
        assert_eq!(
            first.day_number().unwrap() - last.day_number().unwrap(),
            1
        );
        assert_eq!(last.add_days(1).unwrap(), first);
        assert_eq!(first.add_days(-1).unwrap(), last);
    }

    #[test]
    fn test_add_days() {
        let date = jal(1403, 1, 1);
        assert_eq!(date.add_days(0).unwrap(), date);
        assert_eq!(date.add_days(31).unwrap(), jal(1403, 2, 1));
        assert_eq!(date.add_days(366).unwrap(), jal(1404, 1, 1));
        assert!(matches!(
            date.add_days(i32::MAX),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_weekday_and_names() {
        let nowruz = jal(1403, 1, 1);
        assert_eq!(nowruz.weekday(), Weekday::Wednesday);
        assert_eq!(nowruz.weekday_name(), "چهارشنبه");
        assert_eq!(nowruz.month_name(), "فروردین");
        assert_eq!(jal(1404, 12, 1).month_name(), "اسفند");
    }

    #[test]
    fn test_month_bounds() {
        let date = jal(1403, 12, 15);
        assert_eq!(date.first_of_month(), jal(1403, 12, 1));
        assert_eq!(date.last_of_month(), jal(1403, 12, 30));
        assert_eq!(jal(1404, 12, 15).last_of_month(), jal(1404, 12, 29));
        assert_eq!(jal(1404, 7, 2).days_in_month(), 30);
        assert!(jal(1403, 1, 1).is_leap_year());
    }

    #[test]
    fn test_display_and_parse() {
        let date = jal(1403, 1, 1);
        assert_eq!(date.to_string(), "1403/01/01");
        assert_eq!("1403/01/01".parse::<JalaliDate>().unwrap(), date);
        assert_eq!(" 1403 / 1 / 1 ".parse::<JalaliDate>().unwrap(), date);
        assert!(matches!(
            "1403-01-01".parse::<JalaliDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1404/12/30".parse::<JalaliDate>(),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            "  ".parse::<JalaliDate>(),
            Err(DateError::EmptyInput)
        ));
    }

    #[test]
    fn test_conversion_traits() {
        let gregorian = greg(2024, 3, 20);
        let jalali: JalaliDate = gregorian.into();
        assert_eq!(jalali, jal(1403, 1, 1));
        let back: GregorianDate = jalali.try_into().unwrap();
        assert_eq!(back, gregorian);
    }

    #[test]
    fn test_serde_string_format() {
        let date = jal(1357, 11, 22);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1357/11/22""#);
        let parsed: JalaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1404/12/30""#);
        assert!(result.is_err());
    }
}
