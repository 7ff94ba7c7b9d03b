//! Pattern-based date formatting.
//!
//! Recognised tokens, matched longest first:
//!
//! | Token  | Output                         |
//! |--------|--------------------------------|
//! | `YYYY` | year, zero-padded to 4 digits  |
//! | `MMMM` | month name                     |
//! | `MM`   | month, zero-padded to 2 digits |
//! | `DD`   | day, zero-padded to 2 digits   |
//! | `dddd` | weekday name                   |
//!
//! Everything else is copied through unchanged.

use std::fmt::Write;

use crate::names::GREGORIAN_MONTHS;
use crate::{GregorianDate, JalaliDate};

/// Values a pattern can draw on
pub(crate) struct Fields<'a> {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub month_name: &'a str,
    pub weekday_name: &'a str,
}

#[derive(Clone, Copy)]
enum Token {
    Year,
    MonthName,
    Month,
    Day,
    WeekdayName,
}

/// Longest tokens first so `MMMM` is not read as two `MM`
const TOKENS: [(&str, Token); 5] = [
    ("YYYY", Token::Year),
    ("MMMM", Token::MonthName),
    ("dddd", Token::WeekdayName),
    ("MM", Token::Month),
    ("DD", Token::Day),
];

pub(crate) fn render(pattern: &str, fields: &Fields<'_>) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        for (text, token) in TOKENS {
            if let Some(tail) = rest.strip_prefix(text) {
                // Writing to a String cannot fail
                let _ = match token {
                    Token::Year => write!(out, "{:04}", fields.year),
                    Token::MonthName => write!(out, "{}", fields.month_name),
                    Token::Month => write!(out, "{:02}", fields.month),
                    Token::Day => write!(out, "{:02}", fields.day),
                    Token::WeekdayName => write!(out, "{}", fields.weekday_name),
                };
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

/// Formats a Jalali date with Persian month and weekday names.
///
/// ```
/// use jalali_date::{JalaliDate, format_jalali};
///
/// let date = JalaliDate::new(1403, 1, 1)?;
/// assert_eq!(format_jalali(&date, "YYYY/MM/DD"), "1403/01/01");
/// # Ok::<(), jalali_date::DateError>(())
/// ```
pub fn format_jalali(date: &JalaliDate, pattern: &str) -> String {
    render(
        pattern,
        &Fields {
            year: i32::from(date.year()),
            month: date.month(),
            day: date.day(),
            month_name: date.month_name(),
            weekday_name: date.weekday_name(),
        },
    )
}

/// Formats a Gregorian date with English month and weekday names, using
/// the same tokens as [`format_jalali`].
pub fn format_gregorian(date: &GregorianDate, pattern: &str) -> String {
    render(
        pattern,
        &Fields {
            year: i32::from(date.year()),
            month: date.month(),
            day: date.day(),
            month_name: GREGORIAN_MONTHS[usize::from(date.month()) - 1],
            weekday_name: date.weekday().english_name(),
        },
    )
}

/// EXTENDED ARABIC-INDIC DIGIT ZERO
const PERSIAN_ZERO: u32 = 0x06F0;

/// Replaces ASCII digits with Extended Arabic-Indic (Persian) digits.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(PERSIAN_ZERO + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nowruz() -> JalaliDate {
        JalaliDate::new(1403, 1, 1).unwrap()
    }

    #[test]
    fn test_numeric_pattern() {
        assert_eq!(format_jalali(&nowruz(), "YYYY/MM/DD"), "1403/01/01");
        assert_eq!(format_jalali(&nowruz(), "DD-MM-YYYY"), "01-01-1403");
    }

    #[test]
    fn test_month_name_pattern() {
        assert_eq!(format_jalali(&nowruz(), "DD MMMM YYYY"), "01 فروردین 1403");
    }

    #[test]
    fn test_weekday_name_pattern() {
        assert_eq!(
            format_jalali(&nowruz(), "dddd DD MMMM"),
            "چهارشنبه 01 فروردین"
        );
    }

    #[test]
    fn test_unknown_text_passes_through() {
        assert_eq!(format_jalali(&nowruz(), "Y M D [x] ☀"), "Y M D [x] ☀");
        assert_eq!(format_jalali(&nowruz(), "YYY"), "YYY");
        assert_eq!(format_jalali(&nowruz(), ""), "");
    }

    #[test]
    fn test_adjacent_tokens() {
        assert_eq!(format_jalali(&nowruz(), "YYYYMMDD"), "14030101");
        // Five Ms: one month name, then a literal M
        assert_eq!(format_jalali(&nowruz(), "MMMMM"), "فروردینM");
    }

    #[test]
    fn test_short_and_negative_years() {
        let early = JalaliDate::new(5, 6, 31).unwrap();
        assert_eq!(format_jalali(&early, "YYYY/MM/DD"), "0005/06/31");
        let before_epoch = JalaliDate::new(-5, 1, 1).unwrap();
        assert_eq!(format_jalali(&before_epoch, "YYYY"), "-005");
    }

    #[test]
    fn test_format_gregorian() {
        let date = GregorianDate::new(2024, 3, 20).unwrap();
        assert_eq!(format_gregorian(&date, "YYYY-MM-DD"), "2024-03-20");
        assert_eq!(
            format_gregorian(&date, "dddd, DD MMMM YYYY"),
            "Wednesday, 20 March 2024"
        );
    }

    #[test]
    fn test_to_persian_digits() {
        assert_eq!(to_persian_digits("1403/01/01"), "۱۴۰۳/۰۱/۰۱");
        assert_eq!(to_persian_digits("abc 9"), "abc ۹");
        assert_eq!(to_persian_digits("۱۲"), "۱۲");
    }
}
