/// Minimum valid Gregorian year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Jalali year containing Gregorian 0001-01-01 (Jalali -621-10-11)
pub const MIN_JALALI_YEAR: i16 = -621;
/// Jalali year containing Gregorian 9999-12-31 (Jalali 9378-10-10)
pub const MAX_JALALI_YEAR: i16 = 9378;

/// Minimum valid month, in both calendars
pub const MIN_MONTH: u8 = 1;

/// Maximum valid month, in both calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Month number for Mehr, the first 30-day Jalali month
pub const MEHR: u8 = 7;
/// Month number for Esfand, the last Jalali month
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for Jalali leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each Jalali month (index 0 is unused)
/// Esfand shows 29 days (non-leap year default)
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_jalali_leap_year check)
];

/// Days elapsed in a Jalali year before the first of each month (index 0 is unused)
pub(crate) const JALALI_DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// Days in a common year, in both calendars
pub const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Jalali leap years repeat on a 33-year cycle with 8 leap years per cycle
pub(crate) const JALALI_CYCLE_YEARS: i64 = 33;
/// Leap years in one Jalali cycle
pub(crate) const JALALI_CYCLE_LEAPS: i64 = 8;
/// Days in one Jalali cycle (33 * 365 + 8)
pub(crate) const JALALI_CYCLE_DAYS: i64 = 12053;

/// Day number (days since 1970-01-01) of Jalali 0001-01-01, Gregorian 0622-03-21.
///
/// The arithmetic cycle puts 1 Farvardin 1 one day before the traditional
/// 22 March epoch; later dates line up with the official calendar.
pub const JALALI_EPOCH_DAY: i32 = -492_268;

/// Day number of Gregorian 0001-01-01, the earliest supported date
pub const MIN_DAY_NUMBER: i32 = -719_162;
/// Day number of Gregorian 9999-12-31, the latest supported date
pub const MAX_DAY_NUMBER: i32 = 2_932_896;

/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Gregorian date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Jalali date component separator, as written in Iran
pub const JALALI_DATE_SEPARATOR: char = '/';

/// Default display pattern for Jalali dates
pub const DEFAULT_JALALI_PATTERN: &str = "YYYY/MM/DD";
/// Default display pattern for Gregorian dates
pub const DEFAULT_GREGORIAN_PATTERN: &str = "YYYY-MM-DD";
