//! Presenting stored Gregorian dates in the user's calendar.
//!
//! Dates are always stored in Gregorian. A [`CalendarContext`] carries the
//! resolved calendar and settings, turns stored dates into display records
//! and turns user input in the display calendar back into storage dates.

use serde::Serialize;
use tracing::debug;

use crate::consts::{DEFAULT_GREGORIAN_PATTERN, DEFAULT_JALALI_PATTERN, MAX_MONTH, MIN_MONTH};
use crate::format::{self, Fields};
use crate::locale::{CalendarSettings, CalendarSystem, TextDirection};
use crate::names::{GREGORIAN_MONTHS, JALALI_MONTHS};
use crate::types::month_days;
use crate::{DateError, GregorianDate, JalaliDate, Weekday};

/// One date as a renderer sees it, in the display calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayDate {
    pub system: CalendarSystem,
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub weekday: Weekday,
    pub month_name: String,
    pub weekday_name: &'static str,
    /// Date in the calendar's default numeric pattern
    pub formatted: String,
}

/// A day in a [`MonthGrid`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub display: DisplayDate,
    /// Storage date behind the cell
    pub gregorian: GregorianDate,
}

/// A month laid out in weeks of seven columns.
///
/// Columns start at the calendar's first day of the week; days outside the
/// month are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub system: CalendarSystem,
    pub year: i32,
    pub month: u8,
    pub month_name: String,
    /// Column headers
    pub weekday_names: Vec<&'static str>,
    pub weeks: Vec<[Option<GridCell>; 7]>,
}

/// Everything a month/year picker needs for the month containing "today"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub system: CalendarSystem,
    pub year: i32,
    pub month: u8,
    pub month_name: String,
    pub month_names: Vec<String>,
    pub weekday_names: Vec<&'static str>,
    pub first_day_of_week: Weekday,
    pub direction: TextDirection,
}

/// Resolved calendar preference for one user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarContext {
    system: CalendarSystem,
    settings: CalendarSettings,
}

impl CalendarContext {
    pub const fn new(system: CalendarSystem, settings: CalendarSettings) -> Self {
        Self { system, settings }
    }

    /// Context for a user with `locale`, letting `settings` decide between
    /// the explicit choice and locale detection
    pub fn for_locale(locale: &str, settings: CalendarSettings) -> Self {
        let system = settings.system(locale);
        debug!(locale, %system, "resolved display calendar");
        Self::new(system, settings)
    }

    pub const fn system(&self) -> CalendarSystem {
        self.system
    }

    pub const fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    /// Layout direction for this context's views
    pub const fn direction(&self) -> TextDirection {
        self.settings.direction(self.system)
    }

    /// Display record for a stored date
    ///
    /// ```
    /// use jalali_date::{CalendarContext, CalendarSettings, CalendarSystem, GregorianDate};
    ///
    /// let ctx = CalendarContext::new(CalendarSystem::Jalali, CalendarSettings::default());
    /// let shown = ctx.display(GregorianDate::new(2024, 3, 20)?);
    /// assert_eq!((shown.year, shown.month, shown.day), (1403, 1, 1));
    /// assert_eq!(shown.formatted, "1403/01/01");
    /// # Ok::<(), jalali_date::DateError>(())
    /// ```
    pub fn display(&self, date: GregorianDate) -> DisplayDate {
        let weekday = date.weekday();
        match self.system {
            CalendarSystem::Jalali => {
                let jalali = date.to_jalali();
                DisplayDate {
                    system: self.system,
                    year: i32::from(jalali.year()),
                    month: jalali.month(),
                    day: jalali.day(),
                    weekday,
                    month_name: self.month_label(jalali.month()),
                    weekday_name: weekday.name(),
                    formatted: format::format_jalali(&jalali, DEFAULT_JALALI_PATTERN),
                }
            }
            CalendarSystem::Gregorian => DisplayDate {
                system: self.system,
                year: i32::from(date.year()),
                month: date.month(),
                day: date.day(),
                weekday,
                month_name: self.month_label(date.month()),
                weekday_name: weekday.english_name(),
                formatted: format::format_gregorian(&date, DEFAULT_GREGORIAN_PATTERN),
            },
        }
    }

    /// Formats a stored date with `pattern` in the display calendar
    pub fn label(&self, date: GregorianDate, pattern: &str) -> String {
        let shown = self.display(date);
        format::render(
            pattern,
            &Fields {
                year: shown.year,
                month: shown.month,
                day: shown.day,
                month_name: &shown.month_name,
                weekday_name: shown.weekday_name,
            },
        )
    }

    /// Converts a date entered in the display calendar to its storage date
    ///
    /// # Errors
    /// Returns `DateError` if the date does not exist in the display calendar
    /// or falls outside Gregorian 1..=9999.
    pub fn to_storage(&self, year: i32, month: u8, day: u8) -> Result<GregorianDate, DateError> {
        let result = match self.system {
            CalendarSystem::Jalali => i16::try_from(year)
                .map_err(|_| DateError::InvalidJalaliYear(year))
                .and_then(|year| JalaliDate::new(year, month, day))
                .and_then(JalaliDate::to_gregorian),
            CalendarSystem::Gregorian => u16::try_from(year)
                .map_err(|_| DateError::InvalidYear(year))
                .and_then(|year| GregorianDate::new(year, month, day)),
        };
        if let Err(err) = &result {
            debug!(system = %self.system, year, month, day, %err, "rejected display date");
        }
        result
    }

    /// Lays out a display-calendar month as a week grid
    ///
    /// # Errors
    /// Returns `DateError` for an invalid year or month, or for a month that
    /// runs past the supported range.
    pub fn month_grid(&self, year: i32, month: u8) -> Result<MonthGrid, DateError> {
        let first = self.to_storage(year, month, 1)?;
        let days = match self.system {
            CalendarSystem::Jalali => first.to_jalali().days_in_month(),
            CalendarSystem::Gregorian => month_days(first.year(), first.month_typed()),
        };
        let first_day_number = first.day_number();
        // The last supported years end part way through a month
        GregorianDate::from_day_number(first_day_number + i32::from(days) - 1)?;

        let first_day = self.system.first_day_of_week();
        let mut column =
            usize::from((first.weekday().index() + 7 - first_day.index()) % 7);
        let mut weeks = Vec::with_capacity(6);
        let mut week: [Option<GridCell>; 7] = [const { None }; 7];
        for offset in 0..i32::from(days) {
            let gregorian = GregorianDate::from_day_number(first_day_number + offset)?;
            week[column] = Some(GridCell {
                display: self.display(gregorian),
                gregorian,
            });
            column += 1;
            if column == week.len() {
                weeks.push(std::mem::replace(&mut week, [const { None }; 7]));
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        Ok(MonthGrid {
            system: self.system,
            year,
            month,
            month_name: self.month_label(month),
            weekday_names: self.weekday_header(),
            weeks,
        })
    }

    /// Picker state for the display-calendar month containing `today`
    pub fn navigation(&self, today: GregorianDate) -> Navigation {
        let shown = self.display(today);
        Navigation {
            system: self.system,
            year: shown.year,
            month: shown.month,
            month_name: shown.month_name,
            month_names: (MIN_MONTH..=MAX_MONTH)
                .map(|month| self.month_label(month))
                .collect(),
            weekday_names: self.weekday_header(),
            first_day_of_week: self.system.first_day_of_week(),
            direction: self.direction(),
        }
    }

    fn month_label(&self, month: u8) -> String {
        let index = usize::from(month.clamp(MIN_MONTH, MAX_MONTH)) - 1;
        match self.system {
            CalendarSystem::Jalali if self.settings.month_names => JALALI_MONTHS[index].to_owned(),
            CalendarSystem::Jalali => month.to_string(),
            CalendarSystem::Gregorian => GREGORIAN_MONTHS[index].to_owned(),
        }
    }

    fn weekday_header(&self) -> Vec<&'static str> {
        let mut day = self.system.first_day_of_week();
        let mut header = Vec::with_capacity(Weekday::ALL.len());
        for _ in Weekday::ALL {
            header.push(match self.system {
                CalendarSystem::Jalali => day.name(),
                CalendarSystem::Gregorian => day.english_name(),
            });
            day = day.next();
        }
        header
    }
}
