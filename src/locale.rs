//! Deciding which calendar to present.
//!
//! The preference is an explicit value passed to whoever renders dates;
//! nothing here reads or writes global state.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Weekday;
use crate::prelude::*;

/// Prefix of the stored preference keys read by [`CalendarSettings::from_pairs`]
pub const SETTINGS_KEY_PREFIX: &str = "nextcloud.calendar.jalali.";

/// Calendar used for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "jalali")]
    Jalali,
}

impl CalendarSystem {
    /// First column of a week grid: Saturday for Jalali, Sunday otherwise
    pub const fn first_day_of_week(self) -> Weekday {
        match self {
            Self::Gregorian => Weekday::Sunday,
            Self::Jalali => Weekday::Saturday,
        }
    }

    /// Natural text direction for this calendar's locale
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::Gregorian => TextDirection::Ltr,
            Self::Jalali => TextDirection::Rtl,
        }
    }

    /// True for [`CalendarSystem::Jalali`]
    pub const fn is_jalali(self) -> bool {
        matches!(self, Self::Jalali)
    }
}

/// Layout direction handed to the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    #[display(fmt = "ltr")]
    Ltr,
    #[display(fmt = "rtl")]
    Rtl,
}

/// True for Persian locales such as `fa`, `fa_IR` or `fa-AF`, and for
/// descriptive names mentioning Persian or Iran. Case-insensitive.
pub fn is_jalali_locale(locale: &str) -> bool {
    let locale = locale.trim().to_ascii_lowercase();
    locale.starts_with("fa") || locale.contains("persian") || locale.contains("iran")
}

/// Picks the calendar for a user. An explicit setting wins; otherwise the
/// locale decides.
pub fn resolve_calendar(locale: &str, user_setting: Option<bool>) -> CalendarSystem {
    let jalali = user_setting.unwrap_or_else(|| is_jalali_locale(locale));
    if jalali {
        CalendarSystem::Jalali
    } else {
        CalendarSystem::Gregorian
    }
}

/// User preferences for Jalali display.
///
/// Deserializes from camelCase keys with every field optional:
///
/// ```
/// use jalali_date::CalendarSettings;
///
/// let settings: CalendarSettings = serde_json::from_str(r#"{"rtlLayout": false}"#)?;
/// assert!(settings.auto_detect);
/// assert!(!settings.rtl_layout);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarSettings {
    /// Explicit choice; `None` defers to auto-detection
    pub enabled: Option<bool>,
    /// Use Jalali for Persian locales when `enabled` is unset
    pub auto_detect: bool,
    /// Show month names; when false, months render as numbers
    pub month_names: bool,
    /// Lay Jalali views out right-to-left
    pub rtl_layout: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            enabled: None,
            auto_detect: true,
            month_names: true,
            rtl_layout: true,
        }
    }
}

impl CalendarSettings {
    /// Settings that always select the Jalali calendar
    pub fn jalali() -> Self {
        Self {
            enabled: Some(true),
            ..Self::default()
        }
    }

    /// Settings that always select the Gregorian calendar
    pub fn gregorian() -> Self {
        Self {
            enabled: Some(false),
            ..Self::default()
        }
    }

    /// Reads settings from stored key/value flags.
    ///
    /// Keys are `SETTINGS_KEY_PREFIX` followed by `enabled`, `autoDetect`,
    /// `monthNames` or `rtlLayout`; values are `"true"` or `"false"`. Other
    /// keys are ignored and unparseable values keep the default.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            let Some(name) = key.strip_prefix(SETTINGS_KEY_PREFIX) else {
                continue;
            };
            let flag = match value.trim() {
                "true" => true,
                "false" => false,
                other => {
                    warn!(key, value = other, "ignoring unparseable calendar setting");
                    continue;
                }
            };
            match name {
                "enabled" => settings.enabled = Some(flag),
                "autoDetect" => settings.auto_detect = flag,
                "monthNames" => settings.month_names = flag,
                "rtlLayout" => settings.rtl_layout = flag,
                _ => debug!(key, "unknown calendar setting"),
            }
        }
        settings
    }

    /// Calendar to use for a user with this locale
    pub fn system(&self, locale: &str) -> CalendarSystem {
        match self.enabled {
            Some(enabled) => resolve_calendar(locale, Some(enabled)),
            None if self.auto_detect => resolve_calendar(locale, None),
            None => CalendarSystem::Gregorian,
        }
    }

    /// Layout direction for views in `system`
    pub const fn direction(&self, system: CalendarSystem) -> TextDirection {
        match system {
            CalendarSystem::Jalali if self.rtl_layout => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_jalali_locale() {
        assert!(is_jalali_locale("fa"));
        assert!(is_jalali_locale("fa_IR"));
        assert!(is_jalali_locale("FA"));
        assert!(is_jalali_locale("Persian"));
        assert!(is_jalali_locale("en_Iran"));
        assert!(!is_jalali_locale("en"));
        assert!(!is_jalali_locale("de"));
        assert!(!is_jalali_locale("fr"));
        assert!(!is_jalali_locale(""));
    }

    #[test]
    fn test_resolve_calendar_explicit_setting_wins() {
        assert_eq!(resolve_calendar("en", Some(true)), CalendarSystem::Jalali);
        assert_eq!(resolve_calendar("fa", Some(false)), CalendarSystem::Gregorian);
        assert_eq!(resolve_calendar("fa_IR", None), CalendarSystem::Jalali);
        assert_eq!(resolve_calendar("en_US", None), CalendarSystem::Gregorian);
    }

    #[test]
    fn test_calendar_system_conventions() {
        assert_eq!(CalendarSystem::Jalali.first_day_of_week(), Weekday::Saturday);
        assert_eq!(CalendarSystem::Gregorian.first_day_of_week(), Weekday::Sunday);
        assert_eq!(CalendarSystem::Jalali.direction(), TextDirection::Rtl);
        assert_eq!(CalendarSystem::Jalali.to_string(), "jalali");
        assert_eq!(TextDirection::Rtl.to_string(), "rtl");
    }

    #[test]
    fn test_settings_default() {
        let settings = CalendarSettings::default();
        assert_eq!(settings.enabled, None);
        assert!(settings.auto_detect);
        assert!(settings.month_names);
        assert!(settings.rtl_layout);
    }

    #[test]
    fn test_settings_system() {
        assert_eq!(CalendarSettings::default().system("fa"), CalendarSystem::Jalali);
        assert_eq!(CalendarSettings::default().system("en"), CalendarSystem::Gregorian);
        assert_eq!(CalendarSettings::jalali().system("en"), CalendarSystem::Jalali);
        assert_eq!(CalendarSettings::gregorian().system("fa"), CalendarSystem::Gregorian);

        let manual = CalendarSettings {
            auto_detect: false,
            ..CalendarSettings::default()
        };
        assert_eq!(manual.system("fa"), CalendarSystem::Gregorian);
    }

    #[test]
    fn test_settings_direction() {
        let settings = CalendarSettings::default();
        assert_eq!(settings.direction(CalendarSystem::Jalali), TextDirection::Rtl);
        assert_eq!(settings.direction(CalendarSystem::Gregorian), TextDirection::Ltr);
        let ltr = CalendarSettings {
            rtl_layout: false,
            ..settings
        };
        assert_eq!(ltr.direction(CalendarSystem::Jalali), TextDirection::Ltr);
    }

    #[test]
    fn test_settings_from_pairs() {
        let settings = CalendarSettings::from_pairs([
            ("nextcloud.calendar.jalali.enabled", "true"),
            ("nextcloud.calendar.jalali.monthNames", "false"),
            ("nextcloud.calendar.jalali.rtlLayout", "maybe"),
            ("nextcloud.calendar.jalali.showToggle", "true"),
            ("unrelated.key", "false"),
        ]);
        assert_eq!(settings.enabled, Some(true));
        assert!(settings.auto_detect);
        assert!(!settings.month_names);
        assert!(settings.rtl_layout);
    }

    #[test]
    fn test_settings_from_no_pairs() {
        let settings = CalendarSettings::from_pairs(std::iter::empty());
        assert_eq!(settings, CalendarSettings::default());
    }

    #[test]
    fn test_settings_serde() {
        let settings: CalendarSettings =
            serde_json::from_str(r#"{"enabled": true, "autoDetect": false}"#).unwrap();
        assert_eq!(settings.enabled, Some(true));
        assert!(!settings.auto_detect);
        assert!(settings.month_names);

        let json = serde_json::to_string(&CalendarSettings::default()).unwrap();
        assert_eq!(
            json,
            r#"{"enabled":null,"autoDetect":true,"monthNames":true,"rtlLayout":true}"#
        );
    }
}
