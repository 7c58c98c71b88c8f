//! Clock and date strings.
//!
//! Weekday and month names depend on a locale, which is always taken from
//! the configuration and never from the process environment, so two
//! machines with the same config render the same text.

use crate::config::ClockConfig;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale, TimeZone};
use std::fmt;

/// Errors from building a [`ClockFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unknown locale {0:?}")]
    UnknownLocale(String),
    #[error("invalid {field} {format:?}")]
    InvalidFormat { field: &'static str, format: String },
}

/// Formats the time and date lines of the overlay.
#[derive(Debug, Clone)]
pub struct ClockFormatter {
    time_format: String,
    date_format: String,
    locale: Locale,
}

impl ClockFormatter {
    /// Build a formatter, rejecting unknown locales and malformed
    /// strftime strings up front so a bad config fails at startup rather
    /// than on the first redraw.
    pub fn new(time_format: &str, date_format: &str, locale: &str) -> Result<Self, FormatError> {
        let locale =
            Locale::try_from(locale).map_err(|_| FormatError::UnknownLocale(locale.to_string()))?;
        check_format("time_format", time_format)?;
        check_format("date_format", date_format)?;
        Ok(Self {
            time_format: time_format.to_string(),
            date_format: date_format.to_string(),
            locale,
        })
    }

    pub fn from_config(config: &ClockConfig) -> Result<Self, FormatError> {
        Self::new(&config.time_format, &config.date_format, &config.locale)
    }

    /// The clock line, e.g. `"09:41"`.
    pub fn time<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        now.format_localized(&self.time_format, self.locale).to_string()
    }

    /// The date line, e.g. `"Wed, Oct 14"`.
    pub fn date<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        now.format_localized(&self.date_format, self.locale).to_string()
    }
}

impl Default for ClockFormatter {
    fn default() -> Self {
        let defaults = ClockConfig::default();
        Self {
            time_format: defaults.time_format,
            date_format: defaults.date_format,
            locale: Locale::en_US,
        }
    }
}

fn check_format(field: &'static str, format: &str) -> Result<(), FormatError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::InvalidFormat {
            field,
            format: format.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 4, 7, 5, 0).unwrap()
    }

    #[test]
    fn default_formats() {
        let f = ClockFormatter::default();
        assert_eq!(f.time(&sample()), "07:05");
        // `%-d` drops the leading zero.
        assert_eq!(f.date(&sample()), "Sun, Oct 4");
    }

    #[test]
    fn explicit_en_us_matches_default() {
        let f = ClockFormatter::new("%H:%M", "%a, %b %-d", "en_US").unwrap();
        assert_eq!(f.date(&sample()), ClockFormatter::default().date(&sample()));
    }

    #[test]
    fn custom_formats() {
        let f = ClockFormatter::new("%I:%M %p", "%Y-%m-%d", "en_US").unwrap();
        assert_eq!(f.time(&sample()), "07:05 AM");
        assert_eq!(f.date(&sample()), "2026-10-04");
    }

    #[test]
    fn uses_local_wall_clock_of_the_timestamp() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = sample().with_timezone(&tz);
        let f = ClockFormatter::default();
        assert_eq!(f.time(&now), "16:05");
    }

    #[test]
    fn weekday_and_month_follow_configured_locale() {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 9, 41, 0).unwrap();
        let de = ClockFormatter::new("%H:%M", "%a, %b %-d", "de_DE").unwrap();
        assert_eq!(de.date(&now), "Mi, Okt 14");
        let fr = ClockFormatter::new("%H:%M", "%a, %b %-d", "fr_FR").unwrap();
        assert_eq!(fr.date(&now), "mer., oct. 14");
        assert_eq!(ClockFormatter::default().date(&now), "Wed, Oct 14");
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let err = ClockFormatter::new("%H:%M", "%a", "xx_YY").unwrap_err();
        assert_eq!(err, FormatError::UnknownLocale("xx_YY".into()));
    }

    #[test]
    fn malformed_format_is_rejected() {
        let err = ClockFormatter::new("%H:%", "%a", "en_US").unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidFormat {
                field: "time_format",
                ..
            }
        ));
    }
}
