// SPDX-License-Identifier: MPL-2.0
//! Localized date rendering.
//!
//! Patterns and relative-time phrases come from the translation bundles;
//! month and weekday names come from `chrono`'s locale tables.

use super::I18n;
use crate::dates::{relative_time, DateError, DateLike, DateStyle, RelativeTime, TimeStyle, TimeUnit};
use chrono::format::{Item, StrftimeItems};
use chrono::Locale;
use fluent_bundle::FluentArgs;
use unic_langid::LanguageIdentifier;

impl I18n {
    /// Formats `date` in the current locale.
    ///
    /// With a `time` style the time of day is appended using the locale's
    /// joiner (`January 15, 2025, 2:30 PM`).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if the input does not parse, or
    /// [`DateError::InvalidPattern`] if a translation carries a broken
    /// pattern.
    pub fn format_date(
        &self,
        date: impl DateLike,
        style: DateStyle,
        time: Option<TimeStyle>,
    ) -> Result<String, DateError> {
        let mut pattern = self.tr(style.pattern_key());
        if let Some(time) = time {
            pattern.push_str(&self.tr("datetime-joiner"));
            pattern.push_str(&self.tr(time.pattern_key()));
        }
        self.format_pattern(date, &pattern)
    }

    /// Formats `date` with an explicit strftime pattern, using the current
    /// locale's month and weekday names.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if the input does not parse, or
    /// [`DateError::InvalidPattern`] if the pattern has an unknown specifier.
    pub fn format_pattern(&self, date: impl DateLike, pattern: &str) -> Result<String, DateError> {
        let date = date.to_utc()?;
        let locale = self.chrono_locale();
        let items: Vec<Item<'_>> = StrftimeItems::new_with_locale(pattern, locale).collect();
        if items.contains(&Item::Error) {
            return Err(DateError::InvalidPattern(pattern.to_string()));
        }
        Ok(date
            .format_localized_with_items(items.iter(), locale)
            .to_string())
    }

    /// Describes `date` relative to `now` in the current locale
    /// ("3 minutes ago", "dans 2 jours").
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if either input does not parse.
    pub fn format_relative(&self, date: impl DateLike, now: impl DateLike) -> Result<String, DateError> {
        Ok(self.render_relative(relative_time(date, now)?))
    }

    /// Renders an already computed [`RelativeTime`].
    #[must_use]
    pub fn render_relative(&self, relative: RelativeTime) -> String {
        if relative.is_now() {
            return self.tr("relative-now");
        }
        let direction = if relative.is_past() { "past" } else { "future" };
        let key = format!("relative-{}-{direction}", relative_unit_name(relative.unit));

        let mut args = FluentArgs::new();
        args.set("count", relative.amount.saturating_abs());
        self.tr_with_args(&key, Some(&args))
    }

    /// `chrono` locale matching the current language, `POSIX` if none.
    #[must_use]
    pub fn chrono_locale(&self) -> Locale {
        chrono_locale_for(self.current_locale())
    }
}

fn relative_unit_name(unit: TimeUnit) -> &'static str {
    match unit {
        // sub-second distances are reported in seconds by `relative_time`
        TimeUnit::Milliseconds | TimeUnit::Seconds => "seconds",
        other => other.as_str(),
    }
}

/// Maps a language identifier to `chrono`'s `lang_REGION` locale tables.
///
/// A bare language tries its conventional region (`fr` → `fr_FR`).
fn chrono_locale_for(id: &LanguageIdentifier) -> Locale {
    let language = id.language.as_str();
    let region_candidates = id
        .region
        .iter()
        .map(|region| region.as_str().to_string())
        .chain(std::iter::once(language.to_ascii_uppercase()));

    region_candidates
        .map(|region| format!("{language}_{region}"))
        .find_map(|tag| Locale::try_from(tag.as_str()).ok())
        .unwrap_or(Locale::POSIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_styles() {
        let i18n = I18n::with_locale("en-US");
        let date = "2025-01-15T14:30:45Z";
        assert_eq!(i18n.format_date(date, DateStyle::Short, None).unwrap(), "1/15/25");
        assert_eq!(i18n.format_date(date, DateStyle::Medium, None).unwrap(), "Jan 15, 2025");
        assert_eq!(i18n.format_date(date, DateStyle::Long, None).unwrap(), "January 15, 2025");
        assert_eq!(
            i18n.format_date(date, DateStyle::Full, None).unwrap(),
            "Wednesday, January 15, 2025"
        );
    }

    #[test]
    fn english_date_and_time() {
        let i18n = I18n::with_locale("en-US");
        assert_eq!(
            i18n.format_date("2025-01-15T14:30:45Z", DateStyle::Long, Some(TimeStyle::Short))
                .unwrap(),
            "January 15, 2025, 2:30 PM"
        );
    }

    #[test]
    fn french_styles_use_french_names() {
        let i18n = I18n::with_locale("fr");
        let date = "2025-01-15T14:30:45Z";
        assert_eq!(i18n.format_date(date, DateStyle::Short, None).unwrap(), "15/01/2025");
        assert_eq!(i18n.format_date(date, DateStyle::Long, None).unwrap(), "15 janvier 2025");
        assert_eq!(
            i18n.format_date(date, DateStyle::Long, Some(TimeStyle::Medium)).unwrap(),
            "15 janvier 2025 à 14:30:45"
        );
    }

    #[test]
    fn invalid_input_and_pattern_are_errors() {
        let i18n = I18n::with_locale("en-US");
        assert!(i18n.format_date("soon", DateStyle::Short, None).is_err());
        assert_eq!(
            i18n.format_pattern("2025-01-15", "%Q"),
            Err(DateError::InvalidPattern("%Q".to_string()))
        );
    }

    #[test]
    fn english_relative_phrases() {
        let i18n = I18n::with_locale("en-US");
        let now = "2025-01-15T12:00:00Z";
        let cases = [
            ("2025-01-15T12:00:00Z", "just now"),
            ("2025-01-15T11:59:59Z", "1 second ago"),
            ("2025-01-15T11:58:00Z", "2 minutes ago"),
            ("2025-01-15T15:00:00Z", "in 3 hours"),
            ("2025-01-14T12:00:00Z", "yesterday"),
            ("2025-01-20T12:00:00Z", "in 5 days"),
            ("2024-12-01T12:00:00Z", "last month"),
            ("2022-01-15T12:00:00Z", "3 years ago"),
        ];
        for (date, expected) in cases {
            assert_eq!(i18n.format_relative(date, now).unwrap(), expected, "{date}");
        }
    }

    #[test]
    fn french_relative_phrases() {
        let i18n = I18n::with_locale("fr");
        let now = "2025-01-15T12:00:00Z";
        assert_eq!(i18n.format_relative("2025-01-15T11:58:00Z", now).unwrap(), "il y a 2 minutes");
        assert_eq!(i18n.format_relative("2025-01-18T12:00:00Z", now).unwrap(), "dans 3 jours");
        assert_eq!(i18n.format_relative("2025-01-16T12:00:00Z", now).unwrap(), "demain");
    }

    #[test]
    fn chrono_locale_mapping() {
        let map = |tag: &str| chrono_locale_for(&tag.parse().unwrap());
        assert_eq!(map("fr"), Locale::fr_FR);
        assert_eq!(map("fr-CA"), Locale::fr_CA);
        assert_eq!(map("en-US"), Locale::en_US);
        assert_eq!(map("de"), Locale::de_DE);
        assert_eq!(map("en"), Locale::POSIX);
    }
}
