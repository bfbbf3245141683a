// SPDX-License-Identifier: MPL-2.0
//! Locale-independent formatting and relative-time computation.
//!
//! Locale-aware rendering lives in [`crate::i18n::I18n`], which combines the
//! styles and [`RelativeTime`] values defined here with per-locale patterns
//! and phrases.

use super::{DateError, DateLike, TimeUnit};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Strftime patterns for common fixed layouts.
pub mod patterns {
    /// Calendar date: `2025-01-15`.
    pub const ISO_DATE: &str = "%Y-%m-%d";
    /// ISO 8601 with millisecond precision: `2025-01-15T10:30:00.000Z`.
    pub const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
    /// Short list-view layout: `Jan 15`.
    pub const SHORT: &str = "%b %d";
    /// Detail-view layout: `2025-01-15 10:30`.
    pub const FULL: &str = "%Y-%m-%d %H:%M";
}

/// How much of the date to spell out in localized formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateStyle {
    /// Numeric date (`1/15/25`).
    Short,
    /// Abbreviated month name (`Jan 15, 2025`).
    #[default]
    Medium,
    /// Full month name (`January 15, 2025`).
    Long,
    /// Weekday and full month name (`Wednesday, January 15, 2025`).
    Full,
}

impl DateStyle {
    pub const ALL: [DateStyle; 4] = [
        DateStyle::Short,
        DateStyle::Medium,
        DateStyle::Long,
        DateStyle::Full,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DateStyle::Short => "short",
            DateStyle::Medium => "medium",
            DateStyle::Long => "long",
            DateStyle::Full => "full",
        }
    }

    /// Message id of this style's pattern in the translation bundles.
    #[must_use]
    pub fn pattern_key(self) -> &'static str {
        match self {
            DateStyle::Short => "date-format-short",
            DateStyle::Medium => "date-format-medium",
            DateStyle::Long => "date-format-long",
            DateStyle::Full => "date-format-full",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateStyle {
    type Err = DateError;

    /// Accepts the style names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DateError::UnknownStyle(s.to_string()))
    }
}

/// How much of the time of day to include in localized formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeStyle {
    /// Hours and minutes.
    #[default]
    Short,
    /// Hours, minutes and seconds.
    Medium,
}

impl TimeStyle {
    pub const ALL: [TimeStyle; 2] = [TimeStyle::Short, TimeStyle::Medium];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimeStyle::Short => "short",
            TimeStyle::Medium => "medium",
        }
    }

    /// Message id of this style's pattern in the translation bundles.
    #[must_use]
    pub fn pattern_key(self) -> &'static str {
        match self {
            TimeStyle::Short => "time-format-short",
            TimeStyle::Medium => "time-format-medium",
        }
    }
}

impl fmt::Display for TimeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeStyle {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DateError::UnknownStyle(s.to_string()))
    }
}

/// Formats a date with a strftime-style pattern.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse, or
/// [`DateError::InvalidPattern`] if the pattern has an unknown specifier.
pub fn format_date(date: impl DateLike, pattern: &str) -> Result<String, DateError> {
    let date = date.to_utc()?;
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.contains(&Item::Error) {
        return Err(DateError::InvalidPattern(pattern.to_string()));
    }
    Ok(date.format_with_items(items.iter()).to_string())
}

/// Canonical calendar-date string (`2025-01-15`).
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse.
pub fn to_iso_date(date: impl DateLike) -> Result<String, DateError> {
    Ok(date.to_utc()?.format(patterns::ISO_DATE).to_string())
}

/// ISO 8601 UTC string with milliseconds (`2025-01-15T10:30:00.000Z`).
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse.
pub fn to_iso_string(date: impl DateLike) -> Result<String, DateError> {
    Ok(date.to_utc()?.format(patterns::ISO_DATETIME).to_string())
}

/// A distance in time expressed in its most natural unit.
///
/// Negative amounts lie in the past relative to the reference instant,
/// positive ones in the future. An amount of zero means "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub amount: i64,
    pub unit: TimeUnit,
}

impl RelativeTime {
    #[must_use]
    pub fn is_past(&self) -> bool {
        self.amount < 0
    }

    #[must_use]
    pub fn is_now(&self) -> bool {
        self.amount == 0
    }
}

/// Unit thresholds for [`relative_time`]: the first unit whose upper bound
/// (exclusive, in seconds) exceeds the distance is used.
const RELATIVE_THRESHOLDS: &[(i64, TimeUnit)] = &[
    (60, TimeUnit::Seconds),
    (60 * 60, TimeUnit::Minutes),
    (24 * 60 * 60, TimeUnit::Hours),
    (7 * 24 * 60 * 60, TimeUnit::Days),
    (30 * 24 * 60 * 60, TimeUnit::Weeks),
    (365 * 24 * 60 * 60, TimeUnit::Months),
];

/// Describes `date` relative to `now` ("3 minutes ago", "in 2 days").
///
/// The amount is truncated toward zero in the chosen unit; months and years
/// use the 30- and 365-day approximations of [`TimeUnit::approx_millis`].
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if either input does not parse.
///
/// # Examples
///
/// ```
/// use frontkit::dates::{relative_time, TimeUnit};
///
/// let rel = relative_time("2025-01-15T10:28:00Z", "2025-01-15T10:30:00Z").unwrap();
/// assert_eq!((rel.amount, rel.unit), (-2, TimeUnit::Minutes));
/// ```
pub fn relative_time(date: impl DateLike, now: impl DateLike) -> Result<RelativeTime, DateError> {
    let seconds = (date.to_utc()? - now.to_utc()?).num_seconds();
    let distance = seconds.saturating_abs();

    let unit = RELATIVE_THRESHOLDS
        .iter()
        .find(|(bound, _)| distance < *bound)
        .map_or(TimeUnit::Years, |(_, unit)| *unit);

    Ok(RelativeTime {
        amount: seconds / (unit.approx_millis() / 1_000),
        unit,
    })
}

/// [`relative_time`] against the current system time.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse.
pub fn relative_to_now(date: impl DateLike) -> Result<RelativeTime, DateError> {
    relative_time(date, Utc::now())
}

/// Current UTC time; the single place the date helpers read the clock.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
