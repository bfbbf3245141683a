// SPDX-License-Identifier: MPL-2.0
//! Conversion of date-like values into the canonical `DateTime<Utc>`.
//!
//! Every helper in [`crate::dates`] accepts anything implementing
//! [`DateLike`], so callers can pass ISO strings, Unix milliseconds or
//! `chrono` values interchangeably.

use super::DateError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// ISO 8601 layouts with an explicit offset that RFC 3339 does not cover:
/// minute precision (`2025-01-15T10:30Z`), basic offsets (`+0200`) and
/// hour-only offsets (`+02`). `%#z` also accepts `Z`.
const OFFSET_DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Naive date-time layouts accepted by [`parse_date`], tried in order.
///
/// Naive values carry no offset and are interpreted as UTC.
const NAIVE_DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Calendar-date layout (`2025-01-15`), midnight UTC.
const DATE_PATTERN: &str = "%Y-%m-%d";

/// A value that can be resolved to a point in time.
pub trait DateLike {
    /// Resolves the value to a UTC date-time.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] when the value does not describe a
    /// valid calendar date/time.
    fn to_utc(&self) -> Result<DateTime<Utc>, DateError>;
}

impl DateLike for str {
    fn to_utc(&self) -> Result<DateTime<Utc>, DateError> {
        parse_str(self)
    }
}

impl DateLike for String {
    fn to_utc(&self) -> Result<DateTime<Utc>, DateError> {
        parse_str(self)
    }
}

/// Unix timestamp in milliseconds.
impl DateLike for i64 {
    fn to_utc(&self) -> Result<DateTime<Utc>, DateError> {
        DateTime::from_timestamp_millis(*self)
            .ok_or_else(|| DateError::invalid(self.to_string(), "timestamp out of range"))
    }
}

impl DateLike for NaiveDate {
    fn to_utc(&self) -> Result<DateTime<Utc>, DateError> {
        Ok(self.and_time(NaiveTime::MIN).and_utc())
    }
}

impl DateLike for NaiveDateTime {
    fn to_utc(&self) -> Result<DateTime<Utc>, DateError> {
        Ok(self.and_utc())
    }
}

impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn to_utc(&self) -> Result<DateTime<Utc>, DateError> {
        Ok(self.with_timezone(&Utc))
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn to_utc(&self) -> Result<DateTime<Utc>, DateError> {
        (**self).to_utc()
    }
}

/// Parses any date-like value into a canonical UTC date-time.
///
/// Accepted string forms: RFC 3339 (`2025-01-15T10:30:00+02:00`), other
/// ISO 8601 offset forms (`2025-01-15T10:30Z`, `2025-01-15T10:30:00+0200`),
/// RFC 2822, naive ISO date-times (`2025-01-15T10:30`, `2025-01-15 10:30:00`)
/// and plain calendar dates (`2025-01-15`).
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] when the input cannot be resolved.
///
/// # Examples
///
/// ```
/// use frontkit::dates::{parse_date, to_iso_date};
///
/// let date = parse_date("2025-01-15").unwrap();
/// assert_eq!(to_iso_date(date).unwrap(), "2025-01-15");
/// assert!(parse_date("not a date").is_err());
/// ```
pub fn parse_date(input: impl DateLike) -> Result<DateTime<Utc>, DateError> {
    input.to_utc()
}

fn parse_str(input: &str) -> Result<DateTime<Utc>, DateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateError::invalid(input, "empty input"));
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(date.with_timezone(&Utc));
    }

    for pattern in OFFSET_DATETIME_PATTERNS {
        if let Ok(date) = DateTime::parse_from_str(trimmed, pattern) {
            return Ok(date.with_timezone(&Utc));
        }
    }

    for pattern in NAIVE_DATETIME_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, DATE_PATTERN)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|err| DateError::invalid(input, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::to_iso_string;
    use chrono::{Datelike, FixedOffset, Timelike};

    #[test]
    fn calendar_date_parses_to_midnight_utc() {
        let date = parse_date("2025-01-15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 1, 15));
        assert_eq!((date.hour(), date.minute(), date.second()), (0, 0, 0));
    }

    #[test]
    fn rfc3339_offset_is_normalized_to_utc() {
        let date = parse_date("2025-01-15T10:30:00+02:00").unwrap();
        assert_eq!(date.hour(), 8);
        assert_eq!(date.minute(), 30);
    }

    #[test]
    fn naive_datetime_forms_are_accepted() {
        for input in [
            "2025-01-15T10:30",
            "2025-01-15T10:30:00",
            "2025-01-15T10:30:00.250",
            "2025-01-15 10:30",
            "2025-01-15 10:30:00",
        ] {
            let date = parse_date(input).unwrap_or_else(|e| panic!("{input}: {e}"));
            assert_eq!(date.hour(), 10, "{input}");
            assert_eq!(date.minute(), 30, "{input}");
        }
    }

    #[test]
    fn iso_offset_forms_are_accepted() {
        let cases = [
            ("2025-01-15T10:30Z", "2025-01-15T10:30:00.000Z"),
            ("2025-01-15T10:30+02:00", "2025-01-15T08:30:00.000Z"),
            ("2025-01-15T10:30+0200", "2025-01-15T08:30:00.000Z"),
            ("2025-01-15T10:30:00+0200", "2025-01-15T08:30:00.000Z"),
            ("2025-01-15T10:30:00.250-0130", "2025-01-15T12:00:00.250Z"),
            ("2025-01-15T10:30:00+02", "2025-01-15T08:30:00.000Z"),
            ("2025-01-15 10:30+01:00", "2025-01-15T09:30:00.000Z"),
        ];
        for (input, expected) in cases {
            let date = parse_date(input).unwrap_or_else(|e| panic!("{input}: {e}"));
            assert_eq!(to_iso_string(date).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn offset_forms_still_reject_impossible_dates() {
        assert!(parse_date("2025-02-30T10:30Z").is_err());
        assert!(parse_date("2025-01-15T25:00+02:00").is_err());
    }

    #[test]
    fn rfc2822_is_accepted() {
        let date = parse_date("Wed, 15 Jan 2025 10:00:00 +0000").unwrap();
        assert_eq!(date.day(), 15);
        assert_eq!(date.hour(), 10);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse_date("  2025-01-15\n").is_ok());
    }

    #[test]
    fn garbage_and_impossible_dates_are_rejected() {
        for input in ["", "   ", "hello", "2025-02-30", "2025-13-01", "15/01/2025"] {
            let err = parse_date(input).unwrap_err();
            assert!(
                matches!(err, DateError::InvalidDate { .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn unix_millis_are_accepted() {
        let date = parse_date(1_736_899_200_000_i64).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 1, 15));
    }

    #[test]
    fn out_of_range_millis_are_rejected() {
        assert!(parse_date(i64::MAX).is_err());
    }

    #[test]
    fn chrono_values_pass_through() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(parse_date(naive).unwrap().day(), 29);

        let offset = FixedOffset::east_opt(3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 3, 1, 0, 30, 0).unwrap();
        let utc = parse_date(local).unwrap();
        assert_eq!((utc.month(), utc.day(), utc.hour()), (2, 29, 23));
    }

    #[test]
    fn owned_and_borrowed_strings_work() {
        let owned = String::from("2025-01-15");
        assert!(parse_date(&owned).is_ok());
        assert!(parse_date(owned).is_ok());
    }
}
