// SPDX-License-Identifier: MPL-2.0
//! Calendar queries: week and month boundaries, leap years.
//!
//! Weeks are Monday-anchored (ISO 8601). Boundaries are computed on the UTC
//! calendar.

use super::{DateError, DateLike};
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc, Weekday};

/// Returns true for Gregorian leap years.
///
/// ```
/// use frontkit::dates::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// ```
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1–12) of `year`.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => {
            return Err(DateError::invalid(
                format!("{year}-{month}"),
                "month must be between 1 and 12",
            ))
        }
    };
    Ok(days)
}

/// Midnight of the Monday starting the week that contains `date`.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse or the
/// week starts before the earliest representable date.
pub fn start_of_week(date: impl DateLike) -> Result<DateTime<Utc>, DateError> {
    let day = date.to_utc()?.date_naive();
    let offset = u64::from(day.weekday().num_days_from_monday());
    let monday = day
        .checked_sub_days(Days::new(offset))
        .ok_or_else(|| DateError::invalid(day.to_string(), "week start out of range"))?;
    Ok(midnight(monday))
}

/// Last millisecond of the Sunday ending the week that contains `date`.
///
/// # Errors
///
/// Same conditions as [`start_of_week`].
pub fn end_of_week(date: impl DateLike) -> Result<DateTime<Utc>, DateError> {
    let monday = start_of_week(date)?.date_naive();
    let sunday = monday
        .checked_add_days(Days::new(6))
        .ok_or_else(|| DateError::invalid(monday.to_string(), "week end out of range"))?;
    Ok(last_millisecond(sunday))
}

/// Midnight (UTC) of the day containing `date`.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse.
pub fn start_of_day(date: impl DateLike) -> Result<DateTime<Utc>, DateError> {
    Ok(midnight(date.to_utc()?.date_naive()))
}

/// Last millisecond (UTC) of the day containing `date`.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse.
pub fn end_of_day(date: impl DateLike) -> Result<DateTime<Utc>, DateError> {
    Ok(last_millisecond(date.to_utc()?.date_naive()))
}

/// Midnight of the first day of the month containing `date`.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse.
pub fn start_of_month(date: impl DateLike) -> Result<DateTime<Utc>, DateError> {
    let day = date.to_utc()?.date_naive();
    let first = day
        .with_day(1)
        .ok_or_else(|| DateError::invalid(day.to_string(), "month start out of range"))?;
    Ok(midnight(first))
}

/// Last millisecond of the last day of the month containing `date`.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse.
pub fn end_of_month(date: impl DateLike) -> Result<DateTime<Utc>, DateError> {
    let day = date.to_utc()?.date_naive();
    let last_day = days_in_month(day.year(), day.month())?;
    let last = day
        .with_day(last_day)
        .ok_or_else(|| DateError::invalid(day.to_string(), "month end out of range"))?;
    Ok(last_millisecond(last))
}

/// ISO 8601 week-numbering year and week (1–53) of `date`.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse.
pub fn iso_week(date: impl DateLike) -> Result<(i32, u32), DateError> {
    let week = date.to_utc()?.iso_week();
    Ok((week.year(), week.week()))
}

/// Returns true if `date` falls on a Saturday or Sunday (UTC).
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse.
pub fn is_weekend(date: impl DateLike) -> Result<bool, DateError> {
    Ok(matches!(date.to_utc()?.weekday(), Weekday::Sat | Weekday::Sun))
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn last_millisecond(day: NaiveDate) -> DateTime<Utc> {
    // 23:59:59.999 is always a valid time of day
    let time = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    day.and_time(time).and_utc()
}
