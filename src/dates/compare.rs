// SPDX-License-Identifier: MPL-2.0
//! Ordering and calendar-day comparisons.

use super::{DateError, DateLike};

/// Returns true if `a` is strictly earlier than `b`.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if either input does not parse.
pub fn is_before(a: impl DateLike, b: impl DateLike) -> Result<bool, DateError> {
    Ok(a.to_utc()? < b.to_utc()?)
}

/// Returns true if `a` is strictly later than `b`.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if either input does not parse.
pub fn is_after(a: impl DateLike, b: impl DateLike) -> Result<bool, DateError> {
    Ok(a.to_utc()? > b.to_utc()?)
}

/// Returns true if both dates fall on the same UTC calendar day.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if either input does not parse.
pub fn is_same_day(a: impl DateLike, b: impl DateLike) -> Result<bool, DateError> {
    Ok(a.to_utc()?.date_naive() == b.to_utc()?.date_naive())
}

/// Returns true if `start <= date <= end`.
///
/// A reversed range (`start > end`) contains nothing.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if any input does not parse.
pub fn is_between(
    date: impl DateLike,
    start: impl DateLike,
    end: impl DateLike,
) -> Result<bool, DateError> {
    let date = date.to_utc()?;
    Ok(start.to_utc()? <= date && date <= end.to_utc()?)
}
