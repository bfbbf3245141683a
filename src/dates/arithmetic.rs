// SPDX-License-Identifier: MPL-2.0
//! Adding to and differencing dates.

use super::{DateError, DateLike, TimeUnit};
use chrono::{DateTime, Months, TimeDelta, Utc};

/// Adds a signed `amount` of `unit` to a date, returning a new value.
///
/// Fixed-length units (milliseconds through weeks) shift by an exact
/// duration. Months and years use calendar arithmetic: the day of month is
/// kept and clamped to the last day of the target month, so
/// `2025-01-31 + 1 month` is `2025-02-28`.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if the input does not parse or the
/// result falls outside the representable range.
///
/// # Examples
///
/// ```
/// use frontkit::dates::{add_time, to_iso_date, TimeUnit};
///
/// let later = add_time("2025-01-15", 3, TimeUnit::Days).unwrap();
/// assert_eq!(to_iso_date(later).unwrap(), "2025-01-18");
/// ```
pub fn add_time(
    date: impl DateLike,
    amount: i64,
    unit: TimeUnit,
) -> Result<DateTime<Utc>, DateError> {
    let start = date.to_utc()?;
    let shifted = match unit {
        TimeUnit::Months => shift_months(start, amount),
        TimeUnit::Years => amount
            .checked_mul(12)
            .and_then(|months| shift_months(start, months)),
        fixed => amount
            .checked_mul(fixed.approx_millis())
            .and_then(TimeDelta::try_milliseconds)
            .and_then(|delta| start.checked_add_signed(delta)),
    };

    shifted.ok_or_else(|| {
        DateError::invalid(
            start.to_rfc3339(),
            format!("adding {amount} {unit} is out of range"),
        )
    })
}

/// Subtracts a signed `amount` of `unit`; the mirror of [`add_time`].
///
/// # Errors
///
/// Same conditions as [`add_time`].
pub fn subtract_time(
    date: impl DateLike,
    amount: i64,
    unit: TimeUnit,
) -> Result<DateTime<Utc>, DateError> {
    let start = date.to_utc()?;
    let negated = amount.checked_neg().ok_or_else(|| {
        DateError::invalid(
            start.to_rfc3339(),
            format!("subtracting {amount} {unit} is out of range"),
        )
    })?;
    add_time(start, negated, unit)
}

/// Difference `a - b` expressed in `unit`, truncated toward zero.
///
/// Months and years are measured with fixed 30- and 365-day lengths, not
/// calendar-accurate spans ([`TimeUnit::is_approximate`] reports this). A
/// difference of one calendar month can therefore come out as `0` or `1`
/// depending on the months involved.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if either input does not parse.
///
/// # Examples
///
/// ```
/// use frontkit::dates::{diff_time, TimeUnit};
///
/// assert_eq!(diff_time("2025-01-18", "2025-01-15", TimeUnit::Days).unwrap(), 3);
/// assert_eq!(diff_time("2025-01-15", "2025-01-18", TimeUnit::Days).unwrap(), -3);
/// ```
pub fn diff_time(a: impl DateLike, b: impl DateLike, unit: TimeUnit) -> Result<i64, DateError> {
    let delta = a.to_utc()? - b.to_utc()?;
    Ok(delta.num_milliseconds() / unit.approx_millis())
}

fn shift_months(date: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}
