// SPDX-License-Identifier: MPL-2.0
//! Time units used by date arithmetic and differences.

use super::DateError;
use std::fmt;
use std::str::FromStr;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Days counted as one month by [`TimeUnit::approx_millis`].
pub const APPROX_DAYS_PER_MONTH: i64 = 30;

/// Days counted as one year by [`TimeUnit::approx_millis`].
pub const APPROX_DAYS_PER_YEAR: i64 = 365;

/// A unit of time, from milliseconds to years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// Every unit, smallest first.
    pub const ALL: [TimeUnit; 8] = [
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    /// Length of one unit in milliseconds.
    ///
    /// Months and years have no fixed length; they are counted as 30 and 365
    /// days here. Check [`is_approximate`](Self::is_approximate) before
    /// relying on the result for calendar-exact spans.
    #[must_use]
    pub fn approx_millis(self) -> i64 {
        match self {
            TimeUnit::Milliseconds => 1,
            TimeUnit::Seconds => MILLIS_PER_SECOND,
            TimeUnit::Minutes => MILLIS_PER_MINUTE,
            TimeUnit::Hours => MILLIS_PER_HOUR,
            TimeUnit::Days => MILLIS_PER_DAY,
            TimeUnit::Weeks => 7 * MILLIS_PER_DAY,
            TimeUnit::Months => APPROX_DAYS_PER_MONTH * MILLIS_PER_DAY,
            TimeUnit::Years => APPROX_DAYS_PER_YEAR * MILLIS_PER_DAY,
        }
    }

    /// Returns true for units whose millisecond length is a fixed-length
    /// stand-in for a variable calendar span.
    #[must_use]
    pub fn is_approximate(self) -> bool {
        matches!(self, TimeUnit::Months | TimeUnit::Years)
    }

    /// Canonical plural name (`"days"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = DateError;

    /// Accepts singular, plural and short names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "ms" | "millisecond" | "milliseconds" => TimeUnit::Milliseconds,
            "s" | "sec" | "secs" | "second" | "seconds" => TimeUnit::Seconds,
            "min" | "mins" | "minute" | "minutes" => TimeUnit::Minutes,
            "h" | "hr" | "hrs" | "hour" | "hours" => TimeUnit::Hours,
            "d" | "day" | "days" => TimeUnit::Days,
            "w" | "wk" | "week" | "weeks" => TimeUnit::Weeks,
            "mo" | "month" | "months" => TimeUnit::Months,
            "y" | "yr" | "yrs" | "year" | "years" => TimeUnit::Years,
            _ => return Err(DateError::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}
