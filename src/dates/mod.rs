// SPDX-License-Identifier: MPL-2.0
//! Pure date helpers.
//!
//! Every function here is deterministic and side-effect free (apart from
//! [`now`] and [`relative_to_now`], which read the system clock). Inputs are
//! anything implementing [`DateLike`]; results are `chrono::DateTime<Utc>`
//! values or plain data, never mutated inputs.
//!
//! # Components
//!
//! - [`parse`] - [`DateLike`] conversions and [`parse_date`]
//! - [`unit`] - [`TimeUnit`] and its fixed-length approximations
//! - [`arithmetic`] - [`add_time`], [`subtract_time`], [`diff_time`]
//! - [`compare`] - ordering, same-day and inclusive range checks
//! - [`calendar`] - week/month boundaries, leap years, ISO weeks
//! - [`format`] - fixed-pattern formatting and [`relative_time`]
//!
//! # Precision caveat
//!
//! [`diff_time`] measures months as 30 days and years as 365 days.
//! [`TimeUnit::is_approximate`] tells callers when that applies.

pub mod arithmetic;
pub mod calendar;
pub mod compare;
mod error;
pub mod format;
pub mod parse;
pub mod unit;

pub use arithmetic::{add_time, diff_time, subtract_time};
pub use calendar::{
    days_in_month, end_of_day, end_of_month, end_of_week, is_leap_year, is_weekend, iso_week,
    start_of_day, start_of_month, start_of_week,
};
pub use compare::{is_after, is_before, is_between, is_same_day};
pub use error::DateError;
pub use format::{
    format_date, now, patterns, relative_time, relative_to_now, to_iso_date, to_iso_string,
    DateStyle, RelativeTime, TimeStyle,
};
pub use parse::{parse_date, DateLike};
pub use unit::TimeUnit;
