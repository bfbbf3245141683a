// SPDX-License-Identifier: MPL-2.0
//! Error type shared by every date helper.

use thiserror::Error;

/// Errors raised by the date utilities.
///
/// All variants are local and synchronous: nothing is retried internally and
/// the caller decides how to recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input could not be resolved to a valid calendar date/time, or an
    /// operation would have produced a value outside the representable range.
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },

    /// A time unit name was not recognized.
    #[error("unknown time unit {0:?}")]
    UnknownUnit(String),

    /// A date or time style name was not recognized.
    #[error("unknown format style {0:?}")]
    UnknownStyle(String),

    /// A strftime-style pattern contained an unsupported specifier.
    #[error("invalid format pattern {0:?}")]
    InvalidPattern(String),
}

impl DateError {
    pub(crate) fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_display_includes_input_and_reason() {
        let err = DateError::invalid("2025-13-01", "month out of range");
        assert_eq!(
            err.to_string(),
            "invalid date \"2025-13-01\": month out of range"
        );
    }

    #[test]
    fn unknown_unit_display_quotes_name() {
        let err = DateError::UnknownUnit("fortnights".to_string());
        assert_eq!(err.to_string(), "unknown time unit \"fortnights\"");
    }
}
