// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Errors raised when constructing notifications.
///
/// Dismissal and unsubscription never fail, so this is the only error the
/// notification service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// A caller passed a value the service cannot accept: a blank message,
    /// a negative lifetime or an unknown category name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
