// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, its `Category` and the
//! `Lifetime` that decides when it expires.

use super::NotificationError;
use crate::dates;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Category determines the default lifetime and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Informational message.
    Info,
    /// Warning that doesn't block operation.
    Warning,
    /// Error requiring attention.
    Error,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Success,
        Category::Info,
        Category::Warning,
        Category::Error,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Error => "error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NotificationError::InvalidArgument(format!("unknown category {s:?}")))
    }
}

/// How long a notification stays active, in milliseconds.
///
/// Zero means the notification persists until explicitly dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Lifetime(u64);

impl Lifetime {
    /// A lifetime that never expires on its own.
    pub const PERSISTENT: Lifetime = Lifetime(0);

    /// Creates a lifetime from an unsigned millisecond count.
    #[must_use]
    pub const fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Creates a lifetime from a signed millisecond count.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::InvalidArgument`] if `millis` is negative.
    pub fn from_millis(millis: i64) -> Result<Self, NotificationError> {
        u64::try_from(millis).map(Self).map_err(|_| {
            NotificationError::InvalidArgument(format!(
                "notification lifetime must not be negative, got {millis} ms"
            ))
        })
    }

    /// Creates a lifetime from a `Duration`, saturating at `u64::MAX` ms.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.0 == 0
    }

    /// Delay until auto-expiry, or `None` for persistent notifications.
    #[must_use]
    pub fn expiry_delay(self) -> Option<Duration> {
        (!self.is_persistent()).then(|| Duration::from_millis(self.0))
    }
}

/// A notification displayed to the user.
///
/// Notifications are immutable once created; the manager only changes
/// whether they are in the active set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    message: String,
    category: Category,
    lifetime: Lifetime,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Builds a notification with a fresh id, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::InvalidArgument`] if `message` is empty or
    /// only whitespace.
    pub(crate) fn new(
        message: impl Into<String>,
        category: Category,
        lifetime: Lifetime,
    ) -> Result<Self, NotificationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(NotificationError::InvalidArgument(
                "notification message must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id: NotificationId::next(),
            message,
            category,
            lifetime,
            created_at: dates::now(),
        })
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Returns when this notification was created. Informational only.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
