// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Locale**: fallback language
//! - **Notifications**: per-category toast lifetimes

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config file nor the OS name an
/// available one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Notification Defaults
// ==========================================================================
//
// Lifetimes grow with severity. Zero keeps a notification until dismissed.

/// Default lifetime of success notifications (in milliseconds).
pub const DEFAULT_SUCCESS_LIFETIME_MS: u64 = 3_000;

/// Default lifetime of info notifications (in milliseconds).
pub const DEFAULT_INFO_LIFETIME_MS: u64 = 4_000;

/// Default lifetime of warning notifications (in milliseconds).
pub const DEFAULT_WARNING_LIFETIME_MS: u64 = 5_000;

/// Default lifetime of error notifications (in milliseconds).
pub const DEFAULT_ERROR_LIFETIME_MS: u64 = 8_000;
