// SPDX-License-Identifier: MPL-2.0
//! `frontkit` bundles two front-end support services.
//!
//! - [`notifications`] - a toast notification manager with auto-expiry and
//!   change subscriptions
//! - [`dates`] - pure date parsing, arithmetic, comparison and formatting
//!   helpers, with localized rendering in [`i18n`]
//!
//! Configuration lives in [`config`], logging setup in [`logging`].

#![doc(html_root_url = "https://docs.rs/frontkit/0.1.0")]

pub mod config;
pub mod dates;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod notifications;

pub use error::{Error, Result};
