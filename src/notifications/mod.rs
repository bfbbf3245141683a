// SPDX-License-Identifier: MPL-2.0
//! Toast notification service.
//!
//! A small publish/subscribe list of short-lived, user-facing messages.
//! Each notification expires on its own after a per-category lifetime
//! unless dismissed earlier.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Category`, `Lifetime`
//! - [`manager`] - `NotificationManager` for lifecycle and observer delivery
//!
//! # Usage
//!
//! ```
//! use frontkit::notifications::{Category, NotificationManager};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let manager = NotificationManager::new();
//! let _subscription = manager.subscribe(|active| {
//!     println!("{} toast(s) on screen", active.len());
//! });
//!
//! let id = manager.success("Image saved").unwrap();
//! assert_eq!(manager.get(id).unwrap().category(), Category::Success);
//! manager.dismiss(id);
//! # }
//! ```
//!
//! # Lifetimes
//!
//! Defaults come from [`NotificationConfig`](crate::config::NotificationConfig):
//! success 3s, info 4s, warning 5s, error 8s. A lifetime of zero keeps the
//! notification until it is dismissed.

mod error;
pub mod manager;
pub mod notification;

pub use error::NotificationError;
pub use manager::{NotificationManager, Observer, SubscriberId, Subscription};
pub use notification::{Category, Lifetime, Notification, NotificationId};
