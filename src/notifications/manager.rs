// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationManager` owns the ordered active set, publishes it to
//! observers on every change and schedules auto-expiry timers.
//!
//! Publishing never runs under the state lock. Each change enqueues a
//! snapshot while the lock is held, then a single drainer delivers queued
//! snapshots in order. A call made from inside an observer (or from an
//! expiry timer while another thread is delivering) only enqueues; the
//! active drainer delivers it after the current snapshot.

use super::notification::{Category, Lifetime, Notification, NotificationId};
use super::NotificationError;
use crate::config::NotificationConfig;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::{debug, trace, warn};

/// Callback receiving the active set.
pub type Observer = Arc<dyn Fn(&[Notification]) + Send + Sync>;

/// Identifies one subscription on a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriberId(u64);

struct Subscriber {
    observer: Observer,
    /// Revision of the snapshot delivered on subscription; only later
    /// broadcasts reach this subscriber.
    since: u64,
}

struct Delivery {
    revision: u64,
    /// `None` broadcasts to every subscriber.
    target: Option<SubscriberId>,
    snapshot: Arc<[Notification]>,
}

#[derive(Default)]
struct State {
    active: Vec<Notification>,
    subscribers: BTreeMap<SubscriberId, Subscriber>,
    next_subscriber: u64,
    revision: u64,
    pending: VecDeque<Delivery>,
    timers: HashMap<NotificationId, AbortHandle>,
}

impl State {
    fn snapshot(&self) -> Arc<[Notification]> {
        Arc::from(self.active.as_slice())
    }

    fn enqueue_broadcast(&mut self) {
        self.revision += 1;
        let delivery = Delivery {
            revision: self.revision,
            target: None,
            snapshot: self.snapshot(),
        };
        self.pending.push_back(delivery);
    }

    fn recipients(&self, delivery: &Delivery) -> Vec<(SubscriberId, Observer)> {
        match delivery.target {
            Some(id) => self
                .subscribers
                .get(&id)
                .map(|s| (id, Arc::clone(&s.observer)))
                .into_iter()
                .collect(),
            None => self
                .subscribers
                .iter()
                .filter(|(_, s)| s.since < delivery.revision)
                .map(|(id, s)| (*id, Arc::clone(&s.observer)))
                .collect(),
        }
    }
}

struct Inner {
    config: NotificationConfig,
    state: Mutex<State>,
    delivering: AtomicBool,
}

/// Why a notification left the active set.
#[derive(Debug, Clone, Copy)]
enum Removal {
    Dismissed,
    Expired,
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, State> {
        // State is only mutated in short sections that cannot panic midway.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn remove(&self, id: NotificationId, cause: Removal) -> bool {
        {
            let mut state = self.state();
            let timer = state.timers.remove(&id);
            if let (Removal::Dismissed, Some(timer)) = (cause, timer) {
                timer.abort();
            }
            let Some(position) = state.active.iter().position(|n| n.id() == id) else {
                trace!(%id, ?cause, "notification already gone");
                return false;
            };
            state.active.remove(position);
            state.enqueue_broadcast();
        }
        debug!(%id, ?cause, "notification removed");
        self.drain();
        true
    }

    fn unsubscribe(&self, id: SubscriberId) {
        let removed = self.state().subscribers.remove(&id);
        if removed.is_some() {
            debug!(?id, "observer unsubscribed");
        }
    }

    /// Delivers queued snapshots until the queue is empty.
    ///
    /// Returns immediately if another call is already draining; that call
    /// picks up whatever was enqueued.
    ///
    /// If an observer panics, the remaining recipients of that snapshot are
    /// skipped and every still-queued snapshot is discarded. Observers catch
    /// up with the full active set on the next change.
    fn drain(&self) {
        if self.delivering.swap(true, Ordering::AcqRel) {
            return;
        }
        let mut guard = DrainGuard {
            inner: self,
            armed: true,
        };

        loop {
            let (snapshot, recipients) = {
                let mut state = self.state();
                let Some(delivery) = state.pending.pop_front() else {
                    // Cleared under the lock so a concurrent enqueue either
                    // lands before this check or sees the flag released.
                    self.delivering.store(false, Ordering::Release);
                    guard.armed = false;
                    break;
                };
                let recipients = state.recipients(&delivery);
                (delivery.snapshot, recipients)
            };

            for (id, observer) in recipients {
                if self.state().subscribers.contains_key(&id) {
                    observer(&snapshot);
                }
            }
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        for (_, timer) in state.timers.drain() {
            timer.abort();
        }
    }
}

/// Drops queued snapshots and releases the delivery flag if an observer
/// panics mid-drain.
struct DrainGuard<'a> {
    inner: &'a Inner,
    armed: bool,
}

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut state = self.inner.state();
            let dropped = state.pending.len();
            state.pending.clear();
            self.inner.delivering.store(false, Ordering::Release);
            warn!(dropped, "observer panicked; queued snapshots discarded");
        }
    }
}

/// Holds the active notifications and publishes every change to observers.
///
/// The manager is a cheap-to-clone handle; clones share the same active set.
/// Pass it explicitly to whichever component needs to post or observe
/// notifications.
///
/// Auto-expiry timers run on the ambient tokio runtime. Showing an expiring
/// notification outside a runtime keeps it until it is dismissed and logs a
/// warning.
#[derive(Clone)]
pub struct NotificationManager {
    inner: Arc<Inner>,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NotificationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state();
        f.debug_struct("NotificationManager")
            .field("active", &state.active.len())
            .field("subscribers", &state.subscribers.len())
            .field("pending_timers", &state.timers.len())
            .finish()
    }
}

impl NotificationManager {
    /// Creates an empty manager with default per-category lifetimes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(NotificationConfig::default())
    }

    /// Creates an empty manager using the given lifetimes.
    #[must_use]
    pub fn with_config(config: NotificationConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                state: Mutex::new(State::default()),
                delivering: AtomicBool::new(false),
            }),
        }
    }

    /// Returns the lifetimes this manager applies by default.
    #[must_use]
    pub fn config(&self) -> &NotificationConfig {
        &self.inner.config
    }

    /// Shows a notification and returns its id.
    ///
    /// The lifetime defaults to the category's configured value. A non-zero
    /// lifetime schedules a one-shot timer that dismisses this notification
    /// when it fires.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::InvalidArgument`] if `message` is blank.
    pub fn show(
        &self,
        message: impl Into<String>,
        category: Category,
        lifetime: Option<Lifetime>,
    ) -> Result<NotificationId, NotificationError> {
        let lifetime = lifetime.unwrap_or_else(|| self.inner.config.lifetime_for(category));
        let notification = Notification::new(message, category, lifetime)?;
        let id = notification.id();

        {
            let mut state = self.inner.state();
            state.active.push(notification);
            state.enqueue_broadcast();
            if let Some(delay) = lifetime.expiry_delay() {
                if let Some(timer) = self.schedule_expiry(id, delay) {
                    state.timers.insert(id, timer);
                }
            }
        }

        debug!(%id, %category, lifetime_ms = lifetime.as_millis(), "notification shown");
        self.inner.drain();
        Ok(id)
    }

    /// Shows a success notification with the default lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::InvalidArgument`] if `message` is blank.
    pub fn success(&self, message: impl Into<String>) -> Result<NotificationId, NotificationError> {
        self.show(message, Category::Success, None)
    }

    /// Shows an info notification with the default lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::InvalidArgument`] if `message` is blank.
    pub fn info(&self, message: impl Into<String>) -> Result<NotificationId, NotificationError> {
        self.show(message, Category::Info, None)
    }

    /// Shows a warning notification with the default lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::InvalidArgument`] if `message` is blank.
    pub fn warning(&self, message: impl Into<String>) -> Result<NotificationId, NotificationError> {
        self.show(message, Category::Warning, None)
    }

    /// Shows an error notification with the default lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::InvalidArgument`] if `message` is blank.
    pub fn error(&self, message: impl Into<String>) -> Result<NotificationId, NotificationError> {
        self.show(message, Category::Error, None)
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Dismissing
    /// an absent id is a no-op and publishes nothing.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.inner.remove(id, Removal::Dismissed)
    }

    /// Clears every notification and publishes the empty set, even if it
    /// was already empty. Pending expiry timers are cancelled.
    pub fn dismiss_all(&self) {
        let cleared = {
            let mut state = self.inner.state();
            for (_, timer) in state.timers.drain() {
                timer.abort();
            }
            let cleared = state.active.len();
            state.active.clear();
            state.enqueue_broadcast();
            cleared
        };
        debug!(cleared, "all notifications dismissed");
        self.inner.drain();
    }

    /// Registers an observer.
    ///
    /// The observer immediately receives the current active set, then the
    /// full set again after every change, in the order changes occurred.
    /// Dropping the returned [`Subscription`] unsubscribes.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&[Notification]) + Send + Sync + 'static,
    {
        let id = {
            let mut state = self.inner.state();
            let id = SubscriberId(state.next_subscriber);
            state.next_subscriber += 1;
            let since = state.revision;
            state.subscribers.insert(
                id,
                Subscriber {
                    observer: Arc::new(observer),
                    since,
                },
            );
            let initial = Delivery {
                revision: since,
                target: Some(id),
                snapshot: state.snapshot(),
            };
            state.pending.push_back(initial);
            id
        };

        debug!(?id, "observer subscribed");
        self.inner.drain();
        Subscription {
            manager: Arc::downgrade(&self.inner),
            id,
            detached: false,
        }
    }

    /// Returns a copy of the active set, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        self.inner.state().active.clone()
    }

    /// Returns the active notification with this id, if any.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.inner
            .state()
            .active
            .iter()
            .find(|n| n.id() == id)
            .cloned()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.state().active.len()
    }

    /// Returns whether there are no active notifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.state().active.is_empty()
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.state().subscribers.len()
    }

    /// Tears the manager down: cancels pending timers, drops every observer
    /// and clears the active set without publishing.
    ///
    /// Outstanding [`Subscription`]s become inert; cancelling them is a
    /// no-op. The manager stays usable afterwards.
    pub fn shutdown(&self) {
        let (subscribers, cleared) = {
            let mut state = self.inner.state();
            for (_, timer) in state.timers.drain() {
                timer.abort();
            }
            state.pending.clear();
            let cleared = state.active.len();
            state.active.clear();
            (std::mem::take(&mut state.subscribers), cleared)
        };
        debug!(
            cleared,
            observers = subscribers.len(),
            "notification manager shut down"
        );
        // Observers may own subscriptions; drop them outside the lock.
        drop(subscribers);
    }

    fn schedule_expiry(&self, id: NotificationId, delay: Duration) -> Option<AbortHandle> {
        let Ok(runtime) = Handle::try_current() else {
            warn!(%id, "no async runtime; notification will persist until dismissed");
            return None;
        };
        let manager: Weak<Inner> = Arc::downgrade(&self.inner);
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = manager.upgrade() {
                inner.remove(id, Removal::Expired);
            }
        });
        Some(task.abort_handle())
    }
}

/// Handle returned by [`NotificationManager::subscribe`].
///
/// The observer stays registered until the handle is dropped,
/// [`unsubscribe`](Self::unsubscribe)d, or [`detach`](Self::detach)ed.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    manager: Weak<Inner>,
    id: SubscriberId,
    detached: bool,
}

impl Subscription {
    #[must_use]
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Cancels the subscription. No further snapshots are delivered.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }

    /// Keeps the observer registered for the lifetime of the manager.
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("detached", &self.detached)
            .finish_non_exhaustive()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.detached {
            return;
        }
        if let Some(inner) = self.manager.upgrade() {
            inner.unsubscribe(self.id);
        }
    }
}
