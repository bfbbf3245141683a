// SPDX-License-Identifier: MPL-2.0
use frontkit::config::NotificationConfig;
use frontkit::notifications::{Category, Lifetime, Notification, NotificationManager};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

type Log = Arc<Mutex<Vec<Vec<String>>>>;

/// Subscribes an observer recording each delivered snapshot as its messages.
fn record(manager: &NotificationManager) -> (Log, frontkit::notifications::Subscription) {
    let log: Log = Arc::default();
    let sink = Arc::clone(&log);
    let subscription = manager.subscribe(move |active: &[Notification]| {
        let messages = active.iter().map(|n| n.message().to_string()).collect();
        sink.lock().unwrap().push(messages);
    });
    (log, subscription)
}

fn deliveries(log: &Log) -> Vec<Vec<String>> {
    log.lock().unwrap().clone()
}

#[tokio::test(start_paused = true)]
async fn success_uses_default_lifetime_and_dismiss_empties_set() {
    let manager = NotificationManager::new();
    let id = manager.success("Saved").unwrap();

    let active = manager.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].category(), Category::Success);
    assert_eq!(active[0].lifetime(), Lifetime::new(3_000));

    assert!(manager.dismiss(id));
    assert!(manager.is_empty());
}

#[tokio::test(start_paused = true)]
async fn notification_expires_after_its_lifetime() {
    let manager = NotificationManager::new();
    let (log, _subscription) = record(&manager);

    manager
        .show("Working", Category::Info, Some(Lifetime::new(100)))
        .unwrap();
    sleep(Duration::from_millis(50)).await;
    assert_eq!(manager.len(), 1);

    sleep(Duration::from_millis(100)).await;
    assert!(manager.is_empty());
    assert_eq!(
        deliveries(&log),
        vec![vec![], vec!["Working".to_string()], vec![]]
    );
}

#[tokio::test(start_paused = true)]
async fn zero_lifetime_persists() {
    let manager = NotificationManager::new();
    let id = manager
        .show("Sticky", Category::Warning, Some(Lifetime::PERSISTENT))
        .unwrap();

    sleep(Duration::from_secs(3_600)).await;
    assert!(manager.get(id).is_some());
}

#[tokio::test(start_paused = true)]
async fn each_category_expires_on_its_configured_lifetime() {
    let manager = NotificationManager::with_config(NotificationConfig {
        success_ms: 100,
        info_ms: 200,
        warning_ms: 300,
        error_ms: 0,
    });
    manager.success("a").unwrap();
    manager.info("b").unwrap();
    manager.warning("c").unwrap();
    manager.error("d").unwrap();

    let remaining = |m: &NotificationManager| -> Vec<Category> {
        m.active().iter().map(Notification::category).collect()
    };

    sleep(Duration::from_millis(150)).await;
    assert_eq!(
        remaining(&manager),
        vec![Category::Info, Category::Warning, Category::Error]
    );
    sleep(Duration::from_millis(100)).await;
    assert_eq!(remaining(&manager), vec![Category::Warning, Category::Error]);
    sleep(Duration::from_millis(100)).await;
    assert_eq!(remaining(&manager), vec![Category::Error]);
}

#[tokio::test(start_paused = true)]
async fn expiry_after_dismiss_publishes_nothing() {
    let manager = NotificationManager::new();
    let (log, _subscription) = record(&manager);

    let id = manager
        .show("Gone", Category::Info, Some(Lifetime::new(100)))
        .unwrap();
    assert!(manager.dismiss(id));
    sleep(Duration::from_millis(200)).await;

    assert_eq!(
        deliveries(&log),
        vec![vec![], vec!["Gone".to_string()], vec![]]
    );
}

#[tokio::test(start_paused = true)]
async fn expiry_after_dismiss_all_publishes_nothing() {
    let manager = NotificationManager::new();
    manager
        .show("one", Category::Info, Some(Lifetime::new(100)))
        .unwrap();
    manager
        .show("two", Category::Error, Some(Lifetime::new(150)))
        .unwrap();
    let (log, _subscription) = record(&manager);

    manager.dismiss_all();
    sleep(Duration::from_millis(300)).await;

    assert_eq!(
        deliveries(&log),
        vec![vec!["one".to_string(), "two".to_string()], vec![]]
    );
}

#[tokio::test(start_paused = true)]
async fn dropped_subscription_stops_deliveries() {
    let manager = NotificationManager::new();
    let (log, subscription) = record(&manager);

    manager.info("first").unwrap();
    drop(subscription);
    manager.info("second").unwrap();

    assert_eq!(deliveries(&log).len(), 2);
    assert_eq!(manager.subscriber_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn timers_do_not_outlive_the_manager() {
    let manager = NotificationManager::new();
    let (log, subscription) = record(&manager);
    subscription.detach();

    manager
        .show("bye", Category::Success, Some(Lifetime::new(100)))
        .unwrap();
    drop(manager);
    sleep(Duration::from_millis(200)).await;

    assert_eq!(deliveries(&log).len(), 2);
}

#[test]
fn without_runtime_notifications_persist() {
    let manager = NotificationManager::new();
    let id = manager.success("no runtime").unwrap();
    assert!(manager.get(id).is_some());
    assert!(manager.dismiss(id));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_shows_are_all_delivered_in_order() {
    let manager = NotificationManager::new();
    let sizes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&sizes);
    let _subscription = manager.subscribe(move |active: &[Notification]| {
        sink.lock().unwrap().push(active.len());
    });

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let manager = manager.clone();
            tokio::spawn(async move {
                manager
                    .show(format!("task {i}"), Category::Info, Some(Lifetime::PERSISTENT))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(manager.len(), 8);
    let sizes = sizes.lock().unwrap().clone();
    assert_eq!(sizes, (0..=8).collect::<Vec<usize>>());
}
