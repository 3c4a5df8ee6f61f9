// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use super::helpers::{FixedClock, notification_store, sample_notification_draft};

const NOW: time::OffsetDateTime = datetime!(2025-06-01 12:00:00 UTC);

#[tokio::test]
async fn test_fetch_computes_unread_count() {
    let mut store = notification_store(FixedClock(NOW));

    store.fetch().await;

    assert_eq!(store.notifications().len(), 4);
    assert_eq!(store.unread_count(), 2);
}

#[tokio::test]
async fn test_mark_as_read_is_idempotent() {
    let mut store = notification_store(FixedClock(NOW));
    store.fetch().await;

    store.mark_as_read("1");
    assert_eq!(store.unread_count(), 1);
    assert!(store.notifications()[0].read);

    // Marking an already-read notification changes nothing.
    store.mark_as_read("1");
    assert_eq!(store.unread_count(), 1);
}

#[tokio::test]
async fn test_mark_as_read_unknown_id_does_not_corrupt_count() {
    let mut store = notification_store(FixedClock(NOW));
    store.fetch().await;

    store.mark_as_read("missing");

    assert_eq!(store.unread_count(), 2);
    assert_eq!(store.notifications().len(), 4);
}

#[tokio::test]
async fn test_mark_all_as_read_from_any_state() {
    let mut store = notification_store(FixedClock(NOW));
    store.fetch().await;
    store.add(sample_notification_draft());
    store.mark_as_read("2");

    store.mark_all_as_read();

    assert_eq!(store.unread_count(), 0);
    assert!(store.notifications().iter().all(|n| n.read));

    // Calling again keeps the count at zero.
    store.mark_all_as_read();
    assert_eq!(store.unread_count(), 0);
}

#[tokio::test]
async fn test_add_prepends_unread_notification() {
    let mut store = notification_store(FixedClock(NOW));
    store.fetch().await;
    let unread_before = store.unread_count();

    let id = store.add(sample_notification_draft());

    let first = &store.notifications()[0];
    assert_eq!(first.id, id);
    assert!(!first.read);
    assert_eq!(first.created_at, NOW);
    assert_eq!(store.unread_count(), unread_before + 1);
    assert_eq!(store.notifications().len(), 5);
}

#[test]
fn test_add_to_empty_store() {
    let mut store = notification_store(FixedClock(NOW));

    store.add(sample_notification_draft());

    assert_eq!(store.notifications().len(), 1);
    assert_eq!(store.unread_count(), 1);
}

#[tokio::test]
async fn test_subscription_observes_mark_operations() {
    let mut store = notification_store(FixedClock(NOW));
    store.fetch().await;
    let mut rx = store.subscribe();
    rx.mark_unchanged();

    store.mark_all_as_read();

    assert!(rx.has_changed().unwrap());
}
