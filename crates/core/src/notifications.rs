// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store for admin notifications.
//!
//! Notifications are kept newest-first: `add` prepends. The unread
//! counter is a derived aggregate and is recomputed (never blindly
//! decremented) on mark operations so repeated calls cannot corrupt
//! it.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;
use tracing::debug;

use torre_domain::{Notification, NotificationKind};

use crate::clock::{Clock, SystemClock};
use crate::seed;
use crate::store::{IdGenerator, Revision};

/// Default simulated latency for [`NotificationStore::fetch`].
/// Shorter than the entity stores; the notification badge should
/// appear quickly.
pub(crate) const FETCH_DELAY: Duration = Duration::from_millis(300);

/// Fields for a new notification; id, read flag, and creation
/// timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

/// In-memory collection of notifications plus the unread counter.
pub struct NotificationStore {
    notifications: Vec<Notification>,
    unread_count: usize,
    fetch_delay: Duration,
    ids: IdGenerator,
    clock: Box<dyn Clock>,
    revision: Revision,
}

impl NotificationStore {
    /// Creates an empty store with the default simulated latency and
    /// the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            unread_count: 0,
            fetch_delay: FETCH_DELAY,
            ids: IdGenerator::new(),
            clock: Box::new(SystemClock),
            revision: Revision::new(),
        }
    }

    /// Overrides the simulated fetch latency. Tests pass `Duration::ZERO`.
    #[must_use]
    pub const fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Overrides the clock used to stamp `created_at`.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the collection with the seed dataset after a simulated
    /// network delay and recomputes the unread counter.
    pub async fn fetch(&mut self) {
        sleep(self.fetch_delay).await;

        self.notifications = seed::notifications(self.clock.now());
        self.unread_count = self.notifications.iter().filter(|n| !n.read).count();
        debug!(
            count = self.notifications.len(),
            unread = self.unread_count,
            "Fetched notifications"
        );
        self.revision.bump();
    }

    /// Returns the current collection, newest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Returns the number of unread notifications.
    #[must_use]
    pub const fn unread_count(&self) -> usize {
        self.unread_count
    }

    /// Marks one notification as read. Idempotent; unknown ids are
    /// silently ignored and leave the unread counter untouched.
    pub fn mark_as_read(&mut self, id: &str) {
        let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) else {
            debug!(id, "Mark-as-read for unknown notification id ignored");
            return;
        };
        notification.read = true;
        self.unread_count = self.notifications.iter().filter(|n| !n.read).count();
        self.revision.bump();
    }

    /// Marks every notification as read, leaving the unread counter at
    /// zero regardless of prior state.
    pub fn mark_all_as_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.unread_count = 0;
        self.revision.bump();
    }

    /// Creates a new unread notification, prepends it so newest-first
    /// ordering is maintained, and returns its generated id.
    pub fn add(&mut self, draft: NotificationDraft) -> String {
        let id = self.ids.next_id();
        self.notifications.insert(
            0,
            Notification {
                id: id.clone(),
                title: draft.title,
                message: draft.message,
                kind: draft.kind,
                read: false,
                created_at: self.clock.now(),
            },
        );
        self.unread_count += 1;
        debug!(id = %id, unread = self.unread_count, "Added notification");
        self.revision.bump();
        id
    }

    /// Subscribes to revision bumps for reactive re-rendering.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationStore")
            .field("notifications", &self.notifications.len())
            .field("unread_count", &self.unread_count)
            .finish_non_exhaustive()
    }
}
