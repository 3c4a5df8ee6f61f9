// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plumbing shared by every store: id generation and change
//! notification.

use std::sync::atomic::{AtomicU64, Ordering};

use time::OffsetDateTime;
use tokio::sync::watch;

/// Generator of unique record identifiers.
///
/// Ids are stringified integers from a monotonic counter seeded with
/// the unix-millisecond timestamp at construction. Uniqueness within
/// a store instance is the only hard requirement; the time seed keeps
/// generated ids disjoint from the small fixed ids in the seed data.
#[derive(Debug)]
pub(crate) struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub(crate) fn new() -> Self {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let seed = u64::try_from(millis).unwrap_or(1);
        Self {
            next: AtomicU64::new(seed),
        }
    }

    pub(crate) fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// Monotonic revision counter views subscribe to for re-rendering.
///
/// Every observable state change bumps the revision. Subscribers only
/// learn that something changed; they re-read the store's state rather
/// than receiving events, so a slow subscriber never misses the latest
/// state.
#[derive(Debug)]
pub(crate) struct Revision {
    tx: watch::Sender<u64>,
}

impl Revision {
    pub(crate) fn new() -> Self {
        Self {
            tx: watch::Sender::new(0),
        }
    }

    pub(crate) fn bump(&self) {
        self.tx.send_modify(|revision| *revision += 1);
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}
