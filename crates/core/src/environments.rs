// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store for rentable environment records.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;
use tracing::debug;

use torre_domain::{Environment, EnvironmentStatus};

use crate::seed;
use crate::store::{IdGenerator, Revision};

/// Default simulated latency for [`EnvironmentStore::fetch`].
pub(crate) const FETCH_DELAY: Duration = Duration::from_millis(500);

/// Fields for a new environment; the id is generated by the store.
#[derive(Debug, Clone)]
pub struct EnvironmentDraft {
    pub name: String,
    pub description: String,
    pub status: EnvironmentStatus,
    pub rental_price: u32,
    pub photos: Vec<String>,
    pub area_m2: f64,
    pub floor: i32,
}

/// Partial update with merge semantics: only provided fields change.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<EnvironmentStatus>,
    pub rental_price: Option<u32>,
    pub photos: Option<Vec<String>>,
    pub area_m2: Option<f64>,
    pub floor: Option<i32>,
}

/// In-memory collection of rentable environments.
#[derive(Debug)]
pub struct EnvironmentStore {
    environments: Vec<Environment>,
    selected: Option<Environment>,
    is_loading: bool,
    fetch_delay: Duration,
    ids: IdGenerator,
    revision: Revision,
}

impl EnvironmentStore {
    /// Creates an empty store with the default simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self {
            environments: Vec::new(),
            selected: None,
            is_loading: false,
            fetch_delay: FETCH_DELAY,
            ids: IdGenerator::new(),
            revision: Revision::new(),
        }
    }

    /// Overrides the simulated fetch latency. Tests pass `Duration::ZERO`.
    #[must_use]
    pub const fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Replaces the collection with the seed dataset after a simulated
    /// network delay.
    ///
    /// The loading flag is set for the duration of the delay. Calling
    /// fetch again overwrites the collection with the same seed data,
    /// so repeated or overlapping fetches are idempotent.
    pub async fn fetch(&mut self) {
        self.is_loading = true;
        self.revision.bump();

        sleep(self.fetch_delay).await;

        self.environments = seed::environments();
        self.is_loading = false;
        debug!(count = self.environments.len(), "Fetched environments");
        self.revision.bump();
    }

    /// Returns the current collection in insertion order.
    #[must_use]
    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    /// Returns whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Adds a new environment and returns its generated id.
    pub fn add(&mut self, draft: EnvironmentDraft) -> String {
        let id = self.ids.next_id();
        self.environments.push(Environment {
            id: id.clone(),
            name: draft.name,
            description: draft.description,
            status: draft.status,
            rental_price: draft.rental_price,
            photos: draft.photos,
            area_m2: draft.area_m2,
            floor: draft.floor,
        });
        debug!(id = %id, "Added environment");
        self.revision.bump();
        id
    }

    /// Merges the provided fields into the environment with the given
    /// id. Unknown ids are silently ignored.
    pub fn update(&mut self, id: &str, update: EnvironmentUpdate) {
        let Some(env) = self.environments.iter_mut().find(|e| e.id == id) else {
            debug!(id, "Update for unknown environment id ignored");
            return;
        };

        if let Some(name) = update.name {
            env.name = name;
        }
        if let Some(description) = update.description {
            env.description = description;
        }
        if let Some(status) = update.status {
            env.status = status;
        }
        if let Some(rental_price) = update.rental_price {
            env.rental_price = rental_price;
        }
        if let Some(photos) = update.photos {
            env.photos = photos;
        }
        if let Some(area_m2) = update.area_m2 {
            env.area_m2 = area_m2;
        }
        if let Some(floor) = update.floor {
            env.floor = floor;
        }
        self.revision.bump();
    }

    /// Removes the environment with the given id. Unknown ids are
    /// silently ignored.
    pub fn delete(&mut self, id: &str) {
        let before = self.environments.len();
        self.environments.retain(|e| e.id != id);
        if self.environments.len() == before {
            debug!(id, "Delete for unknown environment id ignored");
            return;
        }
        debug!(id, "Deleted environment");
        self.revision.bump();
    }

    /// Sets or clears the currently selected environment.
    pub fn select(&mut self, environment: Option<Environment>) {
        self.selected = environment;
        self.revision.bump();
    }

    /// Returns the currently selected environment, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&Environment> {
        self.selected.as_ref()
    }

    /// Subscribes to revision bumps for reactive re-rendering.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for EnvironmentStore {
    fn default() -> Self {
        Self::new()
    }
}
