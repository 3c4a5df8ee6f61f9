// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store for tenant business directory records.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;
use tracing::debug;

use torre_domain::{Business, BusinessStatus};

use crate::clock::{Clock, SystemClock};
use crate::seed;
use crate::store::{IdGenerator, Revision};

/// Default simulated latency for [`BusinessStore::fetch`].
pub(crate) const FETCH_DELAY: Duration = Duration::from_millis(500);

/// Fields for a new business; id and creation timestamp are assigned
/// by the store.
#[derive(Debug, Clone)]
pub struct BusinessDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub logo: String,
    pub images: Vec<String>,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub floor: String,
    pub schedule: String,
    pub status: BusinessStatus,
}

/// Partial update with merge semantics: only provided fields change.
/// `created_at` is stamped at creation and is not updatable.
#[derive(Debug, Clone, Default)]
pub struct BusinessUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub logo: Option<String>,
    pub images: Option<Vec<String>>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub floor: Option<String>,
    pub schedule: Option<String>,
    pub status: Option<BusinessStatus>,
}

/// In-memory directory of tenant businesses.
pub struct BusinessStore {
    businesses: Vec<Business>,
    selected: Option<Business>,
    is_loading: bool,
    fetch_delay: Duration,
    ids: IdGenerator,
    clock: Box<dyn Clock>,
    revision: Revision,
}

impl BusinessStore {
    /// Creates an empty store with the default simulated latency and
    /// the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            businesses: Vec::new(),
            selected: None,
            is_loading: false,
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
    /// network delay.
    pub async fn fetch(&mut self) {
        self.is_loading = true;
        self.revision.bump();

        sleep(self.fetch_delay).await;

        self.businesses = seed::businesses();
        self.is_loading = false;
        debug!(count = self.businesses.len(), "Fetched businesses");
        self.revision.bump();
    }

    /// Returns the current collection in insertion order.
    #[must_use]
    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    /// Returns whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Looks up a business by id.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    /// Adds a new business, stamping its creation timestamp, and
    /// returns its generated id.
    pub fn add(&mut self, draft: BusinessDraft) -> String {
        let id = self.ids.next_id();
        self.businesses.push(Business {
            id: id.clone(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            logo: draft.logo,
            images: draft.images,
            phone: draft.phone,
            email: draft.email,
            website: draft.website,
            floor: draft.floor,
            schedule: draft.schedule,
            status: draft.status,
            created_at: self.clock.now(),
        });
        debug!(id = %id, "Added business");
        self.revision.bump();
        id
    }

    /// Merges the provided fields into the business with the given id.
    /// Unknown ids are silently ignored.
    pub fn update(&mut self, id: &str, update: BusinessUpdate) {
        let Some(business) = self.businesses.iter_mut().find(|b| b.id == id) else {
            debug!(id, "Update for unknown business id ignored");
            return;
        };

        if let Some(name) = update.name {
            business.name = name;
        }
        if let Some(description) = update.description {
            business.description = description;
        }
        if let Some(category) = update.category {
            business.category = category;
        }
        if let Some(logo) = update.logo {
            business.logo = logo;
        }
        if let Some(images) = update.images {
            business.images = images;
        }
        if let Some(phone) = update.phone {
            business.phone = phone;
        }
        if let Some(email) = update.email {
            business.email = email;
        }
        if let Some(website) = update.website {
            business.website = Some(website);
        }
        if let Some(floor) = update.floor {
            business.floor = floor;
        }
        if let Some(schedule) = update.schedule {
            business.schedule = schedule;
        }
        if let Some(status) = update.status {
            business.status = status;
        }
        self.revision.bump();
    }

    /// Removes the business with the given id. Unknown ids are
    /// silently ignored.
    pub fn delete(&mut self, id: &str) {
        let before = self.businesses.len();
        self.businesses.retain(|b| b.id != id);
        if self.businesses.len() == before {
            debug!(id, "Delete for unknown business id ignored");
            return;
        }
        debug!(id, "Deleted business");
        self.revision.bump();
    }

    /// Sets or clears the currently selected business.
    pub fn select(&mut self, business: Option<Business>) {
        self.selected = business;
        self.revision.bump();
    }

    /// Returns the currently selected business, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&Business> {
        self.selected.as_ref()
    }

    /// Subscribes to revision bumps for reactive re-rendering.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for BusinessStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BusinessStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusinessStore")
            .field("businesses", &self.businesses.len())
            .field("is_loading", &self.is_loading)
            .finish_non_exhaustive()
    }
}
