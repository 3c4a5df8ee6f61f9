// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store for lease contracts.
//!
//! Contract status is derived, never settable by callers: the store
//! recomputes every status against the clock when the collection is
//! fetched, and recomputes a single contract's status when an update
//! changes its end date. An update that does not touch the end date
//! keeps the previous status even if wall-clock time has since crossed
//! a threshold; this permissive rule is part of the observable
//! contract and is deliberately not "fixed" here.

use std::time::Duration;

use time::Date;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::debug;

use torre_domain::{Contract, LeaseStatus, classify_lease_status};

use crate::clock::{Clock, SystemClock};
use crate::seed;
use crate::store::{IdGenerator, Revision};

/// Default simulated latency for [`ContractStore::fetch`].
pub(crate) const FETCH_DELAY: Duration = Duration::from_millis(500);

/// Fields for a new contract; id and status are assigned by the store.
///
/// `environment_name` is a denormalized snapshot supplied by the
/// caller; the store never resolves `environment_id` against the
/// environment collection.
#[derive(Debug, Clone)]
pub struct ContractDraft {
    pub environment_id: String,
    pub environment_name: String,
    pub tenant_name: String,
    pub tenant_email: String,
    pub start_date: Date,
    pub end_date: Date,
    pub monthly_rent: u32,
}

/// Partial update with merge semantics. Status is not updatable; it is
/// recomputed if and only if `end_date` is part of the update.
#[derive(Debug, Clone, Default)]
pub struct ContractUpdate {
    pub environment_id: Option<String>,
    pub environment_name: Option<String>,
    pub tenant_name: Option<String>,
    pub tenant_email: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub monthly_rent: Option<u32>,
}

/// In-memory collection of lease contracts.
pub struct ContractStore {
    contracts: Vec<Contract>,
    is_loading: bool,
    fetch_delay: Duration,
    ids: IdGenerator,
    clock: Box<dyn Clock>,
    revision: Revision,
}

impl ContractStore {
    /// Creates an empty store with the default simulated latency and
    /// the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contracts: Vec::new(),
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

    /// Overrides the clock used for status classification.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the collection with the seed dataset after a simulated
    /// network delay, recomputing every contract's status against the
    /// clock at fetch time.
    pub async fn fetch(&mut self) {
        self.is_loading = true;
        self.revision.bump();

        sleep(self.fetch_delay).await;

        let now = self.clock.now();
        let mut contracts = seed::contracts();
        for contract in &mut contracts {
            contract.status = classify_lease_status(contract.end_date, now);
        }
        self.contracts = contracts;
        self.is_loading = false;
        debug!(count = self.contracts.len(), "Fetched contracts");
        self.revision.bump();
    }

    /// Returns the current collection in insertion order.
    #[must_use]
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// Returns whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Adds a new contract, classifying its status from the supplied
    /// end date, and returns its generated id.
    pub fn add(&mut self, draft: ContractDraft) -> String {
        let id = self.ids.next_id();
        let status = classify_lease_status(draft.end_date, self.clock.now());
        self.contracts.push(Contract {
            id: id.clone(),
            environment_id: draft.environment_id,
            environment_name: draft.environment_name,
            tenant_name: draft.tenant_name,
            tenant_email: draft.tenant_email,
            start_date: draft.start_date,
            end_date: draft.end_date,
            monthly_rent: draft.monthly_rent,
            status,
        });
        debug!(id = %id, status = %status, "Added contract");
        self.revision.bump();
        id
    }

    /// Merges the provided fields into the contract with the given id.
    /// Status is recomputed only when the update carries an end date.
    /// Unknown ids are silently ignored.
    pub fn update(&mut self, id: &str, update: ContractUpdate) {
        let Some(contract) = self.contracts.iter_mut().find(|c| c.id == id) else {
            debug!(id, "Update for unknown contract id ignored");
            return;
        };

        if let Some(environment_id) = update.environment_id {
            contract.environment_id = environment_id;
        }
        if let Some(environment_name) = update.environment_name {
            contract.environment_name = environment_name;
        }
        if let Some(tenant_name) = update.tenant_name {
            contract.tenant_name = tenant_name;
        }
        if let Some(tenant_email) = update.tenant_email {
            contract.tenant_email = tenant_email;
        }
        if let Some(start_date) = update.start_date {
            contract.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            contract.end_date = end_date;
            contract.status = classify_lease_status(end_date, self.clock.now());
        }
        if let Some(monthly_rent) = update.monthly_rent {
            contract.monthly_rent = monthly_rent;
        }
        self.revision.bump();
    }

    /// Removes the contract with the given id. Unknown ids are
    /// silently ignored.
    pub fn delete(&mut self, id: &str) {
        let before = self.contracts.len();
        self.contracts.retain(|c| c.id != id);
        if self.contracts.len() == before {
            debug!(id, "Delete for unknown contract id ignored");
            return;
        }
        debug!(id, "Deleted contract");
        self.revision.bump();
    }

    /// Returns the contracts currently classified as expiring, in
    /// insertion order. Recomputed from the collection on every call.
    #[must_use]
    pub fn expiring_contracts(&self) -> Vec<&Contract> {
        self.contracts
            .iter()
            .filter(|c| c.status == LeaseStatus::Expiring)
            .collect()
    }

    /// Returns the contracts currently classified as active, in
    /// insertion order. Recomputed from the collection on every call.
    #[must_use]
    pub fn active_contracts(&self) -> Vec<&Contract> {
        self.contracts
            .iter()
            .filter(|c| c.status == LeaseStatus::Active)
            .collect()
    }

    /// Subscribes to revision bumps for reactive re-rendering.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for ContractStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContractStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractStore")
            .field("contracts", &self.contracts.len())
            .field("is_loading", &self.is_loading)
            .finish_non_exhaustive()
    }
}
