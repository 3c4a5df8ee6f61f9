// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! In-memory record stores for the Torre building management system.
//!
//! Each store exclusively owns one entity collection and exposes the
//! CRUD and query operations its views need. Data comes from fixed
//! seed sets loaded through an asynchronous `fetch` that simulates
//! network latency; mutations are synchronous and atomic from the
//! caller's perspective. Cross-store references are plain identifier
//! values resolved by the consuming view, never reconciled here.
//!
//! Stores are independently instantiable: nothing in this crate is a
//! process-wide singleton, and views observe changes through each
//! store's [`subscribe`](EnvironmentStore::subscribe) revision channel
//! instead of being pushed events.

mod businesses;
mod clock;
mod contracts;
mod environments;
mod notifications;
mod seed;
mod session;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types
pub use businesses::{BusinessDraft, BusinessStore, BusinessUpdate};
pub use clock::{Clock, SystemClock};
pub use contracts::{ContractDraft, ContractStore, ContractUpdate};
pub use environments::{EnvironmentDraft, EnvironmentStore, EnvironmentUpdate};
pub use notifications::{NotificationDraft, NotificationStore};
pub use session::{
    AppearanceSource, CredentialValidator, DemoCredentialValidator, LightAppearance, SessionStore,
};
