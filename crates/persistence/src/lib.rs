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

//! Client-local persistence for the Torre session.
//!
//! The session (authentication flags and display-theme preference) is
//! the only state in the system with a persistence contract: it must
//! survive an application restart. Every entity collection is re-seeded
//! from mock data on each start and is deliberately not persisted.
//!
//! Storage is a single JSON document written under a fixed namespace.
//! Two backends are provided:
//!
//! - [`JsonFileBackend`] — durable storage in a file (default)
//! - [`MemoryBackend`] — in-process storage for tests

mod backend;
mod error;
mod record;

pub use backend::{SessionBackend, json_file::JsonFileBackend, memory::MemoryBackend};
pub use error::PersistenceError;
pub use record::SessionRecord;

/// Fixed namespace the session record is stored under.
///
/// The file backend derives its file name from this value; replacing
/// the storage medium must keep the key stable so existing sessions
/// reload verbatim.
pub const SESSION_NAMESPACE: &str = "auth-storage";
