// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage-backend implementations.
//!
//! A backend stores at most one [`SessionRecord`] under the fixed
//! session namespace. Backends are interchangeable behind the
//! [`SessionBackend`] trait so the session store does not care where
//! the record lives.

pub mod json_file;
pub mod memory;

use crate::error::PersistenceError;
use crate::record::SessionRecord;

/// Durable storage for the session record.
pub trait SessionBackend: Send + Sync {
    /// Loads the stored session record.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet; callers
    /// fall back to a default session in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium cannot be read or the
    /// stored contents cannot be deserialized.
    fn load(&self) -> Result<Option<SessionRecord>, PersistenceError>;

    /// Stores the session record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium cannot be written.
    fn save(&self, record: &SessionRecord) -> Result<(), PersistenceError>;
}
