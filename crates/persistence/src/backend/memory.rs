// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory storage backend for tests.

use std::sync::{Arc, Mutex, PoisonError};

use crate::backend::SessionBackend;
use crate::error::PersistenceError;
use crate::record::SessionRecord;

/// In-process session storage.
///
/// Clones share the same underlying slot, so a test can hand one clone
/// to a session store and inspect what was persisted through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    record: Arc<Mutex<Option<SessionRecord>>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Result<Option<SessionRecord>, PersistenceError> {
        let slot = self.record.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slot.clone())
    }

    fn save(&self, record: &SessionRecord) -> Result<(), PersistenceError> {
        let mut slot = self.record.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(record.clone());
        Ok(())
    }
}
