// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON file storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::SESSION_NAMESPACE;
use crate::backend::SessionBackend;
use crate::error::PersistenceError;
use crate::record::SessionRecord;

/// File-backed session storage.
///
/// The record is written as a JSON document at
/// `<dir>/auth-storage.json` (the file name is derived from
/// [`SESSION_NAMESPACE`]). A missing file is a valid empty state.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend storing under the given directory.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SESSION_NAMESPACE}.json")),
        }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<SessionRecord>, PersistenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored session found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let record: SessionRecord = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), "Loaded stored session");
        Ok(Some(record))
    }

    fn save(&self, record: &SessionRecord) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), "Stored session");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use torre_domain::{Role, Theme, User};

    fn sample_record() -> SessionRecord {
        SessionRecord {
            is_authenticated: true,
            user: Some(User {
                id: String::from("1"),
                name: String::from("Admin User"),
                email: String::from("a@b.com"),
                role: Role::Admin,
            }),
            theme: Theme::Dark,
        }
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path());
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        let record = sample_record();
        backend.save(&record).unwrap();

        let loaded = backend.load().unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_save_replaces_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        backend.save(&sample_record()).unwrap();
        backend.save(&SessionRecord::default()).unwrap();

        let loaded = backend.load().unwrap().unwrap();
        assert_eq!(loaded, SessionRecord::default());
    }

    #[test]
    fn test_corrupt_contents_surface_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        fs::write(backend.path(), "not json").unwrap();

        match backend.load() {
            Err(PersistenceError::Serialization(_)) => {}
            other => panic!("Expected serialization error, got {other:?}"),
        }
    }

    #[test]
    fn test_file_name_uses_fixed_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path());
        assert!(backend.path().ends_with("auth-storage.json"));
    }
}
