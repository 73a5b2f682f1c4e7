//! Session-scoped key/value storage shared with the ERD viewer.
//!
//! The viewer caches the document types of the last diagram under
//! [`ERD_DOCTYPES_KEY`]. Picking a new set of apps invalidates that cache by
//! deleting the key. The store lives in a per-session directory (the user's
//! runtime directory by default), so it disappears with the login session.

use crate::error::SessionError;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Key of the cached diagram document types.
pub const ERD_DOCTYPES_KEY: &str = "ERDDoctypes";

/// File name of the storage document inside the session directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Trait for session-scoped key/value storage.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), SessionError>;
}

/// Storage backed by a JSON object in `<session_dir>/session.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(session_dir: impl AsRef<Path>) -> Self {
        Self {
            path: session_dir.as_ref().join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, SessionError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| SessionError::Read {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| SessionError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), SessionError> {
        let write_error = |message: String| SessionError::Write {
            path: self.path.clone(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(items).map_err(|e| write_error(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| write_error(e.to_string()))
    }
}

impl SessionStorage for FileSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        // Nothing to delete, and no reason to create the file
        if !self.path.exists() {
            return Ok(());
        }

        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.save(&items)?;
        }
        Ok(())
    }
}

/// In-process storage that also counts removals, for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    items: Mutex<BTreeMap<String, String>>,
    removals: Mutex<Vec<String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Keys passed to `remove_item`, in call order.
    pub fn removals(&self) -> Vec<String> {
        self.removals
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key);
        self.removals
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(key.to_string());
        Ok(())
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for std::sync::Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        (**self).remove_item(key)
    }
}
