//! In-memory storage backend.
//!
//! [`InMemoryBackend`] is a [`StorageBackend`] over a `DashMap<String,
//! String>`. It keeps nothing across process restarts; share one instance
//! through `Arc` or `Rc` to simulate a page reload against the same store.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use arcadia_tasks::store::memory::InMemoryBackend;
//! use arcadia_tasks::store::PersistentStore;
//!
//! let backend = Arc::new(InMemoryBackend::new());
//! let store = PersistentStore::new(Arc::clone(&backend));
//! assert!(store.load_tasks().is_empty());
//! ```

use dashmap::DashMap;

use crate::store::backend::{StorageBackend, StorageError};

/// In-memory storage backend using [`DashMap`].
///
/// This backend contains **no domain logic**.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    data: DashMap<String, String>,
}

impl InMemoryBackend {
    /// Creates an empty in-memory backend.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcadia_tasks::store::memory::InMemoryBackend;
    ///
    /// let backend = InMemoryBackend::new();
    /// assert!(backend.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }

    /// Returns the number of keys stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the backend holds no keys.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a copy of the raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.data.get(key).map(|entry| entry.value().clone())
    }
}

impl StorageBackend for InMemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.data.remove(key).is_some())
    }
}
