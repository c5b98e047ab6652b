//! Low-level key-value storage backend trait and supporting types.
//!
//! The [`StorageBackend`] trait defines the contract that all storage engines
//! implement. It exposes 3 KV operations: [`get`](StorageBackend::get),
//! [`put`](StorageBackend::put) and [`delete`](StorageBackend::delete).
//!
//! Domain logic (serialization, fail-soft recovery, id uniqueness) does
//! **not** belong here. Backends are dumb string stores; domain logic lives in
//! [`PersistentStore`](crate::store::PersistentStore).
//!
//! # Threading
//!
//! The browser's `localStorage` handle is neither `Send` nor `Sync`, so the
//! trait does not require either. Everything runs on one thread.

use std::rc::Rc;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur during raw storage operations.
///
/// [`PersistentStore`](crate::store::PersistentStore) logs these and falls
/// back to an empty default; they never reach the repository or the views.
///
/// # Examples
///
/// ```
/// use arcadia_tasks::store::StorageError;
///
/// let err = StorageError::Backend {
///     message: "quota exceeded".to_string(),
///     source: None,
/// };
/// assert_eq!(err.to_string(), "backend error: quota exceeded");
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// A filesystem read or write failed.
    #[error("i/o error on key {key}: {source}")]
    Io {
        /// The key being read or written.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A backend-specific failure (browser storage unavailable, quota
    /// exceeded, security error).
    #[error("backend error: {message}")]
    Backend {
        /// Human-readable description of the error.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StorageError {
    /// Builds a [`StorageError::Backend`] with no source.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }
}

/// Key-value storage backend for task list persistence.
///
/// Keys and values are strings: the browser store only holds strings, and
/// the adapter writes JSON text.
pub trait StorageBackend {
    /// Retrieves the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] on I/O or backend-specific failures.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] on I/O or backend-specific failures.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Returns `true` if a value was removed.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] on I/O or backend-specific failures.
    fn delete(&self, key: &str) -> Result<bool, StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> Result<bool, StorageError> {
        (**self).delete(key)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Arc<B> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> Result<bool, StorageError> {
        (**self).delete(key)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Rc<B> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> Result<bool, StorageError> {
        (**self).delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn backend_error_exposes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = StorageError::Backend {
            message: "write failed".to_string(),
            source: Some(Box::new(io)),
        };
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "backend error: write failed");
    }

    #[test]
    fn io_error_names_key() {
        let err = StorageError::Io {
            key: "arcadia_todos_v1".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("arcadia_todos_v1"));
        assert!(err.source().is_some());
    }

    #[test]
    fn backend_helper_has_no_source() {
        let err = StorageError::backend("unavailable");
        assert!(err.source().is_none());
    }
}
