//! Persistent store adapter, backend trait and backends.
//!
//! # Architecture
//!
//! 1. **[`PersistentStore<B>`]** -- the adapter. Owns JSON
//!    (de)serialization of the two slots (task list, current user) and all
//!    fail-soft recovery: a missing, unreadable or malformed slot becomes an
//!    empty default and a `warn` log line, never an error.
//!
//! 2. **[`StorageBackend`]** -- dumb string KV trait that backends implement.
//!
//! # Backends
//!
//! - [`InMemoryBackend`](memory::InMemoryBackend) -- `DashMap`, for tests and
//!   embedding.
//! - [`FileBackend`](file::FileBackend) -- one file per key (native only).
//! - `LocalStorageBackend` -- the browser's `window.localStorage` (wasm32
//!   only, in [`platform::web`](crate::platform)).

pub mod backend;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod memory;

use std::collections::HashSet;

use serde_json::Value;

pub use backend::{StorageBackend, StorageError};

use crate::constants::{DEFAULT_TASKS_KEY, DEFAULT_USER_KEY};
use crate::domain::{Session, Task, TaskId};

/// Storage slot keys.
///
/// # Defaults
///
/// | Setting     | Default            |
/// |-------------|--------------------|
/// | `tasks_key` | `arcadia_todos_v1` |
/// | `user_key`  | `arcadia_user_v1`  |
///
/// # Examples
///
/// ```
/// use arcadia_tasks::store::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.tasks_key, "arcadia_todos_v1");
///
/// let config = StoreConfig::default()
///     .with_tasks_key("tasks")
///     .with_user_key("user");
/// assert_eq!(config.tasks_key, "tasks");
/// assert_eq!(config.user_key, "user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key of the slot holding the JSON task array.
    pub tasks_key: String,

    /// Key of the slot holding the JSON session object.
    pub user_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            user_key: DEFAULT_USER_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Sets the task slot key.
    pub fn with_tasks_key(mut self, key: impl Into<String>) -> Self {
        self.tasks_key = key.into();
        self
    }

    /// Sets the session slot key.
    pub fn with_user_key(mut self, key: impl Into<String>) -> Self {
        self.user_key = key.into();
        self
    }
}

/// Fail-soft adapter over a [`StorageBackend`].
///
/// Cloning the store clones the backend handle, so wrap shared backends in
/// `Arc`/`Rc` (or use a backend that is itself a handle, like the browser
/// storage) when the repository and session holder must see the same data.
#[derive(Debug, Clone)]
pub struct PersistentStore<B> {
    backend: B,
    config: StoreConfig,
}

impl<B: StorageBackend> PersistentStore<B> {
    /// Creates an adapter with the default slot keys.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, StoreConfig::default())
    }

    /// Creates an adapter with explicit slot keys.
    pub fn with_config(backend: B, config: StoreConfig) -> Self {
        Self { backend, config }
    }

    /// Returns the slot configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads the task collection.
    ///
    /// Returns an empty vector when the slot is missing, unreadable, not
    /// JSON, or not a JSON array. Array elements that do not decode as a
    /// task are skipped; an element whose id repeats an earlier one gets a
    /// fresh id from `fresh_id`.
    pub fn load_tasks_with(&self, mut fresh_id: impl FnMut() -> TaskId) -> Vec<Task> {
        let key = &self.config.tasks_key;
        let Some(raw) = self.read_slot(key) else {
            return Vec::new();
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(Value::Null) => return Vec::new(),
            Ok(other) => {
                tracing::warn!(
                    key = key.as_str(),
                    kind = json_kind(&other),
                    "task slot is not an array (resetting to empty)"
                );
                return Vec::new();
            },
            Err(e) => {
                tracing::warn!(
                    key = key.as_str(),
                    error = %e,
                    "task slot is not valid JSON (resetting to empty)"
                );
                return Vec::new();
            },
        };

        let total = items.len();
        let mut seen = HashSet::with_capacity(total);
        let mut tasks = Vec::with_capacity(total);
        for item in items {
            let mut task = match serde_json::from_value::<Task>(item) {
                Ok(task) => task,
                Err(e) => {
                    tracing::warn!(key = key.as_str(), error = %e, "skipping malformed task");
                    continue;
                },
            };
            if seen.contains(&task.id) {
                let mut id = fresh_id();
                while seen.contains(&id) {
                    id = fresh_id();
                }
                tracing::warn!(
                    duplicate_id = task.id.as_str(),
                    new_id = id.as_str(),
                    "re-keyed task with duplicate id"
                );
                task.id = id;
            }
            seen.insert(task.id.clone());
            tasks.push(task);
        }

        if tasks.len() != total {
            tracing::warn!(
                key = key.as_str(),
                kept = tasks.len(),
                total,
                "dropped malformed tasks on load"
            );
        }
        tasks
    }

    /// Loads the task collection, re-keying duplicate ids with UUIDv7.
    pub fn load_tasks(&self) -> Vec<Task> {
        self.load_tasks_with(|| TaskId::new(uuid::Uuid::now_v7().to_string()))
    }

    /// Serializes and writes the full collection, overwriting the slot.
    ///
    /// Write failures are logged and dropped.
    pub fn save_tasks(&self, tasks: &[Task]) {
        match serde_json::to_string(tasks) {
            Ok(json) => self.write_slot(&self.config.tasks_key, &json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize tasks"),
        }
    }

    /// Loads the current session, or `None` when signed out or the slot is
    /// malformed.
    pub fn load_user(&self) -> Option<Session> {
        let key = &self.config.user_key;
        let raw = self.read_slot(key)?;
        match serde_json::from_str::<Option<Session>>(&raw) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(
                    key = key.as_str(),
                    error = %e,
                    "user slot is malformed (treating as signed out)"
                );
                None
            },
        }
    }

    /// Writes the session, overwriting any prior one.
    pub fn save_user(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(json) => self.write_slot(&self.config.user_key, &json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize session"),
        }
    }

    /// Removes the session slot.
    pub fn clear_user(&self) {
        let key = &self.config.user_key;
        if let Err(e) = self.backend.delete(key) {
            tracing::warn!(key = key.as_str(), error = %e, "failed to clear user slot");
        }
    }

    fn read_slot(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read slot (treating as empty)");
                None
            },
        }
    }

    fn write_slot(&self, key: &str, json: &str) {
        if let Err(e) = self.backend.put(key, json) {
            tracing::warn!(key, error = %e, "failed to write slot");
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
