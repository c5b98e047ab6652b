//! Task record and its identifier and text newtypes.
//!
//! # Serialization
//!
//! [`Task`] uses `#[serde(rename_all = "camelCase")]` so the stored JSON
//! matches the browser layout:
//!
//! ```json
//! { "id": "0190a6c2-...", "text": "Buy milk", "completed": false, "createdAt": 1718000000000 }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};

/// Opaque unique task identifier.
///
/// New ids are UUIDv7 strings. Ids read back from storage are kept verbatim,
/// so records written by older builds (millisecond timestamp ids) still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Non-empty task text.
///
/// # Examples
///
/// ```
/// use arcadia_tasks::domain::TaskText;
/// use arcadia_tasks::TaskError;
///
/// let text = TaskText::parse("  Buy milk \n").unwrap();
/// assert_eq!(text.as_str(), "Buy milk");
///
/// assert_eq!(TaskText::parse("   "), Err(TaskError::EmptyText));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskText(String);

impl TaskText {
    /// Trims surrounding whitespace and rejects text that is left empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyText`] for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskError::EmptyText);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Stored text is taken verbatim; only blank values are refused.
impl TryFrom<String> for TaskText {
    type Error = TaskError;

    fn try_from(value: String) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(TaskError::EmptyText);
        }
        Ok(Self(value))
    }
}

impl From<TaskText> for String {
    fn from(text: TaskText) -> Self {
        text.0
    }
}

/// A single to-do item.
///
/// All fields are public for read access by views and backends. The
/// [`TaskRepository`](crate::repository::TaskRepository) is the only
/// component that creates or mutates tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier within the collection.
    pub id: TaskId,

    /// What the user typed, trimmed.
    pub text: TaskText,

    /// Whether the task has been marked done.
    pub completed: bool,

    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Task {
    /// Creates an incomplete task.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcadia_tasks::domain::{Task, TaskId, TaskText};
    ///
    /// let task = Task::new(
    ///     TaskId::new("t-1"),
    ///     TaskText::parse("Walk dog").unwrap(),
    ///     1_718_000_000_000,
    /// );
    /// assert!(!task.completed);
    /// assert_eq!(task.text.as_str(), "Walk dog");
    /// ```
    pub fn new(id: TaskId, text: TaskText, created_at: i64) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// Returns the creation time as a UTC timestamp, or `None` if the stored
    /// value is out of chrono's range.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}
