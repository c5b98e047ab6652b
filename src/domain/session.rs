//! Session record: the locally stored display name.
//!
//! There is no credential check. Any non-blank name signs the user in; the
//! name is a label, not an identity proof.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};

/// Non-empty display name.
///
/// # Examples
///
/// ```
/// use arcadia_tasks::domain::DisplayName;
///
/// assert_eq!(DisplayName::parse("  Ada ").unwrap().as_str(), "Ada");
/// assert!(DisplayName::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Trims surrounding whitespace and rejects names that are left empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyName`] for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DisplayName {
    type Error = TaskError;

    fn try_from(value: String) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(TaskError::EmptyName);
        }
        Ok(Self(value))
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}

/// The signed-in user. Stored as `{"name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name shown in the auth banner.
    pub name: DisplayName,
}

impl Session {
    /// Creates a session for the given name.
    pub fn new(name: DisplayName) -> Self {
        Self { name }
    }
}
