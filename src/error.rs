//! Error types for task list operations.
//!
//! [`TaskError`] covers rejected user input. It is raised only by the input
//! constructors ([`TaskText::parse`](crate::domain::TaskText::parse),
//! [`DisplayName::parse`](crate::domain::DisplayName::parse) and
//! [`FilterMode`](crate::domain::FilterMode)'s `FromStr`) and surfaced by
//! [`App`](crate::app::App). Storage faults have their own
//! [`StorageError`](crate::store::StorageError) and never leave the store
//! adapter.

use thiserror::Error;

/// Errors returned when user input is rejected before it reaches the core.
///
/// # Examples
///
/// ```
/// use arcadia_tasks::TaskError;
///
/// let err = TaskError::UnknownFilter {
///     value: "urgent".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "unknown filter mode 'urgent' (expected all, active or completed)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Task text was empty after trimming.
    #[error("task text must not be empty")]
    EmptyText,

    /// Display name was empty after trimming.
    #[error("display name must not be empty")]
    EmptyName,

    /// A filter mode outside `all`, `active`, `completed`.
    #[error("unknown filter mode '{value}' (expected all, active or completed)")]
    UnknownFilter {
        /// The rejected input.
        value: String,
    },
}

/// Result type for task list operations.
pub type Result<T> = std::result::Result<T, TaskError>;
