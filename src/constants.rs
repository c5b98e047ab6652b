//! Storage keys and view defaults shared across modules.

/// Default key of the slot holding the JSON task array.
pub const DEFAULT_TASKS_KEY: &str = "arcadia_todos_v1";

/// Default key of the slot holding the JSON session object.
pub const DEFAULT_USER_KEY: &str = "arcadia_user_v1";

/// Number of tasks shown in the sidebar preview.
pub const DEFAULT_SIDEBAR_PREVIEW_LIMIT: usize = 8;

/// Suffix appended to completed tasks in the sidebar preview.
pub const COMPLETED_MARKER: &str = " ✓";
