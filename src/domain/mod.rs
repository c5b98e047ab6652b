//! Domain types for the task list.
//!
//! [`Task`] is the persisted record. [`TaskText`] and [`DisplayName`] are
//! validated newtypes: the only way to build one from user input is through
//! their `parse` constructors, which trim and reject blank strings, so the
//! repository and session holder never re-validate. [`FilterMode`] selects
//! which subset of tasks a list view shows.

pub mod filter;
pub mod session;
pub mod task;

pub use filter::*;
pub use session::*;
pub use task::*;
