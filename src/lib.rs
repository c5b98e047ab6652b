//! Browser-resident task list core.
//!
//! Users add, complete, delete and filter short text tasks and may sign in
//! with a display name. All state lives in a key-value store (the browser's
//! `localStorage` on wasm32); there is no server.
//!
//! # Overview
//!
//! A single ordered task collection is kept consistent with storage
//! (write-through on every mutation) and reflected across several views at
//! once: the main list, the full list page, a sidebar preview and the auth
//! banner. Every user action runs to completion, commits to storage, and
//! then all mounted views are re-derived from scratch and repainted.
//!
//! # Module Organization
//!
//! - [`domain`] - Task record, validated text/name newtypes, filter mode
//! - [`store`] - Fail-soft persistent store adapter and KV backends
//! - [`repository`] - Authoritative task collection
//! - [`session`] - Signed-in display name
//! - [`view`] - Pure view derivation, the `Painter` seam, HTML rendering
//! - [`app`] - Application controller tying the above together
//! - [`config`] - Slot keys, view settings, page layout
//! - [`error`] - Input rejection errors
//! - [`platform`] - Browser bindings (wasm32 only)

pub mod app;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
#[cfg(all(feature = "logging", not(target_arch = "wasm32")))]
pub mod logging;
pub mod platform;
pub mod repository;
pub mod session;
pub mod store;
pub mod view;

// Re-exports for ergonomic access
pub use app::App;
pub use config::AppConfig;
pub use domain::{FilterMode, Session, Task, TaskId};
pub use error::TaskError;
