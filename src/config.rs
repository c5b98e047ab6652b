//! Application configuration.
//!
//! [`AppConfig`] groups the storage slot keys, the view settings and the
//! page layout. Every part has a `Default` matching the shipped pages, and
//! builder methods for overrides.
//!
//! # Examples
//!
//! ```
//! use arcadia_tasks::config::AppConfig;
//! use arcadia_tasks::store::StoreConfig;
//! use arcadia_tasks::view::{MountedViews, ViewConfig};
//!
//! let config = AppConfig::default()
//!     .with_store(StoreConfig::default().with_tasks_key("tasks"))
//!     .with_view(ViewConfig::default().with_sidebar_preview_limit(5))
//!     .with_mounted(MountedViews::main_page());
//!
//! assert_eq!(config.store.tasks_key, "tasks");
//! assert_eq!(config.view.sidebar_preview_limit, 5);
//! assert!(!config.mounted.full_list);
//! ```

use crate::store::StoreConfig;
use crate::view::{MountedViews, ViewConfig};

/// Top-level configuration for [`App`](crate::app::App).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage slot keys.
    pub store: StoreConfig,
    /// View derivation settings.
    pub view: ViewConfig,
    /// Views present on the page. Defaults to all of them.
    pub mounted: MountedViews,
}

impl AppConfig {
    /// Sets the storage slot keys.
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    /// Sets the view settings.
    pub fn with_view(mut self, view: ViewConfig) -> Self {
        self.view = view;
        self
    }

    /// Sets the mounted views.
    pub fn with_mounted(mut self, mounted: MountedViews) -> Self {
        self.mounted = mounted;
        self
    }
}
