//! View synchronization: derive every on-screen representation from state,
//! then hand it to an injected [`Painter`].
//!
//! Derivation is pure. [`ViewSynchronizer::derive`] reads the task
//! collection, the active filter and the session and returns a
//! [`ViewSnapshot`]; nothing is cached between calls, so deriving twice from
//! unchanged inputs yields equal snapshots. [`ViewSynchronizer::sync`]
//! derives and then paints each mounted view.
//!
//! # Views
//!
//! | View          | Source                                 | Affected by filter |
//! |---------------|----------------------------------------|--------------------|
//! | primary list  | filtered tasks, numbered from 1        | yes                |
//! | full list     | filtered tasks, numbered from 1        | yes                |
//! | sidebar       | first N tasks in insertion order + total | no               |
//! | auth banner   | session                                | no                 |

pub mod html;

use crate::constants::{COMPLETED_MARKER, DEFAULT_SIDEBAR_PREVIEW_LIMIT};
use crate::domain::{apply_filter, FilterMode, Session, Task, TaskId};

/// Which list container a [`ListView`] is painted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSlot {
    /// The list on the main page (`#taskList`).
    Primary,
    /// The list on the "my tasks" page (`#allTasksList`).
    Full,
}

/// One numbered row of a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// 1-based position within the filtered list. Recomputed every render.
    pub index: usize,
    /// Id of the task the row's buttons act on.
    pub id: TaskId,
    /// Task text (unescaped).
    pub text: String,
    /// Completion flag.
    pub completed: bool,
}

impl TaskRow {
    /// Label of the completion button: `Done` for open tasks, `Undo` for
    /// completed ones.
    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "Undo"
        } else {
            "Done"
        }
    }
}

/// A filtered, numbered task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// The filter the rows were derived under.
    pub filter: FilterMode,
    /// Rows in collection order.
    pub rows: Vec<TaskRow>,
}

impl ListView {
    /// Derives the list shown under `filter`.
    pub fn derive(tasks: &[Task], filter: FilterMode) -> Self {
        let rows = apply_filter(tasks, filter)
            .into_iter()
            .enumerate()
            .map(|(i, task)| TaskRow {
                index: i + 1,
                id: task.id.clone(),
                text: task.text.as_str().to_string(),
                completed: task.completed,
            })
            .collect();
        Self { filter, rows }
    }
}

/// One sidebar line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    /// Task text (unescaped).
    pub text: String,
    /// Completion flag.
    pub completed: bool,
}

impl PreviewEntry {
    /// Text with the completion marker appended for completed tasks.
    pub fn label(&self) -> String {
        if self.completed {
            format!("{}{COMPLETED_MARKER}", self.text)
        } else {
            self.text.clone()
        }
    }
}

/// Compact preview of the first tasks plus the total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarPreview {
    /// Leading tasks in insertion order, ignoring the filter.
    pub entries: Vec<PreviewEntry>,
    /// Number of tasks in the whole collection.
    pub total: usize,
}

impl SidebarPreview {
    /// Derives the preview of the first `limit` tasks.
    pub fn derive(tasks: &[Task], limit: usize) -> Self {
        let entries = tasks
            .iter()
            .take(limit)
            .map(|task| PreviewEntry {
                text: task.text.as_str().to_string(),
                completed: task.completed,
            })
            .collect();
        Self {
            entries,
            total: tasks.len(),
        }
    }
}

/// Navbar authentication area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthBanner {
    /// Greeting plus a sign-out control.
    SignedIn {
        /// Display name (unescaped).
        name: String,
    },
    /// Sign-in and sign-up controls.
    SignedOut,
}

impl AuthBanner {
    /// Derives the banner from the current session.
    pub fn derive(session: Option<&Session>) -> Self {
        match session {
            Some(session) => Self::SignedIn {
                name: session.name.as_str().to_string(),
            },
            None => Self::SignedOut,
        }
    }

    /// Greeting text, e.g. `Hi, Ada`, when signed in.
    pub fn greeting(&self) -> Option<String> {
        match self {
            Self::SignedIn { name } => Some(format!("Hi, {name}")),
            Self::SignedOut => None,
        }
    }
}

/// Which views exist on the current page.
///
/// The web platform fills this in by probing for the view containers; tests
/// and embedders set it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountedViews {
    /// The main page list.
    pub primary_list: bool,
    /// The "my tasks" page list.
    pub full_list: bool,
    /// The sidebar preview.
    pub sidebar: bool,
    /// The navbar auth area.
    pub auth_banner: bool,
}

impl MountedViews {
    /// Every view mounted.
    pub fn all() -> Self {
        Self {
            primary_list: true,
            full_list: true,
            sidebar: true,
            auth_banner: true,
        }
    }

    /// No views mounted.
    pub fn none() -> Self {
        Self {
            primary_list: false,
            full_list: false,
            sidebar: false,
            auth_banner: false,
        }
    }

    /// The main page: primary list, sidebar and auth banner.
    pub fn main_page() -> Self {
        Self {
            primary_list: true,
            sidebar: true,
            auth_banner: true,
            ..Self::none()
        }
    }

    /// The "my tasks" page: full list and auth banner.
    pub fn full_list_page() -> Self {
        Self {
            full_list: true,
            auth_banner: true,
            ..Self::none()
        }
    }
}

impl Default for MountedViews {
    fn default() -> Self {
        Self::all()
    }
}

/// Everything the mounted views should display. Unmounted views are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// Main page list.
    pub primary: Option<ListView>,
    /// "My tasks" page list.
    pub full: Option<ListView>,
    /// Sidebar preview.
    pub sidebar: Option<SidebarPreview>,
    /// Auth area.
    pub banner: Option<AuthBanner>,
}

/// Platform capability that draws derived views.
///
/// The core never touches a rendering surface directly; the web platform
/// supplies a DOM painter and tests supply recording painters.
pub trait Painter {
    /// Replace the contents of a list container.
    fn paint_list(&mut self, slot: ListSlot, view: &ListView);

    /// Replace the sidebar preview and count.
    fn paint_sidebar(&mut self, preview: &SidebarPreview);

    /// Replace the auth area.
    fn paint_banner(&mut self, banner: &AuthBanner);
}

/// View derivation settings.
///
/// # Examples
///
/// ```
/// use arcadia_tasks::view::ViewConfig;
///
/// assert_eq!(ViewConfig::default().sidebar_preview_limit, 8);
/// assert_eq!(
///     ViewConfig::default()
///         .with_sidebar_preview_limit(3)
///         .sidebar_preview_limit,
///     3
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Number of tasks shown in the sidebar preview.
    pub sidebar_preview_limit: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sidebar_preview_limit: DEFAULT_SIDEBAR_PREVIEW_LIMIT,
        }
    }
}

impl ViewConfig {
    /// Sets the sidebar preview length.
    pub fn with_sidebar_preview_limit(mut self, limit: usize) -> Self {
        self.sidebar_preview_limit = limit;
        self
    }
}

/// Derives and paints the mounted views.
#[derive(Debug, Clone, Default)]
pub struct ViewSynchronizer {
    config: ViewConfig,
    mounted: MountedViews,
}

impl ViewSynchronizer {
    /// Creates a synchronizer for the given page layout.
    pub fn new(config: ViewConfig, mounted: MountedViews) -> Self {
        Self { config, mounted }
    }

    /// Returns the mounted view set.
    pub fn mounted(&self) -> MountedViews {
        self.mounted
    }

    /// Derives the snapshot for the mounted views. Pure.
    pub fn derive(
        &self,
        tasks: &[Task],
        filter: FilterMode,
        session: Option<&Session>,
    ) -> ViewSnapshot {
        let list = || ListView::derive(tasks, filter);
        ViewSnapshot {
            primary: self.mounted.primary_list.then(list),
            full: self.mounted.full_list.then(list),
            sidebar: self
                .mounted
                .sidebar
                .then(|| SidebarPreview::derive(tasks, self.config.sidebar_preview_limit)),
            banner: self.mounted.auth_banner.then(|| AuthBanner::derive(session)),
        }
    }

    /// Derives the snapshot and paints every mounted view.
    pub fn sync<P: Painter + ?Sized>(
        &self,
        tasks: &[Task],
        filter: FilterMode,
        session: Option<&Session>,
        painter: &mut P,
    ) -> ViewSnapshot {
        let snapshot = self.derive(tasks, filter, session);
        if let Some(banner) = &snapshot.banner {
            painter.paint_banner(banner);
        }
        if let Some(preview) = &snapshot.sidebar {
            painter.paint_sidebar(preview);
        }
        if let Some(view) = &snapshot.primary {
            painter.paint_list(ListSlot::Primary, view);
        }
        if let Some(view) = &snapshot.full {
            painter.paint_list(ListSlot::Full, view);
        }
        tracing::trace!(filter = %filter, total = tasks.len(), "views synchronized");
        snapshot
    }
}
