//! Application controller.
//!
//! [`App`] owns the whole application state ([`AppState`]: tasks, filter,
//! session), the [`ViewSynchronizer`] and the injected [`Painter`]. Each
//! public method is one user action: it validates raw input, mutates state
//! (which writes through to storage) and then repaints every mounted view.
//! There are no globals; two `App`s over two backends are fully isolated.

use crate::config::AppConfig;
use crate::domain::{DisplayName, FilterMode, FilterState, TaskId, TaskText};
use crate::error::Result;
use crate::repository::TaskRepository;
use crate::session::SessionHolder;
use crate::store::{PersistentStore, StorageBackend};
use crate::view::{Painter, ViewSnapshot, ViewSynchronizer};

/// Mutable application state.
pub struct AppState<B> {
    /// The task collection.
    pub tasks: TaskRepository<B>,
    /// The active filter.
    pub filter: FilterState,
    /// The signed-in user.
    pub session: SessionHolder<B>,
}

impl<B: StorageBackend + Clone> AppState<B> {
    /// Loads tasks and session from `store`; the filter starts at `all`.
    pub fn load(store: PersistentStore<B>) -> Self {
        Self {
            session: SessionHolder::load(store.clone()),
            tasks: TaskRepository::load(store),
            filter: FilterState::new(),
        }
    }
}

/// The task list application.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
///
/// use arcadia_tasks::app::App;
/// use arcadia_tasks::config::AppConfig;
/// use arcadia_tasks::domain::FilterMode;
/// use arcadia_tasks::store::memory::InMemoryBackend;
/// use arcadia_tasks::view::html::HtmlPainter;
/// use arcadia_tasks::view::ListSlot;
///
/// let backend = Rc::new(InMemoryBackend::new());
/// let mut app = App::new(backend, AppConfig::default(), HtmlPainter::new());
/// app.start();
///
/// app.add_task("Buy milk").unwrap();
/// app.set_filter(FilterMode::Completed);
///
/// assert_eq!(app.painter().list(ListSlot::Primary), Some(""));
/// assert_eq!(app.painter().sidebar_count(), Some("1"));
/// ```
pub struct App<B, P> {
    state: AppState<B>,
    views: ViewSynchronizer,
    painter: P,
}

impl<B: StorageBackend + Clone, P: Painter> App<B, P> {
    /// Loads state from `backend` using the configured slot keys.
    ///
    /// Nothing is painted until [`start`](Self::start) or the first action.
    pub fn new(backend: B, config: AppConfig, painter: P) -> Self {
        let store = PersistentStore::with_config(backend, config.store);
        let state = AppState::load(store);
        tracing::info!(
            tasks = state.tasks.len(),
            signed_in = state.session.is_signed_in(),
            "application loaded"
        );
        Self {
            state,
            views: ViewSynchronizer::new(config.view, config.mounted),
            painter,
        }
    }
}

impl<B: StorageBackend, P: Painter> App<B, P> {
    /// Initial paint.
    pub fn start(&mut self) -> ViewSnapshot {
        self.repaint()
    }

    /// Adds a task from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyText`](crate::TaskError::EmptyText) for
    /// blank input; nothing changes and nothing is repainted.
    pub fn add_task(&mut self, raw: &str) -> Result<TaskId> {
        let text = TaskText::parse(raw)?;
        let id = self.state.tasks.add(text).id.clone();
        self.repaint();
        Ok(id)
    }

    /// Toggles a task's completion. Returns `false` for unknown ids.
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        let changed = self.state.tasks.toggle_complete(id);
        self.repaint();
        changed
    }

    /// Deletes a task. Returns `false` for unknown ids.
    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        let changed = self.state.tasks.remove(id);
        self.repaint();
        changed
    }

    /// Deletes every task.
    pub fn clear_all(&mut self) {
        self.state.tasks.clear_all();
        self.repaint();
    }

    /// Marks every task completed.
    pub fn mark_all_done(&mut self) {
        self.state.tasks.mark_all_done();
        self.repaint();
    }

    /// Changes the active filter.
    pub fn set_filter(&mut self, mode: FilterMode) {
        tracing::debug!(filter = %mode, "filter changed");
        self.state.filter.set(mode);
        self.repaint();
    }

    /// Changes the active filter from its name (`all`, `active`,
    /// `completed`).
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::UnknownFilter`](crate::TaskError::UnknownFilter)
    /// for any other value; the filter is left unchanged.
    pub fn set_filter_str(&mut self, mode: &str) -> Result<()> {
        let mode: FilterMode = mode.parse()?;
        self.set_filter(mode);
        Ok(())
    }

    /// Signs in with a display name from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyName`](crate::TaskError::EmptyName) for
    /// blank input; the current session is kept.
    pub fn sign_in(&mut self, raw: &str) -> Result<()> {
        let name = DisplayName::parse(raw)?;
        self.state.session.sign_in(name);
        self.repaint();
        Ok(())
    }

    /// Signs out.
    pub fn sign_out(&mut self) {
        self.state.session.sign_out();
        self.repaint();
    }

    /// Derives the current views without painting.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.views.derive(
            self.state.tasks.tasks(),
            self.state.filter.current(),
            self.state.session.current(),
        )
    }

    /// Read access to the application state.
    pub fn state(&self) -> &AppState<B> {
        &self.state
    }

    /// Read access to the painter.
    pub fn painter(&self) -> &P {
        &self.painter
    }

    /// Mutable access to the painter.
    pub fn painter_mut(&mut self) -> &mut P {
        &mut self.painter
    }

    fn repaint(&mut self) -> ViewSnapshot {
        self.views.sync(
            self.state.tasks.tasks(),
            self.state.filter.current(),
            self.state.session.current(),
            &mut self.painter,
        )
    }
}
