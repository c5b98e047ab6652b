//! Browser platform: `localStorage` backend, page detection, DOM painter and
//! the `WebApp` facade exported to JavaScript.
//!
//! Event wiring (click and keydown handlers, the clear-all confirmation,
//! redirects after sign-in) stays in the page script, which forwards each
//! user action to a `WebApp` method.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage};

use crate::app::App;
use crate::config::AppConfig;
use crate::domain::TaskId;
use crate::store::{StorageBackend, StorageError};
use crate::view::html::{render_banner, render_list, render_sidebar};
use crate::view::{AuthBanner, ListSlot, ListView, MountedViews, Painter, SidebarPreview};

/// Main page list container.
pub const PRIMARY_LIST_ID: &str = "taskList";
/// "My tasks" page list container.
pub const FULL_LIST_ID: &str = "allTasksList";
/// Sidebar preview list.
pub const SIDEBAR_LIST_ID: &str = "sidebarTaskList";
/// Sidebar task count.
pub const TASK_COUNT_ID: &str = "taskCount";
/// Navbar auth area.
pub const AUTH_AREA_ID: &str = "authArea";

fn js_error(e: JsValue) -> StorageError {
    StorageError::backend(format!("{e:?}"))
}

/// [`StorageBackend`] over `window.localStorage`.
///
/// When the browser refuses storage access (disabled cookies, sandboxed
/// frames) every read is empty and every write fails, which the store
/// adapter logs and ignores.
#[derive(Debug, Clone)]
pub struct LocalStorageBackend {
    storage: Option<Storage>,
}

impl LocalStorageBackend {
    /// Opens the window's local storage.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; changes will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::backend("localStorage unavailable"))
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn delete(&self, key: &str) -> Result<bool, StorageError> {
        let storage = self.storage()?;
        let existed = storage.get_item(key).map_err(js_error)?.is_some();
        storage.remove_item(key).map_err(js_error)?;
        Ok(existed)
    }
}

/// Determines which views the current page mounts by probing for their
/// containers. The sidebar counts only when both its list and count exist.
pub fn detect_mounted(document: &Document) -> MountedViews {
    let has = |id: &str| document.get_element_by_id(id).is_some();
    MountedViews {
        primary_list: has(PRIMARY_LIST_ID),
        full_list: has(FULL_LIST_ID),
        sidebar: has(SIDEBAR_LIST_ID) && has(TASK_COUNT_ID),
        auth_banner: has(AUTH_AREA_ID),
    }
}

/// [`Painter`] that writes rendered markup into the page.
#[derive(Debug, Clone)]
pub struct DomPainter {
    document: Document,
}

impl DomPainter {
    /// Creates a painter for `document`.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_html(&self, id: &str, html: &str) {
        match self.document.get_element_by_id(id) {
            Some(element) => element.set_inner_html(html),
            None => tracing::debug!(id, "paint target missing"),
        }
    }
}

impl Painter for DomPainter {
    fn paint_list(&mut self, slot: ListSlot, view: &ListView) {
        let id = match slot {
            ListSlot::Primary => PRIMARY_LIST_ID,
            ListSlot::Full => FULL_LIST_ID,
        };
        self.set_html(id, &render_list(view));
    }

    fn paint_sidebar(&mut self, preview: &SidebarPreview) {
        self.set_html(SIDEBAR_LIST_ID, &render_sidebar(preview));
        if let Some(count) = self.document.get_element_by_id(TASK_COUNT_ID) {
            count.set_text_content(Some(&preview.total.to_string()));
        }
    }

    fn paint_banner(&mut self, banner: &AuthBanner) {
        self.set_html(AUTH_AREA_ID, &render_banner(banner));
    }
}

fn to_js(e: crate::TaskError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JavaScript facade over [`App`].
///
/// ```js
/// import init, { WebApp } from "./pkg/arcadia_tasks.js";
/// await init();
/// const app = new WebApp();
/// addBtn.onclick = () => { app.addTask(input.value); input.value = ""; };
/// ```
#[wasm_bindgen]
pub struct WebApp {
    inner: App<LocalStorageBackend, DomPainter>,
}

#[wasm_bindgen]
impl WebApp {
    /// Loads state from `localStorage`, detects the page layout and paints.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebApp, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let config = AppConfig::default().with_mounted(detect_mounted(&document));
        let mut inner = App::new(LocalStorageBackend::open(), config, DomPainter::new(document));
        inner.start();
        Ok(Self { inner })
    }

    /// Adds a task; returns its id. Rejects blank text.
    #[wasm_bindgen(js_name = addTask)]
    pub fn add_task(&mut self, text: &str) -> Result<String, JsValue> {
        self.inner
            .add_task(text)
            .map(|id| id.to_string())
            .map_err(to_js)
    }

    /// Toggles a task; `false` if the id is unknown.
    #[wasm_bindgen(js_name = toggleTask)]
    pub fn toggle_task(&mut self, id: &str) -> bool {
        self.inner.toggle_task(&TaskId::new(id))
    }

    /// Deletes a task; `false` if the id is unknown.
    #[wasm_bindgen(js_name = removeTask)]
    pub fn remove_task(&mut self, id: &str) -> bool {
        self.inner.remove_task(&TaskId::new(id))
    }

    /// Deletes every task.
    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.inner.clear_all();
    }

    /// Marks every task completed.
    #[wasm_bindgen(js_name = markAllDone)]
    pub fn mark_all_done(&mut self) {
        self.inner.mark_all_done();
    }

    /// Sets the filter from a chip's `data-filter` value.
    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&mut self, mode: &str) -> Result<(), JsValue> {
        self.inner.set_filter_str(mode).map_err(to_js)
    }

    /// Signs in; rejects blank names.
    #[wasm_bindgen(js_name = signIn)]
    pub fn sign_in(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.sign_in(name).map_err(to_js)
    }

    /// Signs out.
    #[wasm_bindgen(js_name = signOut)]
    pub fn sign_out(&mut self) {
        self.inner.sign_out();
    }
}
