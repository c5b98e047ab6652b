//! HTML markup for derived views.
//!
//! Every user-supplied string (task text, task id, display name) goes through
//! [`escape_html`] before it is placed in markup.

use std::collections::HashMap;
use std::fmt::Write as _;

use arcadia_html::escape_html;

use crate::view::{AuthBanner, ListSlot, ListView, Painter, SidebarPreview, TaskRow};

/// Renders one list row.
///
/// # Examples
///
/// ```
/// use arcadia_tasks::domain::TaskId;
/// use arcadia_tasks::view::html::render_row;
/// use arcadia_tasks::view::TaskRow;
///
/// let row = TaskRow {
///     index: 1,
///     id: TaskId::new("t1"),
///     text: "<b>milk</b>".to_string(),
///     completed: false,
/// };
/// let html = render_row(&row);
/// assert!(html.contains(r#"<div class="task-text">&lt;b&gt;milk&lt;/b&gt;</div>"#));
/// assert!(html.contains(">Done</button>"));
/// ```
pub fn render_row(row: &TaskRow) -> String {
    let class = if row.completed {
        "task-item completed"
    } else {
        "task-item"
    };
    format!(
        concat!(
            r#"<li class="{class}" data-id="{id}">"#,
            r#"<div class="task-num">{index}</div>"#,
            r#"<div class="task-text">{text}</div>"#,
            r#"<div class="action-row">"#,
            r#"<button class="icon-btn done">{label}</button>"#,
            r#"<button class="icon-btn del">Delete</button>"#,
            "</div></li>",
        ),
        class = class,
        id = escape_html(row.id.as_str()),
        index = row.index,
        text = escape_html(&row.text),
        label = row.toggle_label(),
    )
}

/// Renders the inner HTML of a list container.
pub fn render_list(view: &ListView) -> String {
    view.rows.iter().map(render_row).collect()
}

/// Renders the inner HTML of the sidebar list (`#sidebarTaskList`).
pub fn render_sidebar(preview: &SidebarPreview) -> String {
    let mut html = String::new();
    for entry in &preview.entries {
        let _ = write!(html, "<li>{}</li>", escape_html(&entry.label()));
    }
    html
}

/// Renders the inner HTML of the auth area (`#authArea`).
///
/// Signed in: greeting plus a `#signOutBtn` button. Signed out: Sign In and
/// Sign Up buttons pointing at `auth.html`.
pub fn render_banner(banner: &AuthBanner) -> String {
    match banner {
        AuthBanner::SignedIn { name } => format!(
            concat!(
                r#"<span class="hello">Hi, <b>{name}</b></span>"#,
                r#"<button class="btn ghost" id="signOutBtn">Sign Out</button>"#,
            ),
            name = escape_html(name),
        ),
        AuthBanner::SignedOut => concat!(
            r#"<button class="btn ghost" onclick="location.href='auth.html'">Sign In</button>"#,
            r#"<button class="btn" onclick="location.href='auth.html'">Sign Up</button>"#,
        )
        .to_string(),
    }
}

/// [`Painter`] that keeps the latest markup for each view.
///
/// The DOM painter copies these strings into the page; tests inspect them
/// directly.
#[derive(Debug, Default, Clone)]
pub struct HtmlPainter {
    lists: HashMap<ListSlot, String>,
    sidebar_list: Option<String>,
    sidebar_count: Option<String>,
    banner: Option<String>,
    paints: usize,
}

impl HtmlPainter {
    /// Creates a painter with no markup yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest markup for a list container.
    pub fn list(&self, slot: ListSlot) -> Option<&str> {
        self.lists.get(&slot).map(String::as_str)
    }

    /// Latest sidebar list markup.
    pub fn sidebar_list(&self) -> Option<&str> {
        self.sidebar_list.as_deref()
    }

    /// Latest sidebar count text.
    pub fn sidebar_count(&self) -> Option<&str> {
        self.sidebar_count.as_deref()
    }

    /// Latest auth area markup.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Number of paint calls received.
    pub fn paints(&self) -> usize {
        self.paints
    }
}

impl Painter for HtmlPainter {
    fn paint_list(&mut self, slot: ListSlot, view: &ListView) {
        self.lists.insert(slot, render_list(view));
        self.paints += 1;
    }

    fn paint_sidebar(&mut self, preview: &SidebarPreview) {
        self.sidebar_list = Some(render_sidebar(preview));
        self.sidebar_count = Some(preview.total.to_string());
        self.paints += 1;
    }

    fn paint_banner(&mut self, banner: &AuthBanner) {
        self.banner = Some(render_banner(banner));
        self.paints += 1;
    }
}
