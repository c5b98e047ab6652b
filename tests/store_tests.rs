//! Integration tests for the persistent store adapter and its backends.
//!
//! Tests cover reload fidelity, fail-soft recovery from corrupt slots, data
//! written by earlier browser builds, and the file backend end to end.

use std::rc::Rc;

use arcadia_tasks::app::App;
use arcadia_tasks::config::AppConfig;
use arcadia_tasks::constants::{DEFAULT_TASKS_KEY, DEFAULT_USER_KEY};
use arcadia_tasks::domain::{FilterMode, TaskId, TaskText};
use arcadia_tasks::repository::TaskRepository;
use arcadia_tasks::store::file::FileBackend;
use arcadia_tasks::store::memory::InMemoryBackend;
use arcadia_tasks::store::{PersistentStore, StorageBackend, StoreConfig};
use arcadia_tasks::view::html::HtmlPainter;
use arcadia_tasks::view::ListSlot;

// ─── Legacy Data ────────────────────────────────────────────────────────────

mod legacy_data {
    use super::*;
    use pretty_assertions::assert_eq;

    const LEGACY_TASKS: &str = r#"[
        {"id":"1718000000000","text":"Buy milk","completed":true,"createdAt":1718000000000},
        {"id":"1718000000450","text":"Walk dog","completed":false,"createdAt":1718000000450}
    ]"#;

    #[test]
    fn loads_timestamp_ids_verbatim() {
        let backend = InMemoryBackend::new();
        backend.put(DEFAULT_TASKS_KEY, LEGACY_TASKS).unwrap();
        backend.put(DEFAULT_USER_KEY, r#"{"name":"Ada"}"#).unwrap();

        let store = PersistentStore::new(&backend);
        let tasks = store.load_tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, TaskId::new("1718000000000"));
        assert!(tasks[0].completed);
        assert_eq!(store.load_user().unwrap().name.as_str(), "Ada");
    }

    #[test]
    fn legacy_ids_can_be_toggled_and_removed() {
        let backend = Rc::new(InMemoryBackend::new());
        backend.put(DEFAULT_TASKS_KEY, LEGACY_TASKS).unwrap();

        let mut repo = TaskRepository::load(PersistentStore::new(Rc::clone(&backend)));
        assert!(repo.toggle_complete(&TaskId::new("1718000000450")));
        assert!(repo.remove(&TaskId::new("1718000000000")));

        let reloaded = PersistentStore::new(Rc::clone(&backend)).load_tasks();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].text.as_str(), "Walk dog");
        assert!(reloaded[0].completed);
    }

    #[test]
    fn new_tasks_append_after_legacy_ones() {
        let backend = Rc::new(InMemoryBackend::new());
        backend.put(DEFAULT_TASKS_KEY, LEGACY_TASKS).unwrap();

        let mut repo = TaskRepository::load(PersistentStore::new(Rc::clone(&backend)));
        repo.add(TaskText::parse("Fresh").unwrap());

        let texts: Vec<_> = repo.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Buy milk", "Walk dog", "Fresh"]);
    }
}

// ─── Corrupt Slots ──────────────────────────────────────────────────────────

mod corrupt_slots {
    use super::*;

    #[test]
    fn app_starts_cleanly_on_garbage() {
        let backend = Rc::new(InMemoryBackend::new());
        backend.put(DEFAULT_TASKS_KEY, "{{{not json").unwrap();
        backend.put(DEFAULT_USER_KEY, "also not json").unwrap();

        let mut app = App::new(Rc::clone(&backend), AppConfig::default(), HtmlPainter::new());
        app.start();

        assert!(app.state().tasks.is_empty());
        assert!(app.painter().banner().unwrap().contains("Sign In"));
        assert_eq!(app.painter().list(ListSlot::Primary), Some(""));
    }

    #[test]
    fn first_write_replaces_garbage() {
        let backend = Rc::new(InMemoryBackend::new());
        backend.put(DEFAULT_TASKS_KEY, r#"{"not":"an array"}"#).unwrap();

        let mut app = App::new(Rc::clone(&backend), AppConfig::default(), HtmlPainter::new());
        app.add_task("recovered").unwrap();

        let reloaded = PersistentStore::new(Rc::clone(&backend)).load_tasks();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].text.as_str(), "recovered");
    }
}

// ─── File Backend ───────────────────────────────────────────────────────────

mod file_backend {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn app_state_survives_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut app = App::new(
                FileBackend::new(dir.path()),
                AppConfig::default(),
                HtmlPainter::new(),
            );
            let id = app.add_task("Write report").unwrap();
            app.add_task("Email team").unwrap();
            app.toggle_task(&id);
            app.sign_in("Lin").unwrap();
        }

        let mut app = App::new(
            FileBackend::new(dir.path()),
            AppConfig::default(),
            HtmlPainter::new(),
        );
        app.set_filter(FilterMode::Completed);

        let rows = app.snapshot().primary.unwrap().rows;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "Write report");
        assert_eq!(app.state().tasks.len(), 2);
        assert!(app.painter().banner().unwrap().contains("Hi, <b>Lin</b>"));
    }

    #[test]
    fn custom_keys_map_to_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::default()
            .with_tasks_key("tasks")
            .with_user_key("user");
        let store = PersistentStore::with_config(FileBackend::new(dir.path()), config);

        store.save_tasks(&[]);
        assert!(dir.path().join("tasks.json").exists());
        assert!(!dir.path().join("user.json").exists());
    }

    #[test]
    fn sign_out_deletes_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(
            FileBackend::new(dir.path()),
            AppConfig::default(),
            HtmlPainter::new(),
        );
        app.sign_in("Ada").unwrap();
        let user_file = dir.path().join(format!("{DEFAULT_USER_KEY}.json"));
        assert!(user_file.exists());

        app.sign_out();
        assert!(!user_file.exists());
    }
}
