//! Property-based tests using proptest.
//!
//! Property tests verify the collection invariants under arbitrary operation
//! sequences: reload fidelity, id uniqueness, filter partitioning and view
//! idempotence. Fuzz-style tests verify the store adapter never panics on
//! arbitrary slot contents.

use std::collections::HashSet;
use std::rc::Rc;

use proptest::prelude::*;

use arcadia_tasks::constants::{DEFAULT_TASKS_KEY, DEFAULT_USER_KEY};
use arcadia_tasks::domain::{apply_filter, FilterMode, Task, TaskId, TaskText};
use arcadia_tasks::repository::TaskRepository;
use arcadia_tasks::store::memory::InMemoryBackend;
use arcadia_tasks::store::{PersistentStore, StorageBackend};
use arcadia_tasks::view::ViewSynchronizer;

// ─── Arbitrary Strategies ───────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    /// Index into the current collection (modulo its length), or a stale id
    /// when the collection is empty.
    Toggle(usize),
    Remove(usize),
    RemoveStale,
    MarkAllDone,
    ClearAll,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => "[a-zA-Z0-9 <>&'\"]{1,24}".prop_filter("non-blank", |s| !s.trim().is_empty()).prop_map(Op::Add),
        3 => any::<usize>().prop_map(Op::Toggle),
        2 => any::<usize>().prop_map(Op::Remove),
        1 => Just(Op::RemoveStale),
        1 => Just(Op::MarkAllDone),
        1 => Just(Op::ClearAll),
    ]
}

fn arb_filter() -> impl Strategy<Value = FilterMode> {
    prop::sample::select(FilterMode::ALL_MODES.to_vec())
}

fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(("[a-z]{1,12}", any::<bool>()), 0..40).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (text, completed))| {
                let mut task = Task::new(
                    TaskId::new(format!("t{i}")),
                    TaskText::parse(&text).unwrap(),
                    i as i64,
                );
                task.completed = completed;
                task
            })
            .collect()
    })
}

fn pick(repo: &TaskRepository<Rc<InMemoryBackend>>, n: usize) -> TaskId {
    if repo.is_empty() {
        TaskId::new("stale")
    } else {
        repo.tasks()[n % repo.len()].id.clone()
    }
}

fn apply(repo: &mut TaskRepository<Rc<InMemoryBackend>>, op: &Op) {
    match op {
        Op::Add(text) => {
            repo.add(TaskText::parse(text).unwrap());
        },
        Op::Toggle(n) => {
            let id = pick(repo, *n);
            repo.toggle_complete(&id);
        },
        Op::Remove(n) => {
            let id = pick(repo, *n);
            repo.remove(&id);
        },
        Op::RemoveStale => {
            repo.remove(&TaskId::new("never-issued"));
        },
        Op::MarkAllDone => repo.mark_all_done(),
        Op::ClearAll => repo.clear_all(),
    }
}

// ─── Property Tests: Repository Invariants ──────────────────────────────────

proptest! {
    /// Reloading the store after any operation sequence reproduces the
    /// in-memory collection exactly.
    #[test]
    fn reload_matches_memory(ops in prop::collection::vec(arb_op(), 0..60)) {
        let backend = Rc::new(InMemoryBackend::new());
        let mut repo = TaskRepository::load(PersistentStore::new(Rc::clone(&backend)));
        for op in &ops {
            apply(&mut repo, op);
            let reloaded = PersistentStore::new(Rc::clone(&backend)).load_tasks();
            prop_assert_eq!(reloaded.as_slice(), repo.tasks());
        }
    }

    /// Ids stay pairwise distinct after any operation sequence.
    #[test]
    fn ids_are_unique(ops in prop::collection::vec(arb_op(), 0..80)) {
        let backend = Rc::new(InMemoryBackend::new());
        let mut repo = TaskRepository::load(PersistentStore::new(Rc::clone(&backend)));
        for op in &ops {
            apply(&mut repo, op);
        }
        let ids: HashSet<_> = repo.tasks().iter().map(|t| &t.id).collect();
        prop_assert_eq!(ids.len(), repo.len());
    }

    /// Insertion order is kept: the add order of surviving tasks matches
    /// their collection order.
    #[test]
    fn insertion_order_is_preserved(texts in prop::collection::vec("[a-z]{1,8}", 1..30)) {
        let backend = Rc::new(InMemoryBackend::new());
        let mut repo = TaskRepository::load(PersistentStore::new(Rc::clone(&backend)));
        for text in &texts {
            repo.add(TaskText::parse(text).unwrap());
        }
        let stored: Vec<_> = repo.tasks().iter().map(|t| t.text.as_str().to_string()).collect();
        prop_assert_eq!(stored, texts);
    }

    /// After mark-all-done nothing is active and everything is completed.
    #[test]
    fn mark_all_done_completes_everything(ops in prop::collection::vec(arb_op(), 0..40)) {
        let backend = Rc::new(InMemoryBackend::new());
        let mut repo = TaskRepository::load(PersistentStore::new(Rc::clone(&backend)));
        for op in &ops {
            apply(&mut repo, op);
        }
        repo.mark_all_done();
        prop_assert!(apply_filter(repo.tasks(), FilterMode::Active).is_empty());
        prop_assert_eq!(apply_filter(repo.tasks(), FilterMode::Completed).len(), repo.len());
    }
}

// ─── Property Tests: Filter and Views ───────────────────────────────────────

proptest! {
    /// `all` returns the collection unchanged; `active` and `completed`
    /// partition it, each preserving order.
    #[test]
    fn filters_partition_collection(tasks in arb_tasks()) {
        let all: Vec<&Task> = apply_filter(&tasks, FilterMode::All);
        prop_assert_eq!(all, tasks.iter().collect::<Vec<_>>());

        let active = apply_filter(&tasks, FilterMode::Active);
        let completed = apply_filter(&tasks, FilterMode::Completed);
        prop_assert!(active.iter().all(|t| !t.completed));
        prop_assert!(completed.iter().all(|t| t.completed));
        prop_assert_eq!(active.len() + completed.len(), tasks.len());

        let active_ids: HashSet<_> = active.iter().map(|t| &t.id).collect();
        prop_assert!(completed.iter().all(|t| !active_ids.contains(&t.id)));

        let expected_active: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
        prop_assert_eq!(active, expected_active);
    }

    /// Deriving twice from the same inputs yields the same snapshot, and the
    /// list numbering is 1..=n in filtered order.
    #[test]
    fn derivation_is_idempotent(tasks in arb_tasks(), filter in arb_filter()) {
        let sync = ViewSynchronizer::default();
        let first = sync.derive(&tasks, filter, None);
        let second = sync.derive(&tasks, filter, None);
        prop_assert_eq!(&first, &second);

        let rows = first.primary.unwrap().rows;
        let indices: Vec<_> = rows.iter().map(|r| r.index).collect();
        prop_assert_eq!(indices, (1..=rows.len()).collect::<Vec<_>>());

        let sidebar = first.sidebar.unwrap();
        prop_assert_eq!(sidebar.total, tasks.len());
        prop_assert_eq!(sidebar.entries.len(), tasks.len().min(8));
    }
}

// ─── Fuzz Tests: Slot Contents ──────────────────────────────────────────────

proptest! {
    /// Arbitrary text in the task slot never panics and never yields tasks
    /// with blank text or duplicate ids.
    #[test]
    fn arbitrary_task_slot_loads_softly(raw in ".{0,200}") {
        let backend = InMemoryBackend::new();
        backend.put(DEFAULT_TASKS_KEY, &raw).unwrap();
        let tasks = PersistentStore::new(&backend).load_tasks();
        prop_assert!(tasks.iter().all(|t| !t.text.as_str().trim().is_empty()));
        let ids: HashSet<_> = tasks.iter().map(|t| &t.id).collect();
        prop_assert_eq!(ids.len(), tasks.len());
    }

    /// Arrays with repeated ids load with unique ids and no lost records.
    #[test]
    fn duplicate_ids_are_resolved(ids in prop::collection::vec("[0-3]", 0..20)) {
        let items: Vec<_> = ids
            .iter()
            .map(|id| serde_json::json!({
                "id": id,
                "text": "x",
                "completed": false,
                "createdAt": 0,
            }))
            .collect();
        let backend = InMemoryBackend::new();
        backend
            .put(DEFAULT_TASKS_KEY, &serde_json::Value::Array(items).to_string())
            .unwrap();

        let tasks = PersistentStore::new(&backend).load_tasks();
        prop_assert_eq!(tasks.len(), ids.len());
        let unique: HashSet<_> = tasks.iter().map(|t| &t.id).collect();
        prop_assert_eq!(unique.len(), tasks.len());
    }

    /// Arbitrary text in the user slot never panics.
    #[test]
    fn arbitrary_user_slot_loads_softly(raw in ".{0,120}") {
        let backend = InMemoryBackend::new();
        backend.put(DEFAULT_USER_KEY, &raw).unwrap();
        if let Some(session) = PersistentStore::new(&backend).load_user() {
            prop_assert!(!session.name.as_str().trim().is_empty());
        }
    }
}
