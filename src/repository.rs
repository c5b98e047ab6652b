//! Task repository: the authoritative in-memory task collection.
//!
//! [`TaskRepository`] owns the ordered `Vec<Task>` and is the only place
//! tasks are created or mutated. Every mutation writes the full collection
//! through the [`PersistentStore`] before returning, so a render that
//! follows never sees data older than the latest write.
//!
//! Operations on ids that are not in the collection (a stale row in the UI)
//! are silent no-ops: they return `false` and persist nothing.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Task, TaskId, TaskText};
use crate::store::{PersistentStore, StorageBackend};

/// Source of fresh task ids.
pub trait IdGenerator {
    /// Returns a new id.
    fn next_id(&mut self) -> TaskId;
}

/// Default generator producing UUIDv7 strings.
///
/// UUIDv7 embeds a millisecond timestamp followed by a counter and random
/// bits, so ids sort by creation time and stay unique when many tasks are
/// created within the same millisecond.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&mut self) -> TaskId {
        TaskId::new(Uuid::now_v7().to_string())
    }
}

/// Ordered task collection with write-through persistence.
///
/// # Examples
///
/// ```
/// use arcadia_tasks::domain::TaskText;
/// use arcadia_tasks::repository::TaskRepository;
/// use arcadia_tasks::store::memory::InMemoryBackend;
/// use arcadia_tasks::store::PersistentStore;
///
/// let mut repo = TaskRepository::load(PersistentStore::new(InMemoryBackend::new()));
/// let id = repo.add(TaskText::parse("Buy milk").unwrap()).id.clone();
///
/// assert!(repo.toggle_complete(&id));
/// assert!(repo.get(&id).unwrap().completed);
/// assert!(!repo.toggle_complete(&"stale".into()));
/// ```
pub struct TaskRepository<B, G = UuidV7Generator> {
    tasks: Vec<Task>,
    store: PersistentStore<B>,
    ids: G,
}

impl<B: StorageBackend> TaskRepository<B> {
    /// Loads the persisted collection and uses UUIDv7 ids for new tasks.
    pub fn load(store: PersistentStore<B>) -> Self {
        Self::load_with_ids(store, UuidV7Generator)
    }
}

impl<B: StorageBackend, G: IdGenerator> TaskRepository<B, G> {
    /// Loads the persisted collection with a custom id generator.
    pub fn load_with_ids(store: PersistentStore<B>, mut ids: G) -> Self {
        let tasks = store.load_tasks_with(|| ids.next_id());
        tracing::debug!(count = tasks.len(), "loaded tasks");
        Self { tasks, store, ids }
    }

    /// Returns the collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Returns the number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if there are no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the store the repository writes through.
    pub fn store(&self) -> &PersistentStore<B> {
        &self.store
    }

    /// Appends a new incomplete task and persists.
    pub fn add(&mut self, text: TaskText) -> &Task {
        let id = self.fresh_id();
        let task = Task::new(id, text, Utc::now().timestamp_millis());
        tracing::debug!(task_id = task.id.as_str(), "adding task");

        self.tasks.push(task);
        self.persist();
        &self.tasks[self.tasks.len() - 1]
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `false` and does nothing if no such task exists.
    pub fn toggle_complete(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            tracing::debug!(task_id = id.as_str(), "toggle ignored: unknown task");
            return false;
        };
        task.completed = !task.completed;
        tracing::debug!(task_id = id.as_str(), completed = task.completed, "toggled task");
        self.persist();
        true
    }

    /// Removes the task with `id`.
    ///
    /// Returns `false` and does nothing if no such task exists.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| &t.id == id) else {
            tracing::debug!(task_id = id.as_str(), "remove ignored: unknown task");
            return false;
        };
        self.tasks.remove(pos);
        tracing::debug!(task_id = id.as_str(), "removed task");
        self.persist();
        true
    }

    /// Removes every task and persists the empty collection.
    pub fn clear_all(&mut self) {
        tracing::debug!(count = self.tasks.len(), "clearing all tasks");
        self.tasks.clear();
        self.persist();
    }

    /// Marks every task completed, keeping order and ids, and persists.
    pub fn mark_all_done(&mut self) {
        for task in &mut self.tasks {
            task.completed = true;
        }
        tracing::debug!(count = self.tasks.len(), "marked all tasks done");
        self.persist();
    }

    fn fresh_id(&mut self) -> TaskId {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
            tracing::warn!(task_id = id.as_str(), "id generator repeated an id; drawing again");
        }
    }

    fn persist(&self) {
        self.store.save_tasks(&self.tasks);
    }
}
