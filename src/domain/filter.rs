//! Filter mode, the pure filter function and the filter state holder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::task::Task;
use crate::error::TaskError;

/// Which subset of tasks a list view shows.
///
/// # Examples
///
/// ```
/// use arcadia_tasks::domain::FilterMode;
///
/// let mode: FilterMode = "active".parse().unwrap();
/// assert_eq!(mode, FilterMode::Active);
/// assert_eq!(mode.to_string(), "active");
/// assert!("done".parse::<FilterMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
}

impl FilterMode {
    /// All modes in display order.
    pub const ALL_MODES: [FilterMode; 3] = [Self::All, Self::Active, Self::Completed];

    /// Returns the lowercase name used in markup (`data-filter`) and parsing.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` if a task with the given completion flag is shown.
    pub fn matches(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(TaskError::UnknownFilter {
                value: other.to_string(),
            }),
        }
    }
}

/// Returns the tasks shown under `mode`, in collection order.
///
/// # Examples
///
/// ```
/// use arcadia_tasks::domain::{apply_filter, FilterMode, Task, TaskId, TaskText};
///
/// let mut done = Task::new(TaskId::new("a"), TaskText::parse("A").unwrap(), 0);
/// done.completed = true;
/// let open = Task::new(TaskId::new("b"), TaskText::parse("B").unwrap(), 0);
/// let tasks = vec![done, open];
///
/// let active = apply_filter(&tasks, FilterMode::Active);
/// assert_eq!(active.len(), 1);
/// assert_eq!(active[0].id.as_str(), "b");
/// ```
pub fn apply_filter(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|t| mode.matches(t.completed)).collect()
}

/// Holder for the single active filter mode.
///
/// Not persisted: a fresh holder starts at [`FilterMode::All`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    mode: FilterMode,
}

impl FilterState {
    /// Creates a holder set to [`FilterMode::All`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active mode.
    pub fn set(&mut self, mode: FilterMode) {
        self.mode = mode;
    }

    /// Returns the active mode.
    pub fn current(&self) -> FilterMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::{TaskId, TaskText};
    use rstest::rstest;

    fn task(id: &str, completed: bool) -> Task {
        let mut t = Task::new(TaskId::new(id), TaskText::parse(id).unwrap(), 0);
        t.completed = completed;
        t
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.to_string()).collect()
    }

    #[rstest]
    #[case("all", FilterMode::All)]
    #[case("active", FilterMode::Active)]
    #[case("completed", FilterMode::Completed)]
    fn parses_known_modes(#[case] input: &str, #[case] expected: FilterMode) {
        assert_eq!(input.parse::<FilterMode>().unwrap(), expected);
        assert_eq!(expected.as_str(), input);
    }

    #[rstest]
    #[case("")]
    #[case("All")]
    #[case(" active")]
    #[case("done")]
    fn rejects_unknown_modes(#[case] input: &str) {
        let err = input.parse::<FilterMode>().unwrap_err();
        assert_eq!(
            err,
            TaskError::UnknownFilter {
                value: input.to_string()
            }
        );
    }

    #[test]
    fn apply_filter_preserves_order() {
        let tasks = vec![
            task("a", false),
            task("b", true),
            task("c", false),
            task("d", true),
        ];
        assert_eq!(ids(&apply_filter(&tasks, FilterMode::All)), ["a", "b", "c", "d"]);
        assert_eq!(ids(&apply_filter(&tasks, FilterMode::Active)), ["a", "c"]);
        assert_eq!(ids(&apply_filter(&tasks, FilterMode::Completed)), ["b", "d"]);
    }

    #[test]
    fn apply_filter_on_empty_collection() {
        for mode in FilterMode::ALL_MODES {
            assert!(apply_filter(&[], mode).is_empty());
        }
    }

    #[test]
    fn filter_state_defaults_to_all() {
        let mut state = FilterState::new();
        assert_eq!(state.current(), FilterMode::All);
        state.set(FilterMode::Completed);
        assert_eq!(state.current(), FilterMode::Completed);
    }
}
