//! Derived views over the task collection
//!
//! Pure functions: they borrow the canonical sequence, never mutate it, and
//! return fresh owned values. All of them accept an empty slice.

use serde::{Deserialize, Serialize};

use super::model::{Priority, Task};

/// Completion filter backing the list tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    All,
    Completed,
    InProgress,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl StatusFilter {
    /// Whether a task passes this filter
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::InProgress => !task.completed,
        }
    }
}

/// A displayed view of the collection: the active search term combined with
/// the active status tab.
///
/// `TaskStore::reorder` takes one of these to translate visible indices back
/// to canonical ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl ViewFilter {
    /// Combined predicate of both filters
    pub fn matches(&self, task: &Task) -> bool {
        self.status.matches(task) && matches_term(task, &self.search)
    }
}

fn matches_term(task: &Task, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    task.name.to_lowercase().contains(&term) || task.description.to_lowercase().contains(&term)
}

/// Case-insensitive substring filter against name or description.
///
/// An empty term matches every task; original order is preserved.
pub fn search_filter(tasks: &[Task], term: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| matches_term(t, term))
        .cloned()
        .collect()
}

/// Keep the tasks passing the status tab filter, in original order
pub fn status_filter(tasks: &[Task], filter: StatusFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Sort highest priority first.
///
/// The sort is stable: equal-priority tasks keep their original relative
/// order.
pub fn priority_sort(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| std::cmp::Reverse(t.priority.rank()));
    sorted
}

/// Per-priority task totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregates rendered by the statistics panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    /// Percentage in [0, 100]; 0 for an empty collection, never NaN
    pub completion_rate: f64,
    pub priority_counts: PriorityCounts,
}

/// Compute completion and priority aggregates.
///
/// Statistics always describe the full canonical sequence, not a filtered
/// view.
pub fn statistics(tasks: &[Task]) -> Statistics {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let completion_rate = if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let mut priority_counts = PriorityCounts::default();
    for task in tasks {
        match task.priority {
            Priority::High => priority_counts.high += 1,
            Priority::Medium => priority_counts.medium += 1,
            Priority::Low => priority_counts.low += 1,
        }
    }

    Statistics {
        total,
        completed,
        completion_rate,
        priority_counts,
    }
}
