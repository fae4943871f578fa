//! Canonical task collection store
//!
//! Owns the authoritative, insertion-ordered sequence of tasks and the only
//! mutation surface over it. Every effective mutation is followed by a
//! full-collection write through the storage adapter; storage failures are
//! logged and never interrupt the mutation path.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use super::model::{Priority, Task, TaskDraft};
use super::storage::TaskStorage;
use super::views::ViewFilter;

/// Task store with persistence on every mutation.
///
/// Cloning is cheap and yields a handle to the same collection, so the
/// application root can create one store and pass it to child components.
#[derive(Clone)]
pub struct TaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
    storage: Arc<dyn TaskStorage>,
}

impl TaskStore {
    /// Create a store over the given storage adapter, loading whatever it
    /// currently holds.
    ///
    /// An unreadable collection degrades to an empty one; startup never
    /// fails on storage problems.
    pub async fn new(storage: Arc<dyn TaskStorage>) -> Self {
        let tasks = match storage.load().await {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Failed to load tasks, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            tasks: Arc::new(RwLock::new(tasks)),
            storage,
        }
    }

    /// Cloned snapshot of the canonical sequence, in insertion order
    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Number of tasks in the collection
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// Whether the collection is empty
    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }

    /// Add a task from a draft: assign a fresh unique id, mark it not
    /// completed, append it to the end of the sequence.
    pub async fn add(&self, draft: TaskDraft) -> Task {
        let task = Task {
            id: new_task_id(),
            name: draft.name,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            completed: false,
            category: draft.category,
        };

        {
            let mut tasks = self.tasks.write().await;
            tasks.push(task.clone());
        }

        self.persist().await;
        task
    }

    /// Replace the priority of the task with the given id, preserving its
    /// position and every other field.
    ///
    /// Unknown ids are a silent no-op: `None`, nothing written.
    pub async fn set_priority(&self, id: &str, new_priority: Priority) -> Option<Task> {
        let updated = {
            let mut tasks = self.tasks.write().await;
            let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
                return None;
            };
            task.priority = new_priority;
            task.clone()
        };

        self.persist().await;
        Some(updated)
    }

    /// Flip the completion flag of the task with the given id.
    ///
    /// Unknown ids are a silent no-op: `None`, nothing written.
    pub async fn toggle_completion(&self, id: &str) -> Option<Task> {
        let updated = {
            let mut tasks = self.tasks.write().await;
            let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
                return None;
            };
            task.completed = !task.completed;
            task.clone()
        };

        self.persist().await;
        Some(updated)
    }

    /// Reorder within the displayed view described by `filter`: take the
    /// task at visible index `from` and drop it at visible index `to`.
    ///
    /// Visible indices are translated to canonical indices before splicing,
    /// so tasks hidden by the filter keep their canonical positions.
    /// Dragging down lands the task after the row that was at `to`, dragging
    /// up lands it before. Returns whether a move happened; `from == to` or
    /// an out-of-range index is a no-op.
    pub async fn reorder(&self, filter: &ViewFilter, from: usize, to: usize) -> bool {
        let moved = {
            let mut tasks = self.tasks.write().await;

            // Canonical indices of the tasks the filter makes visible
            let visible: Vec<usize> = tasks
                .iter()
                .enumerate()
                .filter(|(_, t)| filter.matches(t))
                .map(|(i, _)| i)
                .collect();

            if from == to || from >= visible.len() || to >= visible.len() {
                false
            } else {
                let task = tasks.remove(visible[from]);
                // visible[to] needs no adjustment: for a downward move the
                // removal above already shifted that slot left by one.
                tasks.insert(visible[to], task);
                true
            }
        };

        if moved {
            self.persist().await;
        }
        moved
    }

    /// Write the full collection through the storage adapter.
    ///
    /// Failures are logged as a warning and swallowed; the in-memory state
    /// stays authoritative.
    async fn persist(&self) {
        let tasks = self.tasks.read().await.clone();
        if let Err(e) = self.storage.save(&tasks).await {
            warn!("Failed to persist tasks: {}", e);
        }
    }
}

/// Opaque task id, unique in practice: millisecond timestamp plus a random
/// suffix.
fn new_task_id() -> String {
    format!(
        "task-{}-{}",
        chrono::Utc::now().timestamp_millis(),
        Uuid::new_v4().to_string().split('-').next().unwrap_or("0000")
    )
}
