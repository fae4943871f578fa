//! File-based task storage implementation
//!
//! Stores the task collection as pretty-printed JSON in a single file on
//! disk. The whole collection is rewritten on every save.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::model::Task;
use super::storage::TaskStorage;
use crate::Result;

/// Conventional file name for the persisted collection
const TASKS_FILE: &str = "tasks.json";

/// File-backed task storage using JSON
pub struct FileStore {
    /// Path to the JSON file
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store backed by `tasks.json` inside a data directory
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(TASKS_FILE),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TaskStorage for FileStore {
    async fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}
