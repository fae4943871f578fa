//! Task storage trait
//!
//! Defines the persistence boundary for the task collection: an opaque blob
//! store that loads and saves the full sequence. Overwrite semantics only,
//! with no partial updates and no migrations.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Storage interface for the full task collection
#[async_trait]
pub trait TaskStorage: Send + Sync {
    /// Load the stored collection. A blob that was never written is an empty
    /// collection, not an error.
    async fn load(&self) -> Result<Vec<Task>>;

    /// Overwrite the stored collection with `tasks`
    async fn save(&self, tasks: &[Task]) -> Result<()>;
}
