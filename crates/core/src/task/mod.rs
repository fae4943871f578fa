//! Task module
//!
//! This module contains task-related types and logic: the task model, the
//! storage adapters, the canonical collection store, and the pure view
//! functions over task snapshots.

mod file_store;
mod model;
mod storage;
mod store;
pub mod views;

pub use file_store::FileStore;
pub use model::*;
pub use storage::TaskStorage;
pub use store::TaskStore;
pub use views::{PriorityCounts, Statistics, StatusFilter, ViewFilter};
