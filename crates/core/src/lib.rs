//! Core library for Taskdeck
//!
//! This crate contains the task collection core, including:
//! - The task model and drafts
//! - The canonical task store and its mutation surface
//! - Derived views: filters, priority sort, statistics
//! - The persistence boundary and its JSON file adapter

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
