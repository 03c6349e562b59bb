//! Whole-state snapshot boundary.
//!
//! This module defines an infrastructure-facing abstraction for saving and
//! loading the complete application state without making any storage
//! assumptions.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemorySnapshotStore;
pub use json_file::JsonFileSnapshotStore;
pub use r#trait::{SnapshotError, SnapshotStore, StateSnapshot};
