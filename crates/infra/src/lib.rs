//! Infrastructure layer: snapshot persistence and the thread-safe
//! application service wrapping the domain.

pub mod service;
pub mod snapshot;

mod integration_tests;

pub use service::InventoryService;
pub use snapshot::{
    InMemorySnapshotStore, JsonFileSnapshotStore, SnapshotError, SnapshotStore, StateSnapshot,
};
