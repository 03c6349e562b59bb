use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockflow_catalog::{Location, Product};
use stockflow_ledger::Movement;

/// Serialized form of the full application state.
///
/// Snapshots carry plain record lists, not the validated containers. Loading
/// replays every record through the domain insert paths, so a hand-edited or
/// corrupt snapshot cannot smuggle in a dangling reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub products: Vec<Product>,
    pub locations: Vec<Location>,
    pub movements: Vec<Movement>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// Whole-state snapshot store.
///
/// Implementations persist the complete state on every save. The service
/// layer calls `save` inside its commit step; a failed save aborts the whole
/// operation, so a stored snapshot always matches a state that was actually
/// observable.
pub trait SnapshotStore: Send + Sync {
    /// Load the most recent snapshot, or `None` when nothing has been saved
    /// yet.
    fn load(&self) -> Result<Option<StateSnapshot>, SnapshotError>;

    fn save(&self, snapshot: &StateSnapshot) -> Result<(), SnapshotError>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn load(&self) -> Result<Option<StateSnapshot>, SnapshotError> {
        (**self).load()
    }

    fn save(&self, snapshot: &StateSnapshot) -> Result<(), SnapshotError> {
        (**self).save(snapshot)
    }
}
