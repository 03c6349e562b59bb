use std::sync::RwLock;

use super::r#trait::{SnapshotError, SnapshotStore, StateSnapshot};

/// In-memory snapshot store.
///
/// Intended for tests/dev. State survives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: RwLock<Option<StateSnapshot>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<StateSnapshot>, SnapshotError> {
        let slot = self
            .slot
            .read()
            .map_err(|_| SnapshotError::Unavailable("lock poisoned".to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, snapshot: &StateSnapshot) -> Result<(), SnapshotError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| SnapshotError::Unavailable("lock poisoned".to_string()))?;
        *slot = Some(snapshot.clone());
        Ok(())
    }
}
