//! Thread-safe application service over the domain.
//!
//! One writer at a time: every mutation takes the write lock, applies to a
//! clone of the state, saves a snapshot, and only then swaps the clone in.
//! Commit invariant: **the swap happens only after the save succeeds**, so a
//! failed persist leaves the observable state exactly as it was. Reads take
//! the read lock and only ever see whole commits.

use std::sync::RwLock;

use stockflow_catalog::{Catalog, Location, Product};
use stockflow_core::{DomainError, DomainResult, LocationId, MovementId, ProductId};
use stockflow_ledger::{Cascaded, Movement, MovementLedger, cascade};
use stockflow_reporting::{StockRow, stock_report};

use crate::snapshot::{SnapshotStore, StateSnapshot};

/// Catalog and ledger guarded as one unit, so a cascade commits atomically
/// with the master-record removal it belongs to.
#[derive(Debug, Default, Clone)]
struct InventoryState {
    catalog: Catalog,
    ledger: MovementLedger,
}

impl InventoryState {
    /// Rebuild state by replaying a snapshot through the domain insert
    /// paths. Any replay failure means the snapshot violates an invariant
    /// and must not be loaded.
    fn restore(snapshot: StateSnapshot) -> DomainResult<Self> {
        let mut state = Self::default();
        for product in snapshot.products {
            state.catalog.insert_product(product)?;
        }
        for location in snapshot.locations {
            state.catalog.insert_location(location)?;
        }
        for movement in snapshot.movements {
            state.ledger.record(movement, &state.catalog)?;
        }
        Ok(state)
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            products: self.catalog.list_products(),
            locations: self.catalog.list_locations(),
            movements: self.ledger.list(),
        }
    }
}

/// Application service: every operation of the system behind one lock.
#[derive(Debug)]
pub struct InventoryService<S: SnapshotStore> {
    state: RwLock<InventoryState>,
    snapshots: S,
}

impl<S: SnapshotStore> InventoryService<S> {
    /// Open the service, restoring state from the store's snapshot when one
    /// exists.
    pub fn open(snapshots: S) -> DomainResult<Self> {
        let loaded = snapshots
            .load()
            .map_err(|e| DomainError::storage_unavailable(e.to_string()))?;
        let state = match loaded {
            Some(snapshot) => InventoryState::restore(snapshot).map_err(|e| {
                DomainError::storage_unavailable(format!("snapshot replay failed: {e}"))
            })?,
            None => InventoryState::default(),
        };

        Ok(Self {
            state: RwLock::new(state),
            snapshots,
        })
    }

    /// Run one mutating operation end to end: apply to a clone of the state,
    /// persist the result, then swap the clone in.
    fn commit<T>(
        &self,
        apply: impl FnOnce(&mut InventoryState) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut state = self
            .state
            .write()
            .map_err(|_| DomainError::storage_unavailable("state lock poisoned"))?;

        let mut next = state.clone();
        let out = apply(&mut next)?;

        if let Err(e) = self.snapshots.save(&next.snapshot()) {
            tracing::warn!("snapshot save failed, operation rolled back: {e}");
            return Err(DomainError::storage_unavailable(e.to_string()));
        }

        *state = next;
        Ok(out)
    }

    fn read<T>(&self, f: impl FnOnce(&InventoryState) -> T) -> DomainResult<T> {
        let state = self
            .state
            .read()
            .map_err(|_| DomainError::storage_unavailable("state lock poisoned"))?;
        Ok(f(&state))
    }

    pub fn create_product(&self, product: Product) -> DomainResult<Product> {
        let stored = product.clone();
        self.commit(move |state| state.catalog.insert_product(product))?;
        tracing::debug!(product_id = %stored.id, "product created");
        Ok(stored)
    }

    /// Delete a product together with every movement referencing it.
    pub fn delete_product(&self, id: &ProductId) -> DomainResult<Cascaded<Product>> {
        let id = id.clone();
        let out = self.commit(move |state| {
            cascade::delete_product(&mut state.catalog, &mut state.ledger, &id)
        })?;
        tracing::info!(
            product_id = %out.removed.id,
            purged = out.purged_movements,
            "product deleted with cascade"
        );
        Ok(out)
    }

    pub fn create_location(&self, location: Location) -> DomainResult<Location> {
        let stored = location.clone();
        self.commit(move |state| state.catalog.insert_location(location))?;
        tracing::debug!(location_id = %stored.id, "location created");
        Ok(stored)
    }

    /// Delete a location together with every movement touching it as either
    /// endpoint.
    pub fn delete_location(&self, id: &LocationId) -> DomainResult<Cascaded<Location>> {
        let id = id.clone();
        let out = self.commit(move |state| {
            cascade::delete_location(&mut state.catalog, &mut state.ledger, &id)
        })?;
        tracing::info!(
            location_id = %out.removed.id,
            purged = out.purged_movements,
            "location deleted with cascade"
        );
        Ok(out)
    }

    pub fn record_movement(&self, movement: Movement) -> DomainResult<Movement> {
        let stored = movement.clone();
        self.commit(move |state| state.ledger.record(movement, &state.catalog))?;
        tracing::debug!(movement_id = %stored.id, qty = stored.qty, "movement recorded");
        Ok(stored)
    }

    pub fn delete_movement(&self, id: &MovementId) -> DomainResult<Movement> {
        let id = id.clone();
        let removed = self.commit(move |state| state.ledger.delete(&id))?;
        tracing::debug!(movement_id = %removed.id, "movement deleted");
        Ok(removed)
    }

    pub fn list_products(&self) -> DomainResult<Vec<Product>> {
        self.read(|state| state.catalog.list_products())
    }

    pub fn list_locations(&self) -> DomainResult<Vec<Location>> {
        self.read(|state| state.catalog.list_locations())
    }

    pub fn list_movements(&self) -> DomainResult<Vec<Movement>> {
        self.read(|state| state.ledger.list())
    }

    /// Derive the stock report from the current ledger.
    pub fn stock_report(&self) -> DomainResult<Vec<StockRow>> {
        self.read(|state| stock_report(&state.catalog, &state.ledger))
    }
}
