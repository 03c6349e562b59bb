use std::collections::BTreeMap;

use stockflow_catalog::Catalog;
use stockflow_core::{DomainError, DomainResult, LocationId, MovementId, ProductId};

use crate::Movement;

/// Append-only movement ledger.
///
/// Events are immutable once recorded. The only mutations are explicit
/// single-event deletion and the bulk purges driven by cascade deletion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MovementLedger {
    movements: BTreeMap<MovementId, Movement>,
}

impl MovementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movement.
    ///
    /// Shape checks run first (`InvalidInput` for a blank id or non-positive
    /// qty), then id uniqueness (`DuplicateKey`), then every reference must
    /// resolve in the catalog (`UnknownReference`). A rejected movement
    /// leaves the ledger unchanged.
    pub fn record(&mut self, movement: Movement, catalog: &Catalog) -> DomainResult<()> {
        if movement.id.is_blank() {
            return Err(DomainError::invalid_input("movement id cannot be blank"));
        }
        if movement.qty <= 0 {
            return Err(DomainError::invalid_input(format!(
                "movement qty must be positive (got {})",
                movement.qty
            )));
        }
        if self.movements.contains_key(&movement.id) {
            return Err(DomainError::duplicate_key(format!(
                "movement {}",
                movement.id
            )));
        }
        if !catalog.contains_product(&movement.product_id) {
            return Err(DomainError::unknown_reference(format!(
                "product {}",
                movement.product_id
            )));
        }
        for location in [&movement.from_location, &movement.to_location]
            .into_iter()
            .flatten()
        {
            if !catalog.contains_location(location) {
                return Err(DomainError::unknown_reference(format!(
                    "location {location}"
                )));
            }
        }

        self.movements.insert(movement.id.clone(), movement);
        Ok(())
    }

    /// Delete one movement, returning it. The only explicit per-event
    /// mutation.
    pub fn delete(&mut self, id: &MovementId) -> DomainResult<Movement> {
        self.movements
            .remove(id)
            .ok_or_else(|| DomainError::not_found(format!("movement {id}")))
    }

    /// Remove every movement referencing the product. Idempotent; purging an
    /// unreferenced id removes nothing and is not an error. Returns the
    /// number removed.
    pub fn purge_by_product(&mut self, id: &ProductId) -> usize {
        let before = self.movements.len();
        self.movements.retain(|_, m| m.product_id != *id);
        before - self.movements.len()
    }

    /// Remove every movement referencing the location as either endpoint.
    /// Idempotent; returns the number removed.
    pub fn purge_by_location(&mut self, id: &LocationId) -> usize {
        let before = self.movements.len();
        self.movements.retain(|_, m| !m.references_location(id));
        before - self.movements.len()
    }

    pub fn get(&self, id: &MovementId) -> Option<&Movement> {
        self.movements.get(id)
    }

    pub fn contains(&self, id: &MovementId) -> bool {
        self.movements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// Iterate in id order. Balance aggregation must not depend on any
    /// particular order, so this one is merely deterministic.
    pub fn iter(&self) -> impl Iterator<Item = &Movement> {
        self.movements.values()
    }

    /// All movements ordered by (timestamp, id); the id tiebreak keeps equal
    /// timestamps stable.
    pub fn list(&self) -> Vec<Movement> {
        let mut all: Vec<Movement> = self.movements.values().cloned().collect();
        all.sort_by(|a, b| (a.timestamp, &a.id).cmp(&(b.timestamp, &b.id)));
        all
    }
}
