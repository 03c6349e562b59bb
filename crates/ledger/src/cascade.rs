//! Cascade deletion: removing a product or location purges every ledger
//! event referencing it before the master record goes away.
//!
//! Ordering invariant: **the purge happens before the record is removed**, so
//! no intermediate state holds a movement whose referent is gone. Deletion is
//! destructive and permanent; there is no tombstone or soft-delete, and
//! purged events are unrecoverable.

use stockflow_catalog::{Catalog, Location, Product};
use stockflow_core::{DomainError, DomainResult, LocationId, ProductId};

use crate::MovementLedger;

/// Outcome of a cascading delete: the removed master record and how many
/// ledger events went with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cascaded<T> {
    pub removed: T,
    pub purged_movements: usize,
}

/// Delete a product, purging its movements first.
///
/// Fails with `NotFound` before anything is touched if the product does not
/// exist.
pub fn delete_product(
    catalog: &mut Catalog,
    ledger: &mut MovementLedger,
    id: &ProductId,
) -> DomainResult<Cascaded<Product>> {
    if !catalog.contains_product(id) {
        return Err(DomainError::not_found(format!("product {id}")));
    }

    let purged_movements = ledger.purge_by_product(id);
    let removed = catalog.remove_product(id)?;
    Ok(Cascaded {
        removed,
        purged_movements,
    })
}

/// Delete a location, purging movements that reference it as either
/// endpoint.
pub fn delete_location(
    catalog: &mut Catalog,
    ledger: &mut MovementLedger,
    id: &LocationId,
) -> DomainResult<Cascaded<Location>> {
    if !catalog.contains_location(id) {
        return Err(DomainError::not_found(format!("location {id}")));
    }

    let purged_movements = ledger.purge_by_location(id);
    let removed = catalog.remove_location(id)?;
    Ok(Cascaded {
        removed,
        purged_movements,
    })
}
