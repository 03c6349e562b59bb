use std::collections::BTreeMap;

use stockflow_core::{DomainError, DomainResult, LocationId, ProductId};

use crate::{Location, Product};

/// Master data registry for products and locations.
///
/// Records are keyed by caller-supplied ids; listings iterate in id order so
/// downstream output is reproducible. Inserts check shape invariants before
/// touching state, so a rejected insert leaves the catalog unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
    locations: BTreeMap<LocationId, Location>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product.
    ///
    /// Rejects blank ids, empty names and negative thresholds as
    /// `InvalidInput`, and an already-used id as `DuplicateKey`.
    pub fn insert_product(&mut self, product: Product) -> DomainResult<()> {
        if product.id.is_blank() {
            return Err(DomainError::invalid_input("product id cannot be blank"));
        }
        if product.name.trim().is_empty() {
            return Err(DomainError::invalid_input("product name cannot be empty"));
        }
        if product.threshold < 0 {
            return Err(DomainError::invalid_input(format!(
                "product threshold cannot be negative (got {})",
                product.threshold
            )));
        }
        if self.products.contains_key(&product.id) {
            return Err(DomainError::duplicate_key(format!(
                "product {}",
                product.id
            )));
        }

        self.products.insert(product.id.clone(), product);
        Ok(())
    }

    /// Register a location. Same rules as products, minus the threshold.
    pub fn insert_location(&mut self, location: Location) -> DomainResult<()> {
        if location.id.is_blank() {
            return Err(DomainError::invalid_input("location id cannot be blank"));
        }
        if location.name.trim().is_empty() {
            return Err(DomainError::invalid_input("location name cannot be empty"));
        }
        if self.locations.contains_key(&location.id) {
            return Err(DomainError::duplicate_key(format!(
                "location {}",
                location.id
            )));
        }

        self.locations.insert(location.id.clone(), location);
        Ok(())
    }

    /// Remove a product, returning the removed record.
    ///
    /// Callers deleting a product must purge its ledger references first; see
    /// the cascade operations in the ledger crate.
    pub fn remove_product(&mut self, id: &ProductId) -> DomainResult<Product> {
        self.products
            .remove(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    pub fn remove_location(&mut self, id: &LocationId) -> DomainResult<Location> {
        self.locations
            .remove(id)
            .ok_or_else(|| DomainError::not_found(format!("location {id}")))
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn contains_product(&self, id: &ProductId) -> bool {
        self.products.contains_key(id)
    }

    pub fn contains_location(&self, id: &LocationId) -> bool {
        self.locations.contains_key(id)
    }

    /// All products, in id order.
    pub fn list_products(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// All locations, in id order.
    pub fn list_locations(&self) -> Vec<Location> {
        self.locations.values().cloned().collect()
    }
}
