//! Service construction for the API.
//!
//! Handlers never talk to a snapshot store directly; they go through
//! [`AppServices`], which owns one [`InventoryService`] over whichever
//! backend the environment selected.

use stockflow_catalog::{Location, Product};
use stockflow_core::{DomainResult, LocationId, MovementId, ProductId};
use stockflow_infra::{InMemorySnapshotStore, InventoryService, JsonFileSnapshotStore};
use stockflow_ledger::{Cascaded, Movement};
use stockflow_reporting::StockRow;

/// Application services injected into every handler via `Extension`.
///
/// `STOCKFLOW_DATA_FILE` selects the file-backed variant; otherwise state
/// lives in memory and vanishes with the process.
pub enum AppServices {
    InMemory {
        service: InventoryService<InMemorySnapshotStore>,
    },
    Persistent {
        service: InventoryService<JsonFileSnapshotStore>,
    },
}

/// Construct services from the environment.
///
/// Opening the service replays any existing snapshot, so a corrupt or
/// invariant-violating data file fails the process at startup instead of
/// serving bad state.
pub fn build_services() -> AppServices {
    match std::env::var("STOCKFLOW_DATA_FILE") {
        Ok(path) if !path.trim().is_empty() => {
            tracing::info!("using file-backed snapshots at {path}");
            let service = InventoryService::open(JsonFileSnapshotStore::new(&path))
                .expect("failed to open file-backed inventory state");
            AppServices::Persistent { service }
        }
        _ => {
            tracing::info!("STOCKFLOW_DATA_FILE not set; state is in-memory only");
            let service = InventoryService::open(InMemorySnapshotStore::new())
                .expect("failed to open in-memory inventory state");
            AppServices::InMemory { service }
        }
    }
}

impl AppServices {
    pub fn create_product(&self, product: Product) -> DomainResult<Product> {
        match self {
            AppServices::InMemory { service } => service.create_product(product),
            AppServices::Persistent { service } => service.create_product(product),
        }
    }

    pub fn delete_product(&self, id: &ProductId) -> DomainResult<Cascaded<Product>> {
        match self {
            AppServices::InMemory { service } => service.delete_product(id),
            AppServices::Persistent { service } => service.delete_product(id),
        }
    }

    pub fn list_products(&self) -> DomainResult<Vec<Product>> {
        match self {
            AppServices::InMemory { service } => service.list_products(),
            AppServices::Persistent { service } => service.list_products(),
        }
    }

    pub fn create_location(&self, location: Location) -> DomainResult<Location> {
        match self {
            AppServices::InMemory { service } => service.create_location(location),
            AppServices::Persistent { service } => service.create_location(location),
        }
    }

    pub fn delete_location(&self, id: &LocationId) -> DomainResult<Cascaded<Location>> {
        match self {
            AppServices::InMemory { service } => service.delete_location(id),
            AppServices::Persistent { service } => service.delete_location(id),
        }
    }

    pub fn list_locations(&self) -> DomainResult<Vec<Location>> {
        match self {
            AppServices::InMemory { service } => service.list_locations(),
            AppServices::Persistent { service } => service.list_locations(),
        }
    }

    pub fn record_movement(&self, movement: Movement) -> DomainResult<Movement> {
        match self {
            AppServices::InMemory { service } => service.record_movement(movement),
            AppServices::Persistent { service } => service.record_movement(movement),
        }
    }

    pub fn delete_movement(&self, id: &MovementId) -> DomainResult<Movement> {
        match self {
            AppServices::InMemory { service } => service.delete_movement(id),
            AppServices::Persistent { service } => service.delete_movement(id),
        }
    }

    pub fn list_movements(&self) -> DomainResult<Vec<Movement>> {
        match self {
            AppServices::InMemory { service } => service.list_movements(),
            AppServices::Persistent { service } => service.list_movements(),
        }
    }

    pub fn stock_report(&self) -> DomainResult<Vec<StockRow>> {
        match self {
            AppServices::InMemory { service } => service.stock_report(),
            AppServices::Persistent { service } => service.stock_report(),
        }
    }
}
