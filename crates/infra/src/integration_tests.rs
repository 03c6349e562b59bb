//! Integration tests for the full service pipeline.
//!
//! Tests: operation → service commit → snapshot store → reopen → report
//!
//! Verifies:
//! - Mutations flow through to listings and the derived report
//! - Cascade deletion holds across the whole stack
//! - State survives a restart through the file-backed store

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use stockflow_catalog::{Location, Product};
    use stockflow_core::{DomainError, LocationId, ProductId};
    use stockflow_ledger::Movement;

    use crate::service::InventoryService;
    use crate::snapshot::{InMemorySnapshotStore, JsonFileSnapshotStore};

    fn movement(
        id: &str,
        product: &str,
        from: Option<&str>,
        to: Option<&str>,
        qty: i64,
    ) -> Movement {
        Movement {
            id: id.into(),
            product_id: product.into(),
            from_location: from.map(Into::into),
            to_location: to.map(Into::into),
            qty,
            timestamp: Utc::now(),
        }
    }

    fn setup() -> InventoryService<InMemorySnapshotStore> {
        let service = InventoryService::open(InMemorySnapshotStore::new()).unwrap();
        service
            .create_product(Product::new("P1", "Widget", None))
            .unwrap();
        service
            .create_product(Product::new("P2", "Gadget", Some(2)))
            .unwrap();
        service
            .create_location(Location::new("L1", "Main store"))
            .unwrap();
        service
            .create_location(Location::new("L2", "Backroom"))
            .unwrap();
        service
    }

    #[test]
    fn create_move_report_flow() {
        let service = setup();
        service
            .record_movement(movement("M1", "P1", None, Some("L1"), 10))
            .unwrap();
        service
            .record_movement(movement("M2", "P1", Some("L1"), None, 3))
            .unwrap();

        let report = service.stock_report().unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].product_name, "Widget");
        assert_eq!(report[0].location_name, "Main store");
        assert_eq!(report[0].balance, 7);
        assert!(!report[0].low_stock);

        // One more withdrawal drops the balance under the threshold of 5.
        service
            .record_movement(movement("M3", "P1", Some("L1"), None, 4))
            .unwrap();
        let report = service.stock_report().unwrap();
        assert_eq!(report[0].balance, 3);
        assert!(report[0].low_stock);
    }

    #[test]
    fn product_cascade_removes_events_and_rows() {
        let service = setup();
        service
            .record_movement(movement("M1", "P1", None, Some("L1"), 10))
            .unwrap();
        service
            .record_movement(movement("M2", "P2", None, Some("L1"), 10))
            .unwrap();

        let out = service.delete_product(&ProductId::new("P1")).unwrap();
        assert_eq!(out.purged_movements, 1);

        let remaining = service.list_movements().unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|m| m.product_id != ProductId::new("P1")));

        let report = service.stock_report().unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].product_id, ProductId::new("P2"));
    }

    #[test]
    fn location_cascade_covers_both_endpoints() {
        let service = setup();
        service
            .record_movement(movement("M1", "P1", None, Some("L1"), 5))
            .unwrap();
        service
            .record_movement(movement("M2", "P1", Some("L1"), Some("L2"), 2))
            .unwrap();
        service
            .record_movement(movement("M3", "P1", Some("L2"), None, 1))
            .unwrap();

        let out = service.delete_location(&LocationId::new("L1")).unwrap();
        assert_eq!(out.purged_movements, 2);

        let remaining = service.list_movements().unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(
            remaining
                .iter()
                .all(|m| !m.references_location(&LocationId::new("L1")))
        );
    }

    #[test]
    fn movement_delete_recomputes_balances() {
        let service = setup();
        service
            .record_movement(movement("M1", "P1", None, Some("L1"), 10))
            .unwrap();
        service
            .record_movement(movement("M2", "P1", None, Some("L1"), 5))
            .unwrap();
        assert_eq!(service.stock_report().unwrap()[0].balance, 15);

        service.delete_movement(&"M2".into()).unwrap();
        assert_eq!(service.stock_report().unwrap()[0].balance, 10);
    }

    #[test]
    fn file_backed_state_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockflow.json");

        {
            let service =
                InventoryService::open(JsonFileSnapshotStore::new(&path)).unwrap();
            service
                .create_product(Product::new("P1", "Widget", None))
                .unwrap();
            service
                .create_location(Location::new("L1", "Main store"))
                .unwrap();
            service
                .record_movement(movement("M1", "P1", None, Some("L1"), 10))
                .unwrap();
            service
                .record_movement(movement("M2", "P1", Some("L1"), None, 3))
                .unwrap();
        }

        let reopened = InventoryService::open(JsonFileSnapshotStore::new(&path)).unwrap();
        assert_eq!(reopened.list_products().unwrap().len(), 1);
        assert_eq!(reopened.list_movements().unwrap().len(), 2);

        let report = reopened.stock_report().unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].balance, 7);
    }

    #[test]
    fn cascade_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockflow.json");

        {
            let service =
                InventoryService::open(JsonFileSnapshotStore::new(&path)).unwrap();
            service
                .create_product(Product::new("P1", "Widget", None))
                .unwrap();
            service
                .create_location(Location::new("L1", "Main store"))
                .unwrap();
            service
                .record_movement(movement("M1", "P1", None, Some("L1"), 10))
                .unwrap();
            service.delete_product(&ProductId::new("P1")).unwrap();
        }

        let reopened = InventoryService::open(JsonFileSnapshotStore::new(&path)).unwrap();
        assert!(reopened.list_products().unwrap().is_empty());
        assert!(reopened.list_movements().unwrap().is_empty());
    }

    #[test]
    fn rejected_operations_do_not_disturb_file_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockflow.json");

        let service = InventoryService::open(JsonFileSnapshotStore::new(&path)).unwrap();
        service
            .create_product(Product::new("P1", "Widget", None))
            .unwrap();

        let err = service
            .create_product(Product::new("P1", "Widget again", None))
            .unwrap_err();
        match err {
            DomainError::DuplicateKey(_) => {}
            _ => panic!("Expected DuplicateKey error"),
        }
        let err = service
            .record_movement(movement("M1", "P1", None, Some("nowhere"), 1))
            .unwrap_err();
        match err {
            DomainError::UnknownReference(_) => {}
            _ => panic!("Expected UnknownReference error"),
        }

        // What is on disk is exactly the accepted state.
        let reopened = InventoryService::open(JsonFileSnapshotStore::new(&path)).unwrap();
        assert_eq!(reopened.list_products().unwrap().len(), 1);
        assert!(reopened.list_movements().unwrap().is_empty());
    }
}
