use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockflow_catalog::Catalog;
use stockflow_core::{LocationId, ProductId};
use stockflow_ledger::MovementLedger;

/// One line of the stock report: the current net balance of a product at a
/// location, plus whether it sits below the product's threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub location_id: LocationId,
    pub location_name: String,
    pub balance: i64,
    pub low_stock: bool,
}

/// Derive the stock report from the ledger.
///
/// Single pass over all movements, accumulating signed quantities per
/// `(product, location)` pair: `to_location` adds, `from_location` subtracts.
/// Pairs whose balance nets out to exactly zero are omitted; they hold no
/// current stock. The low-stock flag compares the *signed* balance against
/// the product threshold, so a negative balance (over-withdrawal) flags too.
///
/// Output order is (product_id, location_id), independent of the order the
/// movements were recorded in.
pub fn stock_report(catalog: &Catalog, ledger: &MovementLedger) -> Vec<StockRow> {
    let mut balances: BTreeMap<(ProductId, LocationId), i64> = BTreeMap::new();

    for movement in ledger.iter() {
        if let Some(to) = &movement.to_location {
            *balances
                .entry((movement.product_id.clone(), to.clone()))
                .or_default() += movement.qty;
        }
        if let Some(from) = &movement.from_location {
            *balances
                .entry((movement.product_id.clone(), from.clone()))
                .or_default() -= movement.qty;
        }
    }

    balances
        .into_iter()
        .filter(|(_, balance)| *balance != 0)
        .filter_map(|((product_id, location_id), balance)| {
            // Cascade deletion guarantees every ledger reference resolves.
            let product = catalog.product(&product_id)?;
            let location = catalog.location(&location_id)?;
            Some(StockRow {
                product_id,
                product_name: product.name.clone(),
                location_id,
                location_name: location.name.clone(),
                balance,
                low_stock: balance < product.threshold,
            })
        })
        .collect()
}
