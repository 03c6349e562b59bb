//! Request payloads and JSON mapping for responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use stockflow_catalog::{Location, Product};
use stockflow_ledger::Movement;
use stockflow_reporting::StockRow;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub id: String,
    pub name: String,
    /// Omitted means the default low-stock threshold.
    pub threshold: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateLocationRequest {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordMovementRequest {
    pub id: String,
    pub product_id: String,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub qty: i64,
    /// Omitted means "now", assigned server-side.
    pub timestamp: Option<DateTime<Utc>>,
}

impl RecordMovementRequest {
    pub fn into_movement(self) -> Movement {
        Movement {
            id: self.id.into(),
            product_id: self.product_id.into(),
            from_location: self.from_location.map(Into::into),
            to_location: self.to_location.map(Into::into),
            qty: self.qty,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.as_str(),
        "name": product.name,
        "threshold": product.threshold,
    })
}

pub fn location_to_json(location: &Location) -> serde_json::Value {
    serde_json::json!({
        "id": location.id.as_str(),
        "name": location.name,
    })
}

pub fn movement_to_json(movement: &Movement) -> serde_json::Value {
    serde_json::json!({
        "id": movement.id.as_str(),
        "product_id": movement.product_id.as_str(),
        "from_location": movement.from_location.as_ref().map(|id| id.as_str()),
        "to_location": movement.to_location.as_ref().map(|id| id.as_str()),
        "qty": movement.qty,
        "timestamp": movement.timestamp,
        "kind": movement.kind(),
    })
}

pub fn stock_row_to_json(row: &StockRow) -> serde_json::Value {
    serde_json::json!({
        "product_id": row.product_id.as_str(),
        "product_name": row.product_name,
        "location_id": row.location_id.as_str(),
        "location_name": row.location_name,
        "balance": row.balance,
        "low_stock": row.low_stock,
    })
}
