use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockflow_core::{LocationId, MovementId, ProductId};

/// Classification of a movement by which location references it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Only `to_location` set: stock entering the system.
    Receipt,
    /// Only `from_location` set: stock leaving the system.
    Consumption,
    /// Both set: stock moving between two locations.
    Transfer,
    /// Neither set: structurally legal, touches no balance.
    Noop,
}

/// A single ledger event: `qty` units of a product leaving `from_location`
/// and/or arriving at `to_location`.
///
/// Movements are immutable once recorded. There is no edit path; corrections
/// are modeled as new compensating movements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub from_location: Option<LocationId>,
    pub to_location: Option<LocationId>,
    pub qty: i64,
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    pub fn kind(&self) -> MovementKind {
        match (&self.from_location, &self.to_location) {
            (None, Some(_)) => MovementKind::Receipt,
            (Some(_), None) => MovementKind::Consumption,
            (Some(_), Some(_)) => MovementKind::Transfer,
            (None, None) => MovementKind::Noop,
        }
    }

    /// True when either reference field names the given location.
    pub fn references_location(&self, id: &LocationId) -> bool {
        self.from_location.as_ref() == Some(id) || self.to_location.as_ref() == Some(id)
    }
}
