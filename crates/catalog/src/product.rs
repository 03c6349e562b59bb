use serde::{Deserialize, Serialize};

use stockflow_core::ProductId;

/// Low-stock cutoff applied when a product is created without an explicit
/// threshold.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Product master record.
///
/// Products are created once and never updated; the only lifecycle transition
/// is deletion, which cascades over the movement ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Compared against the *signed* balance in stock reports; any balance
    /// strictly below it flags as low stock.
    pub threshold: i64,
}

impl Product {
    /// Build a product, falling back to [`DEFAULT_LOW_STOCK_THRESHOLD`] when
    /// no threshold is given.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        threshold: Option<i64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            threshold: threshold.unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD),
        }
    }
}
