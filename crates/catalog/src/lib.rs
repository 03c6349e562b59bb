//! Catalog module (product and location master data).
//!
//! The catalog is the entity store of the system: flat value records keyed by
//! caller-supplied ids, validated at insert time. Ledger movements reference
//! these records by id and never own them.

pub mod catalog;
pub mod location;
pub mod product;

pub use catalog::Catalog;
pub use location::Location;
pub use product::{DEFAULT_LOW_STOCK_THRESHOLD, Product};
