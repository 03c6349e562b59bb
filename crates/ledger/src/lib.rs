//! Ledger module (append-only movement events).
//!
//! Movements are immutable events transferring quantity into, out of, or
//! between locations. The ledger enforces the referential and quantity
//! invariants at insert time; the [`cascade`] module keeps them intact when
//! master records are deleted.

pub mod cascade;
pub mod ledger;
pub mod movement;

pub use cascade::{Cascaded, delete_location, delete_product};
pub use ledger::MovementLedger;
pub use movement::{Movement, MovementKind};
