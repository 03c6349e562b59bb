//! Core domain primitives shared by every crate in the workspace.
//!
//! Pure domain types only: no IO, no HTTP, no persistence concerns.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{LocationId, MovementId, ProductId};
