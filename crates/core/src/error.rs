//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (duplicate keys,
/// dangling references, malformed fields). Infrastructure failures enter only
/// as [`DomainError::StorageUnavailable`], raised at the service boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An insert reused an identifier that already exists.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// The addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A movement referenced a product or location that does not exist.
    #[error("unknown reference: {0}")]
    UnknownReference(String),

    /// A field was malformed or out of range (e.g. non-positive quantity,
    /// empty name).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The persistence layer failed; the triggering operation was rolled back.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl DomainError {
    pub fn duplicate_key(msg: impl Into<String>) -> Self {
        Self::DuplicateKey(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unknown_reference(msg: impl Into<String>) -> Self {
        Self::UnknownReference(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn storage_unavailable(msg: impl Into<String>) -> Self {
        Self::StorageUnavailable(msg.into())
    }
}
