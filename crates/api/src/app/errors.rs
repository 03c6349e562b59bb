//! Consistent JSON error responses.
//!
//! Every error body has the same shape:
//! `{"error": "<stable_code>", "message": "<human detail>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use stockflow_core::DomainError;

/// Map a domain error onto the HTTP surface.
pub fn domain_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::DuplicateKey(msg) => json_error(StatusCode::CONFLICT, "duplicate_key", msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        DomainError::UnknownReference(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "unknown_reference", msg)
        }
        DomainError::InvalidInput(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_input", msg),
        DomainError::StorageUnavailable(msg) => {
            json_error(StatusCode::SERVICE_UNAVAILABLE, "storage_unavailable", msg)
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
