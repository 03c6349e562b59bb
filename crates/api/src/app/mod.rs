//! Application wiring for the HTTP API.
//!
//! Layout:
//! - `services.rs`: snapshot backend selection and the handler-facing service surface
//! - `routes/`: HTTP routes and handlers, one file per resource
//! - `dto.rs`: request payloads and JSON mapping for responses
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full application router. Used by `main.rs` and by the black-box
/// tests, so both exercise identical wiring.
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
