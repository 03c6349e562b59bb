use axum::Router;

pub mod locations;
pub mod movements;
pub mod products;
pub mod report;
pub mod system;

/// Router for all resource endpoints. `/health` is wired separately in
/// `app::build_app`.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/locations", locations::router())
        .nest("/movements", movements::router())
        .nest("/report", report::router())
}
