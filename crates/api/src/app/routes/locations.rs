use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};

use stockflow_catalog::Location;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_locations).post(create_location))
        .route("/:id", delete(delete_location))
}

pub async fn list_locations(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.list_locations() {
        Ok(locations) => {
            let body: Vec<_> = locations.iter().map(dto::location_to_json).collect();
            Json(body).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn create_location(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateLocationRequest>,
) -> Response {
    let location = Location::new(body.id, body.name);
    match services.create_location(location) {
        Ok(created) => {
            (StatusCode::CREATED, Json(dto::location_to_json(&created))).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_location(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    match services.delete_location(&id.into()) {
        Ok(outcome) => Json(serde_json::json!({
            "removed": dto::location_to_json(&outcome.removed),
            "purged_movements": outcome.purged_movements,
        }))
        .into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
