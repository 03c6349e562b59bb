use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_movements).post(record_movement))
        .route("/:id", delete(delete_movement))
}

/// Movements come back ordered by timestamp, ties broken by id.
pub async fn list_movements(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.list_movements() {
        Ok(movements) => {
            let body: Vec<_> = movements.iter().map(dto::movement_to_json).collect();
            Json(body).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn record_movement(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RecordMovementRequest>,
) -> Response {
    match services.record_movement(body.into_movement()) {
        Ok(recorded) => {
            (StatusCode::CREATED, Json(dto::movement_to_json(&recorded))).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_movement(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    match services.delete_movement(&id.into()) {
        Ok(removed) => Json(dto::movement_to_json(&removed)).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
