use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};

use stockflow_catalog::Product;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", delete(delete_product))
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.list_products() {
        Ok(products) => {
            let body: Vec<_> = products.iter().map(dto::product_to_json).collect();
            Json(body).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> Response {
    let product = Product::new(body.id, body.name, body.threshold);
    match services.create_product(product) {
        Ok(created) => {
            (StatusCode::CREATED, Json(dto::product_to_json(&created))).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    match services.delete_product(&id.into()) {
        Ok(outcome) => Json(serde_json::json!({
            "removed": dto::product_to_json(&outcome.removed),
            "purged_movements": outcome.purged_movements,
        }))
        .into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
