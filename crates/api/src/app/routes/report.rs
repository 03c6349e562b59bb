use std::sync::Arc;

use axum::extract::Extension;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(stock_report))
}

/// Current stock per (product, location). Zero balances are not rows.
pub async fn stock_report(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.stock_report() {
        Ok(rows) => {
            let body: Vec<_> = rows.iter().map(dto::stock_row_to_json).collect();
            Json(body).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}
