//! Health check route.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::rest_api::{RestResult, SharedStore};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub products: u64,
}

/// GET /health, which also proves the store answers queries
pub fn health_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(store)
}

async fn health_handler(State(store): State<SharedStore>) -> RestResult<Json<HealthResponse>> {
    let products = store.count()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        products,
    }))
}
