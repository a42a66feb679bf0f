//! # Product Handlers
//!
//! One async function per route. Each extracts its inputs, delegates to the
//! store and projects the result through the schema.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

use crate::store::{ProductId, ProductStore};

use super::errors::RestResult;
use super::schema::{to_wire, to_wire_many, DeleteResponse, ProductInput, ProductWire};

/// Store handle shared by every handler
pub type SharedStore = Arc<dyn ProductStore>;

/// POST /product
pub async fn create_product(
    State(store): State<SharedStore>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> RestResult<Json<ProductWire>> {
    let Json(input) = body?;

    let product = store.create(&input.into_fields())?;
    Ok(Json(to_wire(&product)))
}

/// GET /product
pub async fn list_products(State(store): State<SharedStore>) -> RestResult<Json<Vec<ProductWire>>> {
    let products = store.list()?;
    Ok(Json(to_wire_many(&products)))
}

/// GET /product/:id
pub async fn get_product(
    State(store): State<SharedStore>,
    id: Result<Path<ProductId>, PathRejection>,
) -> RestResult<Json<ProductWire>> {
    let Path(id) = id?;

    let product = store.get(id)?;
    Ok(Json(to_wire(&product)))
}

/// PUT /product/:id
pub async fn update_product(
    State(store): State<SharedStore>,
    id: Result<Path<ProductId>, PathRejection>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> RestResult<Json<ProductWire>> {
    let Path(id) = id?;
    let Json(input) = body?;

    let product = store.update(id, &input.into_fields())?;
    Ok(Json(to_wire(&product)))
}

/// DELETE /product/:id
pub async fn delete_product(
    State(store): State<SharedStore>,
    id: Result<Path<ProductId>, PathRejection>,
) -> RestResult<Json<DeleteResponse>> {
    let Path(id) = id?;

    let product = store.delete(id)?;
    Ok(Json(DeleteResponse::new(&product)))
}
