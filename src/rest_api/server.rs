//! # Product Routes
//!
//! Binds the product handlers to their paths.

use axum::routing::get;
use axum::Router;

use super::handler::{
    create_product, delete_product, get_product, list_products, update_product, SharedStore,
};

/// Build the product router over a shared store
pub fn product_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/product", get(list_products).post(create_product))
        .route(
            "/product/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(store)
}
