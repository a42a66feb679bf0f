//! product-service - A small CRUD HTTP service for products
//!
//! SQLite-backed record store, an allow-list wire schema, and axum
//! handlers for create, list, read, update and delete.

pub mod cli;
pub mod db;
pub mod http_server;
pub mod logging;
pub mod rest_api;
pub mod store;
