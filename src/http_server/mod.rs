//! # HTTP Server Module
//!
//! Serves the product REST API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/product` - List and create products
//! - `/product/:id` - Read, replace and delete one product

pub mod config;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
