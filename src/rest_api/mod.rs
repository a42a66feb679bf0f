//! # Product REST API
//!
//! HTTP endpoints for creating, listing, reading, updating and deleting
//! products, plus the wire schema and error translation they share.

pub mod errors;
pub mod handler;
pub mod schema;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::SharedStore;
pub use schema::{to_wire, to_wire_many, DeleteResponse, ProductInput, ProductWire};
pub use server::product_routes;
