//! # Product Store
//!
//! Durable storage of products with id assignment and `name` uniqueness.
//! Handlers only see the [`ProductStore`] trait; [`SqliteProductStore`] is
//! the backing implementation, on a file or in memory.

mod errors;
mod product;
mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use product::{Product, ProductFields, ProductId, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS};
pub use sqlite::SqliteProductStore;

/// Storage operations available to the HTTP layer
pub trait ProductStore: Send + Sync {
    /// Persist a new product; the store assigns its id.
    fn create(&self, fields: &ProductFields) -> StoreResult<Product>;

    /// All products in ascending id order.
    fn list(&self) -> StoreResult<Vec<Product>>;

    /// Fetch one product by id.
    fn get(&self, id: ProductId) -> StoreResult<Product>;

    /// Replace every mutable field of an existing product.
    fn update(&self, id: ProductId, fields: &ProductFields) -> StoreResult<Product>;

    /// Remove a product, returning what was removed.
    fn delete(&self, id: ProductId) -> StoreResult<Product>;

    /// Number of stored products.
    fn count(&self) -> StoreResult<u64>;
}
