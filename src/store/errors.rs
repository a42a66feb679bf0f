use thiserror::Error;

use crate::db::DbError;

use super::ProductId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Product store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product with this id
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Another product already uses this name
    #[error("a product named '{0}' already exists")]
    DuplicateName(String),

    /// A field violates the table's bounds
    #[error("{0}")]
    InvalidField(String),

    /// Connection mutex was poisoned by a panicking holder
    #[error("store lock poisoned")]
    LockPoisoned,

    /// Underlying database failure
    #[error("database error: {0}")]
    Db(#[from] DbError),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(err))
    }
}
