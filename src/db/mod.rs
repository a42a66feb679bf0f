//! # SQLite Bootstrap
//!
//! Opens the product database and brings its schema up to date.
//!
//! Invariants:
//! - Returned connections have the `product` table in place.
//! - Schema version is tracked via `PRAGMA user_version`.

mod migrations;
mod open;

use thiserror::Error;

pub use migrations::{apply_migrations, latest_version};
pub use open::{open_db, open_db_in_memory};

/// Result type for database bootstrap
pub type DbResult<T> = Result<T, DbError>;

/// Errors raised while opening or migrating the database
#[derive(Debug, Error)]
pub enum DbError {
    /// Underlying SQLite failure
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The file was written by a newer binary
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion { db_version: u32, latest_supported: u32 },
}
