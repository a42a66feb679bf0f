use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{ffi, params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::db::{open_db, open_db_in_memory};

use super::{Product, ProductFields, ProductId, ProductStore, StoreError, StoreResult};

const PRODUCT_SELECT_SQL: &str = "SELECT id, name, description, price, quantity FROM product";

/// SQLite-backed product store.
///
/// The connection sits behind a mutex, so writers are serialized and each
/// operation commits before the lock is released.
pub struct SqliteProductStore {
    conn: Mutex<Connection>,
}

impl SqliteProductStore {
    /// Open (or create) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self::from_connection(open_db(path)?))
    }

    /// A fresh, private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?))
    }

    /// Wrap a connection that already has the schema applied.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ProductStore for SqliteProductStore {
    fn create(&self, fields: &ProductFields) -> StoreResult<Product> {
        fields.validate()?;
        let conn = self.lock()?;

        conn.execute(
            "INSERT INTO product (name, description, price, quantity) VALUES (?1, ?2, ?3, ?4);",
            params![fields.name, fields.description, fields.price, fields.quantity],
        )
        .map_err(|err| map_write_error(err, fields))?;

        let id = conn.last_insert_rowid();
        info!(event = "product_create", product_id = id, "product created");
        Ok(fields.clone().into_product(id))
    }

    fn list(&self) -> StoreResult<Vec<Product>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{PRODUCT_SELECT_SQL} ORDER BY id;"))?;
        let products = stmt
            .query_map([], parse_product_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(event = "product_list", count = products.len(), "listed products");
        Ok(products)
    }

    fn get(&self, id: ProductId) -> StoreResult<Product> {
        let conn = self.lock()?;
        find_product(&conn, id)?.ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: ProductId, fields: &ProductFields) -> StoreResult<Product> {
        fields.validate()?;
        let conn = self.lock()?;

        let changed = conn
            .execute(
                "UPDATE product
                 SET name = ?1, description = ?2, price = ?3, quantity = ?4
                 WHERE id = ?5;",
                params![fields.name, fields.description, fields.price, fields.quantity, id],
            )
            .map_err(|err| map_write_error(err, fields))?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        info!(event = "product_update", product_id = id, "product updated");
        Ok(fields.clone().into_product(id))
    }

    fn delete(&self, id: ProductId) -> StoreResult<Product> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let product = find_product(&tx, id)?.ok_or(StoreError::NotFound(id))?;
        tx.execute("DELETE FROM product WHERE id = ?1;", params![id])?;
        tx.commit()?;

        info!(event = "product_delete", product_id = id, "product deleted");
        Ok(product)
    }

    fn count(&self) -> StoreResult<u64> {
        let conn = self.lock()?;
        let count = conn.query_row("SELECT COUNT(*) FROM product;", [], |row| {
            row.get::<_, i64>(0)
        })?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

fn find_product(conn: &Connection, id: ProductId) -> StoreResult<Option<Product>> {
    let product = conn
        .query_row(
            &format!("{PRODUCT_SELECT_SQL} WHERE id = ?1;"),
            params![id],
            parse_product_row,
        )
        .optional()?;
    Ok(product)
}

fn parse_product_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        quantity: row.get(4)?,
    })
}

/// Translate constraint failures on insert/update into store errors.
fn map_write_error(err: rusqlite::Error, fields: &ProductFields) -> StoreError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        match failure.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE => {
                return StoreError::DuplicateName(fields.name.clone());
            }
            ffi::SQLITE_CONSTRAINT_CHECK => {
                return StoreError::InvalidField(format!("field out of bounds: {err}"));
            }
            _ => {}
        }
    }
    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ProductFields {
        ProductFields::new("Widget", "A widget", 9.99, 5)
    }

    #[test]
    fn test_create_assigns_first_id() {
        let store = SqliteProductStore::open_in_memory().unwrap();
        let product = store.create(&widget()).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let store = SqliteProductStore::open_in_memory().unwrap();
        store.create(&widget()).unwrap();

        let err = store.create(&widget()).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateName(name) if name == "Widget"));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_check_constraint_maps_to_invalid_field() {
        let store = SqliteProductStore::open_in_memory().unwrap();
        let conn = store.lock().unwrap();
        let long_name = "x".repeat(crate::store::NAME_MAX_CHARS + 1);
        let fields = ProductFields::new(long_name, "d", 1.0, 1);

        let err = conn
            .execute(
                "INSERT INTO product (name, description, price, quantity) VALUES (?1, ?2, ?3, ?4);",
                params![fields.name, fields.description, fields.price, fields.quantity],
            )
            .map_err(|err| map_write_error(err, &fields))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidField(_)));
    }

    #[test]
    fn test_poisoned_lock_is_an_error() {
        let store = std::sync::Arc::new(SqliteProductStore::open_in_memory().unwrap());
        store.create(&widget()).unwrap();

        let holder = std::sync::Arc::clone(&store);
        let joined = std::thread::spawn(move || {
            let _guard = holder.conn.lock().unwrap();
            panic!("panic while holding the connection");
        })
        .join();
        assert!(joined.is_err());

        assert!(matches!(store.get(1), Err(StoreError::LockPoisoned)));
        assert!(matches!(store.create(&widget()), Err(StoreError::LockPoisoned)));
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let store = SqliteProductStore::open_in_memory().unwrap();
        assert!(matches!(store.delete(42), Err(StoreError::NotFound(42))));
    }
}
