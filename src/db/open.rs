use std::path::Path;
use std::time::{Duration, Instant};

use rusqlite::Connection;
use tracing::{error, info};

use super::migrations::apply_migrations;
use super::{DbError, DbResult};

/// Open (or create) a SQLite file and apply pending migrations.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result: DbResult<Connection> = Connection::open(path)
        .map_err(DbError::from)
        .and_then(|mut conn| bootstrap_connection(&mut conn).map(|()| conn));

    match &result {
        Ok(_) => info!(
            event = "db_open",
            mode = "file",
            path = %path.display(),
            duration_ms = started_at.elapsed().as_millis() as u64,
            "database ready"
        ),
        Err(err) => error!(
            event = "db_open",
            mode = "file",
            path = %path.display(),
            error = %err,
            "failed to open database"
        ),
    }

    result
}

/// Open a private in-memory database with the schema applied.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let mut conn = Connection::open_in_memory()?;
    bootstrap_connection(&mut conn)?;
    info!(event = "db_open", mode = "memory", "database ready");
    Ok(conn)
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}
