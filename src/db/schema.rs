use std::path::Path;

use log::{debug, error};
use rusqlite::Connection;

use crate::error::AgendaResult;

/// Initialize the database schema. Creates the contacts table if it doesn't exist.
///
/// `seq` carries insertion order; `id` is the contact's public identifier.
pub fn initialize(conn: &Connection) -> AgendaResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

/// Open (or create) a database file and make sure the schema exists.
pub fn open(path: &Path) -> AgendaResult<Connection> {
    debug!("event=db_open module=db status=start path={}", path.display());
    let conn = Connection::open(path).map_err(|e| {
        error!(
            "event=db_open module=db status=error path={} error={}",
            path.display(),
            e
        );
        e
    })?;
    initialize(&conn)?;
    debug!("event=db_open module=db status=ok path={}", path.display());
    Ok(conn)
}

pub fn open_in_memory() -> AgendaResult<Connection> {
    let conn = Connection::open_in_memory()?;
    initialize(&conn)?;
    Ok(conn)
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
