use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode};

use crate::error::{AgendaError, AgendaResult};
use crate::model::{Contact, Id};

pub fn insert(conn: &Connection, contact: &Contact) -> AgendaResult<()> {
    let result = conn.execute(
        "INSERT INTO contacts (id, name, email, phone, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            contact.id.to_string(),
            contact.name,
            contact.email,
            contact.phone,
            contact.created_at.to_rfc3339(),
        ],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            panic!("contact id collision: {} is already stored", contact.id);
        }
        Err(e) => Err(e.into()),
    }
}

/// Returns true when a row was removed.
pub fn delete(conn: &Connection, id: Id<Contact>) -> AgendaResult<bool> {
    let removed = conn.execute(
        "DELETE FROM contacts WHERE id = ?1",
        params![id.to_string()],
    )?;
    Ok(removed > 0)
}

pub fn find_all(conn: &Connection) -> AgendaResult<Vec<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, created_at FROM contacts ORDER BY seq",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id_str, name, email, phone, created_str)| {
            Ok(Contact {
                id: id_str
                    .parse()
                    .map_err(|e| AgendaError::Other(format!("Invalid UUID: {}", e)))?,
                name,
                email,
                phone,
                created_at: DateTime::parse_from_rfc3339(&created_str)
                    .map_err(|e| AgendaError::Other(format!("Invalid timestamp: {}", e)))?
                    .with_timezone(&Utc),
            })
        })
        .collect()
}

pub fn count(conn: &Connection) -> AgendaResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}
