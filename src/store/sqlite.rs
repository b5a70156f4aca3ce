use std::path::Path;

use log::{debug, error};
use rusqlite::Connection;

use crate::db::{contact_repo, schema};
use crate::error::{AgendaError, AgendaResult};
use crate::model::{Contact, Id};

use super::ContactStore;

/// Contacts persisted in a SQLite database. The connection is closed when
/// the store is dropped.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> AgendaResult<Self> {
        Ok(Self {
            conn: schema::open(path)?,
        })
    }

    pub fn open_in_memory() -> AgendaResult<Self> {
        Ok(Self {
            conn: schema::open_in_memory()?,
        })
    }

    /// Wraps an already-open connection, creating the schema if needed.
    pub fn from_connection(conn: Connection) -> AgendaResult<Self> {
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn len(&self) -> AgendaResult<usize> {
        contact_repo::count(&self.conn)
    }

    pub fn is_empty(&self) -> AgendaResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn log_failure(event: &str, e: AgendaError) -> AgendaError {
    error!("event={} module=store status=error error={}", event, e);
    e
}

impl ContactStore for SqliteStore {
    fn add(&mut self, name: String, email: String, phone: String) -> AgendaResult<Contact> {
        let contact = Contact::create(name, email, phone);
        contact_repo::insert(&self.conn, &contact).map_err(|e| log_failure("contact_insert", e))?;
        debug!("event=contact_insert module=store status=ok id={}", contact.id);
        Ok(contact)
    }

    fn list(&self) -> AgendaResult<Vec<Contact>> {
        contact_repo::find_all(&self.conn).map_err(|e| log_failure("contact_list", e))
    }

    fn remove(&mut self, id: Id<Contact>) -> AgendaResult<bool> {
        let removed =
            contact_repo::delete(&self.conn, id).map_err(|e| log_failure("contact_delete", e))?;
        debug!(
            "event=contact_delete module=store status=ok id={} removed={}",
            id, removed
        );
        Ok(removed)
    }
}
