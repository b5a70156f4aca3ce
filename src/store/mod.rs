//! Authoritative storage for contacts.
//!
//! Every store keeps contacts in insertion order and guarantees that no two
//! live contacts share an id. A collision is a broken id generator, so
//! implementations panic rather than report it.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::AgendaResult;
use crate::model::{Contact, Id};

pub trait ContactStore {
    /// Creates a contact with a fresh id and appends it to the collection.
    /// Duplicate content is allowed.
    fn add(&mut self, name: String, email: String, phone: String) -> AgendaResult<Contact>;

    /// Owned snapshot of all contacts, oldest first.
    fn list(&self) -> AgendaResult<Vec<Contact>>;

    /// Removes the contact with `id`. Returns false when nothing matched.
    fn remove(&mut self, id: Id<Contact>) -> AgendaResult<bool>;
}

impl<S: ContactStore + ?Sized> ContactStore for Box<S> {
    fn add(&mut self, name: String, email: String, phone: String) -> AgendaResult<Contact> {
        (**self).add(name, email, phone)
    }

    fn list(&self) -> AgendaResult<Vec<Contact>> {
        (**self).list()
    }

    fn remove(&mut self, id: Id<Contact>) -> AgendaResult<bool> {
        (**self).remove(id)
    }
}
