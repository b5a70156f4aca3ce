use crate::error::{AgendaResult, NotFoundError};
use crate::model::{Contact, Id};
use crate::store::ContactStore;
use crate::validation;

/// The entry point for presentation code. Validates input before it reaches
/// the store and turns "nothing removed" into a `NotFoundError`.
pub struct ContactController<S> {
    store: S,
}

impl<S: ContactStore> ContactController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> AgendaResult<Vec<Contact>> {
        self.store.list()
    }

    /// Adds a contact from raw user input. Values are stored trimmed.
    /// On a validation failure the store is not touched.
    pub fn add(&mut self, name: &str, email: &str, phone: &str) -> AgendaResult<Contact> {
        let input = validation::new_contact(name, email, phone)?;
        self.store.add(input.name, input.email, input.phone)
    }

    pub fn delete(&mut self, id: Id<Contact>) -> AgendaResult<()> {
        if self.store.remove(id)? {
            Ok(())
        } else {
            Err(NotFoundError { id: id.to_string() }.into())
        }
    }

    /// Deletes by the textual id shown to the user. Text that isn't a valid
    /// id can't match any contact and is reported as not found.
    pub fn delete_by_key(&mut self, key: &str) -> AgendaResult<()> {
        match key.parse::<Id<Contact>>() {
            Ok(id) => self.delete(id),
            Err(_) => Err(NotFoundError {
                id: key.trim().to_string(),
            }
            .into()),
        }
    }
}
