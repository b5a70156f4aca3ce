use crate::error::AgendaResult;
use crate::model::{Contact, Id};

use super::ContactStore;

/// Contacts held in a `Vec`; nothing outlives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contacts: Vec<Contact>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn append(&mut self, contact: Contact) -> Contact {
        assert!(
            !self.contacts.iter().any(|c| c.id == contact.id),
            "contact id collision: {} is already stored",
            contact.id
        );
        self.contacts.push(contact.clone());
        contact
    }
}

impl ContactStore for MemoryStore {
    fn add(&mut self, name: String, email: String, phone: String) -> AgendaResult<Contact> {
        Ok(self.append(Contact::create(name, email, phone)))
    }

    fn list(&self) -> AgendaResult<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn remove(&mut self, id: Id<Contact>) -> AgendaResult<bool> {
        match self.contacts.iter().position(|c| c.id == id) {
            Some(index) => {
                // `remove` shifts the tail left, keeping the relative order.
                self.contacts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "contact id collision")]
    fn append_with_stored_id_is_fatal() {
        let mut store = MemoryStore::new();
        let ana = store
            .add("Ana".into(), "ana@x.com".into(), "111".into())
            .unwrap();
        store.append(ana);
    }

    #[test]
    fn append_keeps_distinct_ids() {
        let mut store = MemoryStore::new();
        store.append(Contact::create("Ana".into(), "ana@x.com".into(), "111".into()));
        store.append(Contact::create("Ana".into(), "ana@x.com".into(), "111".into()));
        assert_eq!(store.len(), 2);
    }
}
