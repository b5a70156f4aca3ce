use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// A single address-book entry. Fields never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Id<Contact>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn create(name: String, email: String, phone: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            email,
            phone,
            created_at: Utc::now(),
        }
    }
}
