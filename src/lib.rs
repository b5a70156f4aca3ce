pub mod error;
pub mod validation;
pub mod model;
pub mod db;
pub mod store;
pub mod controller;
pub mod export;
pub mod logging;
pub mod cli;

pub use controller::ContactController;
pub use error::{AgendaError, AgendaResult, ContactField, NotFoundError, ValidationError};
pub use model::{Contact, Id};
pub use store::{ContactStore, MemoryStore, SqliteStore};
