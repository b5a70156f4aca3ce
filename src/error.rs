use std::fmt;

use thiserror::Error;

/// The contact field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: ContactField,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: ContactField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Contact not found: {id}")]
pub struct NotFoundError {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum AgendaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl AgendaError {
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            AgendaError::Validation(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_not_found(&self) -> Option<&NotFoundError> {
        match self {
            AgendaError::NotFound(e) => Some(e),
            _ => None,
        }
    }
}

pub type AgendaResult<T> = Result<T, AgendaError>;
