use crate::error::{ContactField, ValidationError};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: ContactField) -> Result<String, ValidationError> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ValidationError::new(field, "cannot be blank"))
    } else {
        Ok(trimmed)
    }
}

/// Validates a basic `local@domain` shape: exactly one `@`, text on both
/// sides, no whitespace. Returns the trimmed address on success.
pub fn email_address(value: &str) -> Result<String, ValidationError> {
    let trimmed = non_blank(value, ContactField::Email)?;

    if trimmed.chars().any(char::is_whitespace) {
        return Err(ValidationError::new(
            ContactField::Email,
            "cannot contain whitespace",
        ));
    }

    let mut parts = trimmed.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(d) => d,
        None => {
            return Err(ValidationError::new(ContactField::Email, "must contain '@'"));
        }
    };
    if parts.next().is_some() {
        return Err(ValidationError::new(
            ContactField::Email,
            "must contain exactly one '@'",
        ));
    }
    if local.is_empty() {
        return Err(ValidationError::new(
            ContactField::Email,
            "is missing the part before '@'",
        ));
    }
    if domain.is_empty() {
        return Err(ValidationError::new(
            ContactField::Email,
            "is missing the part after '@'",
        ));
    }

    Ok(trimmed)
}

/// Validated, trimmed input for a new contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Checks name, email and phone in that order; the first failure wins.
pub fn new_contact(name: &str, email: &str, phone: &str) -> Result<NewContact, ValidationError> {
    Ok(NewContact {
        name: non_blank(name, ContactField::Name)?,
        email: email_address(email)?,
        phone: non_blank(phone, ContactField::Phone)?,
    })
}
