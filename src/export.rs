use std::path::Path;

use crate::controller::ContactController;
use crate::error::AgendaResult;
use crate::model::Contact;
use crate::store::ContactStore;

/// Pretty-printed JSON array of contacts, in the order given.
pub fn to_json(contacts: &[Contact]) -> AgendaResult<String> {
    Ok(serde_json::to_string_pretty(contacts)?)
}

pub fn write_json(path: &Path, contacts: &[Contact]) -> AgendaResult<()> {
    let json = to_json(contacts)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Writes everything the controller lists to `path`; returns the count.
pub fn write_from<S: ContactStore>(
    controller: &ContactController<S>,
    path: &Path,
) -> AgendaResult<usize> {
    let contacts = controller.list()?;
    write_json(path, &contacts)?;
    Ok(contacts.len())
}
