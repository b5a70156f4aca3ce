use std::path::Path;

use log::{info, warn};

use crate::cli::context::CLIContext;
use crate::error::AgendaError;
use crate::export;
use crate::model::Contact;

const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Phone"];

pub fn list(ctx: &CLIContext) {
    match ctx.controller.list() {
        Ok(contacts) if contacts.is_empty() => {
            println!("No contacts yet. Use 'add' to create one.");
        }
        Ok(contacts) => {
            println!("Contacts ({}):", contacts.len());
            println!();
            print!("{}", render_table(&contacts));
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn add(ctx: &mut CLIContext) {
    let Some(name) = ctx.prompt("Name: ") else {
        return;
    };
    let Some(email) = ctx.prompt("Email: ") else {
        return;
    };
    let Some(phone) = ctx.prompt("Phone: ") else {
        return;
    };

    match ctx.controller.add(&name, &email, &phone) {
        Ok(contact) => {
            info!("event=contact_add module=cli status=ok id={}", contact.id);
            println!("Contact added.");
            println!();
            list(ctx);
        }
        Err(AgendaError::Validation(e)) => {
            info!("event=contact_add module=cli status=rejected field={}", e.field);
            println!("Invalid {}: {}", e.field, e.reason);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Select a contact to delete: delete <id>");
        return;
    }

    let answer = ctx.prompt("Confirm deletion of the contact? [y/N] ");
    if !answer.as_deref().map(is_confirmation).unwrap_or(false) {
        println!("Cancelled.");
        return;
    }

    match ctx.controller.delete_by_key(args) {
        Ok(()) => {
            info!("event=contact_delete module=cli status=ok id={}", args);
            println!("Contact deleted.");
            println!();
            list(ctx);
        }
        Err(AgendaError::NotFound(e)) => {
            warn!("event=contact_delete module=cli status=not_found id={}", e.id);
            println!("No contact with id {}", e.id);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn export(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: export <path>");
        return;
    }

    match export::write_from(&ctx.controller, Path::new(args)) {
        Ok(n) => println!("Exported {} contact(s) to {}", n, args),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Renders contacts as a left-aligned text table, one row per contact.
pub fn render_table(contacts: &[Contact]) -> String {
    let rows: Vec<[String; 4]> = contacts
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.name.clone(),
                c.email.clone(),
                c.phone.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("  {}\n", rule.join("  ")));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect();
    out.push_str(&format!("  {}\n", padded.join("  ").trim_end()));
}
