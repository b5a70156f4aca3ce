use std::io::{self, Write};

use crate::controller::ContactController;
use crate::store::ContactStore;

pub type DynController = ContactController<Box<dyn ContactStore>>;

pub struct CLIContext {
    pub controller: DynController,
}

impl CLIContext {
    pub fn new(store: Box<dyn ContactStore>) -> Self {
        Self {
            controller: ContactController::new(store),
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::AgendaError) {
        println!("Error: {}", e);
    }
}
