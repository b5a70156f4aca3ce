pub mod context;
pub mod contact_commands;

use crate::store::ContactStore;
use context::CLIContext;

/// Run the interactive REPL over the given store.
pub fn run(store: Box<dyn ContactStore>) {
    print_welcome();

    let mut ctx = CLIContext::new(store);
    contact_commands::list(&ctx);
    println!();

    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "list" | "ls" => contact_commands::list(ctx),
            "add" => contact_commands::add(ctx),
            "delete" | "rm" => contact_commands::delete(ctx, args),
            "export" => contact_commands::export(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into the command word and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_welcome() {
    println!("Welcome to the Agenda");
    println!("Manage your contacts quickly and easily.");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();
}

fn print_help() {
    println!(r#"
COMMANDS:

    list                    Show all contacts
    add                     Add a contact (prompts for name, email, phone)
    delete <id>             Delete the contact with that id (asks to confirm)
    export <path>           Write all contacts to a JSON file
    help                    Show this help
    exit / quit / q         Exit"#);
}
