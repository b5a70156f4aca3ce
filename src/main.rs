use std::path::PathBuf;

use agenda::export;
use agenda::ContactController;
use agenda::store::{ContactStore, MemoryStore, SqliteStore};

fn main() {
    let mut args = std::env::args().skip(1);
    let mut db_path: Option<PathBuf> = None;
    let mut export_path: Option<PathBuf> = None;
    let mut log_level: Option<String> = None;
    let mut in_memory = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                db_path = args.next().map(PathBuf::from);
                if db_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--memory" => in_memory = true,
            "--export" => {
                export_path = args.next().map(PathBuf::from);
                if export_path.is_none() {
                    eprintln!("Error: --export requires a JSON file path");
                    std::process::exit(1);
                }
            }
            "--log-level" => {
                log_level = args.next();
                if log_level.is_none() {
                    eprintln!("Error: --log-level requires a level (error, warn, info, debug, trace)");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Agenda - contact book");
                println!();
                println!("Usage: agenda [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>      Database file path (default: .data/agenda.db)");
                println!("  --memory               Keep contacts in memory only");
                println!("  --export <JSON_PATH>   Write all contacts to a JSON file and exit");
                println!("  --log-level <LEVEL>    Log level for stderr (default: $RUST_LOG or warn)");
                println!("  -h, --help             Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    if in_memory && db_path.is_some() {
        eprintln!("Error: --memory and --file cannot be combined");
        std::process::exit(1);
    }

    let _logger = match agenda::logging::init(log_level.as_deref()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let store: Box<dyn ContactStore> = if in_memory {
        Box::new(MemoryStore::new())
    } else {
        let db_path = db_path.unwrap_or_else(|| PathBuf::from(".data").join("agenda.db"));
        if let Some(dir) = db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!("Error creating {}: {}", dir.display(), e);
                std::process::exit(1);
            }
        }
        match SqliteStore::open(&db_path) {
            Ok(s) => Box::new(s),
            Err(e) => {
                eprintln!("Error opening database: {}", e);
                std::process::exit(1);
            }
        }
    };

    if let Some(json_path) = export_path {
        let controller = ContactController::new(store);
        match export::write_from(&controller, &json_path) {
            Ok(n) => println!("Exported {} contact(s) to {}", n, json_path.display()),
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    agenda::cli::run(store);
}
