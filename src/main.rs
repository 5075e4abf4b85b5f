use addressbook::config::{Config, Invocation, USAGE};

fn main() {
    let config = match Config::load(std::env::args().skip(1)) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    addressbook::logging::init(&config.log_level);
    tracing::debug!(
        path = %config.data_path.display(),
        backend = %config.backend,
        "Configuration loaded"
    );

    if let Some(json_path) = &config.import_path {
        println!("Importing from {}...", json_path.display());
        match addressbook::migrate::import_json(json_path, &config.data_path) {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Contacts: {}", stats.contacts);
                println!("  Phones: {}", stats.phones);
                println!("  Birthdays: {}", stats.birthdays);
            }
            Err(e @ addressbook::error::BookError::DatabaseExists { .. }) => {
                eprintln!("Error: {}", e);
                eprintln!("Remove it first or use --file to specify a different path.");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = addressbook::cli::run(config.open_store()) {
        eprintln!("Error saving address book: {}", e);
        std::process::exit(1);
    }
}
