pub mod context;
pub mod contact_commands;
pub mod birthday_commands;
pub mod messages;

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::error::BookResult;
use crate::model::AddressBook;
use crate::storage::BookStore;
use context::CLIContext;

/// Result of running one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Exit,
}

/// Run the interactive REPL, then save the book.
pub fn run(store: Box<dyn BookStore>) -> BookResult<()> {
    let mut ctx = CLIContext::open(store);

    println!("Hello! I am your address book assistant.");
    print_help();

    repl_loop(&mut ctx);

    ctx.save().map_err(|e| {
        error!(error = %e, "Failed to save address book");
        e
    })
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("Enter a command: ") {
            Some(s) => s,
            None => {
                println!("End of input. Exiting.");
                break;
            }
        };

        let (command, args) = parse_command(&input);
        if command.is_empty() {
            continue;
        }
        debug!(command = %command, args = args.len(), "Dispatching command");

        match execute(&mut ctx.book, CLIContext::today(), &command, &args) {
            Reply::Message(text) => {
                println!("{}", text);
                println!();
            }
            Reply::Exit => {
                println!("Goodbye!");
                break;
            }
        }
    }
}

/// Runs one command against the book. Errors are rendered as messages.
pub fn execute(book: &mut AddressBook, today: NaiveDate, command: &str, args: &[&str]) -> Reply {
    let result = match command {
        "exit" | "close" => return Reply::Exit,
        "hello" => Ok("How can I help you?".to_string()),
        "help" | "?" => Ok(HELP.trim_start_matches('\n').to_string()),

        "add" => contact_commands::add(book, args),
        "change" => contact_commands::change(book, args),
        "phone" => contact_commands::phone(book, args),
        "all" => Ok(contact_commands::all(book)),
        "delete" => contact_commands::delete(book, args),
        "add-phone" => contact_commands::add_phone(book, args),
        "remove-phone" => contact_commands::remove_phone(book, args),
        "edit-phone" => contact_commands::edit_phone(book, args),

        "add-birthday" => birthday_commands::add_birthday(book, args),
        "show-birthday" => birthday_commands::show_birthday(book, args),
        "birthdays" => Ok(birthday_commands::birthdays(book, today)),

        _ => Ok(format!("Invalid command: {}. Type 'help' for commands.", command)),
    };

    Reply::Message(result.unwrap_or_else(|e| messages::render_error(&e)))
}

/// Split input into a lower-cased command and whitespace-separated arguments.
pub fn parse_command(input: &str) -> (String, Vec<&str>) {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or("").to_lowercase();
    (command, parts.collect())
}

fn print_help() {
    println!("{}", HELP);
}

const HELP: &str = r#"
COMMANDS:

  Contacts:
    add <name> <phone>              Add a contact with a 10-digit phone
    change <name> <phone>           Replace a contact's phones with one number
    phone <name>                    Show a contact's phones
    all                             List all contacts
    delete <name>                   Delete a contact
    add-phone <name> <phone>        Add another phone to a contact
    remove-phone <name> <phone>     Remove a phone from a contact
    edit-phone <name> <old> <new>   Change one of a contact's phones

  Birthdays:
    add-birthday <name> <DD.MM.YYYY>  Set a contact's birthday
    show-birthday <name>              Show a contact's birthday
    birthdays                         Birthdays in the next 7 days

  Other:
    hello                           Greeting
    help                            Show this help
    exit / close                    Save and exit"#;
