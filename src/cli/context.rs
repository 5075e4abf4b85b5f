use chrono::Local;
use std::io::{self, Write};

use crate::error::BookResult;
use crate::model::AddressBook;
use crate::storage::BookStore;

/// State shared by the REPL: the loaded book and the store it is saved to.
pub struct CLIContext {
    pub book: AddressBook,
    store: Box<dyn BookStore>,
}

impl CLIContext {
    /// Loads the book from `store`.
    pub fn open(store: Box<dyn BookStore>) -> Self {
        let book = store.load();
        Self { book, store }
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

    pub fn today() -> chrono::NaiveDate {
        Local::now().date_naive()
    }

    pub fn save(&self) -> BookResult<()> {
        self.store.save(&self.book)
    }
}
