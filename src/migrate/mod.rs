use std::path::Path;

use rusqlite::Connection;
use tracing::info;

use crate::db::{record_repo, schema};
use crate::error::{BookError, BookResult};
use crate::model::AddressBook;
use crate::storage::{self, document};

/// Imports a JSON address book file into a new SQLite database. An existing
/// database file is never touched.
pub fn import_json(json_path: &Path, db_path: &Path) -> BookResult<ImportStats> {
    if db_path.exists() {
        return Err(BookError::DatabaseExists {
            path: db_path.display().to_string(),
        });
    }

    let json_str = std::fs::read_to_string(json_path)?;
    let book = document::decode(&json_str)?;

    storage::ensure_parent_dir(db_path)?;
    let mut conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;

    import_book(&mut conn, &book)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub contacts: usize,
    pub phones: usize,
    pub birthdays: usize,
}

impl ImportStats {
    pub fn of(book: &AddressBook) -> Self {
        book.records().fold(Self::default(), |mut stats, record| {
            stats.contacts += 1;
            stats.phones += record.phones().len();
            if record.birthday().is_some() {
                stats.birthdays += 1;
            }
            stats
        })
    }
}

fn import_book(conn: &mut Connection, book: &AddressBook) -> BookResult<ImportStats> {
    record_repo::replace_all(conn, book)?;
    let stats = ImportStats::of(book);
    info!(
        contacts = stats.contacts,
        phones = stats.phones,
        birthdays = stats.birthdays,
        "Imported address book"
    );
    Ok(stats)
}
