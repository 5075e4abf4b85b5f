//! Loading and saving the address book between runs.
//!
//! `load` never fails: a missing or unreadable store yields an empty book and
//! a warning in the log. `save` reports I/O and database errors.

pub mod document;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::db::{record_repo, schema};
use crate::error::BookResult;
use crate::model::AddressBook;

pub trait BookStore {
    fn load(&self) -> AddressBook;
    fn save(&self, book: &AddressBook) -> BookResult<()>;
}

/// Stores the book as a versioned JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> BookResult<Option<AddressBook>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if json.trim().is_empty() {
            return Ok(None);
        }
        document::decode(&json).map(Some)
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> AddressBook {
        match self.read() {
            Ok(Some(book)) => {
                info!(path = %self.path.display(), contacts = book.len(), "Loaded address book");
                book
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "No saved address book, starting empty");
                AddressBook::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable address book, starting empty");
                AddressBook::new()
            }
        }
    }

    fn save(&self, book: &AddressBook) -> BookResult<()> {
        ensure_parent_dir(&self.path)?;
        let json = document::encode(book)?;

        // Write next to the target, then rename over it.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        info!(path = %self.path.display(), contacts = book.len(), "Saved address book");
        Ok(())
    }
}

/// Stores the book in a SQLite database file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> BookResult<Connection> {
        let conn = Connection::open(&self.path)?;
        schema::initialize(&conn)?;
        Ok(conn)
    }

    fn read(&self) -> BookResult<Option<AddressBook>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let conn = self.open()?;
        record_repo::find_all(&conn).map(Some)
    }
}

impl BookStore for SqliteStore {
    fn load(&self) -> AddressBook {
        match self.read() {
            Ok(Some(book)) => {
                info!(path = %self.path.display(), contacts = book.len(), "Loaded address book");
                book
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "No saved address book, starting empty");
                AddressBook::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable address book, starting empty");
                AddressBook::new()
            }
        }
    }

    fn save(&self, book: &AddressBook) -> BookResult<()> {
        ensure_parent_dir(&self.path)?;
        let mut conn = self.open()?;
        record_repo::replace_all(&mut conn, book)?;
        info!(path = %self.path.display(), contacts = book.len(), "Saved address book");
        Ok(())
    }
}

pub(crate) fn ensure_parent_dir(path: &Path) -> BookResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}
