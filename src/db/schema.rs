use rusqlite::Connection;

use crate::error::{BookError, BookResult};

/// Schema version stored in `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> BookResult<()> {
    let version: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version > SCHEMA_VERSION {
        return Err(BookError::UnsupportedVersion { found: version });
    }

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            name TEXT PRIMARY KEY NOT NULL,
            birthday TEXT
        );

        CREATE TABLE IF NOT EXISTS phones (
            contact_name TEXT NOT NULL REFERENCES contacts(name) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            number TEXT NOT NULL,
            PRIMARY KEY (contact_name, position)
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;

    if version < SCHEMA_VERSION {
        conn.execute_batch(&format!("PRAGMA user_version = {};", SCHEMA_VERSION))?;
    }
    Ok(())
}

/// Create an in-memory connection for testing.
#[doc(hidden)]
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
