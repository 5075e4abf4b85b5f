use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Birthday, PhoneNumber, Record};

const DB_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn insert(conn: &Connection, record: &Record) -> BookResult<()> {
    conn.execute(
        "INSERT INTO contacts (name, birthday) VALUES (?1, ?2)",
        params![
            record.name(),
            record.birthday().map(|b| b.date().format(DB_DATE_FORMAT).to_string()),
        ],
    )?;

    let mut stmt =
        conn.prepare("INSERT INTO phones (contact_name, position, number) VALUES (?1, ?2, ?3)")?;
    for (position, phone) in record.phones().iter().enumerate() {
        stmt.execute(params![record.name(), position as i64, phone.as_str()])?;
    }
    Ok(())
}

pub fn delete_all(conn: &Connection) -> BookResult<()> {
    conn.execute_batch("DELETE FROM phones; DELETE FROM contacts;")?;
    Ok(())
}

/// Replaces every stored contact with the contents of `book` in a single
/// transaction.
pub fn replace_all(conn: &mut Connection, book: &AddressBook) -> BookResult<()> {
    let tx = conn.transaction()?;
    delete_all(&tx)?;
    for record in book.records() {
        insert(&tx, record)?;
    }
    tx.commit()?;
    Ok(())
}

pub fn find_phones(conn: &Connection, name: &str) -> BookResult<Vec<PhoneNumber>> {
    let mut stmt = conn.prepare(
        "SELECT number FROM phones WHERE contact_name = ?1 ORDER BY position",
    )?;

    let phones = stmt
        .query_map(params![name], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(PhoneNumber::restore)
        .collect();

    Ok(phones)
}

pub fn find_all(conn: &Connection) -> BookResult<AddressBook> {
    let mut stmt = conn.prepare("SELECT name, birthday FROM contacts ORDER BY name")?;

    let rows = stmt
        .query_map([], |row| {
            let name: String = row.get(0)?;
            let birthday: Option<String> = row.get(1)?;
            Ok((name, birthday))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut book = AddressBook::new();
    for (name, birthday_str) in rows {
        let birthday = birthday_str.map(|s| parse_db_date(&s)).transpose()?;
        let phones = find_phones(conn, &name)?;
        book.add_record(Record::restore(name, phones, birthday));
    }
    Ok(book)
}

pub fn count(conn: &Connection) -> BookResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn parse_db_date(s: &str) -> BookResult<Birthday> {
    NaiveDate::parse_from_str(s, DB_DATE_FORMAT)
        .map(Birthday::from_date)
        .map_err(|_| BookError::InvalidBirthday {
            value: s.to_string(),
        })
}
