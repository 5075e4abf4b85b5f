use std::fs;

use addressbook::db::{record_repo, schema};
use addressbook::error::BookError;
use addressbook::migrate;
use addressbook::model::*;
use addressbook::storage::{document, BookStore, JsonFileStore, SqliteStore};

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut alice = Record::new("Alice").unwrap();
    alice.add_phone("1111111111").unwrap();
    alice.add_phone("2222222222").unwrap();
    alice.add_phone("1111111111").unwrap();
    alice.add_birthday("29.02.2000").unwrap();
    book.add_record(alice);

    let mut bob = Record::new("Bob").unwrap();
    bob.add_phone("3333333333").unwrap();
    bob.edit_phone("3333333333", "33-33");
    book.add_record(bob);

    book.add_record(Record::new("Carol").unwrap());
    book
}

// ==========================================================================
// JSON FILE STORE TESTS
// ==========================================================================

#[test]
fn json_store_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("book.json"));
    let book = sample_book();

    store.save(&book).unwrap();
    assert_eq!(store.load(), book);
}

#[test]
fn json_store_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested/deeper/book.json"));
    store.save(&sample_book()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn json_store_save_overwrites_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("book.json"));
    store.save(&sample_book()).unwrap();

    let mut smaller = AddressBook::new();
    smaller.add_record(Record::new("Zed").unwrap());
    store.save(&smaller).unwrap();

    assert_eq!(store.load(), smaller);
}

#[test]
fn json_store_save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("book.json"));
    store.save(&sample_book()).unwrap();
    assert!(!dir.path().join("book.json.tmp").exists());
}

#[test]
fn json_store_save_fails_when_parent_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "regular file").unwrap();

    let store = JsonFileStore::new(blocker.join("book.json"));
    assert!(store.save(&sample_book()).is_err());
}

#[test]
fn json_store_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.load().is_empty());
}

#[test]
fn json_store_empty_or_truncated_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let store = JsonFileStore::new(&path);

    fs::write(&path, "").unwrap();
    assert!(store.load().is_empty());

    let full = document::encode(&sample_book()).unwrap();
    fs::write(&path, &full[..full.len() / 2]).unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn json_store_future_version_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, r#"{"version": 7, "contacts": []}"#).unwrap();
    assert!(JsonFileStore::new(&path).load().is_empty());
}

// ==========================================================================
// SQLITE STORE TESTS
// ==========================================================================

#[test]
fn sqlite_store_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::new(dir.path().join("book.db"));
    let book = sample_book();

    store.save(&book).unwrap();
    assert_eq!(store.load(), book);

    // A second save replaces rather than appends.
    store.save(&book).unwrap();
    assert_eq!(store.load(), book);
}

#[test]
fn sqlite_store_save_fails_when_parent_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "regular file").unwrap();

    let store = SqliteStore::new(blocker.join("book.db"));
    assert!(store.save(&sample_book()).is_err());
}

#[test]
fn sqlite_store_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::new(dir.path().join("absent.db"));
    assert!(store.load().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn sqlite_store_garbage_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.db");
    fs::write(&path, "not a database ".repeat(100)).unwrap();
    assert!(SqliteStore::new(&path).load().is_empty());
}

#[test]
fn record_repo_keeps_phone_order() {
    let mut conn = schema::test_connection();
    let book = sample_book();
    record_repo::replace_all(&mut conn, &book).unwrap();

    let phones = record_repo::find_phones(&conn, "Alice").unwrap();
    let values: Vec<&str> = phones.iter().map(|p| p.as_str()).collect();
    assert_eq!(values, vec!["1111111111", "2222222222", "1111111111"]);
    assert_eq!(record_repo::count(&conn).unwrap(), 3);
}

#[test]
fn record_repo_delete_all_clears_tables() {
    let mut conn = schema::test_connection();
    record_repo::replace_all(&mut conn, &sample_book()).unwrap();
    record_repo::delete_all(&conn).unwrap();
    assert_eq!(record_repo::count(&conn).unwrap(), 0);
    assert!(record_repo::find_all(&conn).unwrap().is_empty());
}

// ==========================================================================
// IMPORT TESTS
// ==========================================================================

#[test]
fn import_json_into_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("book.json");
    let db_path = dir.path().join("out/book.db");
    JsonFileStore::new(&json_path).save(&sample_book()).unwrap();

    let stats = migrate::import_json(&json_path, &db_path).unwrap();
    assert_eq!(stats.contacts, 3);
    assert_eq!(stats.phones, 4);
    assert_eq!(stats.birthdays, 1);

    assert_eq!(SqliteStore::new(&db_path).load(), sample_book());
}

#[test]
fn import_rejects_unreadable_json() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("book.json");
    fs::write(&json_path, "{ nope").unwrap();
    assert!(migrate::import_json(&json_path, &dir.path().join("book.db")).is_err());
}

#[test]
fn import_refuses_existing_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("book.db");
    let mut existing = AddressBook::new();
    existing.add_record(Record::new("Keep").unwrap());
    SqliteStore::new(&db_path).save(&existing).unwrap();

    let json_path = dir.path().join("in.json");
    JsonFileStore::new(&json_path).save(&sample_book()).unwrap();

    let err = migrate::import_json(&json_path, &db_path).unwrap_err();
    assert!(matches!(err, BookError::DatabaseExists { .. }));

    let after = SqliteStore::new(&db_path).load();
    assert!(after.contains("Keep"));
    assert!(!after.contains("Alice"));
}
