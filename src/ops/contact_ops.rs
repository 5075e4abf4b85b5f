use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Birthday, PhoneNumber, Record};

/// Creates a contact with one phone number. Refuses to replace an existing
/// contact of the same name.
pub fn add_contact<'a>(book: &'a mut AddressBook, name: &str, phone: &str) -> BookResult<&'a Record> {
    let mut record = Record::new(name)?;
    if book.contains(record.name()) {
        return Err(BookError::AlreadyExists {
            name: record.name().to_string(),
        });
    }
    record.add_phone(phone)?;

    let key = record.name().to_string();
    book.add_record(record);
    get(book, &key)
}

/// Replaces every phone of `name` with `phone`.
pub fn change_phone(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<()> {
    get_mut(book, name)?.replace_phones(phone)
}

pub fn add_phone(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<()> {
    get_mut(book, name)?.add_phone(phone)
}

/// Returns whether a matching phone was removed.
pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<bool> {
    Ok(get_mut(book, name)?.remove_phone(phone))
}

/// Returns whether a matching phone was edited.
pub fn edit_phone(book: &mut AddressBook, name: &str, old: &str, new: &str) -> BookResult<bool> {
    Ok(get_mut(book, name)?.edit_phone(old, new))
}

pub fn phones<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a [PhoneNumber]> {
    Ok(get(book, name)?.phones())
}

pub fn set_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> BookResult<()> {
    get_mut(book, name)?.add_birthday(birthday)
}

pub fn birthday<'a>(book: &'a AddressBook, name: &str) -> BookResult<Option<&'a Birthday>> {
    Ok(get(book, name)?.birthday())
}

pub fn delete_contact(book: &mut AddressBook, name: &str) -> BookResult<Record> {
    book.delete(name).ok_or_else(|| not_found(name))
}

fn get<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.find(name).ok_or_else(|| not_found(name))
}

fn get_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name).ok_or_else(|| not_found(name))
}

fn not_found(name: &str) -> BookError {
    BookError::NotFound {
        name: name.to_string(),
    }
}
