use crate::error::{BookError, BookResult};
use crate::model::AddressBook;
use crate::ops::contact_ops;

pub fn add(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let [name, phone] = expect_args(args, "add <name> <phone>")?;
    let record = contact_ops::add_contact(book, name, phone)?;
    Ok(format!("Contact {} added.", record.name()))
}

pub fn change(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let [name, phone] = expect_args(args, "change <name> <new phone>")?;
    contact_ops::change_phone(book, name, phone)?;
    Ok(format!("Contact {} changed.", name))
}

pub fn phone(book: &AddressBook, args: &[&str]) -> BookResult<String> {
    let [name] = expect_args(args, "phone <name>")?;
    let phones = contact_ops::phones(book, name)?;
    if phones.is_empty() {
        return Ok(format!("No phone number recorded for {}.", name));
    }
    let list: Vec<&str> = phones.iter().map(|p| p.as_str()).collect();
    Ok(format!("Phone numbers for {}: {}", name, list.join(", ")))
}

pub fn all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No saved contacts.".into();
    }
    let mut out = format!("All saved contacts ({}):", book.len());
    for record in book.records() {
        out.push_str("\n  ");
        out.push_str(&record.describe());
    }
    out
}

pub fn delete(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let [name] = expect_args(args, "delete <name>")?;
    contact_ops::delete_contact(book, name)?;
    Ok(format!("Contact {} deleted.", name))
}

pub fn add_phone(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let [name, phone] = expect_args(args, "add-phone <name> <phone>")?;
    contact_ops::add_phone(book, name, phone)?;
    Ok(format!("Phone {} added to {}.", phone, name))
}

pub fn remove_phone(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let [name, phone] = expect_args(args, "remove-phone <name> <phone>")?;
    if contact_ops::remove_phone(book, name, phone)? {
        Ok(format!("Phone {} removed from {}.", phone, name))
    } else {
        Ok(format!("{} has no phone {}.", name, phone))
    }
}

pub fn edit_phone(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let [name, old, new] = expect_args(args, "edit-phone <name> <old phone> <new phone>")?;
    if contact_ops::edit_phone(book, name, old, new)? {
        Ok(format!("Phone {} of {} changed to {}.", old, name, new))
    } else {
        Ok(format!("{} has no phone {}.", name, old))
    }
}

/// Splits positional arguments into exactly `N` values.
pub(crate) fn expect_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> BookResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| BookError::WrongArguments { usage })
}
