use chrono::NaiveDate;

use super::contact_commands::expect_args;
use crate::error::BookResult;
use crate::model::{AddressBook, DEFAULT_WINDOW_DAYS};
use crate::ops::contact_ops;
use crate::queries::birthday_queries;

pub fn add_birthday(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let [name, birthday] = expect_args(args, "add-birthday <name> <DD.MM.YYYY>")?;
    contact_ops::set_birthday(book, name, birthday)?;
    Ok(format!("Birthday added for {}.", name))
}

pub fn show_birthday(book: &AddressBook, args: &[&str]) -> BookResult<String> {
    let [name] = expect_args(args, "show-birthday <name>")?;
    Ok(match contact_ops::birthday(book, name)? {
        Some(bd) => format!("Birthday of {}: {}", name, bd),
        None => format!("No birthday recorded for {}.", name),
    })
}

pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let names = book.upcoming_birthdays_default(today);
    if names.is_empty() {
        return format!("No birthdays in the next {} days.", DEFAULT_WINDOW_DAYS);
    }

    let mut out = format!("Birthdays in the next {} days:", DEFAULT_WINDOW_DAYS);
    for name in &names {
        let next = book
            .find(name)
            .and_then(|r| r.birthday())
            .and_then(|bd| birthday_queries::next_occurrence(bd, today));
        let Some(date) = next else {
            out.push_str(&format!("\n  {}", name));
            continue;
        };
        let when = match (date - today).num_days() {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        out.push_str(&format!("\n  {} on {} ({})", name, date.format("%d.%m"), when));
    }
    out
}
