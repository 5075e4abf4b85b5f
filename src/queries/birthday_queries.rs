use chrono::{Datelike, Days, NaiveDate};

use crate::model::{AddressBook, Birthday};

/// A contact whose birthday falls inside the query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: Birthday,
    /// The occurrence that fell inside the window.
    pub date: NaiveDate,
    pub days_until: i64,
}

/// Places the birthday's month and day in `year`. A 29 February birthday
/// lands on 28 February when `year` is not a leap year.
pub fn project(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// The first occurrence of the birthday on or after `as_of`.
pub fn next_occurrence(birthday: &Birthday, as_of: NaiveDate) -> Option<NaiveDate> {
    let this_year = project(birthday, as_of.year())?;
    if this_year < as_of {
        project(birthday, as_of.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Contacts whose next birthday is between `as_of` and `as_of + window_days`
/// inclusive, in address book order.
pub fn upcoming(book: &AddressBook, as_of: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
    let window_end = as_of
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    book.records()
        .filter_map(|record| {
            let birthday = *record.birthday()?;
            let date = next_occurrence(&birthday, as_of)?;
            (as_of..=window_end).contains(&date).then(|| UpcomingBirthday {
                name: record.name().to_string(),
                birthday,
                date,
                days_until: (date - as_of).num_days(),
            })
        })
        .collect()
}
