use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::record::Record;
use crate::queries::birthday_queries;

/// Number of days ahead the birthday query looks by default.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// All contacts, keyed by name. Iteration is in ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its own name, replacing any record already
    /// stored there. Returns the replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().to_string(), record)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Names of contacts whose next birthday falls within `window_days` of
    /// `as_of`, both ends inclusive.
    pub fn upcoming_birthdays(&self, as_of: NaiveDate, window_days: u32) -> Vec<String> {
        birthday_queries::upcoming(self, as_of, window_days)
            .into_iter()
            .map(|u| u.name)
            .collect()
    }

    pub fn upcoming_birthdays_default(&self, as_of: NaiveDate) -> Vec<String> {
        self.upcoming_birthdays(as_of, DEFAULT_WINDOW_DAYS)
    }
}
