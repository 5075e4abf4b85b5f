use std::fmt;

use super::birthday::Birthday;
use super::phone::PhoneNumber;
use crate::error::BookResult;
use crate::validation;

/// One contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> BookResult<Self> {
        Ok(Self {
            name: validation::non_blank(name, "name")?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub(crate) fn restore(name: String, phones: Vec<PhoneNumber>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Validates `raw` and makes it the only phone number.
    pub fn replace_phones(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.clear();
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `raw`. Returns whether one was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == raw) {
            Some(idx) => {
                self.phones.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Overwrites the first phone equal to `old` with `new`. `new` is stored
    /// verbatim and is not checked against the ten-digit rule.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> bool {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                phone.overwrite(new);
                true
            }
            None => false,
        }
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(none)".into());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            phones.join("; "),
            birthday
        )
    }
}
