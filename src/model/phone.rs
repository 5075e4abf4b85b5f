use std::fmt;

use crate::error::BookResult;
use crate::validation;

/// A phone number made of exactly ten digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    pub fn new(raw: &str) -> BookResult<Self> {
        Ok(Self {
            value: validation::ten_digits(raw)?,
        })
    }

    /// Rebuilds a number from persisted state without validation. Stored
    /// values may have been written by `Record::edit_phone`, which does not
    /// validate either.
    pub(crate) fn restore(value: String) -> Self {
        Self { value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Overwrites the value as-is.
    pub(crate) fn overwrite(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
