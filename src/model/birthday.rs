use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::BookResult;
use crate::validation::{self, BIRTHDAY_FORMAT};

/// A date of birth, entered as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday {
    date: NaiveDate,
}

impl Birthday {
    pub fn parse(raw: &str) -> BookResult<Self> {
        Ok(Self {
            date: validation::birthday_date(raw)?,
        })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(BIRTHDAY_FORMAT))
    }
}
