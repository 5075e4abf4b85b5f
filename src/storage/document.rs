use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Birthday, PhoneNumber, Record};
use crate::validation;

/// Version written by this build. Older readers refuse newer documents.
pub const CURRENT_VERSION: u32 = 1;

/// On-disk shape of an address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDocument {
    pub version: u32,
    pub contacts: Vec<ContactDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDocument {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl BookDocument {
    pub fn from_book(book: &AddressBook) -> Self {
        let contacts = book
            .records()
            .map(|r| ContactDocument {
                name: r.name().to_string(),
                phones: r.phones().iter().map(|p| p.as_str().to_string()).collect(),
                birthday: r.birthday().map(|b| b.date()),
            })
            .collect();

        Self {
            version: CURRENT_VERSION,
            contacts,
        }
    }

    pub fn into_book(self) -> BookResult<AddressBook> {
        if self.version != CURRENT_VERSION {
            return Err(BookError::UnsupportedVersion {
                found: self.version,
            });
        }

        let mut book = AddressBook::new();
        for contact in self.contacts {
            let name = validation::non_blank(&contact.name, "name")?;
            let phones = contact.phones.into_iter().map(PhoneNumber::restore).collect();
            let birthday = contact.birthday.map(Birthday::from_date);
            book.add_record(Record::restore(name, phones, birthday));
        }
        Ok(book)
    }
}

/// Serializes the book as pretty-printed JSON.
pub fn encode(book: &AddressBook) -> BookResult<String> {
    Ok(serde_json::to_string_pretty(&BookDocument::from_book(book))?)
}

/// Parses JSON produced by `encode`. The version is checked before the rest
/// of the document so a newer layout is reported as such.
pub fn decode(json: &str) -> BookResult<AddressBook> {
    let probe: VersionProbe = serde_json::from_str(json)?;
    if probe.version != CURRENT_VERSION {
        return Err(BookError::UnsupportedVersion {
            found: probe.version,
        });
    }
    let doc: BookDocument = serde_json::from_str(json)?;
    doc.into_book()
}
