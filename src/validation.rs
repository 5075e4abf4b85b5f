use chrono::NaiveDate;

use crate::error::{BookError, BookResult};

/// Textual birthday format accepted from and shown to the user.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that a phone number is exactly ten ASCII digits.
pub fn ten_digits(value: &str) -> BookResult<String> {
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(BookError::InvalidPhone {
            value: value.to_string(),
        })
    }
}

/// Parses a `DD.MM.YYYY` date. The shape is checked before chrono sees it,
/// since chrono also accepts unpadded days and months.
pub fn birthday_date(value: &str) -> BookResult<NaiveDate> {
    let invalid = || BookError::InvalidBirthday {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).map_err(|_| invalid())
}
