use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Phone number must be exactly 10 digits: {value}")]
    InvalidPhone { value: String },

    #[error("Birthday must be a real date in DD.MM.YYYY format: {value}")]
    InvalidBirthday { value: String },

    #[error("Contact not found: {name}")]
    NotFound { name: String },

    #[error("Contact already exists: {name}")]
    AlreadyExists { name: String },

    #[error("Usage: {usage}")]
    WrongArguments { usage: &'static str },

    #[error("Database file already exists: {path}")]
    DatabaseExists { path: String },

    #[error("Unsupported address book version: {found}")]
    UnsupportedVersion { found: u32 },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookError {
    /// True for errors raised while validating user-supplied field values.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookError::BlankField { .. }
                | BookError::InvalidPhone { .. }
                | BookError::InvalidBirthday { .. }
        )
    }
}

pub type BookResult<T> = Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_kinds_are_flagged() {
        assert!(BookError::InvalidPhone { value: "1".into() }.is_validation());
        assert!(BookError::InvalidBirthday { value: "x".into() }.is_validation());
        assert!(BookError::BlankField { field: "name".into() }.is_validation());
    }

    #[test]
    fn other_kinds_are_not_validation() {
        assert!(!BookError::NotFound { name: "Bob".into() }.is_validation());
        assert!(!BookError::UnsupportedVersion { found: 9 }.is_validation());
    }
}
