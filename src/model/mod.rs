pub mod phone;
pub mod birthday;
pub mod record;
pub mod address_book;

// Re-exports for convenience
pub use phone::PhoneNumber;
pub use birthday::Birthday;
pub use record::Record;
pub use address_book::{AddressBook, DEFAULT_WINDOW_DAYS};
