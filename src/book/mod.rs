//! The address book and its search/iteration helpers.

pub mod address_book;
pub mod iter;
pub mod search;

pub use address_book::{AddressBook, SaveOutcome};
pub use iter::Records;
pub use search::BookMatch;
