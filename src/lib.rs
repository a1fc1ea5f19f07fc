//! Contact Book - an in-memory directory of personal contacts.
//!
//! Contacts are records of validated fields (name, phones, birthday) kept in an
//! insertion-ordered address book that supports lookup, iteration, substring
//! search, and binary persistence.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (`Name`, `Phone`, `Birthday`) and their rule trait
//! - **models**: The contact `Record` and its persistence-ready `RecordProjection`
//! - **book**: The `AddressBook` collection, its iterator and search results
//! - **storage**: The `ProjectionStore` seam and the bincode file store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the binary from environment variables
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut alice = Record::new("Alice");
//! alice.add_phone("0501234567").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(alice);
//!
//! let matches = book.matches_substring(Some("ali")).unwrap();
//! assert_eq!(matches[0].name, "Alice");
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use book::{AddressBook, BookMatch, Records, SaveOutcome};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{ConfigError, RecordError, SearchError, StorageError};
pub use models::{Record, RecordProjection};
pub use storage::{BincodeFileStore, ProjectionStore};
