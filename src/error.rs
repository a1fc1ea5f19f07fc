//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when mutating a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field rejected the value it was given
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to edit is not on the record
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur during substring search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No query (or an empty one) was supplied
    #[error("Please enter your request")]
    MissingQuery,

    /// There is nothing to search
    #[error("Address book is empty")]
    EmptyBook,
}

/// Errors that can occur while saving or loading projections.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file to load does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but does not decode as a saved address book
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Projections could not be encoded
    #[error("Failed to encode address book: {0}")]
    Encode(String),

    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone not found: 0501234567");

        let err = SearchError::MissingQuery;
        assert_eq!(err.to_string(), "Please enter your request");

        let err = StorageError::FileNotFound(PathBuf::from("book.bin"));
        assert_eq!(err.to_string(), "File not found: book.bin");

        let err = ConfigError::InvalidValue {
            var: "CONTACT_BOOK_PATH".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert!(err.to_string().contains("CONTACT_BOOK_PATH"));
    }

    #[test]
    fn test_validation_error_converts_transparently() {
        let err: RecordError = ValidationError::InvalidPhone("123".to_string()).into();
        assert_eq!(
            err.to_string(),
            ValidationError::InvalidPhone("123".to_string()).to_string()
        );
        assert!(matches!(err, RecordError::Validation(_)));
    }
}
