//! Persistence-ready snapshot of a record.

use serde::{Deserialize, Serialize};

/// The reduced form of a [`Record`](super::Record) written to disk.
///
/// Only the name and phones are kept. Birthdays are not part of the saved
/// format, so files written by earlier versions still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecordProjection {
    /// Contact name (the address book key)
    pub name: String,

    /// Phone numbers in the order they were added
    pub phones: Vec<String>,
}

impl RecordProjection {
    /// Create a projection from a name and its phones.
    pub fn new(name: impl Into<String>, phones: Vec<String>) -> Self {
        Self {
            name: name.into(),
            phones,
        }
    }
}
