//! The address book: an insertion-ordered collection of records keyed by name.

use super::iter::Records;
use super::search::{contains_ignore_case, BookMatch};
use crate::domain::{Field, ValidationError};
use crate::error::{SearchError, SearchResult, StorageResult};
use crate::models::{Record, RecordProjection};
use crate::storage::{BincodeFileStore, ProjectionStore};
use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, info};

/// What happened when the book was asked to save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The book was written
    Saved { records: usize },

    /// The book was empty; nothing was written
    NothingToSave,
}

/// A keyed collection of contact records.
///
/// Keys are the records' names and are unique. Iteration and search results
/// follow insertion order; re-adding an existing name replaces that record
/// in place.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert `record` under its name, discarding any record already stored there.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().value().to_string();
        match self.records.insert(name.clone(), record) {
            Some(_) => debug!(name = %name, "Record replaced"),
            None => debug!(name = %name, records = self.records.len(), "Record added"),
        }
    }

    /// Exact lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact lookup by name, for editing phones or birthday in place.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// Returns `true` if a record was removed. The remaining records keep
    /// their relative order.
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.records.shift_remove(name).is_some();
        if removed {
            debug!(name, "Record deleted");
        }
        removed
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> Records<'_> {
        Records::new(self.records.values())
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }

    /// Find records whose name or description contains `query`, ignoring case.
    ///
    /// Matches come back in insertion order, one per record.
    ///
    /// # Errors
    ///
    /// - `SearchError::MissingQuery` if `query` is `None` or empty
    /// - `SearchError::EmptyBook` if there are no records to search
    pub fn matches_substring(&self, query: Option<&str>) -> SearchResult<Vec<BookMatch<'_>>> {
        let query = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return Err(SearchError::MissingQuery),
        };

        if self.records.is_empty() {
            return Err(SearchError::EmptyBook);
        }

        let matches: Vec<BookMatch<'_>> = self
            .records
            .iter()
            .filter(|(name, record)| {
                contains_ignore_case(name, &query) || contains_ignore_case(&record.describe(), &query)
            })
            .map(|(name, record)| BookMatch {
                name: name.as_str(),
                record,
            })
            .collect();

        debug!(query = %query, matches = matches.len(), "Substring search");
        Ok(matches)
    }

    /// Projections of every record, in insertion order.
    pub fn projections(&self) -> Vec<RecordProjection> {
        self.records.values().map(Record::to_projection).collect()
    }

    /// Save every record's projection to `store`.
    ///
    /// An empty book is not saved and `store` is left untouched.
    pub fn save_to_store<S: ProjectionStore + ?Sized>(
        &self,
        store: &S,
    ) -> StorageResult<SaveOutcome> {
        if self.records.is_empty() {
            info!("Address book is empty, nothing to save");
            return Ok(SaveOutcome::NothingToSave);
        }

        store.save(&self.projections())?;
        Ok(SaveOutcome::Saved {
            records: self.records.len(),
        })
    }

    /// Save the book to a bincode file at `path`.
    ///
    /// The file is written next to `path` first and renamed into place, so an
    /// interrupted save never leaves a truncated book behind.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<SaveOutcome> {
        self.save_to_store(&BincodeFileStore::new(path.as_ref()))
    }

    /// Read projections back from `store`.
    ///
    /// This does not touch any address book; pass the result to
    /// [`restore`](Self::restore) to repopulate one.
    pub fn load_from_store<S: ProjectionStore + ?Sized>(
        store: &S,
    ) -> StorageResult<Vec<RecordProjection>> {
        store.load()
    }

    /// Read projections back from the bincode file at `path`.
    ///
    /// # Errors
    ///
    /// - `StorageError::FileNotFound` if `path` does not exist
    /// - `StorageError::InvalidFormat` if the file is not a saved address book
    pub fn load_from_file(path: impl AsRef<Path>) -> StorageResult<Vec<RecordProjection>> {
        Self::load_from_store(&BincodeFileStore::new(path.as_ref()))
    }

    /// Add records rebuilt from `projections`.
    ///
    /// Every projection is validated before any record is added, so a bad
    /// phone leaves the book unchanged. Returns the number of records added.
    pub fn restore(
        &mut self,
        projections: impl IntoIterator<Item = RecordProjection>,
    ) -> Result<usize, ValidationError> {
        let records = projections
            .into_iter()
            .map(Record::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let count = records.len();
        for record in records {
            self.add_record(record);
        }
        Ok(count)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
