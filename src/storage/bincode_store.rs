//! File-backed projection store using bincode.
//!
//! The saved file is the bincode encoding (fixed-width integers, little endian)
//! of the ordered `Vec<RecordProjection>`. There is no header or version.

use crate::error::{StorageError, StorageResult};
use crate::models::RecordProjection;
use crate::storage::traits::ProjectionStore;
use bincode::Options;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Projection store that keeps one address book in one file.
#[derive(Debug, Clone)]
pub struct BincodeFileStore {
    path: PathBuf,
}

impl BincodeFileStore {
    /// Create a store for the file at `path`. Nothing is touched until save/load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path the encoded book is written to before being renamed over `path`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_atomically(&self, bytes: &[u8]) -> io::Result<()> {
        let temp = self.temp_path();
        {
            let mut file = File::create(&temp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }
        Ok(())
    }
}

fn codec() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding()
}

impl ProjectionStore for BincodeFileStore {
    fn save(&self, projections: &[RecordProjection]) -> StorageResult<()> {
        let bytes = codec()
            .serialize(projections)
            .map_err(|e| StorageError::Encode(e.to_string()))?;

        self.write_atomically(&bytes)?;

        info!(
            path = %self.path.display(),
            records = projections.len(),
            bytes = bytes.len(),
            "Address book saved"
        );
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<RecordProjection>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved address book");
                return Err(StorageError::FileNotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let projections: Vec<RecordProjection> = codec().deserialize(&bytes).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Saved address book is unreadable");
            StorageError::InvalidFormat(e.to_string())
        })?;

        info!(
            path = %self.path.display(),
            records = projections.len(),
            "Address book loaded"
        );
        Ok(projections)
    }
}
