use contact_book::error::{StorageError, StorageResult};
use contact_book::models::RecordProjection;
use contact_book::storage::ProjectionStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock projection store for testing.
///
/// Keeps saved projections in memory, can be told to fail loads, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockProjectionStore {
    saved: Arc<Mutex<Option<Vec<RecordProjection>>>>,
    corrupt: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockProjectionStore {
    /// Create a new store with nothing saved yet.
    pub fn new() -> Self {
        Self {
            saved: Arc::new(Mutex::new(None)),
            corrupt: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a store that already holds `projections`.
    pub fn with_saved(projections: Vec<RecordProjection>) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(projections);
        store
    }

    /// Make every subsequent load fail as if the data were corrupted.
    pub fn corrupt(&self) {
        *self.corrupt.lock().unwrap() = true;
    }

    /// What was last saved, if anything.
    pub fn saved(&self) -> Option<Vec<RecordProjection>> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockProjectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionStore for MockProjectionStore {
    fn save(&self, projections: &[RecordProjection]) -> StorageResult<()> {
        self.track_call("save");

        *self.saved.lock().unwrap() = Some(projections.to_vec());
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<RecordProjection>> {
        self.track_call("load");

        if *self.corrupt.lock().unwrap() {
            return Err(StorageError::InvalidFormat("mock corruption".to_string()));
        }

        self.saved
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StorageError::FileNotFound("mock".into()))
    }
}
