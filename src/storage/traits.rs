use crate::error::StorageResult;
use crate::models::RecordProjection;

/// Store for saved address books.
///
/// Provides abstraction over where projections are kept, enabling different
/// implementations (file on disk, in-memory mock).
pub trait ProjectionStore {
    /// Replace the stored contents with `projections`, keeping their order.
    fn save(&self, projections: &[RecordProjection]) -> StorageResult<()>;

    /// Read back the projections in the order they were saved.
    fn load(&self) -> StorageResult<Vec<RecordProjection>>;
}
