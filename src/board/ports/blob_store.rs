//! Blob-store port for board persistence.

use crate::board::domain::Board;
use std::sync::Arc;
use thiserror::Error;

/// Result type for blob-store operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Persistence contract: one named blob holding the serialized collection.
///
/// Implementations are failure-tolerant at the data level: a blob that is
/// present but malformed loads as `Ok(None)`, never as an error, so a
/// corrupt store degrades to an empty board instead of a fatal fault.
/// Medium-level read and write failures surface as [`PersistenceError`];
/// callers keep the in-memory collection authoritative regardless.
pub trait BlobStore {
    /// Reads the stored collection.
    ///
    /// Returns `Ok(None)` when the blob is absent or malformed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the storage medium fails to read.
    fn load(&self) -> PersistenceResult<Option<Board>>;

    /// Serializes and writes the full collection, replacing the blob.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the storage medium rejects the
    /// write (for example, quota exceeded). The caller's in-memory state
    /// stays authoritative; the failure is surfaced as a transient
    /// warning, not retried.
    fn save(&self, board: &Board) -> PersistenceResult<()>;

    /// Removes the blob.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the storage medium fails the
    /// removal. Removing an absent blob is not an error.
    fn clear(&self) -> PersistenceResult<()>;

    /// Returns whether no blob is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the storage medium cannot be
    /// inspected.
    fn is_empty(&self) -> PersistenceResult<bool>;
}

/// Errors returned by blob-store implementations.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The storage medium could not be opened.
    #[error("blob store unavailable: {0}")]
    Open(Arc<dyn std::error::Error + Send + Sync>),

    /// The storage medium failed to read the blob.
    #[error("blob read failed: {0}")]
    Read(Arc<dyn std::error::Error + Send + Sync>),

    /// The storage medium failed to write the blob.
    #[error("blob write failed: {0}")]
    Write(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersistenceError {
    /// Wraps a store-opening failure.
    pub fn open(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Open(Arc::new(err))
    }

    /// Wraps a read-side failure.
    pub fn read(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Read(Arc::new(err))
    }

    /// Wraps a write-side failure.
    pub fn write(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write(Arc::new(err))
    }
}
