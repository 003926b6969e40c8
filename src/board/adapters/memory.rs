//! In-memory blob store for tests and ephemeral sessions.

use crate::board::domain::Board;
use crate::board::ports::{BlobStore, PersistenceError, PersistenceResult};
use std::cell::{Cell, RefCell};

/// Holds the serialized blob in memory with the same observable contract
/// as the file store.
///
/// The store can be told to reject writes, which lets tests exercise the
/// warning path a full storage medium would trigger.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    blob: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
}

impl InMemoryBlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with raw blob text.
    #[must_use]
    pub fn with_blob(text: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(text.into())),
            fail_writes: Cell::new(false),
        }
    }

    /// Makes every subsequent save fail, mimicking an exhausted medium.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Returns a snapshot of the stored blob text.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl BlobStore for InMemoryBlobStore {
    fn load(&self) -> PersistenceResult<Option<Board>> {
        let blob = self.blob.borrow();
        match blob.as_deref() {
            Some(text) => Ok(super::decode_blob(text, "in-memory blob")),
            None => Ok(None),
        }
    }

    fn save(&self, board: &Board) -> PersistenceResult<()> {
        if self.fail_writes.get() {
            return Err(PersistenceError::write(std::io::Error::other(
                "in-memory store is rejecting writes",
            )));
        }
        let text = serde_json::to_string(board).map_err(PersistenceError::write)?;
        *self.blob.borrow_mut() = Some(text);
        Ok(())
    }

    fn clear(&self) -> PersistenceResult<()> {
        *self.blob.borrow_mut() = None;
        Ok(())
    }

    fn is_empty(&self) -> PersistenceResult<bool> {
        Ok(self.blob.borrow().is_none())
    }
}
