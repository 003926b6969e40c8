//! Identifier types for the board domain.

use super::Board;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task record.
///
/// Identifiers are plain integers, assigned monotonically by
/// [`IdSequence`] so a later task always carries a larger id than an
/// earlier one within the same process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task identifier from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic allocator for [`TaskId`] values.
///
/// Every allocated id is strictly greater than any id the sequence has
/// handed out or been seeded past, so identity stays unique across the
/// whole collection even after a reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Creates a sequence starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates a sequence primed past the largest id present in `board`.
    #[must_use]
    pub fn seeded_past(board: &Board) -> Self {
        let next = board
            .max_id()
            .map_or(1, |id| id.value().saturating_add(1));
        Self { next }
    }

    /// Hands out the next identifier.
    pub fn allocate(&mut self) -> TaskId {
        let id = TaskId::new(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
