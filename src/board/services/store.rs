//! The task store: canonical collection plus mutation protocol.

use crate::board::domain::{
    Board, IdSequence, Task, TaskFields, TaskId, TaskPatch, TaskStatus, ValidationError,
};
use mockable::Clock;

/// Outcome of a move request.
///
/// The no-op case is its own variant so callers can skip the persistence
/// write and re-render a real move would require.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task changed buckets; the returned state carries the new
    /// status.
    Moved(Task),
    /// The task was already in the requested bucket; the collection is
    /// untouched.
    AlreadyThere(Task),
    /// No task has the requested id.
    NotFound,
}

/// Owns the canonical task collection and enforces its mutation protocol.
///
/// All writes to the collection go through this type: creation assigns
/// monotonic identity and a clock-stamped creation time, updates merge
/// validated patches without touching status, and moves splice a task
/// between buckets in one mutation.
#[derive(Debug)]
pub struct TaskStore<C> {
    board: Board,
    ids: IdSequence,
    clock: C,
}

impl<C: Clock> TaskStore<C> {
    /// Creates a store with an empty collection.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_seed(Board::new(), clock)
    }

    /// Creates a store seeded with a previously persisted collection.
    ///
    /// The id sequence is primed past the largest seeded id so fresh ids
    /// never collide with reloaded ones.
    #[must_use]
    pub fn with_seed(seed: Board, clock: C) -> Self {
        let ids = IdSequence::seeded_past(&seed);
        Self {
            board: seed,
            ids,
            clock,
        }
    }

    /// Creates a task from validated fields and appends it to the
    /// `status` bucket.
    ///
    /// The new task's id is strictly greater than any id this store has
    /// assigned or been seeded with; `created_at` comes from the injected
    /// clock.
    pub fn create(&mut self, fields: TaskFields, status: TaskStatus) -> Task {
        let task = Task::new(self.ids.allocate(), fields, status, &self.clock);
        self.board.append(task.clone());
        task
    }

    /// Removes the task with `id` from whichever bucket holds it.
    ///
    /// Returns whether a task was found and removed; an unknown id is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: TaskId) -> bool {
        self.board.take(id).is_some()
    }

    /// Merges `patch` into the task with `id`.
    ///
    /// Status is never touched: the patch type has no status member, and
    /// bucket membership only changes through [`TaskStore::move_to`].
    /// Returns `Ok(None)` for an unknown id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a present patch field is invalid;
    /// the collection is left untouched.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Result<Option<Task>, ValidationError> {
        patch.validate()?;
        Ok(self.board.find_mut(id).map(|task| {
            task.apply_patch(patch);
            task.clone()
        }))
    }

    /// Moves the task with `id` into the `status` bucket.
    ///
    /// A task already in `status` is left exactly where it is. A real
    /// move is a single splice: the task is never observable in zero or
    /// two buckets.
    pub fn move_to(&mut self, id: TaskId, status: TaskStatus) -> MoveOutcome {
        match self.board.find(id) {
            None => MoveOutcome::NotFound,
            Some(task) if task.status() == status => MoveOutcome::AlreadyThere(task.clone()),
            Some(_) => self
                .board
                .relocate(id, status)
                .cloned()
                .map_or(MoveOutcome::NotFound, MoveOutcome::Moved),
        }
    }

    /// Finds a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.board.find(id)
    }

    /// Returns the tasks currently in `status`, in insertion order.
    #[must_use]
    pub fn tasks_in(&self, status: TaskStatus) -> &[Task] {
        self.board.bucket(status)
    }

    /// Returns the whole collection.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub fn count(&self) -> usize {
        self.board.len()
    }
}
