//! The three-column task collection and its structural invariants.

use super::{Task, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The canonical task collection: one insertion-ordered bucket per status.
///
/// The struct shape guarantees exactly three buckets exist. The mutation
/// helpers keep the remaining invariants: a task lives in exactly one
/// bucket, its status field matches the bucket holding it, and ids are
/// unique across the whole collection.
///
/// The serialized form is a single JSON object keyed by the status names,
/// each holding an array of task objects; buckets absent from a stored
/// blob deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    todo: Vec<Task>,
    inprogress: Vec<Task>,
    done: Vec<Task>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todo: Vec::new(),
            inprogress: Vec::new(),
            done: Vec::new(),
        }
    }

    /// Returns the bucket for `status`.
    #[must_use]
    pub fn bucket(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.inprogress,
            TaskStatus::Done => &self.done,
        }
    }

    pub(crate) const fn bucket_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.inprogress,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Iterates every task in board column order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.todo
            .iter()
            .chain(self.inprogress.iter())
            .chain(self.done.iter())
    }

    /// Finds a task by id across all buckets.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.iter().find(|task| task.id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.todo
            .iter_mut()
            .chain(self.inprogress.iter_mut())
            .chain(self.done.iter_mut())
            .find(|task| task.id() == id)
    }

    /// Returns the total number of tasks across all buckets.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.todo.len() + self.inprogress.len() + self.done.len()
    }

    /// Returns whether the board holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the largest id present, if any.
    #[must_use]
    pub fn max_id(&self) -> Option<TaskId> {
        self.iter().map(Task::id).max()
    }

    /// Appends a task to the bucket matching its status field.
    pub(crate) fn append(&mut self, task: Task) {
        self.bucket_mut(task.status()).push(task);
    }

    /// Removes and returns the task with `id` from whichever bucket holds
    /// it.
    pub(crate) fn take(&mut self, id: TaskId) -> Option<Task> {
        for status in TaskStatus::ALL {
            let bucket = self.bucket_mut(status);
            if let Some(position) = bucket.iter().position(|task| task.id() == id) {
                return Some(bucket.remove(position));
            }
        }
        None
    }

    /// Moves the task with `id` into `status` in one mutation.
    ///
    /// Returns the task's new state, or `None` when the id is unknown. The
    /// splice never leaves the task in zero or two buckets.
    pub(crate) fn relocate(&mut self, id: TaskId, status: TaskStatus) -> Option<&Task> {
        let mut task = self.take(id)?;
        task.set_status(status);
        let bucket = self.bucket_mut(status);
        bucket.push(task);
        bucket.last()
    }

    /// Checks the structural invariants a stored blob must satisfy: status
    /// fields agreeing with bucket keys, unique ids, and non-empty
    /// required fields.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let mut seen = HashSet::new();
        for status in TaskStatus::ALL {
            for task in self.bucket(status) {
                let coherent = task.status() == status
                    && !task.title().trim().is_empty()
                    && !task.description().trim().is_empty()
                    && !task.label().trim().is_empty()
                    && seen.insert(task.id());
                if !coherent {
                    return false;
                }
            }
        }
        true
    }
}
