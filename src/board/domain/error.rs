//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating task input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The task label is empty after trimming.
    #[error("task label must not be empty")]
    EmptyLabel,

    /// The priority value is not one of low, medium, or high.
    #[error("unknown priority: {0}")]
    InvalidPriority(String),

    /// The due date is not a valid ISO-8601 calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
}

/// Error returned while parsing status values from collaborators or
/// persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing priority values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
