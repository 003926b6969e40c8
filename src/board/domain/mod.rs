//! Domain model for the task board.
//!
//! The board domain models task identity, the three-column collection and
//! its invariants, validated task input, partial updates, and pure filtered
//! views while keeping all infrastructure concerns outside of the domain
//! boundary.

mod collection;
mod error;
mod fields;
mod filter;
mod ids;
mod task;

pub use collection::Board;
pub use error::{ParsePriorityError, ParseStatusError, ValidationError};
pub use fields::{TaskFields, TaskForm, TaskPatch};
pub use filter::{FilterSet, LabelFilter, PriorityFilter};
pub use ids::{IdSequence, TaskId};
pub use task::{Priority, Task, TaskStatus};
