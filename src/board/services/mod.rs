//! Orchestration services for the task board.

pub mod controller;
pub mod store;

pub use controller::{BoardCommand, BoardController};
pub use store::{MoveOutcome, TaskStore};
