//! Presentation port for rendering the board and surfacing warnings.

use crate::board::domain::{Board, Task};
use thiserror::Error;

/// Presentation contract consumed by the controller.
///
/// The presenter renders collections it is handed and never reaches back
/// into the store; a failing presenter cannot corrupt board state.
pub trait BoardPresenter {
    /// Displays the given collection (full or filtered).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the presentation layer fails to
    /// display the collection. The controller isolates the failure.
    fn render(&mut self, board: &Board) -> Result<(), RenderError>;

    /// Opens the edit form pre-filled with the task's current values.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the form cannot be shown.
    fn edit_task(&mut self, task: &Task) -> Result<(), RenderError>;

    /// Shows a transient, auto-dismissing warning message.
    fn warn(&mut self, message: &str);
}

/// Error returned when the presentation layer fails to display valid
/// state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("presentation failed: {0}")]
pub struct RenderError(pub String);
