//! Application controller: command dispatch, persistence, and rendering.

use super::store::{MoveOutcome, TaskStore};
use crate::board::domain::{Board, FilterSet, TaskForm, TaskId, TaskStatus};
use crate::board::ports::{BlobStore, BoardPresenter, RenderError};
use mockable::Clock;

/// Input events produced by the presentation layer, as typed commands.
///
/// Collaborators construct these from whatever event mechanism they use
/// (form submits, drop events, filter widgets) and hand them to
/// [`BoardController::dispatch`] one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// The task form was submitted; creates a task, or updates the one
    /// being edited.
    Submit(TaskForm),
    /// An edit was requested for the given task.
    Edit(TaskId),
    /// Deletion was requested and already confirmed by the user.
    Delete(TaskId),
    /// A task was dropped onto the `status` column.
    Move {
        /// The dragged task.
        id: TaskId,
        /// The column it was dropped on.
        status: TaskStatus,
    },
    /// The filter widgets changed.
    Filter(FilterSet),
}

/// Wires commands to store mutations, each followed by a persistence
/// write and a re-render through the active filter.
///
/// The controller owns the store, the blob store, the presenter, the
/// active filter set, and the exclusive "currently editing" task id.
/// Every command runs to completion before the next is dispatched; there
/// is no suspension point inside a mutation.
pub struct BoardController<S, P, C> {
    store: TaskStore<C>,
    blob: S,
    presenter: P,
    filters: FilterSet,
    editing: Option<TaskId>,
}

impl<S: BlobStore, P: BoardPresenter, C: Clock> BoardController<S, P, C> {
    /// Creates a controller seeded from the blob store and renders the
    /// initial view.
    ///
    /// An absent or malformed blob seeds an empty board. A read failure
    /// additionally surfaces a warning, and the session continues empty.
    pub fn new(blob: S, mut presenter: P, clock: C) -> Self {
        let seed = match blob.load() {
            Ok(Some(board)) => board,
            Ok(None) => Board::new(),
            Err(err) => {
                tracing::warn!(error = %err, "loading the stored board failed, starting empty");
                presenter.warn("Saved tasks could not be loaded; starting with an empty board");
                Board::new()
            }
        };
        let mut controller = Self {
            store: TaskStore::with_seed(seed, clock),
            blob,
            presenter,
            filters: FilterSet::new(),
            editing: None,
        };
        controller.render();
        controller
    }

    /// Runs one command to completion.
    pub fn dispatch(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::Submit(form) => self.handle_submit(&form),
            BoardCommand::Edit(id) => self.handle_edit(id),
            BoardCommand::Delete(id) => self.handle_delete(id),
            BoardCommand::Move { id, status } => self.handle_move(id, status),
            BoardCommand::Filter(filters) => self.handle_filter(filters),
        }
    }

    /// Returns the store for read access.
    #[must_use]
    pub const fn store(&self) -> &TaskStore<C> {
        &self.store
    }

    /// Returns the task id currently being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    /// Returns the active filter set.
    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.filters
    }

    fn handle_submit(&mut self, form: &TaskForm) {
        let fields = match form.parse() {
            Ok(fields) => fields,
            Err(err) => {
                self.presenter.warn(&err.to_string());
                return;
            }
        };
        if let Some(id) = self.editing.take() {
            match self.store.update(id, fields.into()) {
                Ok(Some(_)) => {
                    self.persist();
                    self.render();
                }
                Ok(None) => {
                    tracing::debug!(%id, "edited task no longer exists");
                    self.presenter.warn("The task being edited no longer exists");
                }
                Err(err) => self.presenter.warn(&err.to_string()),
            }
        } else {
            self.store.create(fields, TaskStatus::Todo);
            self.persist();
            self.render();
        }
    }

    fn handle_edit(&mut self, id: TaskId) {
        let Some(task) = self.store.get(id) else {
            tracing::debug!(%id, "edit requested for unknown task");
            return;
        };
        // Starting an edit discards any prior edit context.
        self.editing = Some(id);
        if let Err(RenderError(detail)) = self.presenter.edit_task(task) {
            tracing::warn!(%detail, "edit form could not be shown");
            self.editing = None;
            self.presenter.warn("The edit form could not be shown");
        }
    }

    fn handle_delete(&mut self, id: TaskId) {
        if self.store.remove(id) {
            self.persist();
            self.render();
        } else {
            tracing::debug!(%id, "delete requested for unknown task");
        }
    }

    fn handle_move(&mut self, id: TaskId, status: TaskStatus) {
        match self.store.move_to(id, status) {
            MoveOutcome::Moved(_) => {
                self.persist();
                self.render();
            }
            // Dropping a task onto its own column changes nothing: no
            // write, no re-render.
            MoveOutcome::AlreadyThere(_) => {}
            MoveOutcome::NotFound => tracing::debug!(%id, "move requested for unknown task"),
        }
    }

    fn handle_filter(&mut self, filters: FilterSet) {
        self.filters = filters;
        self.render();
    }

    /// Writes the full collection to the blob store.
    ///
    /// A failed write is surfaced as a transient warning; the in-memory
    /// collection stays authoritative and the write is not retried.
    fn persist(&mut self) {
        if let Err(err) = self.blob.save(self.store.board()) {
            tracing::warn!(error = %err, "saving the board failed");
            self.presenter
                .warn("Changes could not be saved and may be lost when this session ends");
        }
    }

    /// Renders the collection through the active filter.
    ///
    /// A render failure is isolated: it is logged and surfaced as a
    /// warning, and the store is untouched.
    fn render(&mut self) {
        let outcome = if self.filters.is_match_all() {
            self.presenter.render(self.store.board())
        } else {
            let filtered = self.filters.apply(self.store.board());
            self.presenter.render(&filtered)
        };
        if let Err(RenderError(detail)) = outcome {
            tracing::warn!(%detail, "rendering the board failed");
            self.presenter.warn("The board could not be displayed");
        }
    }
}
