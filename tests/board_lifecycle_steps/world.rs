//! Shared world state for board lifecycle BDD scenarios.

use mockable::DefaultClock;
use rstest::fixture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trestle::board::adapters::InMemoryBlobStore;
use trestle::board::domain::{Board, Task, TaskId};
use trestle::board::ports::{BlobStore, BoardPresenter, PersistenceResult, RenderError};
use trestle::board::services::BoardController;

/// Everything the presenter was asked to do during a scenario.
#[derive(Debug, Default)]
pub struct PresenterLog {
    pub renders: Vec<Board>,
    pub warnings: Vec<String>,
}

/// Presenter that records renders and warnings for later assertions.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    pub log: Rc<RefCell<PresenterLog>>,
}

impl BoardPresenter for RecordingPresenter {
    fn render(&mut self, board: &Board) -> Result<(), RenderError> {
        self.log.borrow_mut().renders.push(board.clone());
        Ok(())
    }

    fn edit_task(&mut self, _task: &Task) -> Result<(), RenderError> {
        Ok(())
    }

    fn warn(&mut self, message: &str) {
        self.log.borrow_mut().warnings.push(message.to_owned());
    }
}

/// Blob store handle the scenario keeps after the controller takes
/// ownership; counts save attempts.
#[derive(Clone, Default)]
pub struct SharedBlob {
    pub inner: Rc<InMemoryBlobStore>,
    pub saves: Rc<Cell<usize>>,
}

impl BlobStore for SharedBlob {
    fn load(&self) -> PersistenceResult<Option<Board>> {
        self.inner.load()
    }

    fn save(&self, board: &Board) -> PersistenceResult<()> {
        self.saves.set(self.saves.get() + 1);
        self.inner.save(board)
    }

    fn clear(&self) -> PersistenceResult<()> {
        self.inner.clear()
    }

    fn is_empty(&self) -> PersistenceResult<bool> {
        self.inner.is_empty()
    }
}

/// Controller type used by the BDD world.
pub type TestController = BoardController<SharedBlob, RecordingPresenter, DefaultClock>;

/// Scenario world for board lifecycle behaviour tests.
pub struct BoardWorld {
    pub controller: TestController,
    pub blob: SharedBlob,
    pub log: Rc<RefCell<PresenterLog>>,
    pub saves_mark: usize,
}

impl BoardWorld {
    /// Creates a world around an empty, freshly loaded board.
    #[must_use]
    pub fn new() -> Self {
        let blob = SharedBlob::default();
        let presenter = RecordingPresenter::default();
        let log = Rc::clone(&presenter.log);
        let controller = BoardController::new(blob.clone(), presenter, DefaultClock);
        Self {
            controller,
            blob,
            log,
            saves_mark: 0,
        }
    }

    /// Finds a task id by title across all buckets.
    #[must_use]
    pub fn find_id(&self, title: &str) -> Option<TaskId> {
        self.controller
            .store()
            .board()
            .iter()
            .find(|task| task.title() == title)
            .map(Task::id)
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
