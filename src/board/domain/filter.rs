//! Pure filtered views over the task collection.

use super::{Board, ParsePriorityError, Priority, Task, TaskStatus};

/// Label predicate: a specific label or match-all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LabelFilter {
    /// Matches every label.
    #[default]
    Any,
    /// Matches one label exactly.
    Exact(String),
}

impl LabelFilter {
    /// Sentinel widget value meaning match-all.
    pub const ALL: &'static str = "all";

    /// Parses a widget value, mapping the `"all"` sentinel to match-all.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Self::Any
        } else {
            Self::Exact(value.to_owned())
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(label) => task.label() == label,
        }
    }
}

/// Priority predicate: a specific level or match-all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Matches every priority.
    #[default]
    Any,
    /// Matches one priority level.
    Only(Priority),
}

impl PriorityFilter {
    /// Parses a widget value, mapping the `"all"` sentinel to match-all.
    ///
    /// Priority names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ParsePriorityError`] when the value is neither the
    /// sentinel nor a priority name.
    pub fn parse(value: &str) -> Result<Self, ParsePriorityError> {
        if value.trim().eq_ignore_ascii_case(LabelFilter::ALL) {
            return Ok(Self::Any);
        }
        Priority::try_from(value).map(Self::Only)
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Self::Any => true,
            Self::Only(priority) => task.priority() == priority,
        }
    }
}

/// Predicate set for computing a filtered view of a board.
///
/// A task passes only when all three predicates pass. The default set
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    search: String,
    label: LabelFilter,
    priority: PriorityFilter,
}

impl FilterSet {
    /// Creates a match-all filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term, matched case-insensitively against title and
    /// description. Empty matches all.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the label predicate.
    #[must_use]
    pub fn with_label(mut self, label: LabelFilter) -> Self {
        self.label = label;
        self
    }

    /// Sets the priority predicate.
    #[must_use]
    pub fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Returns whether the set matches everything, making
    /// [`FilterSet::apply`] the identity.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.search.is_empty()
            && self.label == LabelFilter::Any
            && self.priority == PriorityFilter::Any
    }

    /// Evaluates all three predicates against one task.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task) && self.label.matches(task) && self.priority.matches(task)
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title().to_lowercase().contains(&needle)
            || task.description().to_lowercase().contains(&needle)
    }

    /// Computes a filtered copy of `board`.
    ///
    /// Each bucket is filtered independently with order preserved; the
    /// input is never mutated.
    #[must_use]
    pub fn apply(&self, board: &Board) -> Board {
        let mut filtered = Board::new();
        for status in TaskStatus::ALL {
            let bucket = board
                .bucket(status)
                .iter()
                .filter(|task| self.matches(task))
                .cloned()
                .collect();
            *filtered.bucket_mut(status) = bucket;
        }
        filtered
    }
}
