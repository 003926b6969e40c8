//! Validated task input and partial-update structures.

use super::{Priority, ValidationError};
use chrono::NaiveDate;

/// Raw task form payload as captured by the presentation layer.
///
/// All members are unparsed widget strings; [`TaskForm::parse`] is the only
/// way to turn them into fields the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: String,
    priority: String,
    label: String,
    due_date: String,
}

impl TaskForm {
    /// Creates a form payload with the required widget values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: priority.into(),
            label: label.into(),
            due_date: String::new(),
        }
    }

    /// Sets the due-date widget value (`YYYY-MM-DD`, empty for none).
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// Parses and validates the raw values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a required field is empty, the
    /// priority is unknown, or the due date does not parse as a calendar
    /// date.
    pub fn parse(&self) -> Result<TaskFields, ValidationError> {
        let priority = Priority::try_from(self.priority.as_str())
            .map_err(|err| ValidationError::InvalidPriority(err.0))?;
        let due_date = parse_due_date(&self.due_date)?;
        TaskFields::new(&self.title, &self.description, priority, &self.label, due_date)
    }
}

/// Parses an optional widget date, treating the empty string as absent.
fn parse_due_date(value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<NaiveDate>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidDueDate(value.to_owned()))
}

fn validate_required(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}

/// Validated task field set consumed by task creation.
///
/// A value of this type cannot hold an empty required field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) priority: Priority,
    pub(crate) label: String,
    pub(crate) due_date: Option<NaiveDate>,
}

impl TaskFields {
    /// Creates a validated field set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when title, description, or label is
    /// empty after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        label: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();
        let label = label.into();
        validate_required(&title, ValidationError::EmptyTitle)?;
        validate_required(&description, ValidationError::EmptyDescription)?;
        validate_required(&label, ValidationError::EmptyLabel)?;
        Ok(Self {
            title,
            description,
            priority,
            label,
            due_date,
        })
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

/// Partial update for an existing task.
///
/// Each member is optional; absent members leave the task untouched. The
/// patch intentionally has no status member: status changes travel through
/// the move operation only. `due_date` is doubly optional so a patch can
/// distinguish "leave as is" (`None`) from "clear the date"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) priority: Option<Priority>,
    pub(crate) label: Option<String>,
    pub(crate) due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets a replacement label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.label.is_none()
            && self.due_date.is_none()
    }

    /// Checks every present member against the required-field rules.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a present title, description, or
    /// label is empty after trimming. The whole patch is rejected; nothing
    /// is merged on error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validate_required(title, ValidationError::EmptyTitle)?;
        }
        if let Some(description) = &self.description {
            validate_required(description, ValidationError::EmptyDescription)?;
        }
        if let Some(label) = &self.label {
            validate_required(label, ValidationError::EmptyLabel)?;
        }
        Ok(())
    }
}

impl From<TaskFields> for TaskPatch {
    /// Builds a full-replacement patch, as submitted by the edit form.
    fn from(fields: TaskFields) -> Self {
        Self {
            title: Some(fields.title),
            description: Some(fields.description),
            priority: Some(fields.priority),
            label: Some(fields.label),
            due_date: Some(fields.due_date),
        }
    }
}
