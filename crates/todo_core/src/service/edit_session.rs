//! Inline edit session state.
//!
//! # Responsibility
//! - Track which single task is being edited and its draft text.
//! - Commit drafts through `TaskListStore::edit`.
//!
//! # Invariants
//! - At most one task is in edit mode; beginning a new edit replaces the old.
//! - Completed tasks cannot enter edit mode.
//! - A rejected commit keeps the session and its draft open.
//! - Session state is view-local and never persisted.

use crate::model::task::TaskId;
use crate::service::task_store::{StoreError, TaskListStore};
use crate::slot::KeyValueSlot;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum EditSessionError {
    /// No task is currently in edit mode.
    NotEditing,
    TaskNotFound(TaskId),
    /// Completed tasks are read-only until toggled back.
    TaskCompleted(TaskId),
    Store(StoreError),
}

impl Display for EditSessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEditing => write!(f, "no task is being edited"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::TaskCompleted(id) => write!(f, "completed task cannot be edited: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditSessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for EditSessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EditingState {
    id: TaskId,
    draft: String,
}

/// Single-task edit mode tracker.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    editing: Option<EditingState>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters edit mode for `id`, seeding the draft with its current text.
    pub fn begin<S: KeyValueSlot>(
        &mut self,
        store: &TaskListStore<S>,
        id: &TaskId,
    ) -> Result<(), EditSessionError> {
        let task = store
            .get(id)
            .ok_or_else(|| EditSessionError::TaskNotFound(id.clone()))?;
        if task.is_completed() {
            return Err(EditSessionError::TaskCompleted(id.clone()));
        }

        self.editing = Some(EditingState {
            id: id.clone(),
            draft: task.text().to_string(),
        });
        Ok(())
    }

    pub fn currently_editing_id(&self) -> Option<&TaskId> {
        self.editing.as_ref().map(|state| &state.id)
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.currently_editing_id() == Some(id)
    }

    pub fn draft(&self) -> Option<&str> {
        self.editing.as_ref().map(|state| state.draft.as_str())
    }

    pub fn set_draft(&mut self, text: impl Into<String>) -> Result<(), EditSessionError> {
        let state = self.editing.as_mut().ok_or(EditSessionError::NotEditing)?;
        state.draft = text.into();
        Ok(())
    }

    /// Leaves edit mode without saving. Returns the abandoned task id.
    pub fn cancel(&mut self) -> Option<TaskId> {
        self.editing.take().map(|state| state.id)
    }

    /// Saves the draft through the store and leaves edit mode.
    ///
    /// Returns `Ok(false)` when the task vanished while editing; the session
    /// is closed in that case too.
    pub fn commit<S: KeyValueSlot>(
        &mut self,
        store: &mut TaskListStore<S>,
    ) -> Result<bool, EditSessionError> {
        let state = self.editing.as_ref().ok_or(EditSessionError::NotEditing)?;
        let applied = store.edit(&state.id, &state.draft)?;
        self.editing = None;
        Ok(applied)
    }
}
