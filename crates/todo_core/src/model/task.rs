//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted in the snapshot slot.
//! - Normalize and validate user-entered task text.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is trimmed and never empty once a task exists.
//! - Deserialization runs the same validation as construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque stable identifier for a task.
///
/// Generated ids are random v4 UUIDs, but hydrated snapshots may carry any
/// non-empty string, so the value is kept opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh collision-resistant identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an externally supplied identifier.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::EmptyId` when `raw` is blank.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TaskValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation errors for task construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming.
    EmptyText,
    /// Identifier is empty.
    EmptyId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "Task cannot be empty"),
            Self::EmptyId => write!(f, "task id cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Trims user input and rejects whitespace-only values.
pub fn normalize_task_text(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
}

/// Raw wire shape used to validate snapshot records on the way in.
///
/// Unknown fields (older snapshots stored `isEditing`) are ignored.
#[derive(Deserialize)]
struct TaskRecord {
    id: String,
    text: String,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Self::with_id(TaskId::parse(record.id)?, &record.text)?;
        task.completed = record.completed;
        Ok(task)
    }
}

impl Task {
    /// Creates an incomplete task with a generated id.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::EmptyText` when `raw_text` trims to empty.
    pub fn new(raw_text: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(TaskId::generate(), raw_text)
    }

    /// Creates an incomplete task with a caller-provided id.
    ///
    /// Used by hydration paths where identity already exists.
    pub fn with_id(id: TaskId, raw_text: &str) -> Result<Self, TaskValidationError> {
        Ok(Self {
            id,
            text: normalize_task_text(raw_text)?,
            completed: false,
        })
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Replaces text with the trimmed input.
    ///
    /// On error the previous text is left untouched.
    pub fn set_text(&mut self, raw_text: &str) -> Result<(), TaskValidationError> {
        self.text = normalize_task_text(raw_text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_task_text, Task, TaskId, TaskValidationError};

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(
            normalize_task_text("  Buy milk \n").expect("text should normalize"),
            "Buy milk"
        );
    }

    #[test]
    fn normalize_rejects_whitespace_only() {
        assert_eq!(
            normalize_task_text(" \t ").expect_err("blank text should be rejected"),
            TaskValidationError::EmptyText
        );
    }

    #[test]
    fn set_text_failure_keeps_previous_text() {
        let mut task = Task::new("draft").expect("task should be valid");
        assert!(task.set_text("   ").is_err());
        assert_eq!(task.text(), "draft");
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(TaskId::generate(), TaskId::generate());
    }
}
