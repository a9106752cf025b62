//! Snapshot codec for the task collection.
//!
//! # Responsibility
//! - Encode the ordered collection as a JSON array of task records.
//! - Decode and validate snapshots read back from a slot.
//!
//! # Invariants
//! - Encoded order equals in-memory insertion order.
//! - A decoded snapshot never contains duplicate ids or empty text.

use crate::model::task::{Task, TaskId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a stored snapshot cannot be hydrated.
#[derive(Debug)]
pub enum SnapshotError {
    /// Not valid JSON, wrong shape, or a record failed task validation.
    Json(serde_json::Error),
    /// Two records share the same id.
    DuplicateId(TaskId),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed task snapshot: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate task id in snapshot: {id}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes tasks into the slot value format.
pub fn encode_snapshot(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string(tasks)
}

/// Parses a slot value into an ordered, id-unique task list.
pub fn decode_snapshot(raw: &str) -> Result<Vec<Task>, SnapshotError> {
    let tasks: Vec<Task> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if !seen.insert(task.id()) {
            return Err(SnapshotError::DuplicateId(task.id().clone()));
        }
    }
    Ok(tasks)
}
