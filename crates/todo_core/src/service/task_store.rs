//! Task list store.
//!
//! # Responsibility
//! - Own the authoritative ordered task collection.
//! - Keep the durable slot snapshot consistent with every mutation.
//!
//! # Invariants
//! - `add`, `toggle_complete`, `edit` and `delete` are the only write paths.
//! - A mutation is committed in memory only after its snapshot is written.
//! - Unknown ids are silent no-ops reported as `Ok(false)`.
//! - Task text is never logged; events carry ids and counts only.

use crate::model::task::{normalize_task_text, Task, TaskId, TaskValidationError};
use crate::service::snapshot::{decode_snapshot, encode_snapshot};
use crate::slot::{KeyValueSlot, SlotError, TASKS_SLOT_KEY};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Input text trimmed to empty; the collection is unchanged.
    Validation(TaskValidationError),
    /// Snapshot could not be serialized.
    Encode(serde_json::Error),
    /// Slot write failed; the collection is unchanged.
    Persist(SlotError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task snapshot: {err}"),
            Self::Persist(err) => write!(f, "failed to persist task snapshot: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Persist(value)
    }
}

/// Completed/total counts computed from the current collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionSummary {
    pub completed: usize,
    pub total: usize,
}

impl Display for CompletionSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} tasks completed", self.completed, self.total)
    }
}

/// Read-side projection over completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.is_completed(),
            Self::Completed => task.is_completed(),
        }
    }
}

/// Store over an ordered task collection persisted through a slot.
pub struct TaskListStore<S: KeyValueSlot> {
    slot: S,
    key: String,
    tasks: Vec<Task>,
}

impl<S: KeyValueSlot> TaskListStore<S> {
    /// Hydrates a store from the default `todos` slot key.
    pub fn initialize(slot: S) -> Self {
        Self::initialize_with_key(slot, TASKS_SLOT_KEY)
    }

    /// Hydrates a store from `key`.
    ///
    /// Absent, unreadable or malformed snapshots start an empty collection;
    /// this never fails.
    pub fn initialize_with_key(slot: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks = load_tasks(&slot, &key);
        info!(
            "event=store_init module=store status=ok key={} task_count={}",
            key,
            tasks.len()
        );
        Self { slot, key, tasks }
    }

    /// Appends a new incomplete task with trimmed text.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `raw_text` trims to empty.
    /// - `StoreError::Persist` when the snapshot write fails.
    pub fn add(&mut self, raw_text: &str) -> StoreResult<TaskId> {
        let task = Task::new(raw_text).map_err(|err| {
            warn!("event=task_add module=store status=rejected reason=empty_text");
            err
        })?;
        let id = task.id().clone();

        let mut next = self.tasks.clone();
        next.push(task);
        self.commit(next)?;

        info!(
            "event=task_add module=store status=ok task_id={} task_count={}",
            id,
            self.tasks.len()
        );
        Ok(id)
    }

    /// Flips completion on the matching task.
    ///
    /// Returns `Ok(false)` without writing when `id` is unknown.
    pub fn toggle_complete(&mut self, id: &TaskId) -> StoreResult<bool> {
        let Some(index) = self.position(id) else {
            debug!("event=task_toggle module=store status=miss task_id={id}");
            return Ok(false);
        };

        let mut next = self.tasks.clone();
        next[index].toggle();
        let completed = next[index].is_completed();
        self.commit(next)?;

        info!("event=task_toggle module=store status=ok task_id={id} completed={completed}");
        Ok(true)
    }

    /// Replaces the text of the matching task with trimmed input.
    ///
    /// Validation runs before lookup, so blank text is rejected even for
    /// unknown ids. Returns `Ok(false)` without writing when `id` is unknown.
    pub fn edit(&mut self, id: &TaskId, raw_text: &str) -> StoreResult<bool> {
        let text = normalize_task_text(raw_text).map_err(|err| {
            warn!("event=task_edit module=store status=rejected reason=empty_text task_id={id}");
            err
        })?;
        let Some(index) = self.position(id) else {
            debug!("event=task_edit module=store status=miss task_id={id}");
            return Ok(false);
        };

        let mut next = self.tasks.clone();
        next[index].set_text(&text)?;
        self.commit(next)?;

        info!("event=task_edit module=store status=ok task_id={id}");
        Ok(true)
    }

    /// Removes the matching task, keeping the order of the rest.
    ///
    /// Returns `Ok(false)` without writing when `id` is unknown.
    pub fn delete(&mut self, id: &TaskId) -> StoreResult<bool> {
        let Some(index) = self.position(id) else {
            debug!("event=task_delete module=store status=miss task_id={id}");
            return Ok(false);
        };

        let mut next = self.tasks.clone();
        next.remove(index);
        self.commit(next)?;

        info!(
            "event=task_delete module=store status=ok task_id={id} task_count={}",
            self.tasks.len()
        );
        Ok(true)
    }

    /// Counts completed and total tasks on every call.
    pub fn completion_summary(&self) -> CompletionSummary {
        CompletionSummary {
            completed: self.tasks.iter().filter(|task| task.is_completed()).count(),
            total: self.tasks.len(),
        }
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| filter.matches(task))
            .collect()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Slot key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    fn commit(&mut self, next: Vec<Task>) -> StoreResult<()> {
        let raw = encode_snapshot(&next)?;
        if let Err(err) = self.slot.write(&self.key, &raw) {
            warn!(
                "event=snapshot_write module=store status=error key={} error={}",
                self.key, err
            );
            return Err(err.into());
        }
        self.tasks = next;
        Ok(())
    }
}

fn load_tasks<S: KeyValueSlot>(slot: &S, key: &str) -> Vec<Task> {
    let raw = match slot.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(
                "event=snapshot_read module=store status=error key={key} error_code=slot_read_failed error={err}"
            );
            return Vec::new();
        }
    };

    match decode_snapshot(&raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(
                "event=snapshot_read module=store status=error key={key} error_code=snapshot_malformed error={err}"
            );
            Vec::new()
        }
    }
}
