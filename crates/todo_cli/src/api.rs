//! Host-facing task actions.
//!
//! # Responsibility
//! - Map store outcomes to stable action envelopes with user-facing messages.
//! - Render list and summary lines for terminal output.
//!
//! # Invariants
//! - Functions never panic; every failure becomes `ok = false`.
//! - Unknown ids are reported as successful no-ops.

use todo_core::{
    normalize_task_text, EditSession, EditSessionError, KeyValueSlot, StoreError, TaskFilter,
    TaskId, TaskListStore,
};

pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Add one above!";
const NO_MATCH_MESSAGE: &str = "No matching task.";

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected task id, when one was applied.
    pub task_id: Option<String>,
    /// Human-readable message for the caller.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, task_id: &TaskId) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id.to_string()),
            message: message.into(),
        }
    }

    fn no_match() -> Self {
        Self {
            ok: true,
            task_id: None,
            message: NO_MATCH_MESSAGE.to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

pub fn add_task<S: KeyValueSlot>(store: &mut TaskListStore<S>, text: &str) -> ActionResponse {
    match store.add(text) {
        Ok(id) => ActionResponse::success("Task added", &id),
        Err(err) => store_failure(err),
    }
}

pub fn toggle_task<S: KeyValueSlot>(store: &mut TaskListStore<S>, raw_id: &str) -> ActionResponse {
    let Some(id) = parse_id(raw_id) else {
        return ActionResponse::no_match();
    };
    match store.toggle_complete(&id) {
        Ok(true) => {
            let completed = store.get(&id).is_some_and(|task| task.is_completed());
            let message = if completed {
                "Task completed"
            } else {
                "Task reopened"
            };
            ActionResponse::success(message, &id)
        }
        Ok(false) => ActionResponse::no_match(),
        Err(err) => store_failure(err),
    }
}

/// Edits through a one-shot session so completed tasks stay read-only.
///
/// Blank text is rejected before the id is resolved, matching the store.
pub fn edit_task<S: KeyValueSlot>(
    store: &mut TaskListStore<S>,
    raw_id: &str,
    text: &str,
) -> ActionResponse {
    if let Err(err) = normalize_task_text(text) {
        return ActionResponse::failure(err.to_string());
    }
    let Some(id) = parse_id(raw_id) else {
        return ActionResponse::no_match();
    };

    let mut session = EditSession::new();
    let result = session
        .begin(store, &id)
        .and_then(|()| session.set_draft(text))
        .and_then(|()| session.commit(store));

    match result {
        Ok(true) => ActionResponse::success("Task updated", &id),
        Ok(false) | Err(EditSessionError::TaskNotFound(_)) => ActionResponse::no_match(),
        Err(EditSessionError::Store(err)) => store_failure(err),
        Err(err) => ActionResponse::failure(err.to_string()),
    }
}

pub fn delete_task<S: KeyValueSlot>(store: &mut TaskListStore<S>, raw_id: &str) -> ActionResponse {
    let Some(id) = parse_id(raw_id) else {
        return ActionResponse::no_match();
    };
    match store.delete(&id) {
        Ok(true) => ActionResponse::success("Task deleted", &id),
        Ok(false) => ActionResponse::no_match(),
        Err(err) => store_failure(err),
    }
}

/// One line per task: `[x] <id>  <text>`.
///
/// An empty store or an empty filtered view yields a single message line.
pub fn list_lines<S: KeyValueSlot>(store: &TaskListStore<S>, filter: TaskFilter) -> Vec<String> {
    if store.is_empty() {
        return vec![EMPTY_LIST_MESSAGE.to_string()];
    }
    let visible = store.filter(filter);
    if visible.is_empty() {
        return vec![empty_view_message(filter).to_string()];
    }
    visible
        .into_iter()
        .map(|task| {
            let mark = if task.is_completed() { 'x' } else { ' ' };
            format!("[{mark}] {}  {}", task.id(), task.text())
        })
        .collect()
}

fn empty_view_message(filter: TaskFilter) -> &'static str {
    match filter {
        TaskFilter::All => EMPTY_LIST_MESSAGE,
        TaskFilter::Active => "No active tasks.",
        TaskFilter::Completed => "No completed tasks.",
    }
}

/// Footer text; `None` while the list is empty.
pub fn summary_line<S: KeyValueSlot>(store: &TaskListStore<S>) -> Option<String> {
    let summary = store.completion_summary();
    (summary.total > 0).then(|| summary.to_string())
}

fn parse_id(raw_id: &str) -> Option<TaskId> {
    TaskId::parse(raw_id.trim()).ok()
}

fn store_failure(err: StoreError) -> ActionResponse {
    match err {
        StoreError::Validation(err) => ActionResponse::failure(err.to_string()),
        other => ActionResponse::failure(format!("task store failed: {other}")),
    }
}
