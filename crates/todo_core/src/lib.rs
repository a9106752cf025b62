//! Core task-list state for the todo app.
//! This crate is the single source of truth for task invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod slot;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_task_text, Task, TaskId, TaskValidationError};
pub use service::edit_session::{EditSession, EditSessionError};
pub use service::snapshot::{decode_snapshot, encode_snapshot, SnapshotError};
pub use service::task_store::{
    CompletionSummary, StoreError, StoreResult, TaskFilter, TaskListStore,
};
pub use slot::memory::MemorySlot;
pub use slot::sqlite::SqliteSlot;
pub use slot::{KeyValueSlot, SlotError, SlotResult, TASKS_SLOT_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
