//! Task domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by the task store.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Task text is validated on every construction and mutation path.

pub mod task;
