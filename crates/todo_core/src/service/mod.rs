//! Task store use-cases.
//!
//! # Responsibility
//! - Own the in-memory task collection and its persistence cycle.
//! - Keep view-local edit state separate from the durable model.

pub mod edit_session;
pub mod snapshot;
pub mod task_store;
