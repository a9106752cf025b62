//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections backing the durable slot.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Slot reads/writes never run before migrations succeed.
//! - Failures surface as `SlotError`; there is no separate database error layer.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
