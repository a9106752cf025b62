//! Durable key-value slot abstraction.
//!
//! # Responsibility
//! - Define the get/set string contract the task store persists through.
//! - Provide in-memory and SQLite-backed slot implementations.
//!
//! # Invariants
//! - `write` replaces the whole value for a key (last write wins).
//! - `read` returns `None` for keys that were never written.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

/// Fixed key under which the task collection snapshot is stored.
pub const TASKS_SLOT_KEY: &str = "todos";

pub type SlotResult<T> = Result<T, SlotError>;

/// Transport error raised by slot implementations and slot database bootstrap.
#[derive(Debug)]
pub enum SlotError {
    Sqlite(rusqlite::Error),
    /// Slot database was written by a newer binary.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Shared in-memory map was poisoned by a panicking writer.
    Poisoned,
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "slot database error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "slot database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Poisoned => write!(f, "slot storage lock poisoned"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::Poisoned => None,
        }
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-valued durable storage keyed by name.
pub trait KeyValueSlot {
    fn read(&self, key: &str) -> SlotResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> SlotResult<()>;
}

impl<S: KeyValueSlot + ?Sized> KeyValueSlot for &S {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> SlotResult<()> {
        (**self).write(key, value)
    }
}
