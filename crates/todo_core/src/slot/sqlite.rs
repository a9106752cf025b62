//! SQLite-backed slot implementation.
//!
//! # Responsibility
//! - Persist slot values in the `kv_slots` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Each key maps to at most one row; writes are upserts.
//! - Connections must come from `open_db`/`open_db_in_memory`.

use super::{KeyValueSlot, SlotResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Slot stored in a migrated SQLite connection.
pub struct SqliteSlot<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlot<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueSlot for SqliteSlot<'_> {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
