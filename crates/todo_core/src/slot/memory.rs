//! Process-local slot implementation.

use super::{KeyValueSlot, SlotError, SlotResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory slot; clones share the same backing map.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        let values = self.values.lock().map_err(|_| SlotError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> SlotResult<()> {
        let mut values = self.values.lock().map_err(|_| SlotError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
