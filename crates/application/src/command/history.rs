use domain::{CommandRef, DomainError, Result};
use parking_lot::Mutex;

/// Ledger of the commands that became current, in order.
///
/// A `None` entry marks a moment with no current command. Two `None` entries
/// are never stored back to back. Every operation runs under one lock, so the
/// "check last entry, then append" step is atomic.
#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: Mutex<Vec<Option<CommandRef>>>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `command`, unless it is `None` and the last entry is `None` too.
    /// Repeated non-`None` commands are always kept.
    pub fn add_command(&self, command: Option<CommandRef>) {
        let mut entries = self.entries.lock();
        if command.is_none() && matches!(entries.last(), Some(None)) {
            return;
        }
        entries.push(command);
    }

    /// Copy of all entries in insertion order
    pub fn history(&self) -> Vec<Option<CommandRef>> {
        self.entries.lock().clone()
    }

    pub fn get_command(&self, index: usize) -> Result<Option<CommandRef>> {
        let entries = self.entries.lock();
        entries
            .get(index)
            .cloned()
            .ok_or(DomainError::IndexOutOfRange {
                index,
                len: entries.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
