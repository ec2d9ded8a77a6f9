//! Entry store collaborator.
//!
//! The scheduling core never talks to a database directly; it goes through
//! the [`EntryStore`] trait. [`MemoryStore`] is the reference
//! implementation used by tests and small embeddings. Persist failures are
//! reported, not fatal: the engine keeps its in-memory state authoritative
//! and surfaces the error as a warning.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::types::{Entry, Status};

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("persist failed: {0}")]
    Persist(String),
}

pub trait EntryStore {
    fn fetch(&self, entry_id: &str) -> Result<Option<Entry>, StoreError>;

    fn fetch_all(&self) -> Result<Vec<Entry>, StoreError>;

    /// Seen entries due today or earlier, soonest first.
    fn fetch_due(&self, now: DateTime<Utc>) -> Result<Vec<Entry>, StoreError>;

    fn persist(&self, entry: &Entry) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, entry: Entry) {
        self.entries.write().insert(entry.id.clone(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl EntryStore for MemoryStore {
    fn fetch(&self, entry_id: &str) -> Result<Option<Entry>, StoreError> {
        Ok(self.entries.read().get(entry_id).cloned())
    }

    fn fetch_all(&self) -> Result<Vec<Entry>, StoreError> {
        let mut all: Vec<Entry> = self.entries.read().values().cloned().collect();
        all.sort_by(|a, b| a.word.cmp(&b.word).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    fn fetch_due(&self, now: DateTime<Utc>) -> Result<Vec<Entry>, StoreError> {
        let mut due: Vec<Entry> = self
            .entries
            .read()
            .values()
            .filter(|e| e.status == Status::Seen && e.is_due(now))
            .cloned()
            .collect();
        due.sort_by(|a, b| {
            a.next_due_at
                .cmp(&b.next_due_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(due)
    }

    fn persist(&self, entry: &Entry) -> Result<(), StoreError> {
        self.insert(entry.clone());
        Ok(())
    }
}
