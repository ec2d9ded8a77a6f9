//! Study engine facade.
//!
//! Wires the outcome handler, the scheduler, the session queue, and the
//! entry store together. Each operation reads the clock exactly once and
//! reuses that instant for every derived field. The engine owns the RNG
//! used for interval jitter; tests construct it with a fixed seed.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SrsConfig;
use crate::review::{apply_forget, apply_remember};
use crate::session::SessionQueue;
use crate::store::{EntryStore, StoreError};
use crate::types::{Entry, Status, StudyMetrics};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown entry: {0}")]
    UnknownEntry(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a remember/forget call. A persist failure is carried here as
/// a warning; the returned entry is still the authoritative state.
#[derive(Debug, Clone)]
pub struct ReviewResult {
    pub entry: Entry,
    /// Whether this outcome triggered a reschedule.
    pub rescheduled: bool,
    pub persist_error: Option<StoreError>,
}

pub struct StudyEngine<S: EntryStore> {
    store: S,
    config: SrsConfig,
    session: SessionQueue,
    rng: StdRng,
}

impl<S: EntryStore> StudyEngine<S> {
    pub fn new(store: S, config: SrsConfig) -> Self {
        Self {
            store,
            config,
            session: SessionQueue::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine for tests.
    pub fn with_rng_seed(store: S, config: SrsConfig, seed: u64) -> Self {
        Self {
            store,
            config,
            session: SessionQueue::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SrsConfig {
        &self.config
    }

    /// Records a remembered outcome for the entry.
    pub fn remember(&mut self, entry_id: &str) -> Result<ReviewResult, EngineError> {
        let now = Utc::now();
        let entry = self.resolve(entry_id)?;
        let (updated, rescheduled) = apply_remember(&entry, now, &self.config, &mut self.rng);
        Ok(self.commit(updated, rescheduled))
    }

    /// Records a forgotten outcome for the entry.
    pub fn forget(&mut self, entry_id: &str) -> Result<ReviewResult, EngineError> {
        let entry = self.resolve(entry_id)?;
        let updated = apply_forget(&entry);
        Ok(self.commit(updated, false))
    }

    /// Explicit status change (exclude, reset to unseen). Leaves all
    /// scheduling fields untouched.
    pub fn set_status(&mut self, entry_id: &str, status: Status) -> Result<ReviewResult, EngineError> {
        let mut entry = self.resolve(entry_id)?;
        entry.status = status;
        Ok(self.commit(entry, false))
    }

    /// Seeds a review session with the given ordered entries.
    pub fn start_session(&mut self, entries: Vec<Entry>) {
        self.session.seed(entries);
    }

    /// Seeds a session around a single entry.
    pub fn start_session_single(&mut self, entry: Entry) {
        self.session.seed(vec![entry]);
    }

    /// Cycles the session queue once; a no-op when the session is empty.
    pub fn advance_session(&mut self) {
        let now = Utc::now();
        self.session.cycle(now);
    }

    /// Ordered snapshots of the current session, head first.
    pub fn current_session_entries(&self) -> Vec<Entry> {
        self.session.iter().cloned().collect()
    }

    pub fn session_is_empty(&self) -> bool {
        self.session.is_empty()
    }

    /// Seen entries due today or earlier.
    pub fn due_entries(&self) -> Result<Vec<Entry>, StoreError> {
        self.store.fetch_due(Utc::now())
    }

    pub fn all_entries(&self) -> Result<Vec<Entry>, StoreError> {
        self.store.fetch_all()
    }

    pub fn metrics(&self, entries: &[Entry]) -> StudyMetrics {
        StudyMetrics::from_entries(entries)
    }

    /// The live session copy wins over the store so state stays
    /// authoritative in memory across persist failures.
    fn resolve(&self, entry_id: &str) -> Result<Entry, EngineError> {
        if let Some(entry) = self.session.get(entry_id) {
            return Ok(entry.clone());
        }
        self.store
            .fetch(entry_id)?
            .ok_or_else(|| EngineError::UnknownEntry(entry_id.to_string()))
    }

    fn commit(&mut self, entry: Entry, rescheduled: bool) -> ReviewResult {
        self.session.refresh(&entry);
        let persist_error = match self.store.persist(&entry) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    entry_id = %entry.id,
                    "failed to persist entry; in-memory state kept"
                );
                Some(e)
            }
        };
        ReviewResult {
            entry,
            rescheduled,
            persist_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn engine_with_entry(word: &str) -> (StudyEngine<MemoryStore>, String) {
        let store = MemoryStore::new();
        let entry = Entry::new(word, "test", Utc::now(), &SrsConfig::default());
        let id = entry.id.clone();
        store.insert(entry);
        (StudyEngine::with_rng_seed(store, SrsConfig::default(), 7), id)
    }

    #[test]
    fn remember_resolves_from_store_and_persists() {
        let (mut engine, id) = engine_with_entry("sole");

        let result = engine.remember(&id).unwrap();

        assert_eq!(result.entry.consecutive_success, 1);
        assert!(!result.rescheduled);
        assert!(result.persist_error.is_none());

        let stored = engine.store().fetch(&id).unwrap().unwrap();
        assert_eq!(stored.status, Status::Seen);
        assert_eq!(stored.consecutive_success, 1);
    }

    #[test]
    fn unknown_entry_is_an_error() {
        let (mut engine, _) = engine_with_entry("luna");
        let err = engine.remember("no-such-id").unwrap_err();
        assert!(matches!(err, EngineError::UnknownEntry(_)));
    }

    #[test]
    fn set_status_leaves_scheduling_fields_alone() {
        let (mut engine, id) = engine_with_entry("stella");

        let result = engine.set_status(&id, Status::Excluded).unwrap();

        assert_eq!(result.entry.status, Status::Excluded);
        assert_eq!(result.entry.consecutive_success, 0);
        assert_eq!(result.entry.forget_count, 0);
        assert!((result.entry.review_interval - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn session_copy_wins_over_the_store() {
        let (mut engine, id) = engine_with_entry("mare");

        let mut session_copy = engine.store().fetch(&id).unwrap().unwrap();
        session_copy.consecutive_success = 1;
        engine.start_session_single(session_copy);

        let result = engine.remember(&id).unwrap();
        assert_eq!(
            result.entry.consecutive_success, 2,
            "the live session snapshot should be the one reviewed"
        );
    }
}
