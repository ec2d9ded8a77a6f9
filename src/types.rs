use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SrsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Status {
    #[default]
    Unseen,
    Seen,
    Excluded,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unseen => "unseen",
            Self::Seen => "seen",
            Self::Excluded => "excluded",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "seen" => Self::Seen,
            "excluded" => Self::Excluded,
            _ => Self::Unseen,
        }
    }
}

/// A vocabulary entry with its scheduling state.
///
/// The store layer owns the record; the scheduling core takes snapshots,
/// returns updated values, and never mutates shared state in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub word: String,
    pub definition: String,
    pub status: Status,
    /// Clamped to [0, 1] by every reschedule.
    pub difficulty: f64,
    /// Days between reviews; always positive.
    pub review_interval: f64,
    /// 0..=4. 4 marks an entry graduated for the current cycle.
    pub consecutive_success: i32,
    /// Forgotten outcomes since the last reschedule.
    pub forget_count: i32,
    pub last_reviewed_at: DateTime<Utc>,
    pub next_due_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(word: &str, definition: &str, now: DateTime<Utc>, config: &SrsConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            word: word.to_string(),
            definition: definition.to_string(),
            status: Status::Unseen,
            difficulty: config.initial_difficulty,
            review_interval: config.initial_interval_days,
            consecutive_success: 0,
            forget_count: 0,
            last_reviewed_at: now,
            next_due_at: now,
        }
    }

    /// Due today or earlier, by calendar day.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_due_at.date_naive() <= now.date_naive()
    }
}

/// Status counts over an arbitrary set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyMetrics {
    pub seen: usize,
    pub unseen: usize,
    pub excluded: usize,
}

impl StudyMetrics {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut metrics = Self::default();
        for entry in entries {
            match entry.status {
                Status::Seen => metrics.seen += 1,
                Status::Unseen => metrics.unseen += 1,
                Status::Excluded => metrics.excluded += 1,
            }
        }
        metrics
    }
}
