//! Difficulty and interval rescheduling.
//!
//! Runs when an entry's consecutive-success counter reaches the graduation
//! threshold. Takes the entry's current state plus a single clock reading
//! and an injected RNG, and returns the updated entry:
//!
//! - ease delta `(1/17) * (8 - 9p)` added onto the raw difficulty,
//! - elapsed days recomputed from the calendar only when `now` is more
//!   than one day past the prior due date, otherwise the current interval
//!   substitutes for elapsed days,
//! - confident reviews (p > cutoff) scale the interval up by a weighted,
//!   jittered overdue factor and mark the entry graduated (counter 4),
//! - weak reviews shrink the interval by `1 / (1 + 3e')` and reset the
//!   counter to 0,
//! - the due date always lands at least one day out.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::config::SrsConfig;
use crate::srs::performance::performance_score;
use crate::types::Entry;

const EASE_SCALE: f64 = 1.0 / 17.0;
const EASE_BASE: f64 = 8.0;
const EASE_SLOPE: f64 = 9.0;
const WEIGHT_BASE: f64 = 3.0;
const WEIGHT_SLOPE: f64 = 1.7;
const WEAK_DAMPING: f64 = 3.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Recomputes difficulty, interval, and due date from the entry's forget
/// history. Pure except for the RNG draw; the caller persists the result.
pub fn reschedule(
    entry: &Entry,
    now: DateTime<Utc>,
    config: &SrsConfig,
    rng: &mut impl Rng,
) -> Entry {
    let mut updated = entry.clone();

    // Self-correct a non-positive interval before using it as a divisor.
    let interval = if entry.review_interval <= 0.0 {
        config.fallback_interval_days
    } else {
        entry.review_interval
    };

    let performance = performance_score(entry.forget_count);
    let ease_delta = EASE_SCALE * (EASE_BASE - EASE_SLOPE * performance);

    let prior_due = entry.next_due_at;
    let days_since_review = if now - Duration::days(1) > prior_due {
        (now.date_naive() - prior_due.date_naive()).num_days() as f64
    } else {
        // Not long enough past due to trust the calendar; substitute the
        // current interval so percent-overdue lands at its neutral 1.0.
        interval
    };

    let multiplier = if performance > config.weak_performance_cutoff {
        let percent_overdue = (days_since_review / interval).clamp(1.0, 2.0);
        updated.difficulty = (entry.difficulty + percent_overdue + ease_delta).clamp(0.0, 1.0);
        let weight = WEIGHT_BASE - WEIGHT_SLOPE * updated.difficulty;
        let jitter = rng.random_range(config.jitter_low..config.jitter_high);
        updated.consecutive_success = 4;
        1.0 + (weight - 1.0) * percent_overdue * jitter
    } else {
        updated.difficulty = (entry.difficulty + 1.0 + ease_delta).clamp(0.0, 1.0);
        updated.consecutive_success = 0;
        1.0 / (1.0 + WEAK_DAMPING * updated.difficulty)
    };

    let mut next_interval = interval * multiplier;
    if next_interval <= 0.0 {
        next_interval = config.fallback_interval_days;
    }

    updated.review_interval = next_interval;
    updated.forget_count = 0;
    updated.last_reviewed_at = now;
    let due_seconds = (next_interval * SECONDS_PER_DAY).max(SECONDS_PER_DAY);
    updated.next_due_at = now + Duration::milliseconds((due_seconds * 1000.0) as i64);

    tracing::debug!(
        entry_id = %updated.id,
        performance,
        interval_days = updated.review_interval,
        difficulty = updated.difficulty,
        "entry rescheduled"
    );

    updated
}
