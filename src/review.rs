//! Review outcome handling.
//!
//! A small state machine over the consecutive-success counter (0..=4).
//! Remembered outcomes count up and hand off to the scheduler at the
//! graduation threshold; forgotten outcomes count down (a graduated entry
//! drops by two) and accumulate forget history for the next reschedule.
//! Every outcome marks the entry as seen. Both functions return an updated
//! snapshot; persisting it is the caller's job.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::SrsConfig;
use crate::srs::scheduler::reschedule;
use crate::types::{Entry, Status};

/// Applies a remembered outcome. Returns the updated entry and whether the
/// scheduler ran (the counter reached the graduation threshold).
pub fn apply_remember(
    entry: &Entry,
    now: DateTime<Utc>,
    config: &SrsConfig,
    rng: &mut impl Rng,
) -> (Entry, bool) {
    let mut updated = entry.clone();
    updated.consecutive_success += 1;

    let graduated = updated.consecutive_success >= config.graduation_threshold;
    if graduated {
        // Overwrites the counter to 4 (confident) or 0 (weak).
        updated = reschedule(&updated, now, config, rng);
    }
    updated.status = Status::Seen;

    (updated, graduated)
}

/// Applies a forgotten outcome. Never runs the scheduler.
pub fn apply_forget(entry: &Entry) -> Entry {
    let mut updated = entry.clone();
    if updated.consecutive_success == 4 {
        updated.consecutive_success -= 2;
    } else if updated.consecutive_success != 0 {
        updated.consecutive_success -= 1;
    }
    updated.forget_count += 1;
    updated.status = Status::Seen;
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry_with_counter(consecutive_success: i32) -> Entry {
        let mut entry = Entry::new("ponte", "bridge", Utc::now(), &SrsConfig::default());
        entry.consecutive_success = consecutive_success;
        entry
    }

    #[test]
    fn remember_increments_below_threshold() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = SrsConfig::default();
        let now = Utc::now();

        let (updated, graduated) = apply_remember(&entry_with_counter(0), now, &config, &mut rng);
        assert_eq!(updated.consecutive_success, 1);
        assert!(!graduated);
        assert_eq!(updated.status, Status::Seen);

        let (updated, graduated) = apply_remember(&entry_with_counter(1), now, &config, &mut rng);
        assert_eq!(updated.consecutive_success, 2);
        assert!(!graduated);
    }

    #[test]
    fn third_remember_triggers_the_scheduler() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = SrsConfig::default();
        let entry = entry_with_counter(2);

        let (updated, graduated) = apply_remember(&entry, Utc::now(), &config, &mut rng);

        assert!(graduated);
        // A forget-free entry takes the confident branch.
        assert_eq!(updated.consecutive_success, 4);
        assert!(updated.review_interval > entry.review_interval);
    }

    #[test]
    fn weak_graduation_resets_the_counter() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = SrsConfig::default();
        let mut entry = entry_with_counter(2);
        entry.forget_count = 4;

        let (updated, graduated) = apply_remember(&entry, Utc::now(), &config, &mut rng);

        assert!(graduated);
        assert_eq!(updated.consecutive_success, 0);
    }

    #[test]
    fn forget_steps_down_and_floors_at_zero() {
        assert_eq!(apply_forget(&entry_with_counter(4)).consecutive_success, 2);
        assert_eq!(apply_forget(&entry_with_counter(2)).consecutive_success, 1);
        assert_eq!(apply_forget(&entry_with_counter(1)).consecutive_success, 0);
        assert_eq!(apply_forget(&entry_with_counter(0)).consecutive_success, 0);
    }

    #[test]
    fn forget_accumulates_history_and_marks_seen() {
        let entry = entry_with_counter(0);
        let updated = apply_forget(&entry);
        assert_eq!(updated.forget_count, entry.forget_count + 1);
        assert_eq!(updated.status, Status::Seen);
        // Dates are untouched until the scheduler runs.
        assert_eq!(updated.next_due_at, entry.next_due_at);
        assert_eq!(updated.last_reviewed_at, entry.last_reviewed_at);
    }
}
