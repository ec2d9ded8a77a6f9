//! Spaced-repetition scoring and scheduling.
//!
//! `performance` turns forget history into a normalized success score;
//! `scheduler` turns that score plus the entry's current state into a new
//! difficulty, interval, and due date.

pub mod performance;
pub mod scheduler;

pub use performance::performance_score;
pub use scheduler::reschedule;
