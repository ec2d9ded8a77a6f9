//! Review performance evaluation.
//!
//! Maps the number of forgotten outcomes since the last reschedule onto a
//! normalized success score: 0 forgets is a perfect 1.0, each forget costs
//! 0.2, and five or more floor the score at 0.0.

const FORGET_STEP: f64 = 0.2;
const FORGET_CEILING: i32 = 5;

/// Success score in [0, 1] for a forget count. Total over all integers;
/// negative counts are treated as zero.
pub fn performance_score(forget_count: i32) -> f64 {
    if forget_count >= FORGET_CEILING {
        return 0.0;
    }
    if forget_count <= 0 {
        return 1.0;
    }
    (1.0 - FORGET_STEP * forget_count as f64).max(0.0)
}
