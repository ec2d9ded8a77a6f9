use serde::{Deserialize, Serialize};

/// Tuning values for the scheduling core.
///
/// Defaults carry the contract values new entries are created with; the
/// formula shape itself (ease-delta coefficients, weak damping) lives as
/// constants next to the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrsConfig {
    pub initial_difficulty: f64,
    pub initial_interval_days: f64,
    /// Interval an entry is reset to whenever a non-positive interval is
    /// encountered, before or after a reschedule.
    pub fallback_interval_days: f64,
    /// Consecutive remembered outcomes that trigger a reschedule.
    pub graduation_threshold: i32,
    /// Performance score at or below which a review counts as weak.
    pub weak_performance_cutoff: f64,
    pub jitter_low: f64,
    pub jitter_high: f64,
}

impl Default for SrsConfig {
    fn default() -> Self {
        Self {
            initial_difficulty: 0.3,
            initial_interval_days: 0.5,
            fallback_interval_days: 0.5,
            graduation_threshold: 3,
            weak_performance_cutoff: 0.6,
            jitter_low: 0.95,
            jitter_high: 1.06,
        }
    }
}

impl SrsConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("SRS_INITIAL_DIFFICULTY") {
            config.initial_difficulty = val.parse().unwrap_or(config.initial_difficulty);
        }
        if let Ok(val) = std::env::var("SRS_INITIAL_INTERVAL_DAYS") {
            config.initial_interval_days = val.parse().unwrap_or(config.initial_interval_days);
        }
        if let Ok(val) = std::env::var("SRS_GRADUATION_THRESHOLD") {
            config.graduation_threshold = val.parse().unwrap_or(config.graduation_threshold);
        }

        config
    }
}
