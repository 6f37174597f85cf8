//! Outcome estimator statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected by an [`OutcomeEstimator`](super::OutcomeEstimator).
///
/// Counters accumulate across `estimate` calls until reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorStats {
    /// Positions whose outcome was computed (memo misses).
    pub positions_evaluated: u64,

    /// Lookups answered from the memo.
    pub cache_hits: u64,

    /// Deepest explicit stack reached.
    pub max_stack_depth: usize,
}

impl EstimatorStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of lookups served from the memo.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.positions_evaluated + self.cache_hits;
        if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        }
    }
}
