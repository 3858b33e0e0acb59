//! Fixed-score task scorer.

use crate::agent::{
    domain::TaskResult,
    ports::{TaskScorer, TaskScores},
};

/// Task scorer reporting the same scores for every result.
///
/// Stands in for a real evaluation pipeline: accuracy and efficiency are
/// configured up front instead of being derived from the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTaskScorer {
    accuracy: f64,
    efficiency: f64,
}

impl FixedTaskScorer {
    /// Accuracy reported by the default scorer.
    pub const DEFAULT_ACCURACY: f64 = 0.95;

    /// Efficiency reported by the default scorer.
    pub const DEFAULT_EFFICIENCY: f64 = 0.88;

    /// Creates a scorer reporting the given accuracy and efficiency.
    #[must_use]
    pub const fn new(accuracy: f64, efficiency: f64) -> Self {
        Self {
            accuracy,
            efficiency,
        }
    }
}

impl Default for FixedTaskScorer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ACCURACY, Self::DEFAULT_EFFICIENCY)
    }
}

impl TaskScorer for FixedTaskScorer {
    fn score(&self, _result: &TaskResult) -> TaskScores {
        TaskScores {
            accuracy: self.accuracy,
            efficiency: self.efficiency,
        }
    }
}
