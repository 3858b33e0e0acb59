//! Task scoring port.

use crate::agent::domain::TaskResult;

/// Raw accuracy and efficiency produced by a scorer.
///
/// Values are unconstrained here; the performance aggregator saturates them
/// into the unit interval before they reach an agent record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct TaskScores {
    /// Raw accuracy estimate.
    pub accuracy: f64,
    /// Raw efficiency estimate.
    pub efficiency: f64,
}

/// Deterministic scoring hook applied to successful task results.
pub trait TaskScorer: Send + Sync {
    /// Scores a task result.
    fn score(&self, result: &TaskResult) -> TaskScores;
}
