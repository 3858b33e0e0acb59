//! Accumulated per-agent task performance.

use super::Score;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Running performance record for a single agent.
///
/// The record starts zeroed at agent creation and is updated exactly once
/// per successfully completed task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    tasks_completed: u64,
    last_success: Option<DateTime<Utc>>,
    accuracy: Score,
    efficiency: Score,
}

impl PerformanceRecord {
    /// Creates a zeroed performance record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks_completed: 0,
            last_success: None,
            accuracy: Score::ZERO,
            efficiency: Score::ZERO,
        }
    }

    /// Returns the number of successfully completed tasks.
    #[must_use]
    pub const fn tasks_completed(&self) -> u64 {
        self.tasks_completed
    }

    /// Returns the timestamp of the most recent success, if any.
    #[must_use]
    pub const fn last_success(&self) -> Option<DateTime<Utc>> {
        self.last_success
    }

    /// Returns the most recent accuracy score.
    #[must_use]
    pub const fn accuracy(&self) -> Score {
        self.accuracy
    }

    /// Returns the most recent efficiency score.
    #[must_use]
    pub const fn efficiency(&self) -> Score {
        self.efficiency
    }

    /// Records one successful task completion.
    ///
    /// Increments the completion counter by exactly one, stamps the success
    /// timestamp, and replaces both scores. Nothing else is touched.
    pub fn record_success(&mut self, completed_at: DateTime<Utc>, accuracy: Score, efficiency: Score) {
        self.tasks_completed += 1;
        self.last_success = Some(completed_at);
        self.accuracy = accuracy;
        self.efficiency = efficiency;
    }
}

impl Default for PerformanceRecord {
    fn default() -> Self {
        Self::new()
    }
}
