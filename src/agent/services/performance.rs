//! Performance aggregation after successful task executions.

use crate::agent::{
    domain::{Agent, AgentId, Score, TaskResult},
    ports::{AgentRegistry, AgentRegistryResult, TaskScorer},
};
use mockable::Clock;
use std::sync::Arc;

/// Folds task outcomes into per-agent performance records.
///
/// Scoring is delegated to the configured [`TaskScorer`]; whatever it
/// reports is clamped into the unit interval before it reaches a record.
pub struct PerformanceAggregator<R, P, K>
where
    R: AgentRegistry,
    P: TaskScorer,
    K: Clock + Send + Sync,
{
    registry: Arc<R>,
    scorer: Arc<P>,
    clock: Arc<K>,
}

// Manual impl: every field is shared behind an `Arc`, so cloning must not
// require the type parameters themselves to be `Clone`.
impl<R, P, K> Clone for PerformanceAggregator<R, P, K>
where
    R: AgentRegistry,
    P: TaskScorer,
    K: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            scorer: Arc::clone(&self.scorer),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, P, K> PerformanceAggregator<R, P, K>
where
    R: AgentRegistry,
    P: TaskScorer,
    K: Clock + Send + Sync,
{
    /// Creates a new performance aggregator.
    #[must_use]
    pub const fn new(registry: Arc<R>, scorer: Arc<P>, clock: Arc<K>) -> Self {
        Self {
            registry,
            scorer,
            clock,
        }
    }

    /// Records one successful task execution for the agent.
    ///
    /// Increments the completed-task counter, stamps the success time, and
    /// replaces the accuracy and efficiency scores in a single registry
    /// update.
    ///
    /// # Errors
    ///
    /// Returns an error when the agent does not exist or the registry
    /// update fails.
    pub async fn record(&self, agent_id: AgentId, result: &TaskResult) -> AgentRegistryResult<Agent> {
        let scores = self.scorer.score(result);
        let accuracy = Score::clamped(scores.accuracy);
        let efficiency = Score::clamped(scores.efficiency);
        let completed_at = self.clock.utc();
        self.registry
            .update(
                agent_id,
                Box::new(move |record: &mut Agent| {
                    record.record_task_success(completed_at, accuracy, efficiency);
                }),
            )
            .await
    }
}
