//! Task execution orchestration with per-agent serialization.

use crate::agent::{
    domain::{Agent, AgentId, TaskPayload, TaskResult},
    ports::{
        AgentRegistry, AgentRegistryError, ComplianceOracle, InferenceEngine, SecurityOracle,
        TaskExecutionError, TaskScorer,
    },
    services::{
        gate::{TaskValidationError, ValidationGate},
        performance::PerformanceAggregator,
    },
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;

/// Service-level errors for task execution.
#[derive(Debug, Error)]
pub enum ExecuteTaskError {
    /// Registry operation failed or the agent does not exist.
    #[error(transparent)]
    Registry(#[from] AgentRegistryError),
    /// The validation gate rejected the payload.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// The engine failed; the agent record carries the post-mortem.
    #[error(transparent)]
    Execution(#[from] TaskExecutionError),
}

/// Result type for task execution operations.
pub type ExecuteTaskResult<T> = Result<T, ExecuteTaskError>;

/// Per-agent execution slots.
///
/// Each agent owns one asynchronous mutex; holding it serializes that
/// agent's executions while leaving other agents fully parallel. The table
/// lock is synchronous and never held across an await.
#[derive(Default)]
struct ExecutionSlots {
    table: Mutex<HashMap<AgentId, Arc<AsyncMutex<()>>>>,
}

impl ExecutionSlots {
    fn acquire(&self, id: AgentId) -> Arc<AsyncMutex<()>> {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(table.entry(id).or_default())
    }
}

/// Task execution orchestration service.
///
/// Runs one payload against one agent: lookup, gate, slot acquisition,
/// status transitions, engine call, and performance aggregation.
pub struct TaskExecutor<R, S, C, I, P, K>
where
    R: AgentRegistry,
    S: SecurityOracle,
    C: ComplianceOracle,
    I: InferenceEngine,
    P: TaskScorer,
    K: Clock + Send + Sync,
{
    registry: Arc<R>,
    gate: ValidationGate<S, C>,
    engine: Arc<I>,
    aggregator: PerformanceAggregator<R, P, K>,
    clock: Arc<K>,
    slots: Arc<ExecutionSlots>,
}

// Manual impl: every field is shared behind an `Arc`, so cloning must not
// require the type parameters themselves to be `Clone`.
impl<R, S, C, I, P, K> Clone for TaskExecutor<R, S, C, I, P, K>
where
    R: AgentRegistry,
    S: SecurityOracle,
    C: ComplianceOracle,
    I: InferenceEngine,
    P: TaskScorer,
    K: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            gate: self.gate.clone(),
            engine: Arc::clone(&self.engine),
            aggregator: self.aggregator.clone(),
            clock: Arc::clone(&self.clock),
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<R, S, C, I, P, K> TaskExecutor<R, S, C, I, P, K>
where
    R: AgentRegistry,
    S: SecurityOracle,
    C: ComplianceOracle,
    I: InferenceEngine,
    P: TaskScorer,
    K: Clock + Send + Sync,
{
    /// Creates a new task executor.
    #[must_use]
    pub fn new(
        registry: Arc<R>,
        gate: ValidationGate<S, C>,
        engine: Arc<I>,
        aggregator: PerformanceAggregator<R, P, K>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            registry,
            gate,
            engine,
            aggregator,
            clock,
            slots: Arc::new(ExecutionSlots::default()),
        }
    }

    /// Executes one task payload against the agent.
    ///
    /// Lookup and gate checks run before the agent's execution slot is
    /// taken, so a rejected payload never touches the stored record. Under
    /// the slot the record moves to processing, the engine runs, and the
    /// outcome is written back: on success the performance record is
    /// updated first and the result stored; on failure the post-mortem is
    /// stored and the engine error propagated.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteTaskError::Registry`] when the agent does not
    /// exist, [`ExecuteTaskError::Validation`] when the gate rejects the
    /// payload, or [`ExecuteTaskError::Execution`] when the engine fails.
    pub async fn execute_task(
        &self,
        agent_id: AgentId,
        payload: &TaskPayload,
    ) -> ExecuteTaskResult<TaskResult> {
        let target = self.find_by_id_or_error(agent_id).await?;
        self.gate.validate_task(payload, &target).await?;

        let slot = self.slots.acquire(agent_id);
        let _guard = slot.lock().await;

        let started_at = self.clock.utc();
        let processing = self
            .registry
            .update(
                agent_id,
                Box::new(move |record: &mut Agent| record.begin_task(started_at)),
            )
            .await?;

        match self.engine.execute_task(&processing, payload).await {
            Ok(result) => {
                self.aggregator.record(agent_id, &result).await?;
                let stored_result = result.clone();
                self.registry
                    .update(
                        agent_id,
                        Box::new(move |record: &mut Agent| record.complete_task(stored_result)),
                    )
                    .await?;
                Ok(result)
            }
            Err(engine_error) => {
                let message = engine_error.message.clone();
                self.registry
                    .update(
                        agent_id,
                        Box::new(move |record: &mut Agent| record.fail_task(message)),
                    )
                    .await?;
                Err(ExecuteTaskError::Execution(engine_error))
            }
        }
    }

    async fn find_by_id_or_error(&self, id: AgentId) -> ExecuteTaskResult<Agent> {
        self.registry
            .find_by_id(id)
            .await?
            .ok_or_else(|| AgentRegistryError::AgentNotFound(id).into())
    }
}
