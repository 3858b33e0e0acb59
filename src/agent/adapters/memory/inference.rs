//! Scriptable in-memory inference engine.

use crate::agent::{
    domain::{Agent, AgentId, TaskPayload, TaskResult},
    ports::{InferenceEngine, ModelInitError, TaskExecutionError},
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Scriptable in-memory inference engine.
///
/// Succeeds immediately with a fixed result by default. Tests queue
/// one-shot failures, inject artificial execution delay, and read back
/// how many executions overlapped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInferenceEngine {
    state: Arc<Mutex<EngineState>>,
}

#[derive(Debug)]
struct EngineState {
    initialized_agents: Vec<AgentId>,
    executions: Vec<(AgentId, TaskPayload)>,
    init_failures: VecDeque<String>,
    task_failures: VecDeque<String>,
    result: Value,
    task_delay: Option<Duration>,
    active_executions: usize,
    max_concurrent_executions: usize,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            initialized_agents: Vec::new(),
            executions: Vec::new(),
            init_failures: VecDeque::new(),
            task_failures: VecDeque::new(),
            result: json!({"status": "ok"}),
            task_delay: None,
            active_executions: 0,
            max_concurrent_executions: 0,
        }
    }
}

impl InMemoryInferenceEngine {
    /// Creates an engine that succeeds immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, apply: impl FnOnce(&mut EngineState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        apply(&mut state)
    }

    /// Queues a model initialization failure for the next creation.
    pub fn fail_next_init(&self, message: impl Into<String>) {
        let queued = message.into();
        self.with_state(|state| state.init_failures.push_back(queued));
    }

    /// Queues a task execution failure for the next execution.
    pub fn fail_next_task(&self, message: impl Into<String>) {
        let queued = message.into();
        self.with_state(|state| state.task_failures.push_back(queued));
    }

    /// Delays every subsequent task execution by the given duration.
    pub fn set_task_delay(&self, delay: Duration) {
        self.with_state(|state| state.task_delay = Some(delay));
    }

    /// Sets the result value returned by successful executions.
    pub fn set_result(&self, result: Value) {
        self.with_state(|state| state.result = result);
    }

    /// Returns the agents whose models were initialized, oldest first.
    #[must_use]
    pub fn initialized_agents(&self) -> Vec<AgentId> {
        self.with_state(|state| state.initialized_agents.clone())
    }

    /// Returns every execution observed so far, oldest first.
    #[must_use]
    pub fn executed_tasks(&self) -> Vec<(AgentId, TaskPayload)> {
        self.with_state(|state| state.executions.clone())
    }

    /// Returns the highest number of executions that ran at the same time.
    #[must_use]
    pub fn max_concurrent_executions(&self) -> usize {
        self.with_state(|state| state.max_concurrent_executions)
    }
}

#[async_trait]
impl InferenceEngine for InMemoryInferenceEngine {
    async fn initialize_agent_model(&self, agent: &Agent) -> Result<(), ModelInitError> {
        let agent_id = agent.id();
        let failure = self.with_state(|state| {
            let queued = state.init_failures.pop_front();
            if queued.is_none() {
                state.initialized_agents.push(agent_id);
            }
            queued
        });
        if let Some(message) = failure {
            return Err(ModelInitError::new(agent_id, message));
        }
        Ok(())
    }

    async fn execute_task(
        &self,
        agent: &Agent,
        payload: &TaskPayload,
    ) -> Result<TaskResult, TaskExecutionError> {
        let agent_id = agent.id();
        let observed_payload = payload.clone();
        let (failure, result_value, pause) = self.with_state(|state| {
            state.executions.push((agent_id, observed_payload));
            state.active_executions += 1;
            state.max_concurrent_executions = state
                .max_concurrent_executions
                .max(state.active_executions);
            (
                state.task_failures.pop_front(),
                state.result.clone(),
                state.task_delay,
            )
        });

        if let Some(wait) = pause {
            tokio::time::sleep(wait).await;
        }

        self.with_state(|state| state.active_executions -= 1);

        failure.map_or_else(
            || Ok(TaskResult::new(result_value)),
            |message| Err(TaskExecutionError::new(agent_id, message)),
        )
    }
}
