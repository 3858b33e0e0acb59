//! Inference engine port: model preparation and task execution.

use crate::agent::domain::{Agent, AgentId, TaskPayload, TaskResult};
use async_trait::async_trait;
use thiserror::Error;

/// Model backend contract for provisioned agents.
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Prepares the model backing a freshly created agent.
    ///
    /// Called exactly once per creation, after the record is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ModelInitError`] when preparation fails; the stored record
    /// is left untouched by the engine.
    async fn initialize_agent_model(&self, agent: &Agent) -> Result<(), ModelInitError>;

    /// Executes one task payload against the agent's model.
    ///
    /// # Errors
    ///
    /// Returns [`TaskExecutionError`] when the engine cannot produce a
    /// result.
    async fn execute_task(
        &self,
        agent: &Agent,
        payload: &TaskPayload,
    ) -> Result<TaskResult, TaskExecutionError>;
}

/// Error returned when model preparation fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("model initialization failed for agent {agent_id}: {message}")]
pub struct ModelInitError {
    /// Agent whose model could not be prepared.
    pub agent_id: AgentId,
    /// Engine-supplied failure message.
    pub message: String,
}

impl ModelInitError {
    /// Creates a model initialization error.
    pub fn new(agent_id: AgentId, message: impl Into<String>) -> Self {
        Self {
            agent_id,
            message: message.into(),
        }
    }
}

/// Error returned when a task execution fails inside the engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("task execution failed for agent {agent_id}: {message}")]
pub struct TaskExecutionError {
    /// Agent whose task failed.
    pub agent_id: AgentId,
    /// Engine-supplied failure message.
    pub message: String,
}

impl TaskExecutionError {
    /// Creates a task execution error.
    pub fn new(agent_id: AgentId, message: impl Into<String>) -> Self {
        Self {
            agent_id,
            message: message.into(),
        }
    }
}
