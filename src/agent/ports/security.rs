//! Security oracle port: creation vetting, anti-fraud, and event recording.

use crate::agent::domain::{Agent, AgentSpec, RiskScore, TaskPayload};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Structured event recorded through the security oracle.
///
/// Events are the orchestrator's audit channel; recording one can never
/// fail a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityEvent {
    kind: String,
    payload: serde_json::Value,
}

impl SecurityEvent {
    /// Creates an event with an arbitrary kind and payload.
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Creates the event recorded after an agent is successfully created.
    #[must_use]
    pub fn agent_created(agent: &Agent) -> Self {
        Self::new(
            "agent_created",
            serde_json::json!({
                "agent_id": agent.id(),
                "capabilities": agent.capabilities(),
            }),
        )
    }

    /// Returns the event kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the structured event payload.
    #[must_use]
    pub const fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}

/// Security vetting contract for agent creation and task execution.
#[async_trait]
pub trait SecurityOracle: Send + Sync {
    /// Vets a creation spec before any record is stored.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityError::Rejected`] when the spec fails vetting, or
    /// [`SecurityError::Oracle`] when the oracle itself fails.
    async fn validate_agent_creation(&self, spec: &AgentSpec) -> Result<(), SecurityError>;

    /// Scores a task payload for fraud risk against the target agent.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityError::Oracle`] when the oracle cannot produce a
    /// score.
    async fn anti_fraud_check(
        &self,
        payload: &TaskPayload,
        agent: &Agent,
    ) -> Result<RiskScore, SecurityError>;

    /// Records a structured security event.
    ///
    /// Fire-and-forget by contract: implementations swallow their own
    /// failures.
    async fn record_event(&self, event: SecurityEvent);
}

/// Errors returned by security oracle implementations.
#[derive(Debug, Clone, Error)]
pub enum SecurityError {
    /// The oracle rejected the request.
    #[error("security validation rejected the request: {0}")]
    Rejected(String),

    /// The oracle itself failed.
    #[error("security oracle failure: {0}")]
    Oracle(Arc<dyn std::error::Error + Send + Sync>),
}

impl SecurityError {
    /// Creates a rejection with the given reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Wraps an oracle infrastructure error.
    pub fn oracle(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Oracle(Arc::new(err))
    }
}
