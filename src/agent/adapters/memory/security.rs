//! Configurable in-memory security oracle.

use crate::agent::{
    domain::{Agent, AgentSpec, RiskScore, TaskPayload},
    ports::{SecurityError, SecurityEvent, SecurityOracle},
};
use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

/// Configurable in-memory security oracle.
///
/// Approves everything by default. Tests flip individual checks into
/// rejection or failure and inspect the recorded events afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemorySecurityOracle {
    state: Arc<RwLock<SecurityState>>,
}

#[derive(Debug, Default)]
struct SecurityState {
    creation_rejection: Option<String>,
    anti_fraud_failure: Option<String>,
    risk_score: f64,
    events: Vec<SecurityEvent>,
}

impl InMemorySecurityOracle {
    /// Creates an oracle that approves everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes creation vetting reject every spec with the given reason.
    pub fn reject_creations(&self, reason: impl Into<String>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.creation_rejection = Some(reason.into());
    }

    /// Makes the anti-fraud check fail with the given message.
    pub fn fail_anti_fraud(&self, message: impl Into<String>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.anti_fraud_failure = Some(message.into());
    }

    /// Sets the risk score reported for every payload.
    pub fn set_risk_score(&self, score: f64) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.risk_score = score;
    }

    /// Returns the events recorded so far, oldest first.
    #[must_use]
    pub fn recorded_events(&self) -> Vec<SecurityEvent> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.events.clone()
    }
}

#[async_trait]
impl SecurityOracle for InMemorySecurityOracle {
    async fn validate_agent_creation(&self, _spec: &AgentSpec) -> Result<(), SecurityError> {
        let state = self
            .state
            .read()
            .map_err(|err| SecurityError::oracle(std::io::Error::other(err.to_string())))?;
        if let Some(reason) = &state.creation_rejection {
            return Err(SecurityError::rejected(reason.clone()));
        }
        Ok(())
    }

    async fn anti_fraud_check(
        &self,
        _payload: &TaskPayload,
        _agent: &Agent,
    ) -> Result<RiskScore, SecurityError> {
        let state = self
            .state
            .read()
            .map_err(|err| SecurityError::oracle(std::io::Error::other(err.to_string())))?;
        if let Some(message) = &state.anti_fraud_failure {
            return Err(SecurityError::oracle(std::io::Error::other(
                message.clone(),
            )));
        }
        Ok(RiskScore::clamped(state.risk_score))
    }

    async fn record_event(&self, event: SecurityEvent) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.events.push(event);
    }
}
