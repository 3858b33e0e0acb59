//! Validation gate sequencing security and compliance checks.

use crate::agent::{
    domain::{Agent, AgentSpec, RiskScore, TaskPayload},
    ports::{ComplianceError, ComplianceOracle, SecurityError, SecurityOracle},
};
use std::sync::Arc;
use thiserror::Error;

/// Risk score above which a task payload is rejected as fraudulent.
///
/// The threshold is strict: a score exactly at the boundary passes.
pub const FRAUD_RISK_THRESHOLD: f64 = 0.8;

/// Errors returned while vetting an agent creation.
#[derive(Debug, Error)]
pub enum CreationValidationError {
    /// The security oracle rejected the spec or failed.
    #[error(transparent)]
    Security(#[from] SecurityError),
    /// The compliance oracle denied the region/capability set or failed.
    #[error(transparent)]
    Compliance(#[from] ComplianceError),
}

/// Error returned when a task payload's risk score exceeds the threshold.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("task risk score {score} exceeds fraud threshold {threshold}")]
pub struct FraudError {
    /// Risk score the anti-fraud check produced.
    pub score: RiskScore,
    /// Threshold the score was compared against.
    pub threshold: f64,
}

/// Errors returned while vetting a task execution.
#[derive(Debug, Error)]
pub enum TaskValidationError {
    /// The payload's risk score exceeded the fraud threshold.
    #[error(transparent)]
    Fraud(#[from] FraudError),
    /// The security oracle failed to produce a score.
    #[error(transparent)]
    Security(#[from] SecurityError),
}

/// Pre-flight validation for agent creation and task execution.
///
/// Checks run in a contractual order: security first, compliance only when
/// security passed. The gate mutates nothing.
pub struct ValidationGate<S, C>
where
    S: SecurityOracle,
    C: ComplianceOracle,
{
    security: Arc<S>,
    compliance: Arc<C>,
}

// Manual impl: every field is shared behind an `Arc`, so cloning must not
// require the type parameters themselves to be `Clone`.
impl<S, C> Clone for ValidationGate<S, C>
where
    S: SecurityOracle,
    C: ComplianceOracle,
{
    fn clone(&self) -> Self {
        Self {
            security: Arc::clone(&self.security),
            compliance: Arc::clone(&self.compliance),
        }
    }
}

impl<S, C> ValidationGate<S, C>
where
    S: SecurityOracle,
    C: ComplianceOracle,
{
    /// Creates a validation gate over the two oracles.
    #[must_use]
    pub const fn new(security: Arc<S>, compliance: Arc<C>) -> Self {
        Self {
            security,
            compliance,
        }
    }

    /// Vets a creation spec: security, then compliance, failing fast.
    ///
    /// # Errors
    ///
    /// Returns [`CreationValidationError::Security`] when the security
    /// oracle rejects the spec (the compliance oracle is never consulted),
    /// or [`CreationValidationError::Compliance`] when the compliance
    /// oracle denies the region/capability combination.
    pub async fn validate_creation(&self, spec: &AgentSpec) -> Result<(), CreationValidationError> {
        self.security.validate_agent_creation(spec).await?;
        self.compliance
            .validate_for_region(&spec.region, &spec.capabilities)
            .await?;
        Ok(())
    }

    /// Vets a task payload against the target agent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::Fraud`] when the risk score strictly
    /// exceeds [`FRAUD_RISK_THRESHOLD`], or [`TaskValidationError::Security`]
    /// when the oracle cannot produce a score.
    pub async fn validate_task(
        &self,
        payload: &TaskPayload,
        agent: &Agent,
    ) -> Result<RiskScore, TaskValidationError> {
        let score = self.security.anti_fraud_check(payload, agent).await?;
        if score.exceeds(FRAUD_RISK_THRESHOLD) {
            return Err(FraudError {
                score,
                threshold: FRAUD_RISK_THRESHOLD,
            }
            .into());
        }
        Ok(score)
    }
}
