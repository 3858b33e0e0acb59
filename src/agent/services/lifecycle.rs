//! Service layer for agent provisioning and discovery.
//!
//! Provides [`AgentLifecycleService`] which coordinates creation vetting,
//! record storage, model preparation, and agent lookup.

use crate::agent::{
    domain::{Agent, AgentDomainError, AgentId, AgentSpec, AgentType, Capability, Region, TaskDescriptor},
    ports::{
        AgentFilter, AgentRegistry, AgentRegistryError, ComplianceOracle, InferenceEngine,
        ModelInitError, SecurityEvent, SecurityOracle,
    },
    services::gate::{CreationValidationError, ValidationGate},
};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for provisioning a new agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAgentRequest {
    task: String,
    agent_type: String,
    capabilities: Vec<String>,
    region: String,
}

impl CreateAgentRequest {
    /// Creates a request with the required agent fields.
    #[must_use]
    pub fn new(
        task: impl Into<String>,
        agent_type: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            agent_type: agent_type.into(),
            capabilities: Vec::new(),
            region: region.into(),
        }
    }

    /// Sets the declared capability tags.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: impl IntoIterator<Item = String>) -> Self {
        self.capabilities = capabilities.into_iter().collect();
        self
    }
}

/// Service-level errors for agent lifecycle operations.
#[derive(Debug, Error)]
pub enum AgentLifecycleError {
    /// Domain validation of the raw request failed.
    #[error(transparent)]
    Domain(#[from] AgentDomainError),
    /// The validation gate rejected the spec.
    #[error(transparent)]
    Validation(#[from] CreationValidationError),
    /// Registry operation failed.
    #[error(transparent)]
    Registry(#[from] AgentRegistryError),
    /// Model preparation failed after the record was stored.
    #[error(transparent)]
    ModelInit(#[from] ModelInitError),
}

/// Result type for agent lifecycle operations.
pub type AgentLifecycleResult<T> = Result<T, AgentLifecycleError>;

/// Agent provisioning and discovery orchestration service.
#[derive(Clone)]
pub struct AgentLifecycleService<R, S, C, I, K>
where
    R: AgentRegistry,
    S: SecurityOracle,
    C: ComplianceOracle,
    I: InferenceEngine,
    K: Clock + Send + Sync,
{
    registry: Arc<R>,
    gate: ValidationGate<S, C>,
    security: Arc<S>,
    engine: Arc<I>,
    clock: Arc<K>,
}

impl<R, S, C, I, K> AgentLifecycleService<R, S, C, I, K>
where
    R: AgentRegistry,
    S: SecurityOracle,
    C: ComplianceOracle,
    I: InferenceEngine,
    K: Clock + Send + Sync,
{
    /// Creates a new lifecycle service.
    ///
    /// The security oracle appears twice: inside the gate for vetting, and
    /// directly for event recording.
    #[must_use]
    pub const fn new(
        registry: Arc<R>,
        gate: ValidationGate<S, C>,
        security: Arc<S>,
        engine: Arc<I>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            registry,
            gate,
            security,
            engine,
            clock,
        }
    }

    /// Provisions a new agent.
    ///
    /// The raw request is validated into a spec, vetted by the gate, stored,
    /// and handed to the engine for model preparation; an `agent_created`
    /// event is recorded last. Validation failures leave no trace in the
    /// registry. A preparation failure is surfaced while the stored record
    /// remains, still in its initializing status.
    ///
    /// # Errors
    ///
    /// Returns [`AgentLifecycleError`] when request validation fails, the
    /// gate rejects the spec, the registry rejects the record, or model
    /// preparation fails.
    pub async fn create_agent(&self, request: CreateAgentRequest) -> AgentLifecycleResult<Agent> {
        let CreateAgentRequest {
            task,
            agent_type,
            capabilities,
            region,
        } = request;

        let task_descriptor = TaskDescriptor::new(task)?;
        let type_descriptor = AgentType::new(agent_type)?;
        let capability_set = capabilities
            .into_iter()
            .map(Capability::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let agent_region = Region::new(region)?;

        let spec = AgentSpec {
            task: task_descriptor,
            agent_type: type_descriptor,
            capabilities: capability_set,
            region: agent_region,
        };
        self.gate.validate_creation(&spec).await?;

        let agent = Agent::new(spec, &*self.clock);
        self.registry.store(&agent).await?;
        self.engine.initialize_agent_model(&agent).await?;
        self.security
            .record_event(SecurityEvent::agent_created(&agent))
            .await;
        Ok(agent)
    }

    /// Fetches an agent record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::AgentNotFound`] (wrapped) when no
    /// agent has the given ID.
    pub async fn get_agent(&self, id: AgentId) -> AgentLifecycleResult<Agent> {
        self.find_by_id_or_error(id).await
    }

    /// Returns a snapshot of agent records matching the filter, in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AgentLifecycleError::Registry`] when the registry lookup
    /// fails.
    pub async fn list_agents(&self, filter: &AgentFilter) -> AgentLifecycleResult<Vec<Agent>> {
        Ok(self.registry.list(filter).await?)
    }

    async fn find_by_id_or_error(&self, id: AgentId) -> AgentLifecycleResult<Agent> {
        self.registry
            .find_by_id(id)
            .await?
            .ok_or_else(|| AgentRegistryError::AgentNotFound(id).into())
    }
}
