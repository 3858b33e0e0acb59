//! Shared test helpers for in-memory orchestration integration tests.

use karajan::agent::{
    adapters::{
        FixedTaskScorer,
        memory::{
            InMemoryAgentRegistry, InMemoryComplianceOracle, InMemoryInferenceEngine,
            InMemorySecurityOracle,
        },
    },
    domain::TaskPayload,
    services::{
        AgentLifecycleService, CreateAgentRequest, PerformanceAggregator, TaskExecutor,
        ValidationGate,
    },
};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::json;
use std::sync::Arc;

/// Lifecycle service wired over the in-memory adapters.
pub type TestLifecycle = AgentLifecycleService<
    InMemoryAgentRegistry,
    InMemorySecurityOracle,
    InMemoryComplianceOracle,
    InMemoryInferenceEngine,
    DefaultClock,
>;

/// Task executor wired over the in-memory adapters.
pub type TestExecutor = TaskExecutor<
    InMemoryAgentRegistry,
    InMemorySecurityOracle,
    InMemoryComplianceOracle,
    InMemoryInferenceEngine,
    FixedTaskScorer,
    DefaultClock,
>;

/// Fully wired orchestration stack sharing one set of adapters.
pub struct Harness {
    /// Security oracle handle for scripting rejections and risk scores.
    pub security: Arc<InMemorySecurityOracle>,
    /// Compliance oracle handle for scripting denials.
    pub compliance: Arc<InMemoryComplianceOracle>,
    /// Inference engine handle for scripting failures and reading back calls.
    pub engine: Arc<InMemoryInferenceEngine>,
    /// Provisioning and discovery service under test.
    pub lifecycle: TestLifecycle,
    /// Task execution service under test.
    pub executor: TestExecutor,
}

/// Provides a fresh orchestration stack for each test.
#[fixture]
pub fn harness() -> Harness {
    let registry = Arc::new(InMemoryAgentRegistry::new());
    let security = Arc::new(InMemorySecurityOracle::new());
    let compliance = Arc::new(InMemoryComplianceOracle::new());
    let engine = Arc::new(InMemoryInferenceEngine::new());
    let clock = Arc::new(DefaultClock);
    let gate = ValidationGate::new(Arc::clone(&security), Arc::clone(&compliance));
    let aggregator = PerformanceAggregator::new(
        Arc::clone(&registry),
        Arc::new(FixedTaskScorer::default()),
        Arc::clone(&clock),
    );
    let lifecycle = AgentLifecycleService::new(
        Arc::clone(&registry),
        gate.clone(),
        Arc::clone(&security),
        Arc::clone(&engine),
        Arc::clone(&clock),
    );
    let executor = TaskExecutor::new(registry, gate, Arc::clone(&engine), aggregator, clock);
    Harness {
        security,
        compliance,
        engine,
        lifecycle,
        executor,
    }
}

/// Builds a creation request for a support-classification agent.
pub fn classify_request() -> CreateAgentRequest {
    CreateAgentRequest::new("classify support tickets", "support", "ZA")
        .with_capabilities(["chat".to_owned()])
}

/// Builds a creation request for an analytics agent in another region.
pub fn analytics_request() -> CreateAgentRequest {
    CreateAgentRequest::new("summarise weekly metrics", "analytics", "EU-WEST")
        .with_capabilities(["reporting".to_owned()])
}

/// Builds the payload submitted in execution tests.
pub fn sample_payload() -> TaskPayload {
    TaskPayload::new(json!({"query": "categorise this ticket"}))
}
