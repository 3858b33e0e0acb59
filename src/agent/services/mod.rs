//! Application services for agent orchestration.
//!
//! Services coordinate the domain model with the oracle, engine, and
//! registry ports: the validation gate sequences security and compliance
//! checks, the lifecycle service provisions and reads agent records, the
//! task executor runs payloads with per-agent serialization, and the
//! performance aggregator folds successful executions into agent records.

mod executor;
mod gate;
mod lifecycle;
mod performance;

pub use executor::{ExecuteTaskError, ExecuteTaskResult, TaskExecutor};
pub use gate::{
    CreationValidationError, FRAUD_RISK_THRESHOLD, FraudError, TaskValidationError, ValidationGate,
};
pub use lifecycle::{
    AgentLifecycleError, AgentLifecycleResult, AgentLifecycleService, CreateAgentRequest,
};
pub use performance::PerformanceAggregator;
