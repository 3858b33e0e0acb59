//! Domain model for agent lifecycle and task execution.
//!
//! The agent domain models provisioned agent records, their lifecycle
//! status, capability and region tags, and accumulated task performance.
//! All infrastructure concerns are kept outside the domain boundary.

mod agent;
mod capability;
mod descriptors;
mod error;
mod ids;
mod payload;
mod performance;
mod region;
mod score;
mod status;

pub use agent::{Agent, AgentSpec};
pub use capability::Capability;
pub use descriptors::{AgentType, TaskDescriptor};
pub use error::{AgentDomainError, ParseAgentStatusError};
pub use ids::{AGENT_NAME_PREFIX, AgentId, AgentName};
pub use payload::{TaskPayload, TaskResult};
pub use performance::PerformanceRecord;
pub use region::Region;
pub use score::{RiskScore, Score};
pub use status::AgentStatus;
