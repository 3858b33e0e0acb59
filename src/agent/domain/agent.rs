//! Agent aggregate root and creation specification.

use super::{
    AgentId, AgentName, AgentStatus, AgentType, Capability, PerformanceRecord, Region, Score,
    TaskDescriptor, TaskResult,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Validated specification from which an agent is created.
///
/// A spec carries everything the caller decides; the identifier, derived
/// name, status, and performance record are assigned at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSpec {
    /// Standing task the agent executes.
    pub task: TaskDescriptor,
    /// Free-form agent type descriptor.
    pub agent_type: AgentType,
    /// Declared capability tags.
    pub capabilities: BTreeSet<Capability>,
    /// Jurisdiction the agent operates in.
    pub region: Region,
}

/// Agent aggregate root.
///
/// All mutation happens through the registry port, so no collaborator ever
/// holds a mutable copy that can diverge from the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    name: AgentName,
    task: TaskDescriptor,
    agent_type: AgentType,
    capabilities: BTreeSet<Capability>,
    region: Region,
    status: AgentStatus,
    performance: PerformanceRecord,
    created_at: DateTime<Utc>,
    last_activity: Option<DateTime<Utc>>,
    last_result: Option<TaskResult>,
    last_error: Option<String>,
}

impl Agent {
    /// Creates a new agent from a validated spec.
    ///
    /// The agent starts in [`AgentStatus::Initializing`] with a zeroed
    /// performance record and a name derived from its fresh identifier.
    #[must_use]
    pub fn new(spec: AgentSpec, clock: &impl Clock) -> Self {
        let id = AgentId::new();
        Self {
            id,
            name: AgentName::derived_from(id),
            task: spec.task,
            agent_type: spec.agent_type,
            capabilities: spec.capabilities,
            region: spec.region,
            status: AgentStatus::Initializing,
            performance: PerformanceRecord::new(),
            created_at: clock.utc(),
            last_activity: None,
            last_result: None,
            last_error: None,
        }
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Returns the derived display name.
    #[must_use]
    pub const fn name(&self) -> &AgentName {
        &self.name
    }

    /// Returns the standing task descriptor.
    #[must_use]
    pub const fn task(&self) -> &TaskDescriptor {
        &self.task
    }

    /// Returns the agent type descriptor.
    #[must_use]
    pub const fn agent_type(&self) -> &AgentType {
        &self.agent_type
    }

    /// Returns the declared capability tags.
    #[must_use]
    pub const fn capabilities(&self) -> &BTreeSet<Capability> {
        &self.capabilities
    }

    /// Returns the jurisdiction the agent operates in.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AgentStatus {
        self.status
    }

    /// Returns the accumulated performance record.
    #[must_use]
    pub const fn performance(&self) -> PerformanceRecord {
        self.performance
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the most recent execution start, if any.
    #[must_use]
    pub const fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.last_activity
    }

    /// Returns the result of the most recent successful execution, if any.
    #[must_use]
    pub const fn last_result(&self) -> Option<&TaskResult> {
        self.last_result.as_ref()
    }

    /// Returns the message of the most recent failed execution, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Marks the start of a task execution.
    ///
    /// Sets the status to [`AgentStatus::Processing`] and stamps the
    /// activity timestamp.
    pub fn begin_task(&mut self, started_at: DateTime<Utc>) {
        self.status = AgentStatus::Processing;
        self.last_activity = Some(started_at);
    }

    /// Marks a task execution as successful.
    ///
    /// Sets the status to [`AgentStatus::Completed`] and replaces the last
    /// result. A post-mortem from an earlier failure is left in place.
    pub fn complete_task(&mut self, result: TaskResult) {
        self.status = AgentStatus::Completed;
        self.last_result = Some(result);
    }

    /// Marks a task execution as failed.
    ///
    /// Sets the status to [`AgentStatus::Error`] and replaces the
    /// post-mortem message.
    pub fn fail_task(&mut self, message: impl Into<String>) {
        self.status = AgentStatus::Error;
        self.last_error = Some(message.into());
    }

    /// Folds one successful task completion into the performance record.
    pub fn record_task_success(
        &mut self,
        completed_at: DateTime<Utc>,
        accuracy: Score,
        efficiency: Score,
    ) {
        self.performance
            .record_success(completed_at, accuracy, efficiency);
    }
}
