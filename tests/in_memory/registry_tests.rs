//! Adapter tests for the in-memory agent registry.
//!
//! Tests duplicate detection, missing-record updates, update visibility,
//! and insertion-order listing.

use chrono::{TimeZone, Utc};
use karajan::agent::{
    adapters::memory::InMemoryAgentRegistry,
    domain::{
        Agent, AgentDomainError, AgentId, AgentSpec, AgentStatus, AgentType, Capability, Region,
        TaskDescriptor,
    },
    ports::{AgentFilter, AgentRegistry, AgentRegistryError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> InMemoryAgentRegistry {
    InMemoryAgentRegistry::new()
}

fn agent_of_type(agent_type: &str) -> Result<Agent, AgentDomainError> {
    let spec = AgentSpec {
        task: TaskDescriptor::new("classify support tickets")?,
        agent_type: AgentType::new(agent_type)?,
        capabilities: [Capability::new("chat")?].into_iter().collect(),
        region: Region::new("ZA")?,
    };
    Ok(Agent::new(spec, &DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storing_the_same_agent_twice_is_rejected(registry: InMemoryAgentRegistry) {
    let agent = agent_of_type("support").expect("agent construction should succeed");

    registry
        .store(&agent)
        .await
        .expect("first store should succeed");
    let result = registry.store(&agent).await;

    assert!(matches!(
        result,
        Err(AgentRegistryError::DuplicateAgent(id)) if id == agent.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_an_unknown_agent_reports_not_found(registry: InMemoryAgentRegistry) {
    let missing = AgentId::new();

    let result = registry.update(missing, Box::new(|_: &mut Agent| {})).await;

    assert!(matches!(
        result,
        Err(AgentRegistryError::AgentNotFound(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updates_are_visible_to_later_reads(registry: InMemoryAgentRegistry) {
    let agent = agent_of_type("support").expect("agent construction should succeed");
    registry.store(&agent).await.expect("store should succeed");
    let started_at = Utc
        .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");

    let updated = registry
        .update(
            agent.id(),
            Box::new(move |record: &mut Agent| record.begin_task(started_at)),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.status(), AgentStatus::Processing);
    assert_eq!(updated.last_activity(), Some(started_at));
    let fetched = registry
        .find_by_id(agent.id())
        .await
        .expect("lookup should succeed")
        .expect("agent should exist");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_filters_without_disturbing_insertion_order(registry: InMemoryAgentRegistry) {
    let first = agent_of_type("support").expect("agent construction should succeed");
    let second = agent_of_type("analytics").expect("agent construction should succeed");
    let third = agent_of_type("support").expect("agent construction should succeed");
    for agent in [&first, &second, &third] {
        registry.store(agent).await.expect("store should succeed");
    }

    let everything = registry
        .list(&AgentFilter::new())
        .await
        .expect("listing should succeed");
    let ids: Vec<_> = everything.iter().map(Agent::id).collect();
    assert_eq!(ids, vec![first.id(), second.id(), third.id()]);

    let support = AgentType::new("support").expect("valid agent type");
    let filtered = registry
        .list(&AgentFilter::new().with_agent_type(support))
        .await
        .expect("listing should succeed");
    let filtered_ids: Vec<_> = filtered.iter().map(Agent::id).collect();
    assert_eq!(filtered_ids, vec![first.id(), third.id()]);
}
