//! Then steps for agent orchestration BDD scenarios.

use super::world::{OrchestrationWorld, run_async};
use eyre::WrapErr;
use karajan::agent::{
    domain::{Agent, AgentStatus},
    ports::AgentFilter,
    services::{
        AgentLifecycleError, CreationValidationError, ExecuteTaskError, TaskValidationError,
    },
};
use rstest_bdd_macros::then;

fn current_agent(world: &OrchestrationWorld) -> Result<&Agent, eyre::Report> {
    world
        .created_agent
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no provisioned agent in scenario world"))
}

#[then("provisioning succeeds")]
fn provisioning_succeeds(world: &mut OrchestrationWorld) -> Result<(), eyre::Report> {
    let agent = match world.last_create_result.as_ref() {
        Some(Ok(agent)) => agent.clone(),
        Some(Err(err)) => return Err(eyre::eyre!("expected provisioning success, got {err}")),
        None => return Err(eyre::eyre!("missing provisioning result in scenario world")),
    };
    world.created_agent = Some(agent);
    Ok(())
}

#[then("provisioning fails with a compliance denial")]
fn provisioning_fails_with_compliance_denial(
    world: &OrchestrationWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing provisioning result in scenario world"))?;
    if !matches!(
        result,
        Err(AgentLifecycleError::Validation(
            CreationValidationError::Compliance(_)
        ))
    ) {
        return Err(eyre::eyre!("expected compliance denial, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the agent status is "{status}""#)]
fn agent_status_is(world: &OrchestrationWorld, status: String) -> Result<(), eyre::Report> {
    let expected = AgentStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("unknown status in scenario: {err}"))?;
    let agent = current_agent(world)?;
    let stored = run_async(world.lifecycle.get_agent(agent.id()))
        .wrap_err("fetch agent for status check")?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, got {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then(r#"the agent name starts with "{prefix}""#)]
fn agent_name_starts_with(world: &OrchestrationWorld, prefix: String) -> Result<(), eyre::Report> {
    let agent = current_agent(world)?;
    if !agent.name().as_str().starts_with(&prefix) {
        return Err(eyre::eyre!(
            "expected name '{}' to start with '{prefix}'",
            agent.name()
        ));
    }
    Ok(())
}

#[then("listing the registry returns {count:usize} agents")]
fn listing_returns_count(world: &OrchestrationWorld, count: usize) -> Result<(), eyre::Report> {
    let agents = run_async(world.lifecycle.list_agents(&AgentFilter::new()))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if agents.len() != count {
        return Err(eyre::eyre!("expected {count} agents, found {}", agents.len()));
    }
    Ok(())
}

#[then("the task is rejected as fraudulent")]
fn task_rejected_as_fraudulent(world: &OrchestrationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_execute_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing execution result in scenario world"))?;
    if !matches!(
        result,
        Err(ExecuteTaskError::Validation(TaskValidationError::Fraud(_)))
    ) {
        return Err(eyre::eyre!("expected fraud rejection, got {result:?}"));
    }
    Ok(())
}

#[then("no task reaches the inference engine")]
fn no_task_reaches_the_engine(world: &OrchestrationWorld) -> Result<(), eyre::Report> {
    let executions = world.engine.executed_tasks();
    if !executions.is_empty() {
        return Err(eyre::eyre!(
            "expected no executions, found {}",
            executions.len()
        ));
    }
    Ok(())
}

#[then("the task succeeds")]
fn task_succeeds(world: &OrchestrationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_execute_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing execution result in scenario world"))?;
    if let Err(err) = result {
        return Err(eyre::eyre!("expected task success, got {err}"));
    }
    Ok(())
}

#[then("the agent has exactly one completed task")]
fn agent_completed_one_task(world: &OrchestrationWorld) -> Result<(), eyre::Report> {
    let agent = current_agent(world)?;
    let stored = run_async(world.lifecycle.get_agent(agent.id()))
        .wrap_err("fetch agent for performance check")?;
    let completed = stored.performance().tasks_completed();
    if completed != 1 {
        return Err(eyre::eyre!("expected one completed task, found {completed}"));
    }
    Ok(())
}
