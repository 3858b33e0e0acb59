//! When steps for agent orchestration BDD scenarios.

use super::world::{OrchestrationWorld, build_request, run_async, sample_payload};
use rstest_bdd_macros::when;

#[when("the agent is provisioned")]
fn provision_agent(world: &mut OrchestrationWorld) -> Result<(), eyre::Report> {
    let task = world
        .pending_task
        .clone()
        .ok_or_else(|| eyre::eyre!("no pending task in scenario world"))?;
    let region = world
        .pending_region
        .clone()
        .ok_or_else(|| eyre::eyre!("no pending region in scenario world"))?;
    let request = build_request(&task, &region, &world.pending_capabilities);
    world.last_create_result = Some(run_async(world.lifecycle.create_agent(request)));
    Ok(())
}

#[when("a task payload is submitted to the agent")]
fn submit_task_payload(world: &mut OrchestrationWorld) -> Result<(), eyre::Report> {
    let agent_id = world
        .created_agent
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no provisioned agent in scenario world"))?
        .id();
    world.last_execute_result =
        Some(run_async(world.executor.execute_task(agent_id, &sample_payload())));
    Ok(())
}
