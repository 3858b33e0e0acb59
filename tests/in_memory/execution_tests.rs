//! Task execution journeys through the full in-memory stack.

use crate::in_memory::helpers::{Harness, classify_request, harness, sample_payload};
use karajan::agent::{
    domain::AgentStatus,
    services::{ExecuteTaskError, TaskValidationError},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successful_execution_updates_the_stored_record(harness: Harness) {
    let created = harness
        .lifecycle
        .create_agent(classify_request())
        .await
        .expect("creation should succeed");
    harness.engine.set_result(json!({"category": "billing"}));

    let result = harness
        .executor
        .execute_task(created.id(), &sample_payload())
        .await
        .expect("execution should succeed");

    assert_eq!(result.value(), &json!({"category": "billing"}));
    assert_eq!(
        harness.engine.executed_tasks(),
        vec![(created.id(), sample_payload())]
    );
    let stored = harness
        .lifecycle
        .get_agent(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored.status(), AgentStatus::Completed);
    assert_eq!(stored.last_result(), Some(&result));
    assert_eq!(stored.performance().tasks_completed(), 1);
    assert!(stored.performance().last_success().is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_execution_is_survivable(harness: Harness) {
    let created = harness
        .lifecycle
        .create_agent(classify_request())
        .await
        .expect("creation should succeed");
    harness.engine.fail_next_task("model exploded");

    let failed = harness
        .executor
        .execute_task(created.id(), &sample_payload())
        .await;

    assert!(matches!(failed, Err(ExecuteTaskError::Execution(_))));
    let after_failure = harness
        .lifecycle
        .get_agent(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(after_failure.status(), AgentStatus::Error);
    assert_eq!(after_failure.last_error(), Some("model exploded"));
    assert_eq!(after_failure.performance().tasks_completed(), 0);

    harness
        .executor
        .execute_task(created.id(), &sample_payload())
        .await
        .expect("second execution should succeed");

    let recovered = harness
        .lifecycle
        .get_agent(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(recovered.status(), AgentStatus::Completed);
    assert_eq!(recovered.performance().tasks_completed(), 1);
    assert_eq!(recovered.last_error(), Some("model exploded"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fraudulent_payload_never_reaches_the_engine(harness: Harness) {
    let created = harness
        .lifecycle
        .create_agent(classify_request())
        .await
        .expect("creation should succeed");
    harness.security.set_risk_score(0.95);

    let rejected = harness
        .executor
        .execute_task(created.id(), &sample_payload())
        .await;

    assert!(matches!(
        rejected,
        Err(ExecuteTaskError::Validation(TaskValidationError::Fraud(_)))
    ));
    assert!(harness.engine.executed_tasks().is_empty());
    let stored = harness
        .lifecycle
        .get_agent(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored.status(), AgentStatus::Initializing);
    assert!(stored.last_activity().is_none());
}
