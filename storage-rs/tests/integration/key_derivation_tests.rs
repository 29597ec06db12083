//! Integration tests for key derivation
//!
//! Verifies the canonical prefix formulas and that every entity shape
//! (flow, execution, task run, trigger context) derives the same
//! strings through its adapter as the primitive-field functions do.

use flowstore::keys::{
    cache_prefix, execution_prefix, flow_output_prefix, state_prefix, task_run_output_prefix,
    trigger_output_prefix, Execution, Flow, TaskRun, TriggerContext,
};

fn sample_execution() -> Execution {
    Execution {
        id: "execution".to_string(),
        namespace: "namespace".to_string(),
        flow_id: "flow".to_string(),
    }
}

fn sample_task_run() -> TaskRun {
    TaskRun {
        id: "taskrun".to_string(),
        namespace: "namespace".to_string(),
        flow_id: "flow".to_string(),
        execution_id: "execution".to_string(),
        task_id: "taskid".to_string(),
    }
}

#[test]
fn test_execution_prefix_from_every_shape() {
    let expected = "/namespace/flow/executions/execution";
    let flow = Flow {
        id: "flow".to_string(),
        namespace: "namespace".to_string(),
    };

    assert_eq!(execution_prefix("namespace", "flow", "execution"), expected);
    assert_eq!(flow.execution_prefix(&sample_execution()), expected);
    assert_eq!(sample_execution().execution_prefix(), expected);
    assert_eq!(sample_task_run().execution_prefix(), expected);
}

#[test]
fn test_cache_prefix() {
    let prefix = cache_prefix("namespace", "flow", "task", None);
    assert_eq!(prefix, "namespace/flow/task/cache");

    let prefix = cache_prefix("namespace", "flow", "task", Some("value"));
    assert!(prefix.starts_with("namespace/flow/task/cache/"));
}

#[test]
fn test_state_prefix() {
    let prefix = state_prefix("namespace", "flow", "name", None);
    assert_eq!(prefix, "namespace/flow/states/name");

    let prefix = state_prefix("namespace", "flow", "name", Some("value"));
    assert!(prefix.starts_with("namespace/flow/states/name/"));
}

#[test]
fn test_value_suffix_is_stable_across_calls() {
    assert_eq!(
        cache_prefix("namespace", "flow", "task", Some("value")),
        cache_prefix("namespace", "flow", "task", Some("value"))
    );
    assert_ne!(
        state_prefix("namespace", "flow", "name", Some("a")),
        state_prefix("namespace", "flow", "name", Some("b"))
    );
}

#[test]
fn test_output_prefix_for_flow() {
    let flow = Flow {
        id: "flow".to_string(),
        namespace: "namespace".to_string(),
    };

    assert_eq!(flow.output_prefix(), "///namespace/flow");
    assert_eq!(flow_output_prefix("namespace", "flow"), flow.output_prefix());
}

#[test]
fn test_output_prefix_for_task_run() {
    let expected = "///namespace/flow/executions/execution/tasks/taskid/taskrun";

    assert_eq!(sample_task_run().output_prefix(), expected);
    assert_eq!(
        task_run_output_prefix("namespace", "flow", "execution", "taskid", "taskrun"),
        expected
    );
}

#[test]
fn test_output_prefix_for_trigger() {
    let context = TriggerContext {
        namespace: "namespace".to_string(),
        flow_id: "flow".to_string(),
        trigger_id: "trigger".to_string(),
    };
    let expected = "///namespace/flow/executions/execution/trigger/trigger";

    assert_eq!(context.output_prefix("execution"), expected);
    assert_eq!(
        trigger_output_prefix("namespace", "flow", "execution", "trigger"),
        expected
    );
}
