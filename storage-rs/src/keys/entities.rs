// keys/entities.rs - Entity views over orchestration-engine data
//
// The engine owns the full flow/execution/task-run/trigger models;
// these structs carry only the fields key derivation extracts. Each
// adapter method delegates to the one canonical formula in the parent
// module, so every entity shape yields identical strings.

use serde::{Deserialize, Serialize};

use super::{execution_prefix, flow_output_prefix, task_run_output_prefix, trigger_output_prefix};

/// Flow identity fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: String,
    pub namespace: String,
}

/// Execution identity fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub id: String,
    pub namespace: String,
    pub flow_id: String,
}

/// Task-run identity fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRun {
    pub id: String,
    pub namespace: String,
    pub flow_id: String,
    pub execution_id: String,
    pub task_id: String,
}

/// Trigger-context identity fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriggerContext {
    pub namespace: String,
    pub flow_id: String,
    pub trigger_id: String,
}

impl Flow {
    /// Output root for this flow
    pub fn output_prefix(&self) -> String {
        flow_output_prefix(&self.namespace, &self.id)
    }

    /// Prefix for an execution of this flow
    pub fn execution_prefix(&self, execution: &Execution) -> String {
        execution_prefix(&self.namespace, &self.id, &execution.id)
    }
}

impl Execution {
    /// Prefix under which this execution's artifacts live
    pub fn execution_prefix(&self) -> String {
        execution_prefix(&self.namespace, &self.flow_id, &self.id)
    }
}

impl TaskRun {
    /// Prefix of the execution this task run belongs to
    pub fn execution_prefix(&self) -> String {
        execution_prefix(&self.namespace, &self.flow_id, &self.execution_id)
    }

    /// Output root for this task run
    pub fn output_prefix(&self) -> String {
        task_run_output_prefix(
            &self.namespace,
            &self.flow_id,
            &self.execution_id,
            &self.task_id,
            &self.id,
        )
    }
}

impl TriggerContext {
    /// Output root for a trigger evaluation in the given execution
    pub fn output_prefix(&self, execution_id: &str) -> String {
        trigger_output_prefix(&self.namespace, &self.flow_id, execution_id, &self.trigger_id)
    }
}
