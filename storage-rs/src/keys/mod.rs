//! Key derivation for the storage address space
//!
//! Pure, stateless functions computing canonical prefixes and logical
//! URIs from domain entity fields; no filesystem access. Each formula
//! exists exactly once, taking primitive fields; the entity view
//! structs in [`entities`] provide thin extraction adapters so every
//! entity shape yields identical strings.

pub mod entities;

pub use entities::{Execution, Flow, TaskRun, TriggerContext};

/// Prefix under which an execution's artifacts live.
///
/// # Examples
///
/// ```
/// use flowstore::keys::execution_prefix;
///
/// assert_eq!(
///     execution_prefix("namespace", "flow", "execution"),
///     "/namespace/flow/executions/execution"
/// );
/// ```
pub fn execution_prefix(namespace: &str, flow_id: &str, execution_id: &str) -> String {
    format!("/{}/{}/executions/{}", namespace, flow_id, execution_id)
}

/// Prefix under which a task's cached values live.
///
/// With a non-null `value`, a deterministic value-derived segment is
/// appended so distinct values address distinct entries.
///
/// # Examples
///
/// ```
/// use flowstore::keys::cache_prefix;
///
/// assert_eq!(
///     cache_prefix("namespace", "flow", "task", None),
///     "namespace/flow/task/cache"
/// );
/// assert!(cache_prefix("namespace", "flow", "task", Some("value"))
///     .starts_with("namespace/flow/task/cache/"));
/// ```
pub fn cache_prefix(namespace: &str, flow_id: &str, task_id: &str, value: Option<&str>) -> String {
    let prefix = format!("{}/{}/{}/cache", namespace, flow_id, task_id);
    match value {
        Some(value) => format!("{}/{}", prefix, value_segment(value)),
        None => prefix,
    }
}

/// Prefix under which a named piece of persisted state lives.
///
/// Same value-suffix rule as [`cache_prefix`].
pub fn state_prefix(namespace: &str, flow_id: &str, name: &str, value: Option<&str>) -> String {
    let prefix = format!("{}/{}/states/{}", namespace, flow_id, name);
    match value {
        Some(value) => format!("{}/{}", prefix, value_segment(value)),
        None => prefix,
    }
}

/// Output root for a flow, as an empty-authority URI.
///
/// The triple slash is the empty-authority convention and is preserved
/// bit-for-bit in every output prefix.
///
/// # Examples
///
/// ```
/// use flowstore::keys::flow_output_prefix;
///
/// assert_eq!(flow_output_prefix("namespace", "flow"), "///namespace/flow");
/// ```
pub fn flow_output_prefix(namespace: &str, flow_id: &str) -> String {
    format!("///{}/{}", namespace, flow_id)
}

/// Output root for one task run within an execution
pub fn task_run_output_prefix(
    namespace: &str,
    flow_id: &str,
    execution_id: &str,
    task_id: &str,
    task_run_id: &str,
) -> String {
    format!(
        "///{}/{}/executions/{}/tasks/{}/{}",
        namespace, flow_id, execution_id, task_id, task_run_id
    )
}

/// Output root for a trigger evaluation within an execution
pub fn trigger_output_prefix(
    namespace: &str,
    flow_id: &str,
    execution_id: &str,
    trigger_id: &str,
) -> String {
    format!(
        "///{}/{}/executions/{}/trigger/{}",
        namespace, flow_id, execution_id, trigger_id
    )
}

/// Stable value-derived path segment: crc32 of the value, hex-encoded.
/// Distinct values collide only if their checksums collide.
fn value_segment(value: &str) -> String {
    hex::encode(crc32fast::hash(value.as_bytes()).to_be_bytes())
}
