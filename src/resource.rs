use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

const CREATE_ONLY: &[&str] = &["create"];
const INTERPOLATION_PREFIX: &str = "${";

/// A resource the plan will create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub address: String,
    pub values: Value,
}

impl Resource {
    /// Key used for diagram nodes, `type.name`.
    pub fn node_key(&self) -> String {
        format!("{}.{}", self.resource_type, self.name)
    }
}

/// Resource address -> raw `${...}` references from its planned attributes.
pub type DependencyMap = BTreeMap<String, Vec<String>>;

fn resource_changes(plan: &Value) -> &[Value] {
    plan.get("resource_changes")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn string_field(change: &Value, field: &str) -> String {
    change
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

// NOTE: Replacements (["create", "delete"]) are deliberately excluded
fn is_create_only(change: &Value) -> bool {
    change
        .pointer("/change/actions")
        .and_then(Value::as_array)
        .is_some_and(|actions| {
            actions.len() == CREATE_ONLY.len()
                && actions
                    .iter()
                    .zip(CREATE_ONLY)
                    .all(|(action, expected)| action.as_str() == Some(*expected))
        })
}

pub fn extract_resources(plan: &Value) -> Vec<Resource> {
    let resources: Vec<Resource> = resource_changes(plan)
        .iter()
        .filter(|change| is_create_only(change))
        .map(|change| Resource {
            resource_type: string_field(change, "type"),
            name: string_field(change, "name"),
            address: string_field(change, "address"),
            values: match change.pointer("/change/after") {
                None | Some(Value::Null) => Value::Object(Default::default()),
                Some(after) => after.clone(),
            },
        })
        .collect();

    tracing::debug!(count = resources.len(), "resources to create extracted");
    resources
}

/// Collects top-level interpolation references for every resource change.
///
/// Nested attribute values are not inspected and references are kept as raw
/// strings, unresolved and not deduplicated.
pub fn get_resource_dependencies(plan: &Value) -> DependencyMap {
    let mut dependencies = DependencyMap::new();

    for change in resource_changes(plan) {
        let references = change
            .pointer("/change/after")
            .and_then(Value::as_object)
            .map(|after| {
                after
                    .values()
                    .filter_map(Value::as_str)
                    .filter(|value| value.starts_with(INTERPOLATION_PREFIX))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        dependencies.insert(string_field(change, "address"), references);
    }

    dependencies
}
