//! Terraform/OpenTofu JSON plan loading.
//!
//! Reads the output of `terraform show -json <planfile>` into an untyped
//! `serde_json::Value` tree. Extraction lives in [`crate::resource`].

use std::path::Path;

use serde_json::Value;

use crate::error::MilleError;

const REQUIRED_FIELDS: &[&str] = &["format_version", "terraform_version"];
const RESOURCE_FIELDS: &[&str] = &["planned_values", "resource_changes"];

pub fn load_plan(path: impl AsRef<Path>) -> Result<Value, MilleError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading plan file");

    // Bytes, so invalid UTF-8 surfaces as a JSON error rather than a read error
    let contents = std::fs::read(path).map_err(|source| MilleError::PlanNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&contents).map_err(|source| MilleError::MalformedPlan {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a plan and rejects documents that fail [`validate_plan_format`].
pub fn load_validated_plan(path: impl AsRef<Path>) -> Result<Value, MilleError> {
    let path = path.as_ref();
    let plan = load_plan(path)?;

    if !validate_plan_format(&plan) {
        return Err(MilleError::InvalidPlan {
            path: path.to_path_buf(),
        });
    }

    Ok(plan)
}

/// Returns `true` when the document has the minimal shape of a JSON plan.
///
/// Absence of required keys is a negative result, never an error.
pub fn validate_plan_format(plan: &Value) -> bool {
    let Some(fields) = plan.as_object() else {
        return false;
    };

    REQUIRED_FIELDS.iter().all(|field| fields.contains_key(*field))
        && RESOURCE_FIELDS.iter().any(|field| fields.contains_key(*field))
}

/// Counts of resource changes per action class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSummary {
    pub create: usize,
    pub update: usize,
    pub delete: usize,
    pub replace: usize,
    pub read: usize,
    pub no_op: usize,
}

impl PlanSummary {
    pub fn total(&self) -> usize {
        self.create + self.update + self.delete + self.replace + self.read + self.no_op
    }

    pub fn has_changes(&self) -> bool {
        self.create + self.update + self.delete + self.replace > 0
    }

    fn record(&mut self, actions: &[&str]) {
        match actions {
            ["create"] => self.create += 1,
            ["update"] => self.update += 1,
            ["delete"] => self.delete += 1,
            ["read"] => self.read += 1,
            ["create", "delete"] | ["delete", "create"] => self.replace += 1,
            // "no-op", empty and unrecognized action lists
            _ => self.no_op += 1,
        }
    }
}

pub fn summarize_plan(plan: &Value) -> PlanSummary {
    let mut summary = PlanSummary::default();

    let Some(changes) = plan.get("resource_changes").and_then(Value::as_array) else {
        return summary;
    };

    for change in changes {
        let actions: Vec<&str> = change
            .pointer("/change/actions")
            .and_then(Value::as_array)
            .map(|actions| actions.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        summary.record(&actions);
    }

    summary
}
