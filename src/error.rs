use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MilleError {
    #[error("plan file not found: {}", path.display())]
    PlanNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in plan file {}: {source}", path.display())]
    MalformedPlan {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("plan file {} is not a Terraform JSON plan (missing format_version, terraform_version, or resource data)", path.display())]
    InvalidPlan { path: PathBuf },

    #[error(transparent)]
    Provider(#[from] crate::providers::ProviderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
