mod aws;
mod azure;
mod gcp;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::diagram::NodeKind;

pub const SUPPORTED_PROVIDERS: &[&str] = &["aws", "azure", "gcp"];

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unsupported provider: {provider}. Supported: {supported}")]
    UnsupportedProvider { provider: String, supported: String },
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

impl ProviderError {
    pub fn unsupported(provider: &str) -> Self {
        ProviderError::UnsupportedProvider {
            provider: provider.to_string(),
            supported: SUPPORTED_PROVIDERS.join(", "),
        }
    }
}

/// Provider identifiers accepted by [`crate::DiagramRenderer::new`].
pub fn supported_providers() -> Vec<&'static str> {
    SUPPORTED_PROVIDERS.to_vec()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 3] = [
        CloudProvider::Aws,
        CloudProvider::Azure,
        CloudProvider::Gcp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Azure => "azure",
            CloudProvider::Gcp => "gcp",
        }
    }

    /// Resource type -> node kind table. Coverage is curated, not exhaustive.
    pub fn resource_mapping(&self) -> &'static [(&'static str, NodeKind)] {
        match self {
            CloudProvider::Aws => aws::RESOURCE_MAPPING,
            CloudProvider::Azure => azure::RESOURCE_MAPPING,
            CloudProvider::Gcp => gcp::RESOURCE_MAPPING,
        }
    }

    pub fn node_kind(&self, resource_type: &str) -> Option<NodeKind> {
        self.resource_mapping()
            .iter()
            .find(|(mapped, _)| *mapped == resource_type)
            .map(|(_, kind)| *kind)
    }

    pub fn resource_types(&self) -> Vec<&'static str> {
        self.resource_mapping().iter().map(|(ty, _)| *ty).collect()
    }
}

impl FromStr for CloudProvider {
    type Err = ProviderError;

    // NOTE: Case-insensitive but whitespace is not trimmed, "aws " is rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase();
        CloudProvider::ALL
            .into_iter()
            .find(|provider| provider.as_str() == normalized)
            .ok_or_else(|| ProviderError::unsupported(s))
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
