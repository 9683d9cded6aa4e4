//! Mille - Terraform/OpenTofu plan visualization
//!
//! A library for turning JSON plan output into diagrams of the cloud resources a plan will create.

pub mod diagram;
pub mod output;
pub mod providers;
pub mod resource;
pub mod terraform;

mod error;

pub use diagram::{
    Diagram, DiagramNode, DiagramRenderer, Edge, NodeCategory, NodeKind, OutputFormat,
};
pub use error::MilleError;
pub use providers::{CloudProvider, ProviderError, supported_providers};
pub use resource::{DependencyMap, Resource, extract_resources, get_resource_dependencies};
pub use terraform::{
    PlanSummary, load_plan, load_validated_plan, summarize_plan, validate_plan_format,
};
