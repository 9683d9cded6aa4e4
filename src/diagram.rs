mod format;
mod node;

use std::collections::BTreeMap;

use serde_json::Value;

pub use format::{OutputFormat, to_dot, to_mermaid};
pub use node::{DiagramNode, NodeCategory, NodeKind};

use crate::providers::{CloudProvider, ProviderError};
use crate::resource::{DependencyMap, Resource, extract_resources, get_resource_dependencies};

/// Nodes keyed by `type.name`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    pub title: String,
    pub nodes: BTreeMap<String, DiagramNode>,
}

impl Diagram {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Maps plan resources onto provider-specific diagram nodes.
#[derive(Debug, Clone)]
pub struct DiagramRenderer {
    provider: CloudProvider,
}

impl DiagramRenderer {
    pub fn new(provider: &str) -> Result<Self, ProviderError> {
        let provider = provider.parse()?;
        Ok(Self { provider })
    }

    pub fn provider(&self) -> CloudProvider {
        self.provider
    }

    pub fn resource_types(&self) -> Vec<&'static str> {
        self.provider.resource_types()
    }

    /// Builds one node per resource whose type the active provider maps.
    ///
    /// Unmapped types are skipped. Two resources sharing `type.name` collapse
    /// into one node, the later one winning.
    pub fn create_nodes(&self, resources: &[Resource]) -> BTreeMap<String, DiagramNode> {
        let mut nodes = BTreeMap::new();

        for resource in resources {
            match self.provider.node_kind(&resource.resource_type) {
                Some(kind) => {
                    nodes.insert(resource.node_key(), DiagramNode::new(kind, &resource.name));
                }
                None => tracing::debug!(
                    provider = %self.provider,
                    resource_type = %resource.resource_type,
                    "no diagram mapping for resource type, skipping"
                ),
            }
        }

        nodes
    }

    /// Resolving `${...}` references into node-to-node edges is not built yet.
    pub fn connect_nodes(
        &self,
        _diagram: &Diagram,
        _dependencies: &DependencyMap,
    ) -> Result<Vec<Edge>, ProviderError> {
        Err(ProviderError::NotImplemented(
            "dependency edge rendering".to_string(),
        ))
    }

    pub fn build_diagram(&self, plan: &Value, output_name: &str) -> Diagram {
        let resources = extract_resources(plan);
        let mut diagram = Diagram::new(format!("{} Infrastructure", title_case(output_name)));
        diagram.nodes = self.create_nodes(&resources);

        let dependencies = get_resource_dependencies(plan);
        match self.connect_nodes(&diagram, &dependencies) {
            Ok(edges) => tracing::debug!(count = edges.len(), "edges connected"),
            Err(e) => tracing::debug!(error = %e, "diagram rendered without edges"),
        }

        tracing::info!(
            provider = %self.provider,
            resources = resources.len(),
            nodes = diagram.nodes.len(),
            "diagram built"
        );

        diagram
    }

    pub fn render_diagram(&self, plan: &Value, output_name: &str, format: OutputFormat) -> String {
        format.render(&self.build_diagram(plan, output_name))
    }
}

/// Uppercases the first letter of each alphabetic run and lowercases the rest.
fn title_case(s: &str) -> String {
    let mut previous_alphabetic = false;
    s.chars()
        .map(|c| {
            let mapped = if !c.is_alphabetic() {
                c.to_string()
            } else if previous_alphabetic {
                c.to_lowercase().to_string()
            } else {
                c.to_uppercase().to_string()
            };
            previous_alphabetic = c.is_alphabetic();
            mapped
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource(resource_type: &str, name: &str) -> Resource {
        Resource {
            resource_type: resource_type.to_string(),
            name: name.to_string(),
            address: format!("{}.{}", resource_type, name),
            values: json!({}),
        }
    }

    #[test]
    fn test_new_for_each_supported_provider() {
        for name in ["aws", "azure", "gcp"] {
            let renderer = DiagramRenderer::new(name).unwrap();
            assert_eq!(renderer.provider().as_str(), name);
        }
    }

    #[test]
    fn test_new_accepts_uppercase_provider() {
        let renderer = DiagramRenderer::new("AWS").unwrap();
        assert_eq!(renderer.provider(), CloudProvider::Aws);
        assert_eq!(renderer.provider().to_string(), "aws");
    }

    #[test]
    fn test_new_unsupported_provider() {
        let err = DiagramRenderer::new("oracle").unwrap_err();
        assert!(matches!(err, ProviderError::UnsupportedProvider { .. }));
        assert!(err.to_string().contains("oracle"));
        assert!(err.to_string().contains("aws, azure, gcp"));
    }

    #[test]
    fn test_create_nodes_aws() {
        let renderer = DiagramRenderer::new("aws").unwrap();
        let resources = vec![
            resource("aws_instance", "web"),
            resource("aws_db_instance", "db"),
            resource("aws_vpc", "main"),
            resource("aws_subnet", "private"),
        ];

        let nodes = renderer.create_nodes(&resources);

        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes["aws_instance.web"], DiagramNode::new(NodeKind::Ec2, "web"));
        assert_eq!(nodes["aws_db_instance.db"].kind, NodeKind::Rds);
        assert_eq!(nodes["aws_vpc.main"].kind.category(), NodeCategory::Network);
        assert_eq!(nodes["aws_subnet.private"].label, "private");
    }

    #[test]
    fn test_create_nodes_skips_unmapped_types() {
        let renderer = DiagramRenderer::new("gcp").unwrap();
        let resources = vec![
            resource("google_storage_bucket", "assets"),
            resource("aws_instance", "web"),
            resource("google_compute_instance", "vm"),
        ];

        let nodes = renderer.create_nodes(&resources);

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes["google_compute_instance.vm"].kind, NodeKind::ComputeEngine);
    }

    #[test]
    fn test_create_nodes_last_write_wins() {
        let renderer = DiagramRenderer::new("azure").unwrap();
        let mut first = resource("azurerm_virtual_machine", "vm");
        first.address = "module.a.azurerm_virtual_machine.vm".to_string();
        let mut second = resource("azurerm_virtual_machine", "vm");
        second.address = "module.b.azurerm_virtual_machine.vm".to_string();

        let nodes = renderer.create_nodes(&[first, second]);

        assert_eq!(nodes.len(), 1);
        assert!(nodes.contains_key("azurerm_virtual_machine.vm"));
    }

    #[test]
    fn test_create_nodes_empty() {
        let renderer = DiagramRenderer::new("aws").unwrap();
        assert!(renderer.create_nodes(&[]).is_empty());
    }

    #[test]
    fn test_connect_nodes_is_not_implemented() {
        let renderer = DiagramRenderer::new("aws").unwrap();
        let result = renderer.connect_nodes(&Diagram::default(), &DependencyMap::new());
        assert!(matches!(result, Err(ProviderError::NotImplemented(_))));
    }

    #[test]
    fn test_build_diagram_from_plan() {
        let plan = json!({
            "format_version": "1.0",
            "terraform_version": "1.5.0",
            "resource_changes": [
                {
                    "address": "aws_instance.web",
                    "type": "aws_instance",
                    "name": "web",
                    "change": {"actions": ["create"], "after": {"ami": "${var.ami}"}}
                },
                {
                    "address": "aws_vpc.main",
                    "type": "aws_vpc",
                    "name": "main",
                    "change": {"actions": ["update"], "after": {}}
                }
            ]
        });

        let diagram = DiagramRenderer::new("aws")
            .unwrap()
            .build_diagram(&plan, "infrastructure");

        assert_eq!(diagram.title, "Infrastructure Infrastructure");
        assert_eq!(diagram.nodes.len(), 1);
        assert_eq!(diagram.nodes["aws_instance.web"].kind.category(), NodeCategory::Compute);
    }

    #[test]
    fn test_resource_types_follow_provider() {
        let renderer = DiagramRenderer::new("azure").unwrap();
        assert_eq!(
            renderer.resource_types(),
            vec!["azurerm_virtual_machine", "azurerm_sql_database"]
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("infrastructure"), "Infrastructure");
        assert_eq!(title_case("my_prod-stack"), "My_Prod-Stack");
        assert_eq!(title_case("WEB tier2a"), "Web Tier2A");
    }
}
