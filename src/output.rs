//! Terminal renderings of extracted plan data.

use tabled::settings::Style;
use tabled::{Table, Tabled};
use termtree::Tree;

use crate::providers::CloudProvider;
use crate::resource::{DependencyMap, Resource};
use crate::terraform::PlanSummary;

#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "ADDRESS")]
    address: String,
    #[tabled(rename = "TYPE")]
    resource_type: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "NODE")]
    node: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "ACTION")]
    action: &'static str,
    #[tabled(rename = "COUNT")]
    count: usize,
}

/// Table of resources to be created. The NODE column shows the diagram icon
/// for the given provider, or `-` when the type is unmapped.
pub fn resource_table(resources: &[Resource], provider: Option<CloudProvider>) -> String {
    let rows = resources.iter().map(|resource| ResourceRow {
        address: resource.address.clone(),
        resource_type: resource.resource_type.clone(),
        name: resource.name.clone(),
        node: provider
            .and_then(|p| p.node_kind(&resource.resource_type))
            .map(|kind| kind.icon().to_string())
            .unwrap_or_else(|| "-".to_string()),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn dependency_tree(root: &str, dependencies: &DependencyMap) -> Tree<String> {
    let leaves = dependencies.iter().map(|(address, references)| {
        Tree::new(address.clone()).with_leaves(references.iter().cloned())
    });
    Tree::new(root.to_string()).with_leaves(leaves)
}

pub fn summary_table(summary: &PlanSummary) -> String {
    let rows = [
        SummaryRow {
            action: "create",
            count: summary.create,
        },
        SummaryRow {
            action: "update",
            count: summary.update,
        },
        SummaryRow {
            action: "replace",
            count: summary.replace,
        },
        SummaryRow {
            action: "delete",
            count: summary.delete,
        },
        SummaryRow {
            action: "read",
            count: summary.read,
        },
        SummaryRow {
            action: "no-op",
            count: summary.no_op,
        },
    ];

    Table::new(rows).with(Style::rounded()).to_string()
}
