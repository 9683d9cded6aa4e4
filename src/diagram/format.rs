use std::fmt;
use std::str::FromStr;

use super::node::NodeCategory;
use super::Diagram;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Dot,
    Mermaid,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Mermaid => "mmd",
        }
    }

    pub fn render(&self, diagram: &Diagram) -> String {
        match self {
            OutputFormat::Dot => to_dot(diagram),
            OutputFormat::Mermaid => to_mermaid(diagram),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" | "graphviz" => Ok(OutputFormat::Dot),
            "mermaid" => Ok(OutputFormat::Mermaid),
            other => Err(format!(
                "unknown output format '{}', expected one of: dot, graphviz, mermaid",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Dot => f.write_str("dot"),
            OutputFormat::Mermaid => f.write_str("mermaid"),
        }
    }
}

fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn dot_shape(category: NodeCategory) -> &'static str {
    match category {
        NodeCategory::Compute => "box",
        NodeCategory::Database => "cylinder",
        NodeCategory::Network => "component",
    }
}

pub fn to_dot(diagram: &Diagram) -> String {
    let mut output = String::new();
    output.push_str("digraph infrastructure {\n");
    output.push_str(&format!("    label=\"{}\";\n", dot_escape(&diagram.title)));
    output.push_str("    labelloc=t;\n");
    output.push_str("    rankdir=LR;\n");
    output.push_str("    node [style=rounded];\n\n");

    // Quoted ids keep every node key distinct
    for (key, node) in &diagram.nodes {
        output.push_str(&format!(
            "    \"{}\" [label=\"{}\\n({})\", shape={}];\n",
            dot_escape(key),
            dot_escape(&node.label),
            node.kind.icon(),
            dot_shape(node.kind.category())
        ));
    }

    output.push_str("}\n");
    output
}

pub fn to_mermaid(diagram: &Diagram) -> String {
    let mut output = String::new();
    output.push_str("---\n");
    output.push_str(&format!("title: {}\n", diagram.title));
    output.push_str("---\n");
    output.push_str("graph LR\n");

    for (index, node) in diagram.nodes.values().enumerate() {
        output.push_str(&format!(
            "    n{}[\"{}<br/>{}\"]\n",
            index,
            node.label.replace('"', "#quot;"),
            node.kind.icon()
        ));
    }

    output
}
