#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Compute,
    Database,
    Network,
}

/// Diagram icon a resource type is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Ec2,
    Rds,
    Vpc,
    Subnet,
    VirtualMachines,
    SqlDatabases,
    ComputeEngine,
    Sql,
}

impl NodeKind {
    pub fn category(&self) -> NodeCategory {
        match self {
            NodeKind::Ec2 | NodeKind::VirtualMachines | NodeKind::ComputeEngine => {
                NodeCategory::Compute
            }
            NodeKind::Rds | NodeKind::SqlDatabases | NodeKind::Sql => NodeCategory::Database,
            NodeKind::Vpc | NodeKind::Subnet => NodeCategory::Network,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NodeKind::Ec2 => "EC2",
            NodeKind::Rds => "RDS",
            NodeKind::Vpc => "VPC",
            NodeKind::Subnet => "Subnet",
            NodeKind::VirtualMachines => "VirtualMachines",
            NodeKind::SqlDatabases => "SQLDatabases",
            NodeKind::ComputeEngine => "ComputeEngine",
            NodeKind::Sql => "SQL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    pub kind: NodeKind,
    pub label: String,
}

impl DiagramNode {
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}
