use crate::diagram::NodeKind;

pub const RESOURCE_MAPPING: &[(&str, NodeKind)] = &[
    ("aws_instance", NodeKind::Ec2),
    ("aws_db_instance", NodeKind::Rds),
    ("aws_vpc", NodeKind::Vpc),
    ("aws_subnet", NodeKind::Subnet),
];
