use crate::diagram::NodeKind;

pub const RESOURCE_MAPPING: &[(&str, NodeKind)] = &[
    ("google_compute_instance", NodeKind::ComputeEngine),
    ("google_sql_database_instance", NodeKind::Sql),
];
