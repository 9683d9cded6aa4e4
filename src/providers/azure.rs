use crate::diagram::NodeKind;

pub const RESOURCE_MAPPING: &[(&str, NodeKind)] = &[
    ("azurerm_virtual_machine", NodeKind::VirtualMachines),
    ("azurerm_sql_database", NodeKind::SqlDatabases),
];
