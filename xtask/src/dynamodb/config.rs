//! Table configuration types (Functional Core - pure data).

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

impl KeyAttribute {
    /// A string-typed key attribute.
    pub fn string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attribute_type: AttributeType::String,
        }
    }
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Key attribute names in schema order: partition key, then sort key.
    pub fn key_names(&self) -> [&str; 2] {
        [self.partition_key.name.as_str(), self.sort_key.name.as_str()]
    }
}

/// Returns the table configuration the todos service expects.
///
/// Todos are partitioned by owner `Email` and sorted by `Id`.
pub fn todos_table_config() -> TableConfig {
    TableConfig {
        table_name: "todos".to_string(),
        partition_key: KeyAttribute::string("Email"),
        sort_key: KeyAttribute::string("Id"),
        billing_mode: BillingMode::PayPerRequest,
    }
}
