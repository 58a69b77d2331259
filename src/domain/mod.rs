use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod error;

pub use error::MockError;

/// Suffix marking an in-object field as a sequence of its base type (e.g. `Int[]`).
///
/// This is unrelated to the schema grammar's own `[...]` list wrapper, which the
/// catalog renders verbatim and which is only stripped at the operation level.
pub const ARRAY_SUFFIX: &str = "[]";

/// Prefix reserved for introspection types.
pub const INTROSPECTION_PREFIX: &str = "__";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Raw rendered type signature, wrapper syntax included.
    pub declared_type: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }

    /// Base type name when the field uses the `[]` array convention.
    pub fn array_base_type(&self) -> Option<&str> {
        self.declared_type.strip_suffix(ARRAY_SUFFIX)
    }
}

/// One object-shaped type declared in a schema.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Name-indexed object types of one schema document, in declaration order.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SchemaCatalog {
    pub types: IndexMap<String, TypeDescriptor>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }
}

/// Root operation kind; doubles as the name of the root object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn root_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_type_name())
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "mutation" => Ok(Self::Mutation),
            "subscription" => Ok(Self::Subscription),
            other => Err(format!(
                "unknown operation kind '{}', expected query, mutation or subscription",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_kind_parse() {
        assert_eq!("query".parse::<OperationKind>().unwrap(), OperationKind::Query);
        assert_eq!("Mutation".parse::<OperationKind>().unwrap(), OperationKind::Mutation);
        assert_eq!(
            "SUBSCRIPTION".parse::<OperationKind>().unwrap(),
            OperationKind::Subscription
        );
        assert!("fragment".parse::<OperationKind>().is_err());
    }

    #[test]
    fn test_operation_kind_display() {
        assert_eq!(OperationKind::Query.to_string(), "Query");
        assert_eq!(OperationKind::Subscription.root_type_name(), "Subscription");
    }

    #[test]
    fn test_array_base_type() {
        assert_eq!(FieldDescriptor::new("scores", "Int[]").array_base_type(), Some("Int"));
        assert_eq!(FieldDescriptor::new("tags", "[String!]!").array_base_type(), None);
        assert_eq!(FieldDescriptor::new("count", "Int").array_base_type(), None);
    }
}
