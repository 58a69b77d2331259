//! Mock engine error types

use thiserror::Error;

use super::OperationKind;

/// Errors that abort a mock generation call.
///
/// Every variant is raised before any object is synthesized, so a failed call
/// never yields partial data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MockError {
    /// The schema document is not valid type-system syntax
    #[error("Schema parse error: {0}")]
    ParseError(String),

    /// Two object types share a name
    #[error("Duplicate type definition: '{name}'")]
    DuplicateType { name: String },

    /// `extend type` names no object type, or redeclares one of its fields
    #[error("Cannot extend type {type_name}: {reason}")]
    InvalidExtension { type_name: String, reason: String },

    /// Root type for the operation kind is absent
    #[error("Operation type {kind} not found")]
    OperationTypeNotFound { kind: OperationKind },

    /// No root field with the requested name
    #[error("Operation {operation} not found in {kind}")]
    OperationNotFound {
        operation: String,
        kind: OperationKind,
    },

    /// Wrapper-stripped return type has no object type in the catalog
    #[error("Return type {type_signature} not found")]
    ReturnTypeNotFound { type_signature: String },
}

impl From<graphql_parser::schema::ParseError> for MockError {
    fn from(err: graphql_parser::schema::ParseError) -> Self {
        Self::ParseError(err.to_string())
    }
}
