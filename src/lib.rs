//! # graphql-automock - Schema-driven GraphQL mock data
//!
//! Produces plausible response data for a GraphQL operation from nothing but a
//! schema document and an optional mock configuration, so client code can be
//! developed and tested without a running server.
//!
//! ## Features
//!
//! - **Schema catalog**: object types and their field signatures, parsed from SDL
//! - **Heuristic values**: field names like `email`, `createdDate`, `price` get
//!   matching fake data, other scalars fall back to their type
//! - **Overrides**: numeric ranges, date bounds, array sizes, literal values and
//!   producer closures per type and field
//! - **Reproducible**: every random choice comes from an injectable RNG
//!
//! ## Quick Start
//!
//! ```rust
//! use graphql_automock::{mock_operation, OperationKind};
//!
//! let schema = r#"
//!     type Query { getWidgets: [Widget!]! }
//!     type Widget { id: ID! name: String! }
//! "#;
//!
//! let widgets = mock_operation(schema, OperationKind::Query, "getWidgets", None)?;
//! assert_eq!(widgets.as_array().map(|a| a.len()), Some(5));
//! # Ok::<(), graphql_automock::MockError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: catalog types, operation kinds and errors
//! - **Adapters**: schema analysis, type resolution, value and object generation
//! - **Config**: mock configuration, validation and CLI settings

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

pub use crate::adapters::data_generator::generate_mock_data;
pub use crate::adapters::operation_mocker::{mock_operation, mock_operation_with_rng, LIST_RESULT_SIZE};
pub use crate::adapters::schema_analyzer::analyze_schema;
pub use crate::adapters::type_resolver::resolve_type;
pub use crate::adapters::value_generator::generate_value;
pub use crate::config::{FieldOverride, MockConfig, MockOperationConfig, MockTypeConfig, ValueOverride};
pub use crate::domain::{FieldDescriptor, MockError, OperationKind, SchemaCatalog, TypeDescriptor};
