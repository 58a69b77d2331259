use crate::adapters::data_generator::generate_mock_data;
use crate::adapters::schema_analyzer::analyze_schema;
use crate::adapters::type_resolver::{resolve_type, unwrap_return_type};
use crate::config::MockConfig;
use crate::domain::{MockError, OperationKind};
use rand::RngCore;
use serde_json::Value;
use tracing::debug;

/// Number of objects produced for a list-returning operation
pub const LIST_RESULT_SIZE: usize = 5;

/// Generate mock data for an operation's return type using the thread-local RNG.
///
/// # Arguments
///
/// * `schema_sdl` - The schema document
/// * `kind` - Root operation type to search (`Query`, `Mutation`, `Subscription`)
/// * `operation_name` - Root field name, e.g. `getPortfolio`
/// * `config` - Optional per-type/per-field overrides
///
/// # Returns
///
/// One object, or an array of [`LIST_RESULT_SIZE`] objects when the declared
/// return type is a list.
pub fn mock_operation(
    schema_sdl: &str,
    kind: OperationKind,
    operation_name: &str,
    config: Option<&MockConfig>,
) -> Result<Value, MockError> {
    mock_operation_with_rng(schema_sdl, kind, operation_name, config, &mut rand::thread_rng())
}

/// Same as [`mock_operation`], drawing every random choice from `rng`.
pub fn mock_operation_with_rng(
    schema_sdl: &str,
    kind: OperationKind,
    operation_name: &str,
    config: Option<&MockConfig>,
    rng: &mut dyn RngCore,
) -> Result<Value, MockError> {
    let catalog = analyze_schema(schema_sdl)?;

    let root_type = resolve_type(kind.root_type_name(), &catalog)
        .ok_or(MockError::OperationTypeNotFound { kind })?;

    let operation_field = root_type
        .field(operation_name)
        .ok_or_else(|| MockError::OperationNotFound {
            operation: operation_name.to_string(),
            kind,
        })?;

    let (return_type_name, is_list) = unwrap_return_type(&operation_field.declared_type);
    let return_type = resolve_type(&return_type_name, &catalog).ok_or_else(|| {
        MockError::ReturnTypeNotFound {
            type_signature: operation_field.declared_type.clone(),
        }
    })?;

    debug!(
        %kind,
        operation = operation_name,
        return_type = %return_type.name,
        is_list,
        "Mocking operation"
    );

    if is_list {
        let items = (0..LIST_RESULT_SIZE)
            .map(|_| generate_mock_data(return_type, config, rng))
            .collect();
        Ok(Value::Array(items))
    } else {
        Ok(generate_mock_data(return_type, config, rng))
    }
}
