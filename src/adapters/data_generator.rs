use crate::adapters::value_generator::generate_value;
use crate::config::{FieldOverride, MockConfig};
use crate::domain::TypeDescriptor;
use rand::{Rng, RngCore};
use serde_json::{Map, Value};
use tracing::trace;

/// Generate one mock object for a type, applying per-field overrides from `config`.
///
/// Keys follow the type's field declaration order. Fields declared with the
/// `[]` suffix become sequences of `arrayMin..=arrayMax` independently generated
/// values of the base type.
pub fn generate_mock_data(
    type_descriptor: &TypeDescriptor,
    config: Option<&MockConfig>,
    rng: &mut dyn RngCore,
) -> Value {
    let no_override = FieldOverride::default();
    let mut result = Map::with_capacity(type_descriptor.fields.len());

    for field in &type_descriptor.fields {
        let field_override = config
            .and_then(|c| c.field_override(&type_descriptor.name, &field.name))
            .unwrap_or(&no_override);

        let value = match field.array_base_type() {
            Some(base_type) => {
                let (min, max) = field_override.array_bounds();
                let len = rng.gen_range(min..=max);
                trace!(
                    type_name = %type_descriptor.name,
                    field = %field.name,
                    len,
                    "Generating array field"
                );
                let items = (0..len)
                    .map(|_| generate_value(&field.name, base_type, field_override, rng))
                    .collect();
                Value::Array(items)
            }
            None => generate_value(&field.name, &field.declared_type, field_override, rng),
        };

        result.insert(field.name.clone(), value);
    }

    Value::Object(result)
}
