//! Schema document → [`SchemaCatalog`].

use crate::domain::{
    FieldDescriptor, MockError, SchemaCatalog, TypeDescriptor, INTROSPECTION_PREFIX,
};
use graphql_parser::schema::{
    parse_schema, Definition, Field, Type, TypeDefinition, TypeExtension,
};
use tracing::debug;

/// Parse a schema document and collect its object types.
///
/// Field types are rendered with their native wrapper syntax (`[Widget!]!`).
/// Object type extensions are merged into their base type once every
/// definition has been seen, so `extend type` may precede the type itself.
/// Extending an undefined type or redeclaring a field is an error.
pub fn analyze_schema(schema_sdl: &str) -> Result<SchemaCatalog, MockError> {
    let document = parse_schema::<String>(schema_sdl)?;

    let mut catalog = SchemaCatalog::new();
    let mut extensions = Vec::new();

    for definition in &document.definitions {
        match definition {
            Definition::TypeDefinition(TypeDefinition::Object(object)) => {
                if object.name.starts_with(INTROSPECTION_PREFIX) {
                    continue;
                }
                if catalog.types.contains_key(&object.name) {
                    return Err(MockError::DuplicateType {
                        name: object.name.clone(),
                    });
                }
                let descriptor = TypeDescriptor::new(object.name.clone(), describe_fields(&object.fields));
                catalog.types.insert(object.name.clone(), descriptor);
            }
            Definition::TypeExtension(TypeExtension::Object(extension)) => {
                if !extension.name.starts_with(INTROSPECTION_PREFIX) {
                    extensions.push(extension);
                }
            }
            _ => {}
        }
    }

    for extension in extensions {
        let descriptor = catalog.types.get_mut(&extension.name).ok_or_else(|| {
            MockError::InvalidExtension {
                type_name: extension.name.clone(),
                reason: "type is not defined".to_string(),
            }
        })?;

        for field in describe_fields(&extension.fields) {
            if descriptor.field(&field.name).is_some() {
                return Err(MockError::InvalidExtension {
                    type_name: extension.name.clone(),
                    reason: format!("field {} already exists", field.name),
                });
            }
            descriptor.fields.push(field);
        }
    }

    debug!(types = catalog.len(), "Analyzed schema");
    Ok(catalog)
}

fn describe_fields(fields: &[Field<'_, String>]) -> Vec<FieldDescriptor> {
    fields
        .iter()
        .map(|field| FieldDescriptor::new(field.name.clone(), render_type(&field.field_type)))
        .collect()
}

/// Render a type reference the way the schema grammar writes it.
pub fn render_type(ty: &Type<'_, String>) -> String {
    match ty {
        Type::NamedType(name) => name.clone(),
        Type::ListType(inner) => format!("[{}]", render_type(inner)),
        Type::NonNullType(inner) => format!("{}!", render_type(inner)),
    }
}
