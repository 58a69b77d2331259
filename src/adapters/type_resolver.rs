use crate::domain::{SchemaCatalog, TypeDescriptor};

/// Look up an object type by exact name.
///
/// No wrapper stripping happens here; callers pass a bare type name. This is
/// also where nested, list-aware resolution would hook in.
pub fn resolve_type<'a>(type_name: &str, catalog: &'a SchemaCatalog) -> Option<&'a TypeDescriptor> {
    catalog.get(type_name)
}

/// Bare type name of an operation's declared return type, plus whether it is a list.
///
/// Uses the schema grammar's native wrappers: `[Widget!]!` → (`Widget`, true).
pub fn unwrap_return_type(declared_type: &str) -> (String, bool) {
    let is_list = declared_type.trim().starts_with('[');
    let bare = declared_type
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '!'))
        .collect();
    (bare, is_list)
}
