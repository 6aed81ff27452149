//! Resolution of raw type descriptors into canonical type tokens.

use crate::registry::CustomTypeRegistry;
use widget_metadata::TypeDescriptor;

/// The canonical token marking an array-typed option.
pub const ARRAY_TYPE_TOKEN: &str = "Array";

/// Resolves raw type descriptors into an ordered sequence of canonical
/// type tokens.
///
/// Implementations must preserve descriptor order and must not fail on
/// unresolved custom type references; passing an unknown name through
/// unchanged is acceptable.
pub trait TypeResolver {
    /// Resolves `types` against the given custom type registry.
    fn resolve(&self, types: &[TypeDescriptor], registry: &CustomTypeRegistry) -> Vec<String>;
}

/// The stock resolver.
///
/// Primitive identifiers map case-insensitively onto the canonical token
/// set. A registered custom type with member props resolves to `Object`; an
/// alias-like custom type resolves to the tokens of its own descriptor list
/// (one level only). Anything else passes through verbatim. Duplicate
/// tokens collapse to their first occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeResolver;

impl TypeResolver for DefaultTypeResolver {
    fn resolve(&self, types: &[TypeDescriptor], registry: &CustomTypeRegistry) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::with_capacity(types.len());

        for descriptor in types {
            resolve_descriptor(&descriptor.type_name, registry, &mut tokens);
        }

        dedupe_in_order(tokens)
    }
}

fn resolve_descriptor(type_name: &str, registry: &CustomTypeRegistry, tokens: &mut Vec<String>) {
    if let Some(token) = canonical_token(type_name) {
        tokens.push(token.to_string());
        return;
    }

    match registry.get(type_name) {
        Some(custom_type) if !custom_type.props.is_empty() => {
            tokens.push("Object".to_string());
        }
        Some(custom_type) if !custom_type.types.is_empty() => {
            for inner in &custom_type.types {
                match canonical_token(&inner.type_name) {
                    Some(token) => tokens.push(token.to_string()),
                    None => tokens.push(inner.type_name.clone()),
                }
            }
        }
        // Unknown or empty custom types pass through unchecked.
        _ => tokens.push(type_name.to_string()),
    }
}

/// Maps a primitive type identifier onto its canonical token.
fn canonical_token(type_name: &str) -> Option<&'static str> {
    match type_name.to_lowercase().as_str() {
        "string" => Some("String"),
        "number" | "integer" | "double" => Some("Number"),
        "boolean" | "bool" => Some("Boolean"),
        "object" | "any" => Some("Object"),
        "array" => Some(ARRAY_TYPE_TOKEN),
        "function" | "event" => Some("Function"),
        _ => None,
    }
}

fn dedupe_in_order(tokens: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !result.contains(&token) {
            result.push(token);
        }
    }
    result
}
