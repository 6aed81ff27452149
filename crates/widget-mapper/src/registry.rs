//! Name-keyed lookup over custom type definitions.

use indexmap::IndexMap;
use widget_metadata::CustomTypeDefinition;

/// A lookup table over the model's custom type definitions.
///
/// Entries are inserted in input order. The model does not enforce name
/// uniqueness; a duplicate name silently overwrites the earlier definition,
/// so keys are unique by construction (last write wins).
#[derive(Debug, Clone, Default)]
pub struct CustomTypeRegistry {
    types: IndexMap<String, CustomTypeDefinition>,
}

impl CustomTypeRegistry {
    /// Builds the registry from the model's custom type list.
    pub fn build(custom_types: &[CustomTypeDefinition]) -> Self {
        let mut types = IndexMap::with_capacity(custom_types.len());
        for custom_type in custom_types {
            types.insert(custom_type.name.clone(), custom_type.clone());
        }
        Self { types }
    }

    /// Looks up a custom type definition by name.
    pub fn get(&self, name: &str) -> Option<&CustomTypeDefinition> {
        self.types.get(name)
    }

    /// Returns the number of registered type names.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true when no custom types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
