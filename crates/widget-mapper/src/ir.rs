//! The component intermediate representation handed to emission.
//!
//! IR values are built once per widget and never mutated afterwards. The
//! optional collections deliberately distinguish "absent" from "empty":
//! `None` means the concept does not apply to the component, and emission
//! branches on presence.

use indexmap::IndexMap;

/// An exported name plus the module path it is imported from.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSource {
    /// The exported name.
    pub name: String,
    /// The module path.
    pub path: String,
}

impl ImportSource {
    /// Creates an import source.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The normalized representation of one generated component module.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentIR {
    /// Component name (e.g. `DxButton`).
    pub name: String,
    /// The underlying widget export.
    pub widget_component: ImportSource,
    /// The base component factory the component is built with.
    pub base_component: ImportSource,
    /// The configuration component factory used by nested components.
    pub config_component: ImportSource,
    /// Mapped properties, in option order.
    pub props: Vec<PropIR>,
    /// Whether the component participates in `v-model`.
    pub has_model: bool,
    /// Whether the widget's options type takes explicit type parameters.
    pub has_explicit_types: bool,
    /// Nested configuration components; `None` when the widget has no
    /// complex options.
    pub nested_components: Option<Vec<NestedComponentIR>>,
    /// Expected child components by name; `None` when there are no child
    /// references.
    pub expected_children: Option<IndexMap<String, ExpectedChild>>,
    /// Whether the widget module re-exports anything besides `default`.
    pub contains_reexports: bool,
}

/// One mapped component property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropIR {
    /// Property name.
    pub name: String,
    /// Resolved canonical type tokens, in declaration order.
    pub types: Vec<String>,
    /// True iff the resolved types are exactly the array marker token.
    pub is_array: bool,
    /// Literal values the property accepts, when restricted.
    pub acceptable_values: Option<Vec<serde_json::Value>>,
    /// Lowercased type of the restricting descriptor, when restricted.
    pub acceptable_value_type: Option<String>,
}

/// The representation of one nested configuration component.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedComponentIR {
    /// Nested component name (e.g. `DxItem`).
    pub name: String,
    /// The owning option's name on the parent component.
    pub option_name: String,
    /// Mapped properties, in option order.
    pub props: Vec<PropIR>,
    /// Whether the component configures an item of a collection option.
    pub is_collection_item: bool,
    /// Opaque predefined prop values, passed through unchanged.
    pub predefined_props: Option<serde_json::Value>,
    /// Expected child components by name; `None` when there are no child
    /// references.
    pub expected_children: Option<IndexMap<String, ExpectedChild>>,
}

/// Placement metadata for an expected child component.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedChild {
    /// Whether the child is placed as a collection item.
    pub is_collection_item: bool,
    /// The option the child configures on its parent.
    pub option_name: String,
}
