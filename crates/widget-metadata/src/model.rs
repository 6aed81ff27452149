//! Data model for the widget integration metadata document.

use indexmap::IndexMap;
use serde::Deserialize;

/// The root of the metadata document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Widget definitions, in document order.
    #[serde(default)]
    pub widgets: Vec<WidgetDefinition>,

    /// Reusable custom type definitions referenced by option types.
    #[serde(default)]
    pub custom_types: Vec<CustomTypeDefinition>,

    /// Common re-export groups: grouping key to exported names.
    #[serde(default)]
    pub common_reexports: Option<IndexMap<String, Vec<String>>>,
}

/// One widget description from the source metadata schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDefinition {
    /// Raw widget identifier, conventionally `dx`-prefixed (e.g. `dxButton`).
    pub name: String,

    /// Module path the widget is exported from within the widgets package.
    #[serde(default)]
    pub export_path: String,

    /// Whether the widget is an extension rather than a markup component.
    #[serde(default)]
    pub is_extension: bool,

    /// Whether the widget is an editor (participates in `v-model`).
    #[serde(default)]
    pub is_editor: bool,

    /// Type parameters of the widget's options type, when generic.
    #[serde(default)]
    pub options_type_params: Vec<String>,

    /// Configurable options, in document order.
    #[serde(default)]
    pub options: Vec<OptionDefinition>,

    /// Structured options that become nested configuration components.
    /// Absent when the concept does not apply to this widget.
    #[serde(default)]
    pub complex_options: Option<Vec<ComplexOptionDefinition>>,

    /// References to the nested component types this widget may contain.
    #[serde(default)]
    pub nesteds: Vec<ComponentReference>,

    /// Names re-exported from the widget module.
    #[serde(default)]
    pub reexports: Vec<String>,
}

/// A configurable parameter of a widget or nested component.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDefinition {
    /// Option name.
    pub name: String,

    /// Raw type descriptors, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

/// A raw type descriptor attached to an option.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// The type identifier (a primitive name or a custom type name).
    #[serde(rename = "type")]
    pub type_name: String,

    /// Literal values the option accepts, when the type is restricted.
    #[serde(default)]
    pub acceptable_values: Option<Vec<serde_json::Value>>,
}

impl TypeDescriptor {
    /// Returns true when the descriptor carries a non-empty set of
    /// acceptable literal values.
    pub fn has_acceptable_values(&self) -> bool {
        self.acceptable_values
            .as_ref()
            .is_some_and(|values| !values.is_empty())
    }
}

/// An option whose value is itself a structured sub-component.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexOptionDefinition {
    /// Complex option name (becomes the nested component identity).
    pub name: String,

    /// Name of the owning option on the widget.
    #[serde(default)]
    pub option_name: String,

    /// Options of the nested component, in document order.
    #[serde(default)]
    pub props: Vec<OptionDefinition>,

    /// Whether the nested component is an item of a collection option.
    #[serde(default)]
    pub is_collection_item: bool,

    /// Opaque predefined prop values, passed through to emission unchanged.
    #[serde(default)]
    pub predefined_props: Option<serde_json::Value>,

    /// References to the nested component types this component may contain.
    #[serde(default)]
    pub nesteds: Vec<ComponentReference>,
}

/// A reference to a nested component type a component may contain.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReference {
    /// Name of the referenced component type.
    pub component_name: String,

    /// Whether the child is placed as a collection item.
    #[serde(default)]
    pub is_collection_item: bool,

    /// The option the child configures on its parent.
    #[serde(default)]
    pub option_name: String,
}

/// A named, reusable type definition referenced by one or more options.
///
/// Name uniqueness is not enforced by the model; the registry built over
/// these definitions resolves duplicates last-write-wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTypeDefinition {
    /// Custom type name, used as the lookup key.
    pub name: String,

    /// Type descriptors for alias-like custom types.
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,

    /// Member options for interface-like custom types.
    #[serde(default)]
    pub props: Vec<OptionDefinition>,
}
