//! Mapping of raw widget metadata into the component IR.
//!
//! This crate is the normalization layer between the loaded metadata model
//! and source emission. It derives component identity from raw widget
//! identifiers, filters and resolves option definitions into IR properties,
//! derives nested configuration components from complex options, and
//! indexes expected child components.
//!
//! Every operation is synchronous, side-effect-free, and total over a
//! structurally valid model: identical input produces identical IR.
//!
//! # Example
//!
//! ```
//! use widget_mapper::{map_widget, CustomTypeRegistry, DefaultTypeResolver};
//! use widget_metadata::WidgetDefinition;
//!
//! let widget = WidgetDefinition {
//!     name: "dxButton".to_string(),
//!     export_path: "ui/button".to_string(),
//!     ..Default::default()
//! };
//!
//! let registry = CustomTypeRegistry::default();
//! let mapped = map_widget(
//!     &widget,
//!     "./core/index",
//!     "./core/index",
//!     &registry,
//!     &DefaultTypeResolver,
//! );
//! assert_eq!(mapped.component.name, "DxButton");
//! assert_eq!(mapped.file_name, "button.ts");
//! ```

mod children;
mod ir;
mod names;
mod nested;
mod prop;
mod registry;
mod resolver;
mod restriction;
mod widget;

pub use children::map_expected_children;
pub use ir::{ComponentIR, ExpectedChild, ImportSource, NestedComponentIR, PropIR};
pub use names::{remove_prefix, to_kebab_case, uppercase_first};
pub use nested::map_nested_component;
pub use prop::{map_prop, map_props, RESERVED_PROP_NAMES};
pub use registry::CustomTypeRegistry;
pub use resolver::{DefaultTypeResolver, TypeResolver, ARRAY_TYPE_TOKEN};
pub use restriction::{extract_value_restriction, ValueRestriction};
pub use widget::{
    map_widget, MappedWidget, COMPONENT_FILE_EXTENSION, COMPONENT_PREFIX, WIDGET_PREFIX,
};
