//! Widget integration metadata: the raw, declarative model describing
//! widgets, their configurable options, and reusable custom types.
//!
//! The model is loaded once per generation run from a JSON document and read
//! by the mapping layer; nothing here is mutated after construction.

mod loader;
mod model;

pub use loader::MetadataError;
pub use model::{
    ComplexOptionDefinition, ComponentReference, CustomTypeDefinition, Model, OptionDefinition,
    TypeDescriptor, WidgetDefinition,
};
