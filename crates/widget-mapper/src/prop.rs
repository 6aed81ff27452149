//! Mapping of raw options into IR properties.

use crate::ir::PropIR;
use crate::registry::CustomTypeRegistry;
use crate::resolver::{TypeResolver, ARRAY_TYPE_TOKEN};
use crate::restriction::extract_value_restriction;
use widget_metadata::{OptionDefinition, TypeDescriptor};

/// Option names that never become component props.
pub const RESERVED_PROP_NAMES: &[&str] = &["key"];

/// Converts one raw option into one IR property.
///
/// Total over well-formed input; there are no error conditions.
pub fn map_prop(
    option: &OptionDefinition,
    registry: &CustomTypeRegistry,
    resolver: &dyn TypeResolver,
) -> PropIR {
    let types = resolver.resolve(&option.types, registry);
    let is_array = types.len() == 1 && types[0] == ARRAY_TYPE_TOKEN;

    let restricted: Vec<&TypeDescriptor> = option
        .types
        .iter()
        .filter(|descriptor| descriptor.has_acceptable_values())
        .collect();
    let restriction = extract_value_restriction(&restricted);

    let (acceptable_value_type, acceptable_values) = match restriction {
        Some(restriction) => (
            Some(restriction.acceptable_value_type),
            Some(restriction.acceptable_values),
        ),
        None => (None, None),
    };

    PropIR {
        name: option.name.clone(),
        types,
        is_array,
        acceptable_values,
        acceptable_value_type,
    }
}

/// Maps an option list into props, dropping reserved names and preserving
/// the remaining order.
pub fn map_props(
    options: &[OptionDefinition],
    registry: &CustomTypeRegistry,
    resolver: &dyn TypeResolver,
) -> Vec<PropIR> {
    options
        .iter()
        .filter(|option| !RESERVED_PROP_NAMES.contains(&option.name.as_str()))
        .map(|option| map_prop(option, registry, resolver))
        .collect()
}
