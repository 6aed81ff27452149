//! Mapping of complex options into nested configuration components.

use crate::children::map_expected_children;
use crate::ir::NestedComponentIR;
use crate::names::uppercase_first;
use crate::prop::map_props;
use crate::registry::CustomTypeRegistry;
use crate::resolver::TypeResolver;
use crate::widget::COMPONENT_PREFIX;
use widget_metadata::ComplexOptionDefinition;

/// Converts one complex option into one nested-component IR.
///
/// Performs exactly one level of structural nesting per invocation; deeper
/// structures are produced by the caller invoking this once per entry in a
/// widget's complex-options list, never by recursive descent here.
pub fn map_nested_component(
    complex_option: &ComplexOptionDefinition,
    registry: &CustomTypeRegistry,
    resolver: &dyn TypeResolver,
) -> NestedComponentIR {
    NestedComponentIR {
        name: format!(
            "{}{}",
            COMPONENT_PREFIX,
            uppercase_first(&complex_option.name)
        ),
        option_name: complex_option.option_name.clone(),
        props: map_props(&complex_option.props, registry, resolver),
        is_collection_item: complex_option.is_collection_item,
        predefined_props: complex_option.predefined_props.clone(),
        expected_children: map_expected_children(&complex_option.nesteds),
    }
}
