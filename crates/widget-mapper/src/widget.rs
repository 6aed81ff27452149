//! Mapping of one raw widget definition into a file name and component IR.

use crate::children::map_expected_children;
use crate::ir::{ComponentIR, ImportSource};
use crate::names::{remove_prefix, to_kebab_case};
use crate::nested::map_nested_component;
use crate::prop::map_props;
use crate::registry::CustomTypeRegistry;
use crate::resolver::TypeResolver;
use widget_metadata::WidgetDefinition;

/// The exact-case prefix stripped from raw widget names.
pub const WIDGET_PREFIX: &str = "dx";

/// The prefix generated component names carry.
pub const COMPONENT_PREFIX: &str = "Dx";

/// The extension of emitted component files.
pub const COMPONENT_FILE_EXTENSION: &str = ".ts";

const BASE_COMPONENT_NAME: &str = "createComponent";
const EXTENSION_COMPONENT_NAME: &str = "createExtensionComponent";
const CONFIG_COMPONENT_NAME: &str = "createConfigurationComponent";

/// The result of mapping one widget: the file the component is emitted to
/// and the component IR itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedWidget {
    /// Emitted file name (kebab-cased widget name plus extension).
    pub file_name: String,
    /// The component IR.
    pub component: ComponentIR,
}

/// Converts one raw widget definition into a file name and component IR.
///
/// Total over well-formed input; a widget name lacking the expected prefix
/// is used unchanged rather than rejected.
pub fn map_widget(
    widget: &WidgetDefinition,
    base_component_path: &str,
    config_component_path: &str,
    registry: &CustomTypeRegistry,
    resolver: &dyn TypeResolver,
) -> MappedWidget {
    let name = remove_prefix(&widget.name, WIDGET_PREFIX);

    let base_component_name = if widget.is_extension {
        EXTENSION_COMPONENT_NAME
    } else {
        BASE_COMPONENT_NAME
    };

    MappedWidget {
        file_name: format!("{}{}", to_kebab_case(name), COMPONENT_FILE_EXTENSION),
        component: ComponentIR {
            name: format!("{}{}", COMPONENT_PREFIX, name),
            widget_component: ImportSource::new(name, widget.export_path.clone()),
            base_component: ImportSource::new(base_component_name, base_component_path),
            config_component: ImportSource::new(CONFIG_COMPONENT_NAME, config_component_path),
            props: map_props(&widget.options, registry, resolver),
            has_model: widget.is_editor,
            has_explicit_types: !widget.options_type_params.is_empty(),
            nested_components: widget.complex_options.as_ref().map(|complex_options| {
                complex_options
                    .iter()
                    .map(|complex_option| map_nested_component(complex_option, registry, resolver))
                    .collect()
            }),
            expected_children: map_expected_children(&widget.nesteds),
            contains_reexports: widget.reexports.iter().any(|name| name != "default"),
        },
    }
}
