//! Component module rendering.

use crate::js::{render_json_value, vue_prop_constructors};
use indexmap::IndexMap;
use widget_mapper::{ComponentIR, ExpectedChild, NestedComponentIR, PropIR};

/// Renders one component module from its IR.
///
/// Pure string building; identical IR produces byte-identical output.
pub fn generate_component(
    component: &ComponentIR,
    widgets_package: &str,
    vue_version: u32,
    generate_reexports: bool,
) -> String {
    let widget_module = format!("{}/{}", widgets_package, component.widget_component.path);
    let has_nested = component
        .nested_components
        .as_ref()
        .is_some_and(|nested| !nested.is_empty());

    let mut output = String::new();

    if component.has_explicit_types {
        output.push_str(&format!(
            "export {{ ExplicitTypes }} from \"{}\";\n",
            widget_module
        ));
    }

    output.push_str(&format!(
        "import {}, {{ Properties }} from \"{}\";\n",
        component.widget_component.name, widget_module
    ));
    output.push_str(&format!(
        "import {{ {} }} from \"{}\";\n",
        component.base_component.name, component.base_component.path
    ));
    if has_nested {
        output.push_str(&format!(
            "import {{ {} }} from \"{}\";\n",
            component.config_component.name, component.config_component.path
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "const {} = {}({{\n",
        component.name, component.base_component.name
    ));
    output.push_str(&render_props(&component.props, "  "));
    if component.has_model {
        let event = if vue_version >= 3 { "update:value" } else { "input" };
        output.push_str(&format!(
            "  model: {{ prop: \"value\", event: \"{}\" }},\n",
            event
        ));
    }
    output.push_str(&format!("  widget: {}\n", component.widget_component.name));
    output.push_str("});\n");

    if let Some(children) = &component.expected_children {
        output.push_str(&render_expected_children(&component.name, children));
    }

    if let Some(nested_components) = &component.nested_components {
        for nested in nested_components {
            output.push('\n');
            output.push_str(&render_nested_component(
                nested,
                &component.config_component.name,
            ));
        }
    }

    if generate_reexports && component.contains_reexports {
        output.push('\n');
        output.push_str(&format!("export * from \"{}\";\n", widget_module));
    }

    output.push('\n');
    output.push_str(&format!("export default {};\n", component.name));
    output.push_str("export {\n");
    output.push_str(&format!("  {}", component.name));
    if let Some(nested_components) = &component.nested_components {
        for nested in nested_components {
            output.push_str(&format!(",\n  {}", nested.name));
        }
    }
    output.push_str("\n};\n");

    output
}

/// Renders one nested configuration component block.
fn render_nested_component(nested: &NestedComponentIR, config_component_name: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "const {} = {}({{\n",
        nested.name, config_component_name
    ));
    output.push_str(&render_props(&nested.props, "  "));
    output.push_str("});\n");

    output.push_str(&format!(
        "({} as any).$_optionName = \"{}\";\n",
        nested.name, nested.option_name
    ));
    if nested.is_collection_item {
        output.push_str(&format!(
            "({} as any).$_isCollectionItem = true;\n",
            nested.name
        ));
    }
    if let Some(predefined_props) = &nested.predefined_props {
        output.push_str(&format!(
            "({} as any).$_predefinedProps = {};\n",
            nested.name,
            render_json_value(predefined_props)
        ));
    }
    if let Some(children) = &nested.expected_children {
        output.push_str(&render_expected_children(&nested.name, children));
    }

    output
}

/// Renders the props block of a component declaration.
fn render_props(props: &[PropIR], indent: &str) -> String {
    let mut output = String::new();
    output.push_str(indent);
    output.push_str("props: {\n");

    for prop in props {
        output.push_str(indent);
        output.push_str("  ");
        output.push_str(&prop.name);
        output.push_str(": ");
        output.push_str(&render_prop_value(prop, indent));
        output.push_str(",\n");
    }

    output.push_str(indent);
    output.push_str("},\n");
    output
}

/// Renders the declaration value of a single prop.
fn render_prop_value(prop: &PropIR, indent: &str) -> String {
    let constructors = vue_prop_constructors(&prop.types);

    let Some(values) = &prop.acceptable_values else {
        return match constructors.len() {
            0 => "{}".to_string(),
            1 => constructors[0].to_string(),
            _ => format!("[{}]", constructors.join(", ")),
        };
    };

    // A restricted prop gets the object form with a validator.
    let literals: Vec<String> = values.iter().map(render_json_value).collect();
    let mut output = String::from("{\n");
    match constructors.len() {
        0 => {}
        1 => output.push_str(&format!("{}    type: {},\n", indent, constructors[0])),
        _ => output.push_str(&format!(
            "{}    type: [{}],\n",
            indent,
            constructors.join(", ")
        )),
    }
    output.push_str(&format!(
        "{}    validator: (value) => [{}].indexOf(value) !== -1\n",
        indent,
        literals.join(", ")
    ));
    output.push_str(indent);
    output.push_str("  }");
    output
}

/// Renders the expected-children assignment for a component.
fn render_expected_children(
    component_name: &str,
    children: &IndexMap<String, ExpectedChild>,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "({} as any).$_expectedChildren = {{\n",
        component_name
    ));

    for (name, child) in children {
        output.push_str(&format!(
            "  {}: {{ isCollectionItem: {}, optionName: \"{}\" }},\n",
            name, child.is_collection_item, child.option_name
        ));
    }

    output.push_str("};\n");
    output
}
