//! Small helpers for rendering JavaScript fragments.

/// Prop constructor names Vue understands at runtime.
const VUE_CONSTRUCTORS: &[&str] = &["String", "Number", "Boolean", "Object", "Array", "Function"];

/// Filters resolved type tokens down to Vue prop constructor names.
///
/// Tokens that are not constructors (custom type names passed through by
/// resolution) carry no runtime type information and are dropped from the
/// emitted declaration.
pub(crate) fn vue_prop_constructors(types: &[String]) -> Vec<&str> {
    types
        .iter()
        .map(String::as_str)
        .filter(|token| VUE_CONSTRUCTORS.contains(token))
        .collect()
}

/// Renders a JSON value as a JavaScript literal.
pub(crate) fn render_json_value(value: &serde_json::Value) -> String {
    value.to_string()
}
