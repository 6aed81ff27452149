//! Common re-export module rendering.

/// Renders one common re-export module: the named exports of one grouping
/// key, re-exported from the corresponding widgets-package module.
pub fn generate_common_reexports(
    module_key: &str,
    names: &[String],
    widgets_package: &str,
) -> String {
    let mut output = String::new();
    output.push_str("export {\n");
    for name in names {
        output.push_str(&format!("  {},\n", name));
    }
    output.push_str(&format!(
        "}} from \"{}/{}\";\n",
        widgets_package, module_key
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_common_reexport_module() {
        let names = vec!["PositionConfig".to_string(), "Format".to_string()];
        assert_eq!(
            generate_common_reexports("common", &names, "devextreme"),
            "export {\n  PositionConfig,\n  Format,\n} from \"devextreme/common\";\n"
        );
    }

    #[test]
    fn test_nested_grouping_key() {
        let names = vec!["DataSource".to_string()];
        let output = generate_common_reexports("common/data", &names, "devextreme");
        assert!(output.ends_with("} from \"devextreme/common/data\";\n"));
    }
}
