//! Index (re-export) module rendering.

/// One entry of the generated index: a component name and the module path
/// it is re-exported from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReExport {
    /// The exported component name.
    pub name: String,
    /// The module path, relative to the index file.
    pub path: String,
}

/// Renders the index module: one re-export line per entry, in order.
pub fn generate_index(reexports: &[ReExport]) -> String {
    let mut output = String::new();
    for entry in reexports {
        output.push_str(&format!(
            "export {{ default as {} }} from \"{}\";\n",
            entry.name, entry.path
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_index() {
        assert_eq!(generate_index(&[]), "");
    }

    #[test]
    fn test_one_line_per_entry_in_order() {
        let entries = vec![
            ReExport {
                name: "DxButton".to_string(),
                path: "./components/button".to_string(),
            },
            ReExport {
                name: "DxDataGrid".to_string(),
                path: "./components/data-grid".to_string(),
            },
        ];

        assert_eq!(
            generate_index(&entries),
            "export { default as DxButton } from \"./components/button\";\n\
             export { default as DxDataGrid } from \"./components/data-grid\";\n"
        );
    }
}
