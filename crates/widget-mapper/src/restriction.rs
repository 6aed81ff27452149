//! Extraction of enumerated-value restrictions from option type descriptors.

use widget_metadata::TypeDescriptor;

/// An enumerated-value restriction derived from an option's types.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRestriction {
    /// Lowercased type identifier of the restricting descriptor.
    pub acceptable_value_type: String,
    /// The literal values the option accepts.
    pub acceptable_values: Vec<serde_json::Value>,
}

/// Derives a value restriction from descriptors already filtered to those
/// with non-empty acceptable values.
///
/// Only the first descriptor is ever consulted; later qualifying
/// descriptors in the same option are ignored. A restriction whose type
/// lowercases to `string` yields no restriction at all.
pub fn extract_value_restriction(restricted: &[&TypeDescriptor]) -> Option<ValueRestriction> {
    let first = restricted.first()?;
    let acceptable_value_type = first.type_name.to_lowercase();
    if acceptable_value_type == "string" {
        return None;
    }

    Some(ValueRestriction {
        acceptable_value_type,
        acceptable_values: first.acceptable_values.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(type_name: &str, values: Vec<serde_json::Value>) -> TypeDescriptor {
        TypeDescriptor {
            type_name: type_name.to_string(),
            acceptable_values: Some(values),
        }
    }

    #[test]
    fn test_empty_input_has_no_restriction() {
        assert_eq!(extract_value_restriction(&[]), None);
    }

    #[test]
    fn test_string_restriction_is_dropped() {
        let descr = descriptor("String", vec![json!("a"), json!("b")]);
        assert_eq!(extract_value_restriction(&[&descr]), None);
    }

    #[test]
    fn test_string_check_is_case_insensitive() {
        let descr = descriptor("STRING", vec![json!("a")]);
        assert_eq!(extract_value_restriction(&[&descr]), None);
    }

    #[test]
    fn test_number_restriction_is_kept_and_lowercased() {
        let descr = descriptor("Number", vec![json!(1), json!(2)]);
        let restriction = extract_value_restriction(&[&descr]).unwrap();
        assert_eq!(restriction.acceptable_value_type, "number");
        assert_eq!(restriction.acceptable_values, vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_only_the_first_descriptor_is_consulted() {
        let first = descriptor("Number", vec![json!(1)]);
        let second = descriptor("Boolean", vec![json!(true)]);
        let restriction = extract_value_restriction(&[&first, &second]).unwrap();
        assert_eq!(restriction.acceptable_value_type, "number");
    }

    #[test]
    fn test_first_string_descriptor_suppresses_later_ones() {
        // A leading string descriptor means no restriction, even when a
        // qualifying non-string descriptor follows.
        let first = descriptor("String", vec![json!("a")]);
        let second = descriptor("Number", vec![json!(1)]);
        assert_eq!(extract_value_restriction(&[&first, &second]), None);
    }
}
