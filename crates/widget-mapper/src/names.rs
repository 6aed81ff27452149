//! Identifier transformations used when deriving component identity.

/// Removes a leading exact-match `prefix` from `name`.
///
/// Returns `name` unchanged when it does not start with the prefix.
pub fn remove_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}

/// Converts a mixed-case identifier to lowercase, hyphen-delimited words.
///
/// A hyphen is inserted before an uppercase letter that follows a lowercase
/// letter or digit, so `ButtonGroup` becomes `button-group` while acronym
/// runs stay intact.
pub fn to_kebab_case(name: &str) -> String {
    let mut output = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;

    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_lower_or_digit {
            output.push('-');
        }
        prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        output.push(c.to_ascii_lowercase());
    }

    output
}

/// Capitalizes the first character only.
pub fn uppercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
