//! Mapping of component references into expected-children metadata.

use crate::ir::ExpectedChild;
use indexmap::IndexMap;
use widget_metadata::ComponentReference;

/// Converts a list of component references into a name-indexed mapping of
/// child-placement metadata.
///
/// An empty list yields `None` rather than an empty mapping; absence
/// signals that the concept does not apply. References sharing a component
/// name overwrite earlier entries for that name.
pub fn map_expected_children(
    nesteds: &[ComponentReference],
) -> Option<IndexMap<String, ExpectedChild>> {
    if nesteds.is_empty() {
        return None;
    }

    let mut expected_children = IndexMap::with_capacity(nesteds.len());
    for reference in nesteds {
        expected_children.insert(
            reference.component_name.clone(),
            ExpectedChild {
                is_collection_item: reference.is_collection_item,
                option_name: reference.option_name.clone(),
            },
        );
    }

    Some(expected_children)
}
