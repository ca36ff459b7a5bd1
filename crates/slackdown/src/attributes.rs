//! HTML attribute names to Slack field names.

use indexmap::IndexMap;

use crate::node::Element;

/// Copy every attribute of `element`, replacing `-` with `_` in its name.
///
/// HTML attributes are written `author-name`, Slack fields `author_name`;
/// values pass through unchanged.
pub fn map_attributes(element: &Element) -> IndexMap<String, String> {
    element
        .attributes
        .iter()
        .map(|(name, value)| (name.replace('-', "_"), value.clone()))
        .collect()
}
