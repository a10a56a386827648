//! Selector Resolution
//!
//! Maps authored selector inputs to normalized [`ElementSelector`] trees.
//!
//! Inputs must be acyclic. Recursion depth equals the depth of the selector
//! tree and no cycle detection is performed.

use crate::error::ResolveError;
use crate::model::{describe_node, YamlElementSelector, YamlElementSelectorUnion};
use conductor_common::protocol::{ElementSelector, SizeSelector};
use tracing::trace;

pub fn resolve_selector(input: &YamlElementSelectorUnion) -> Result<ElementSelector, ResolveError> {
    match input {
        YamlElementSelectorUnion::Text(pattern) => Ok(ElementSelector::text(pattern.clone())),
        YamlElementSelectorUnion::Selector(selector) => resolve_structured(selector),
        YamlElementSelectorUnion::Unsupported(node) => {
            Err(ResolveError::UnknownSelectorType(describe_node(node)))
        }
    }
}

fn resolve_structured(selector: &YamlElementSelector) -> Result<ElementSelector, ResolveError> {
    let size = if selector.width.is_some() || selector.height.is_some() {
        Some(SizeSelector {
            width: selector.width,
            height: selector.height,
            tolerance: selector.tolerance,
        })
    } else {
        None
    };

    let resolved = ElementSelector {
        text_regex: selector.text.clone(),
        id_regex: selector.id.clone(),
        size,
        below: resolve_child(selector.below.as_ref())?,
        above: resolve_child(selector.above.as_ref())?,
        left_of: resolve_child(selector.left_of.as_ref())?,
        right_of: resolve_child(selector.right_of.as_ref())?,
        contains_child: resolve_child(selector.contains_child.as_ref())?,
        optional: selector.optional.unwrap_or(false),
    };
    trace!("Resolved selector: {:?}", resolved);
    Ok(resolved)
}

fn resolve_child(
    child: Option<&YamlElementSelectorUnion>,
) -> Result<Option<Box<ElementSelector>>, ResolveError> {
    child
        .map(|c| resolve_selector(c).map(Box::new))
        .transpose()
}
