//! DOM Operations Adapter
//!
//! Node-level accessors over the `dom_query` tree. Everything else in the crate
//! reads and mutates the tree through these functions, so the parser's data
//! model stays in one place.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

use dom_query::NodeData;

// === Parsing ===

/// Parse an HTML document.
///
/// The parser wraps bare markup in `html`/`head`/`body` as browsers do.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse an HTML fragment without the implied document skeleton.
#[inline]
#[must_use]
pub fn parse_fragment(html: &str) -> Document {
    Document::fragment(html)
}

// === Node Information ===

/// Get the tag name of an element node (lowercase).
///
/// Returns `None` for text, comment and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_string())
}

/// Get all attributes as key-value pairs, in document order.
///
/// Duplicate keys are kept. Returns an empty vector for non-element nodes.
#[must_use]
pub fn attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

// === Tree Navigation ===

/// Iterate over the direct children of a node (all kinds) in document order.
pub fn children<'a>(node: &NodeRef<'a>) -> impl Iterator<Item = NodeRef<'a>> {
    std::iter::successors(node.first_child(), |child| child.next_sibling())
}

// === Tree Manipulation ===

/// Detach a node, with its subtree, from its parent.
///
/// Returns `false` and leaves the tree untouched when the node has no parent.
pub fn detach(node: &NodeRef) -> bool {
    if node.parent().is_none() {
        return false;
    }
    node.remove_from_parent();
    true
}

/// Filter an element's attribute sequence in place.
///
/// `keep` receives each `(key, value)` pair; pairs for which it returns `false`
/// are dropped. The relative order of the survivors is unchanged. Returns the
/// number of pairs dropped.
pub fn retain_attributes<F>(node: &NodeRef, mut keep: F) -> usize
where
    F: FnMut(&str, &str) -> bool,
{
    node.update(|tree_node| match tree_node.data {
        NodeData::Element(ref mut element) => {
            let before = element.attrs.len();
            element
                .attrs
                .retain(|attr| keep(&attr.name.local, &attr.value));
            before - element.attrs.len()
        }
        _ => 0,
    })
    .unwrap_or(0)
}

/// Append an attribute pair, keeping any existing pairs with the same key.
///
/// The HTML parser drops repeated attributes and `set_attr` overwrites, so this
/// is how an element with duplicate keys gets built.
pub fn append_attribute(node: &NodeRef, key: &str, value: &str) {
    let appended = node
        .update(|tree_node| {
            let NodeData::Element(ref mut element) = tree_node.data else {
                return true;
            };
            match element.attrs.iter().find(|a| &*a.name.local == key).cloned() {
                Some(mut attr) => {
                    attr.value = value.into();
                    element.attrs.push(attr);
                    true
                }
                None => false,
            }
        })
        .unwrap_or(true);

    if !appended {
        node.set_attr(key, value);
    }
}
