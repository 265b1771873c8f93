//! Markup rendering for single nodes.

use crate::dom::NodeRef;
use crate::error::{Error, Result};

/// Serialize a node and its subtree back to markup.
///
/// # Errors
///
/// Returns `Error::Serialization` when the serializer produces no output for
/// the node.
pub fn render(node: &NodeRef) -> Result<String> {
    node.try_html()
        .map(|html| html.to_string())
        .ok_or_else(|| Error::Serialization(format!("cannot serialize node {:?}", node.id)))
}

/// Serialize only the children of a node.
///
/// # Errors
///
/// Returns `Error::Serialization` when the serializer produces no output for
/// the node.
pub fn render_inner(node: &NodeRef) -> Result<String> {
    node.try_inner_html()
        .map(|html| html.to_string())
        .ok_or_else(|| Error::Serialization(format!("cannot serialize children of node {:?}", node.id)))
}

/// Render every node, stopping at the first failure.
///
/// # Errors
///
/// Returns the first `Error::Serialization` encountered.
pub fn render_all(nodes: &[NodeRef]) -> Result<Vec<String>> {
    nodes.iter().map(render).collect()
}
