//! Tree mutation built on [`search`](crate::search::search).
//!
//! Every operation searches first to build a worklist and only then touches
//! the tree, so the traversal never observes its own edits.

use tracing::{debug, trace};

use crate::criteria::{Limit, MatchCriteria};
use crate::dom::{self, NodeRef};
use crate::error::{Error, Result};
use crate::search::search;

/// Detach every node matching `criteria`, with its subtree.
///
/// Matches are detached last-first. When an ancestor and one of its
/// descendants both match, the descendant goes first and the ancestor then
/// takes the rest of its subtree with it. A match without a parent (the
/// document root) cannot be detached and is skipped.
///
/// Returns the number of nodes detached.
pub fn remove_nodes(root: &NodeRef, criteria: &MatchCriteria) -> usize {
    detach_all(&search(root, criteria))
}

/// Like [`remove_nodes`], but a search with no matches is [`Error::NotFound`].
///
/// # Errors
///
/// Returns `Error::NotFound` when no node satisfies the criteria; the tree is
/// left untouched.
pub fn try_remove_nodes(root: &NodeRef, criteria: &MatchCriteria) -> Result<usize> {
    let worklist = search(root, criteria);
    if worklist.is_empty() {
        return Err(Error::NotFound);
    }
    Ok(detach_all(&worklist))
}

/// Detach a document-ordered worklist last-first.
fn detach_all(worklist: &[NodeRef]) -> usize {
    let mut removed = 0;
    for node in worklist.iter().rev() {
        if dom::detach(node) {
            removed += 1;
        } else {
            trace!(tag = ?dom::tag_name(node), "skipping match without parent");
        }
    }

    debug!(matched = worklist.len(), removed, "detach finished");
    removed
}

/// Remove all matching nodes; empty strings mean "not a criterion".
pub fn remove_all_nodes(root: &NodeRef, tag: &str, attr: &str, attr_value: &str) -> usize {
    remove_nodes(root, &MatchCriteria::from_parts(tag, attr, attr_value, Limit::Unbounded))
}

/// Remove the first matching node in document order.
pub fn remove_first_node(root: &NodeRef, tag: &str, attr: &str, attr_value: &str) -> usize {
    remove_nodes(root, &MatchCriteria::from_parts(tag, attr, attr_value, Limit::FIRST))
}

/// Strip `key="value"` pairs from the elements that carry them.
///
/// Nodes are selected with `tag` (empty for any element), `key`, `value` and
/// `limit`. On each selected node every pair whose key and value both equal
/// the given ones is dropped, duplicates included; other pairs keep their order.
/// Unlike a search, both `key` and `value` are required: an empty `key` or
/// `value` strips nothing.
///
/// Returns the number of attribute pairs removed.
pub fn remove_attributes(root: &NodeRef, tag: &str, key: &str, value: &str, limit: Limit) -> usize {
    if key.is_empty() || value.is_empty() {
        debug!(key, value, "remove_attributes needs both key and value");
        return 0;
    }

    let criteria = MatchCriteria::from_parts(tag, key, value, limit);
    let worklist = search(root, &criteria);

    let removed: usize = worklist
        .iter()
        .map(|node| dom::retain_attributes(node, |k, v| !(k == key && v == value)))
        .sum();

    debug!(key, value, nodes = worklist.len(), removed, "remove_attributes finished");
    removed
}
