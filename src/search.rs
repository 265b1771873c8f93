//! Depth-first node search.
//!
//! Searches never mutate the tree. Results come back in document order
//! (pre-order, left to right) and the root itself is a candidate.

use tracing::{debug, trace};

use crate::criteria::{Limit, MatchCriteria};
use crate::dom::{self, NodeRef, Selection};
use crate::error::{Error, Result};

/// Collect the element nodes under `root` (inclusive) that satisfy `criteria`.
///
/// Traversal stops as soon as `criteria.limit` distinct nodes have been
/// collected, so a bounded search returns a prefix of the unbounded one.
/// No match is an empty vector, not an error.
///
/// # Example
///
/// ```rust
/// use rs_htmlutil::{dom, search, MatchCriteria};
///
/// let doc = dom::parse(r#"<div><p id="a">x</p><p id="b">y</p></div>"#);
/// let found = search(&doc.root(), &MatchCriteria::new("p").with_attr("id").with_value("b"));
/// assert_eq!(found.len(), 1);
/// ```
#[must_use]
pub fn search<'a>(root: &NodeRef<'a>, criteria: &MatchCriteria) -> Vec<NodeRef<'a>> {
    let mut found = Vec::new();
    if criteria.limit.is_reached(found.len()) {
        return found;
    }

    // Children are pushed in reverse so they pop left to right.
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if criteria.matches(&node) {
            trace!(tag = ?dom::tag_name(&node), index = found.len(), "node matched");
            found.push(node.clone());
            if criteria.limit.is_reached(found.len()) {
                break;
            }
        }
        let mark = stack.len();
        stack.extend(dom::children(&node));
        stack[mark..].reverse();
    }

    debug!(
        tag = ?criteria.tag,
        attr = ?criteria.attr_key,
        value = ?criteria.attr_value,
        matched = found.len(),
        "search finished"
    );
    found
}

/// Like [`search`], but zero matches is [`Error::NotFound`].
///
/// # Errors
///
/// Returns `Error::NotFound` when no node satisfies the criteria.
pub fn try_search<'a>(root: &NodeRef<'a>, criteria: &MatchCriteria) -> Result<Vec<NodeRef<'a>>> {
    let found = search(root, criteria);
    if found.is_empty() {
        return Err(Error::NotFound);
    }
    Ok(found)
}

/// All matching nodes; empty strings mean "not a criterion".
#[must_use]
pub fn find_all<'a>(root: &NodeRef<'a>, tag: &str, attr: &str, attr_value: &str) -> Vec<NodeRef<'a>> {
    search(root, &MatchCriteria::from_parts(tag, attr, attr_value, Limit::Unbounded))
}

/// First matching node, if any.
#[must_use]
pub fn first_match<'a>(root: &NodeRef<'a>, criteria: &MatchCriteria) -> Option<NodeRef<'a>> {
    search(root, &criteria.clone().first()).into_iter().next()
}

/// First matching node as a selection, or an empty selection when nothing matches.
///
/// The empty selection stands in for "no node": reading from it yields empty
/// text and markup, and mutating it is a no-op.
#[must_use]
pub fn find_first<'a>(root: &NodeRef<'a>, tag: &str, attr: &str, attr_value: &str) -> Selection<'a> {
    let criteria = MatchCriteria::from_parts(tag, attr, attr_value, Limit::FIRST);
    Selection::from(search(root, &criteria))
}

/// Number of nodes the search would return.
#[must_use]
pub fn count(root: &NodeRef, criteria: &MatchCriteria) -> usize {
    search(root, criteria).len()
}
