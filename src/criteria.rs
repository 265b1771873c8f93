//! Match criteria for node searches.
//!
//! A `MatchCriteria` is built per call and consumed by one traversal. Every
//! component is optional; an empty string is treated the same as `None`.

use serde::{Deserialize, Serialize};

use crate::dom::{self, NodeRef};

/// Upper bound on the number of nodes a search collects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limit {
    /// Visit the whole tree.
    #[default]
    Unbounded,
    /// Stop once this many distinct nodes have matched.
    AtMost(usize),
}

impl Limit {
    /// Limit used by the "first match" helpers.
    pub const FIRST: Self = Self::AtMost(1);

    /// Build a limit from a signed count, where any negative value means unbounded.
    #[must_use]
    pub fn from_count(count: i64) -> Self {
        usize::try_from(count).map_or(Self::Unbounded, Self::AtMost)
    }

    /// Whether `found` results already satisfy this limit.
    #[inline]
    #[must_use]
    pub fn is_reached(self, found: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::AtMost(max) => found >= max,
        }
    }
}

/// Tag and attribute filter applied to element nodes.
///
/// All fields are public; use struct update syntax or the builder methods.
///
/// # Example
///
/// ```rust
/// use rs_htmlutil::{Limit, MatchCriteria};
///
/// let links = MatchCriteria::new("a").with_attr("rel").with_value("nofollow");
/// assert_eq!(links.limit, Limit::Unbounded);
///
/// let first_para = MatchCriteria {
///     tag: Some("p".to_string()),
///     ..MatchCriteria::default()
/// }
/// .first();
/// assert_eq!(first_para.limit, Limit::FIRST);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchCriteria {
    /// Tag name the element must carry. `None` accepts any element.
    pub tag: Option<String>,

    /// Attribute key a pair must carry.
    pub attr_key: Option<String>,

    /// Attribute value a pair must carry.
    pub attr_value: Option<String>,

    /// Maximum number of nodes to collect.
    pub limit: Limit,
}

impl MatchCriteria {
    /// Criteria selecting elements with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: non_empty(tag),
            ..Self::default()
        }
    }

    /// Criteria selecting every element.
    #[must_use]
    pub fn any_element() -> Self {
        Self::default()
    }

    /// Build criteria from positional strings, where `""` means "not a criterion".
    #[must_use]
    pub fn from_parts(tag: &str, attr: &str, attr_value: &str, limit: Limit) -> Self {
        Self {
            tag: non_empty(tag),
            attr_key: non_empty(attr),
            attr_value: non_empty(attr_value),
            limit,
        }
    }

    /// Require an attribute with this key.
    #[must_use]
    pub fn with_attr(mut self, key: &str) -> Self {
        self.attr_key = non_empty(key);
        self
    }

    /// Require an attribute with this value.
    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.attr_value = non_empty(value);
        self
    }

    /// Cap the number of nodes collected.
    #[must_use]
    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    /// Same criteria, limited to the first match.
    #[must_use]
    pub fn first(self) -> Self {
        self.with_limit(Limit::FIRST)
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    fn attr_key(&self) -> Option<&str> {
        self.attr_key.as_deref().filter(|k| !k.is_empty())
    }

    fn attr_value(&self) -> Option<&str> {
        self.attr_value.as_deref().filter(|v| !v.is_empty())
    }

    /// Whether the criteria constrain attributes at all.
    #[must_use]
    pub fn has_attribute_filter(&self) -> bool {
        self.attr_key().is_some() || self.attr_value().is_some()
    }

    /// Check one `(key, value)` pair against the attribute part of the criteria.
    #[must_use]
    pub fn matches_pair(&self, key: &str, value: &str) -> bool {
        self.attr_key().is_none_or(|k| k == key) && self.attr_value().is_none_or(|v| v == value)
    }

    /// Check a node against the criteria.
    ///
    /// Only element nodes can match. Without attribute criteria an element
    /// matches on its tag alone, even when it has no attributes; otherwise at
    /// least one of its pairs must pass [`matches_pair`](Self::matches_pair).
    /// A node matching through several pairs still counts once.
    #[must_use]
    pub fn matches(&self, node: &NodeRef) -> bool {
        let Some(tag) = dom::tag_name(node) else {
            return false;
        };
        if self.tag().is_some_and(|wanted| wanted != tag) {
            return false;
        }
        if !self.has_attribute_filter() {
            return true;
        }
        node.attrs()
            .iter()
            .any(|attr| self.matches_pair(&attr.name.local, &attr.value))
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
