//! # rs-htmlutil
//!
//! Search, render, and prune parsed HTML trees.
//!
//! Nodes are located by tag name and an optional attribute key and/or value,
//! in document order, with an optional cap on the number of results. The same
//! search drives node removal and attribute stripping.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_htmlutil::{dom, find_all, remove_all_nodes, render};
//!
//! let doc = dom::parse(r#"<div><p id="a">x</p><p id="b">y</p></div>"#);
//! let root = doc.root();
//!
//! assert_eq!(find_all(&root, "p", "", "").len(), 2);
//!
//! remove_all_nodes(&root, "p", "id", "a");
//! let div = find_all(&root, "div", "", "")[0].clone();
//! assert_eq!(render(&div)?, r#"<div><p id="b">y</p></div>"#);
//! # Ok::<(), rs_htmlutil::Error>(())
//! ```
//!
//! ## Empty results
//!
//! A search that matches nothing returns an empty `Vec` and a removal that
//! matches nothing returns `0`. Callers that need to tell "nothing found" apart
//! use [`try_search`] or [`try_remove_nodes`], which return [`Error::NotFound`].
//!
//! The tree is single-threaded: `dom_query` documents use interior mutability
//! and are not `Sync`.

mod criteria;
mod error;
mod mutate;
mod render;
mod search;

/// DOM operations adapter over `dom_query`.
pub mod dom;

// Public API - re-exports
pub use criteria::{Limit, MatchCriteria};
pub use error::{Error, Result};
pub use mutate::{remove_all_nodes, remove_attributes, remove_first_node, remove_nodes, try_remove_nodes};
pub use render::{render, render_all, render_inner};
pub use search::{count, find_all, find_first, first_match, search, try_search};
