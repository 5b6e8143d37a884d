//! # mdast_assert
//!
//! Assertions for [mdast] syntax trees held as JSON values.
//!
//! Tools that build or transform markdown trees can call [`assert`] to fail
//! fast, with a message that names the broken rule and the offending node,
//! instead of passing a malformed tree further down the pipeline.
//!
//! ## How nodes are checked
//!
//! - A node's `type` selects its checks (see [`NodeKind`]). Tags without
//!   dedicated checks are extensions: they only need to be valid unist nodes.
//! - Each kind is a parent (with `children`), a literal (with a string
//!   `value`), or void (neither), and then has its own field rules, such as a
//!   heading `depth` between 1 and 6.
//! - Parents are checked depth-first, children in order. The first failure
//!   aborts the whole assertion and is the one reported.
//!
//! A field set to `null` counts as absent.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//!
//! let tree = json!({
//!     "type": "root",
//!     "children": [{
//!         "type": "heading",
//!         "depth": 1,
//!         "children": [{"type": "text", "value": "Hello"}]
//!     }]
//! });
//! assert!(mdast_assert::assert(&tree, None).is_ok());
//!
//! let error = mdast_assert::assert(&json!({"children": [], "depth": 7, "type": "heading"}), None)
//!     .unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     r#"`depth` should be lte `6`: `{"children":[],"depth":7,"type":"heading"}`"#
//! );
//! ```
//!
//! ## Logging
//!
//! Dispatch decisions are emitted as `tracing` events at `TRACE` level, and a
//! failed assertion at `DEBUG` level. Nothing is recorded unless the
//! application installs a subscriber.
//!
//! [mdast]: https://github.com/syntax-tree/mdast

mod dispatch;
mod node_kind;
mod validators;

use serde_json::Value;
use tracing::debug;

pub use node_kind::{Category, NodeKind};
pub use unist_assert::{AssertionError, ErrorKind, Result, void, wrap};

/// Asserts that `tree` is a valid mdast node, and so are its descendants.
///
/// Extension node types are accepted if they are valid unist nodes. Pass the
/// parent as `parent` when asserting a node that is not the root of its tree;
/// a `root` node with a parent is rejected.
pub fn assert(tree: &Value, parent: Option<&Value>) -> Result<()> {
    dispatch::dispatch(tree, parent).inspect_err(log_failure)
}

/// Asserts that `tree` is an mdast parent, and that its descendants are valid.
///
/// Only the parent shape of `tree` itself is checked, not the rules of its
/// `type`.
pub fn parent(tree: &Value, parent: Option<&Value>) -> Result<()> {
    wrap(|node, _| validators::assert_parent(node).map(drop))(tree, parent)
        .inspect_err(log_failure)
}

/// Asserts that `node` is an mdast literal with a string `value`.
pub fn literal(node: &Value, parent: Option<&Value>) -> Result<()> {
    wrap(|node, _| validators::assert_literal(node).map(drop))(node, parent)
        .inspect_err(log_failure)
}

/// Asserts a tree produced by the `markdown` crate.
#[cfg(feature = "markdown")]
pub fn assert_mdast(tree: &markdown::mdast::Node) -> Result<()> {
    let value = serde_json::to_value(tree).map_err(|e| {
        AssertionError::shape(format!("node should be serializable: {}", e))
    })?;
    assert(&value, None)
}

fn log_failure(error: &AssertionError) {
    debug!(kind = ?error.kind(), "mdast assertion failed: {}", error);
}
