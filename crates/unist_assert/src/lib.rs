//! # unist_assert
//!
//! Generic assertions for [unist] syntax trees held as JSON values.
//!
//! This crate checks the shape every unist node shares: that a value is an
//! object with a non-empty string `type`, that positional info is well formed,
//! and that `children` (when present) is an array of nodes. It knows nothing
//! about any particular node type; specialised crates such as `mdast_assert`
//! build on [`shape`] and [`wrap`].
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use unist_assert::{assert, parent};
//!
//! let tree = json!({"type": "root", "children": [{"type": "leaf", "value": "1"}]});
//! assert!(assert(&tree, None).is_ok());
//! assert!(parent(&tree, None).is_ok());
//!
//! let error = assert(&json!({"type": ""}), None).unwrap_err();
//! assert_eq!(error.to_string(), r#"`type` should not be empty: `{"type":""}`"#);
//! ```
//!
//! [unist]: https://github.com/syntax-tree/unist

mod error;
mod position;
pub mod shape;

use serde_json::Value;

pub use error::{AssertionError, ErrorKind, Result, ensure};

/// Adapts a `(node, parent)` check so its failures name the node they
/// happened on.
///
/// Errors raised by `check` get the rendered `node` (and `parent`, when given)
/// attached. Errors that already name a node are passed through unchanged.
pub fn wrap<F>(check: F) -> impl Fn(&Value, Option<&Value>) -> Result<()>
where
    F: Fn(&Value, Option<&Value>) -> Result<()>,
{
    move |node: &Value, parent: Option<&Value>| {
        check(node, parent).map_err(|error| error.with_context(node, parent))
    }
}

/// Asserts that `node` is a valid unist node, and so are its descendants.
pub fn assert(node: &Value, parent: Option<&Value>) -> Result<()> {
    wrap(|node, _| {
        let fields = shape::node(node)?;
        all(node, fields)
    })(node, parent)
}

/// Asserts that `node` is a valid unist parent with valid descendants.
pub fn parent(node: &Value, parent: Option<&Value>) -> Result<()> {
    wrap(|node, _| {
        let fields = shape::parent(node)?;
        all(node, fields)
    })(node, parent)
}

/// Asserts that `node` is a valid unist literal.
pub fn literal(node: &Value, parent: Option<&Value>) -> Result<()> {
    wrap(|node, _| shape::literal(node).map(drop))(node, parent)
}

/// Asserts that `node` is a valid unist node without `value` or `children`.
pub fn void(node: &Value, parent: Option<&Value>) -> Result<()> {
    wrap(|node, _| shape::void(node).map(drop))(node, parent)
}

fn all(node: &Value, fields: &shape::Fields) -> Result<()> {
    shape::children(fields)
        .iter()
        .try_for_each(|child| assert(child, Some(node)))
}
