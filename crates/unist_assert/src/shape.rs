//! Shallow shape checks.
//!
//! These check a single node and never descend into `children` (beyond
//! requiring it to be an array). Each returns the node's fields so callers can
//! go on to check node-specific properties.

use serde_json::{Map, Value};

use crate::error::{AssertionError, Result, ensure};
use crate::position::position;

/// Fields of a node.
pub type Fields = Map<String, Value>;

/// Checks that `value` is a unist node.
pub fn node(value: &Value) -> Result<&Fields> {
    let Value::Object(fields) = value else {
        return Err(AssertionError::shape("node should be an object"));
    };

    let Some(kind) = fields.get("type") else {
        return Err(AssertionError::shape("node should have a type"));
    };
    let Some(kind) = kind.as_str() else {
        return Err(AssertionError::shape("`type` should be a string"));
    };
    ensure(!kind.is_empty(), || {
        AssertionError::shape("`type` should not be empty")
    })?;

    position(fields.get("position"))?;

    if let Some(children) = present(fields, "children") {
        ensure(children.is_array(), || {
            AssertionError::shape("`children` should be an array")
        })?;
    }

    Ok(fields)
}

/// Checks that `value` is a unist parent.
pub fn parent(value: &Value) -> Result<&Fields> {
    let fields = node(value)?;

    ensure(!fields.contains_key("value"), || {
        AssertionError::shape("parent should not have `value`")
    })?;
    ensure(present(fields, "children").is_some(), || {
        AssertionError::shape("parent should have `children`")
    })?;

    Ok(fields)
}

/// Checks that `value` is a unist literal.
pub fn literal(value: &Value) -> Result<&Fields> {
    let fields = node(value)?;

    ensure(!fields.contains_key("children"), || {
        AssertionError::shape("literal should not have `children`")
    })?;
    ensure(fields.contains_key("value"), || {
        AssertionError::shape("literal should have `value`")
    })?;

    Ok(fields)
}

/// Checks that `value` is a unist node with neither `value` nor `children`.
pub fn void(value: &Value) -> Result<&Fields> {
    let fields = node(value)?;

    ensure(!fields.contains_key("value"), || {
        AssertionError::shape("void should not have `value`")
    })?;
    ensure(!fields.contains_key("children"), || {
        AssertionError::shape("void should not have `children`")
    })?;

    Ok(fields)
}

/// Returns the field named `key`, treating `null` as absent.
pub fn present<'a>(fields: &'a Fields, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

/// Returns the children of a node, or an empty slice.
pub fn children(fields: &Fields) -> &[Value] {
    match fields.get("children") {
        Some(Value::Array(children)) => children.as_slice(),
        _ => &[],
    }
}
