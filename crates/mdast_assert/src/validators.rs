//! Checks for each known node kind.
//!
//! Every check first asserts the structural category (parent, literal, or
//! void), descending into children for parents, and then checks the fields of
//! its kind in a fixed order. The first failing rule is returned.

use serde_json::Value;
use unist_assert::shape::{self, Fields, present};
use unist_assert::{AssertionError, Result, ensure};

use crate::dispatch::all;

const REFERENCE_TYPES: [&str; 3] = ["shortcut", "collapsed", "full"];
const ALIGNS: [&str; 3] = ["left", "right", "center"];

/// Asserts the parent shape, then every child through the dispatcher.
pub(crate) fn assert_parent(node: &Value) -> Result<&Fields> {
    let fields = shape::parent(node)?;
    all(node, shape::children(fields))?;
    Ok(fields)
}

/// Asserts the literal shape with a string `value`.
pub(crate) fn assert_literal(node: &Value) -> Result<&Fields> {
    let fields = shape::literal(node)?;
    ensure(fields.get("value").is_some_and(Value::is_string), || {
        AssertionError::shape("literal should have a string `value`")
    })?;
    Ok(fields)
}

pub(crate) fn parent(node: &Value, _: Option<&Value>) -> Result<()> {
    assert_parent(node).map(drop)
}

pub(crate) fn literal(node: &Value, _: Option<&Value>) -> Result<()> {
    assert_literal(node).map(drop)
}

pub(crate) fn void(node: &Value, _: Option<&Value>) -> Result<()> {
    shape::void(node).map(drop)
}

pub(crate) fn root(node: &Value, ancestor: Option<&Value>) -> Result<()> {
    assert_parent(node)?;
    ensure(ancestor.is_none(), || {
        AssertionError::misplaced("`root` should not have a parent")
    })
}

pub(crate) fn list(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = assert_parent(node)?;

    optional_boolean(fields, "spread")?;
    optional_boolean(fields, "ordered")?;

    let ordered = present(fields, "ordered")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    match present(fields, "start") {
        None => Ok(()),
        Some(_) if !ordered => Err(AssertionError::cross_field(
            "unordered lists must not have `start`",
        )),
        Some(start) => {
            let Some(start) = start.as_f64() else {
                return Err(AssertionError::field_type("`start` must be `number`"));
            };
            ensure(start >= 0.0, || {
                AssertionError::field_range("`start` must be gte `0`")
            })
        }
    }
}

pub(crate) fn list_item(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = assert_parent(node)?;

    optional_boolean(fields, "spread")?;
    optional_boolean(fields, "checked")
}

pub(crate) fn heading(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = assert_parent(node)?;

    let Some(depth) = fields.get("depth").and_then(Value::as_f64) else {
        return Err(AssertionError::field_type("`depth` should be a number"));
    };
    ensure(depth >= 1.0, || {
        AssertionError::field_range("`depth` should be gte `1`")
    })?;
    ensure(depth <= 6.0, || {
        AssertionError::field_range("`depth` should be lte `6`")
    })
}

pub(crate) fn code(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = assert_literal(node)?;

    optional_string(fields, "lang")?;

    if let Some(meta) = present(fields, "meta") {
        ensure(present(fields, "lang").is_some(), || {
            AssertionError::cross_field("code with `meta` must also have `lang`")
        })?;
        ensure(meta.is_string(), || {
            AssertionError::field_type("`meta` must be `string`")
        })?;
    }

    Ok(())
}

pub(crate) fn footnote_definition(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = assert_parent(node)?;

    required_string(
        fields,
        "identifier",
        "`footnoteDefinition` must have `identifier`",
    )?;
    optional_string(fields, "label")
}

pub(crate) fn definition(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = shape::void(node)?;

    required_string(fields, "identifier", "`identifier` must be `string`")?;
    required_string(fields, "url", "`url` must be `string`")?;
    optional_string(fields, "label")?;
    optional_string(fields, "title")
}

pub(crate) fn link(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = assert_parent(node)?;

    required_string(fields, "url", "`url` must be `string`")?;
    optional_string(fields, "title")
}

pub(crate) fn image(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = shape::void(node)?;

    required_string(fields, "url", "`url` must be `string`")?;
    optional_string(fields, "title")?;
    optional_string(fields, "alt")
}

pub(crate) fn link_reference(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = assert_parent(node)?;

    required_string(fields, "identifier", "`identifier` must be `string`")?;
    optional_string(fields, "label")?;
    reference_type(fields)
}

pub(crate) fn image_reference(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = shape::void(node)?;

    required_string(fields, "identifier", "`identifier` must be `string`")?;
    optional_string(fields, "label")?;
    optional_string(fields, "alt")?;
    reference_type(fields)
}

pub(crate) fn footnote_reference(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = shape::void(node)?;

    required_string(fields, "identifier", "`identifier` must be `string`")?;
    optional_string(fields, "label")
}

pub(crate) fn table(node: &Value, _: Option<&Value>) -> Result<()> {
    let fields = assert_parent(node)?;

    let Some(align) = present(fields, "align") else {
        return Ok(());
    };
    let Some(align) = align.as_array() else {
        return Err(AssertionError::field_type("`align` must be `array`"));
    };

    align
        .iter()
        .filter(|value| !value.is_null())
        .try_for_each(|value| {
            ensure(
                value.as_str().is_some_and(|align| ALIGNS.contains(&align)),
                || {
                    AssertionError::field_enum(
                        "each align in table must be `null, 'left', 'right', 'center'`",
                    )
                },
            )
        })
}

fn required_string(fields: &Fields, key: &str, message: &str) -> Result<()> {
    ensure(fields.get(key).is_some_and(Value::is_string), || {
        AssertionError::field_type(message)
    })
}

fn optional_string(fields: &Fields, key: &str) -> Result<()> {
    match present(fields, key) {
        Some(value) => ensure(value.is_string(), || {
            AssertionError::field_type(format!("`{key}` must be `string`"))
        }),
        None => Ok(()),
    }
}

fn optional_boolean(fields: &Fields, key: &str) -> Result<()> {
    match present(fields, key) {
        Some(value) => ensure(value.is_boolean(), || {
            AssertionError::field_type(format!("`{key}` must be `boolean`"))
        }),
        None => Ok(()),
    }
}

fn reference_type(fields: &Fields) -> Result<()> {
    match present(fields, "referenceType") {
        Some(value) => ensure(
            value
                .as_str()
                .is_some_and(|kind| REFERENCE_TYPES.contains(&kind)),
            || {
                AssertionError::field_enum(
                    "`referenceType` must be `shortcut`, `collapsed`, or `full`",
                )
            },
        ),
        None => Ok(()),
    }
}
