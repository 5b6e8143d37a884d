//! Positional info checks.

use serde_json::{Map, Value};

use crate::error::{AssertionError, Result, ensure};

/// Checks `position`, if present, and its `start` and `end` points.
pub(crate) fn position(value: Option<&Value>) -> Result<()> {
    match value {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Object(position)) => {
            point(position.get("start"), "position.start")?;
            point(position.get("end"), "position.end")
        }
        Some(_) => Err(AssertionError::field_type("`position` should be an object")),
    }
}

fn point(value: Option<&Value>, label: &str) -> Result<()> {
    match value {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Object(point)) => {
            coordinate(point, label, "line", 1.0)?;
            coordinate(point, label, "column", 1.0)?;
            coordinate(point, label, "offset", 0.0)
        }
        Some(_) => Err(AssertionError::field_type(format!(
            "`{label}` should be an object"
        ))),
    }
}

fn coordinate(point: &Map<String, Value>, label: &str, key: &str, min: f64) -> Result<()> {
    let value = match point.get(key) {
        None | Some(Value::Null) => return Ok(()),
        Some(value) => value,
    };

    let Some(number) = value.as_f64() else {
        return Err(AssertionError::field_type(format!(
            "`{label}` should have numeric `{key}`"
        )));
    };

    ensure(number >= min, || {
        AssertionError::field_range(format!("`{label}.{key}` should be gte `{min}`"))
    })
}
