//! Assertion error types.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Result type for assertions.
pub type Result<T> = std::result::Result<T, AssertionError>;

/// The rule family a failed assertion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum ErrorKind {
    /// The value is not shaped like a node, parent, literal, or void.
    Shape,
    /// A present field has the wrong primitive type.
    FieldType,
    /// A present field has the right type but an invalid value.
    FieldRange,
    /// A present field is not one of its permitted values.
    FieldEnum,
    /// A field is only valid together with another field.
    CrossField,
    /// The node is invalid in its position in the tree.
    Context,
}

/// An assertion that failed on a node.
///
/// The rendered message has the form ``<rule>: `<node>` `` and, when the node
/// was checked as a child, `` in `<parent>` `` is appended. Nodes are rendered
/// as compact JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", render_context(.context.as_ref()))]
pub struct AssertionError {
    kind: ErrorKind,
    message: String,
    context: Option<Context>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Context {
    node: String,
    parent: Option<String>,
}

fn render_context(context: Option<&Context>) -> String {
    match context {
        None => String::new(),
        Some(Context { node, parent: None }) => format!(": `{node}`"),
        Some(Context {
            node,
            parent: Some(parent),
        }) => format!(": `{node}` in `{parent}`"),
    }
}

impl AssertionError {
    /// Creates a new error without node context.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Creates a shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Shape, message)
    }

    /// Creates a field type error.
    pub fn field_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::FieldType, message)
    }

    /// Creates a field range error.
    pub fn field_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::FieldRange, message)
    }

    /// Creates a field enumeration error.
    pub fn field_enum(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::FieldEnum, message)
    }

    /// Creates a cross-field error.
    pub fn cross_field(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CrossField, message)
    }

    /// Creates a tree context error.
    pub fn misplaced(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Context, message)
    }

    /// Attaches the failing node (and its parent) to this error.
    ///
    /// Context is attached once: an error that already carries context is
    /// returned unchanged, so the innermost failing node is what gets reported.
    pub fn with_context(mut self, node: &Value, parent: Option<&Value>) -> Self {
        if self.context.is_none() {
            self.context = Some(Context {
                node: node.to_string(),
                parent: parent.map(Value::to_string),
            });
        }
        self
    }

    /// Returns the rule family of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the rule message, without node context.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the rendered failing node, if context was attached.
    pub fn node(&self) -> Option<&str> {
        self.context.as_ref().map(|context| context.node.as_str())
    }

    /// Returns the rendered parent of the failing node, if it had one.
    pub fn parent(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|context| context.parent.as_deref())
    }
}

/// Fails with `error()` unless `condition` holds.
#[inline]
pub fn ensure(condition: bool, error: impl FnOnce() -> AssertionError) -> Result<()> {
    if condition { Ok(()) } else { Err(error()) }
}
