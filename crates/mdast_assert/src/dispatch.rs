//! Routes a node to the checks for its `type`.

use serde_json::Value;
use tracing::trace;
use unist_assert::{Result, wrap};

use crate::NodeKind;
use crate::validators;

/// Asserts `node` and its descendants, choosing checks by `node.type`.
///
/// Values without a string `type` and extension types go to the generic unist
/// assertion, which rejects the former and accepts any well-formed node for
/// the latter. Every path attaches node context to its errors.
pub(crate) fn dispatch(node: &Value, ancestor: Option<&Value>) -> Result<()> {
    let Some(tag) = node.get("type").and_then(Value::as_str) else {
        trace!("node has no usable type, checking generic shape");
        return unist_assert::assert(node, ancestor);
    };

    let Some(kind) = NodeKind::from_tag(tag) else {
        trace!(node_type = tag, "extension node, checking generic shape");
        return unist_assert::assert(node, ancestor);
    };

    trace!(node_type = tag, "asserting node");
    wrap(handler(kind))(node, ancestor)
}

/// Asserts every child of `node`, in order, with `node` as their ancestor.
pub(crate) fn all(node: &Value, children: &[Value]) -> Result<()> {
    children
        .iter()
        .try_for_each(|child| dispatch(child, Some(node)))
}

type Handler = fn(&Value, Option<&Value>) -> Result<()>;

fn handler(kind: NodeKind) -> Handler {
    match kind {
        NodeKind::Root => validators::root,
        NodeKind::Paragraph
        | NodeKind::Blockquote
        | NodeKind::TableRow
        | NodeKind::TableCell
        | NodeKind::Strong
        | NodeKind::Emphasis
        | NodeKind::Delete
        | NodeKind::Footnote => validators::parent,
        NodeKind::List => validators::list,
        NodeKind::ListItem => validators::list_item,
        NodeKind::Heading => validators::heading,
        NodeKind::FootnoteDefinition => validators::footnote_definition,
        NodeKind::Definition => validators::definition,
        NodeKind::Link => validators::link,
        NodeKind::Image => validators::image,
        NodeKind::LinkReference => validators::link_reference,
        NodeKind::ImageReference => validators::image_reference,
        NodeKind::FootnoteReference => validators::footnote_reference,
        NodeKind::Table => validators::table,
        NodeKind::Text
        | NodeKind::InlineCode
        | NodeKind::Yaml
        | NodeKind::Toml
        | NodeKind::Html => validators::literal,
        NodeKind::Code => validators::code,
        NodeKind::ThematicBreak | NodeKind::Break => validators::void,
    }
}
