//! Known mdast node kinds.
//!
//! See: https://github.com/syntax-tree/mdast

use serde::{Deserialize, Serialize};

/// Structural category of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Has an ordered `children` array.
    Parent,
    /// Has a string `value`.
    Literal,
    /// Has neither `children` nor `value`.
    Void,
}

/// Node kinds with dedicated checks.
///
/// Any other `type` tag is an extension and is only checked for the generic
/// unist node shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    // Document structure
    /// Document root. Must not have a parent.
    Root,

    // Flow content
    /// Paragraph of phrasing content.
    Paragraph,
    /// Heading with a `depth` of 1 to 6.
    Heading,
    /// Thematic break.
    ThematicBreak,
    /// Block quote.
    Blockquote,
    /// Ordered or unordered list.
    List,
    /// Item in a list.
    ListItem,
    /// Raw HTML.
    Html,
    /// Fenced or indented code block.
    Code,
    /// Link reference definition.
    Definition,
    /// Footnote definition.
    FootnoteDefinition,
    /// YAML frontmatter.
    Yaml,
    /// TOML frontmatter.
    Toml,

    // Tables (GFM)
    /// Table.
    Table,
    /// Table row.
    TableRow,
    /// Table cell.
    TableCell,

    // Phrasing content
    /// Plain text.
    Text,
    /// Emphasis.
    Emphasis,
    /// Strong emphasis.
    Strong,
    /// Strikethrough.
    Delete,
    /// Inline code.
    InlineCode,
    /// Hard line break.
    Break,
    /// Hyperlink.
    Link,
    /// Image.
    Image,
    /// Link through a definition.
    LinkReference,
    /// Image through a definition.
    ImageReference,
    /// Inline footnote.
    Footnote,
    /// Reference to a footnote definition.
    FootnoteReference,
}

impl NodeKind {
    /// Every known kind.
    pub const ALL: [NodeKind; 28] = [
        NodeKind::Root,
        NodeKind::Paragraph,
        NodeKind::Heading,
        NodeKind::ThematicBreak,
        NodeKind::Blockquote,
        NodeKind::List,
        NodeKind::ListItem,
        NodeKind::Html,
        NodeKind::Code,
        NodeKind::Definition,
        NodeKind::FootnoteDefinition,
        NodeKind::Yaml,
        NodeKind::Toml,
        NodeKind::Table,
        NodeKind::TableRow,
        NodeKind::TableCell,
        NodeKind::Text,
        NodeKind::Emphasis,
        NodeKind::Strong,
        NodeKind::Delete,
        NodeKind::InlineCode,
        NodeKind::Break,
        NodeKind::Link,
        NodeKind::Image,
        NodeKind::LinkReference,
        NodeKind::ImageReference,
        NodeKind::Footnote,
        NodeKind::FootnoteReference,
    ];

    /// Looks up the kind for a `type` tag.
    ///
    /// Returns `None` for extension types.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "root" => NodeKind::Root,
            "paragraph" => NodeKind::Paragraph,
            "heading" => NodeKind::Heading,
            "thematicBreak" => NodeKind::ThematicBreak,
            "blockquote" => NodeKind::Blockquote,
            "list" => NodeKind::List,
            "listItem" => NodeKind::ListItem,
            "html" => NodeKind::Html,
            "code" => NodeKind::Code,
            "definition" => NodeKind::Definition,
            "footnoteDefinition" => NodeKind::FootnoteDefinition,
            "yaml" => NodeKind::Yaml,
            "toml" => NodeKind::Toml,
            "table" => NodeKind::Table,
            "tableRow" => NodeKind::TableRow,
            "tableCell" => NodeKind::TableCell,
            "text" => NodeKind::Text,
            "emphasis" => NodeKind::Emphasis,
            "strong" => NodeKind::Strong,
            "delete" => NodeKind::Delete,
            "inlineCode" => NodeKind::InlineCode,
            "break" => NodeKind::Break,
            "link" => NodeKind::Link,
            "image" => NodeKind::Image,
            "linkReference" => NodeKind::LinkReference,
            "imageReference" => NodeKind::ImageReference,
            "footnote" => NodeKind::Footnote,
            "footnoteReference" => NodeKind::FootnoteReference,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the `type` tag of this kind.
    pub const fn tag(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::ThematicBreak => "thematicBreak",
            NodeKind::Blockquote => "blockquote",
            NodeKind::List => "list",
            NodeKind::ListItem => "listItem",
            NodeKind::Html => "html",
            NodeKind::Code => "code",
            NodeKind::Definition => "definition",
            NodeKind::FootnoteDefinition => "footnoteDefinition",
            NodeKind::Yaml => "yaml",
            NodeKind::Toml => "toml",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableCell => "tableCell",
            NodeKind::Text => "text",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Strong => "strong",
            NodeKind::Delete => "delete",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::Break => "break",
            NodeKind::Link => "link",
            NodeKind::Image => "image",
            NodeKind::LinkReference => "linkReference",
            NodeKind::ImageReference => "imageReference",
            NodeKind::Footnote => "footnote",
            NodeKind::FootnoteReference => "footnoteReference",
        }
    }

    /// Returns the structural category of this kind.
    pub const fn category(&self) -> Category {
        match self {
            NodeKind::Root
            | NodeKind::Paragraph
            | NodeKind::Heading
            | NodeKind::Blockquote
            | NodeKind::List
            | NodeKind::ListItem
            | NodeKind::FootnoteDefinition
            | NodeKind::Table
            | NodeKind::TableRow
            | NodeKind::TableCell
            | NodeKind::Emphasis
            | NodeKind::Strong
            | NodeKind::Delete
            | NodeKind::Link
            | NodeKind::LinkReference
            | NodeKind::Footnote => Category::Parent,

            NodeKind::Html
            | NodeKind::Code
            | NodeKind::Yaml
            | NodeKind::Toml
            | NodeKind::Text
            | NodeKind::InlineCode => Category::Literal,

            NodeKind::ThematicBreak
            | NodeKind::Definition
            | NodeKind::Break
            | NodeKind::Image
            | NodeKind::ImageReference
            | NodeKind::FootnoteReference => Category::Void,
        }
    }

    /// Returns true if this kind has children.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        matches!(self.category(), Category::Parent)
    }

    /// Returns true if this kind has a string value.
    #[inline]
    pub const fn is_literal(&self) -> bool {
        matches!(self.category(), Category::Literal)
    }

    /// Returns true if this kind has neither children nor a value.
    #[inline]
    pub const fn is_void(&self) -> bool {
        matches!(self.category(), Category::Void)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_tag_round_trips_every_kind() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_from_tag_unknown() {
        assert_eq!(NodeKind::from_tag("unknown"), None);
        assert_eq!(NodeKind::from_tag("invalid"), None);
        assert_eq!(NodeKind::from_tag("Paragraph"), None);
        assert_eq!(NodeKind::from_tag(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeKind::Root.to_string(), "root");
        assert_eq!(NodeKind::InlineCode.to_string(), "inlineCode");
        assert_eq!(NodeKind::ThematicBreak.to_string(), "thematicBreak");
    }

    #[test]
    fn test_serialization_matches_tag() {
        for kind in NodeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.tag()));
        }
    }

    #[test]
    fn test_deserialization() {
        let kind: NodeKind = serde_json::from_str("\"footnoteDefinition\"").unwrap();
        assert_eq!(kind, NodeKind::FootnoteDefinition);
    }

    #[test]
    fn test_parent_kinds() {
        let parents = vec![
            NodeKind::Root,
            NodeKind::Paragraph,
            NodeKind::Heading,
            NodeKind::Blockquote,
            NodeKind::List,
            NodeKind::ListItem,
            NodeKind::FootnoteDefinition,
            NodeKind::Table,
            NodeKind::TableRow,
            NodeKind::TableCell,
            NodeKind::Emphasis,
            NodeKind::Strong,
            NodeKind::Delete,
            NodeKind::Link,
            NodeKind::LinkReference,
            NodeKind::Footnote,
        ];

        for kind in parents {
            assert!(kind.is_parent(), "{:?} should be parent", kind);
        }
    }

    #[test]
    fn test_literal_kinds() {
        let literals = vec![
            NodeKind::Text,
            NodeKind::InlineCode,
            NodeKind::Yaml,
            NodeKind::Toml,
            NodeKind::Html,
            NodeKind::Code,
        ];

        for kind in literals {
            assert!(kind.is_literal(), "{:?} should be literal", kind);
        }
    }

    #[test]
    fn test_void_kinds() {
        let voids = vec![
            NodeKind::ThematicBreak,
            NodeKind::Break,
            NodeKind::Definition,
            NodeKind::Image,
            NodeKind::ImageReference,
            NodeKind::FootnoteReference,
        ];

        for kind in voids {
            assert!(kind.is_void(), "{:?} should be void", kind);
        }
    }

    #[test]
    fn test_categories_are_exclusive() {
        for kind in NodeKind::ALL {
            let count = [kind.is_parent(), kind.is_literal(), kind.is_void()]
                .iter()
                .filter(|is| **is)
                .count();
            assert_eq!(count, 1, "{:?} should have exactly one category", kind);
        }
    }
}
