//! Markdown Abstract Syntax Tree
//!
//! This module defines the mdast nodes produced by the hast converter.
//! Field names and node kinds follow the mdast format so the tree can be
//! handed to any mdast-aware serializer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::phrasing::is_phrasing_tag;

/// One place in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// 1-indexed line
    pub line: usize,
    /// 1-indexed column
    pub column: usize,
    /// 0-indexed offset into the source
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub offset: Option<usize>,
}

/// Location of a node in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

/// Extra information attached to a node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Data {
    /// Name of the HTML element this node was created from.
    ///
    /// When set, block/inline classification uses the HTML element instead
    /// of the mdast node kind.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub h_name: Option<String>,
}

/// Column alignment in a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlignKind {
    Left,
    Right,
    Center,
}

impl AlignKind {
    /// Parse an HTML `align` attribute value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(AlignKind::Left),
            "right" => Some(AlignKind::Right),
            "center" => Some(AlignKind::Center),
            _ => None,
        }
    }
}

/// An mdast node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum Node {
    Root(Root),
    Paragraph(Paragraph),
    Heading(Heading),
    Blockquote(Blockquote),
    List(List),
    ListItem(ListItem),
    Table(Table),
    TableRow(TableRow),
    TableCell(TableCell),
    Text(Text),
    Emphasis(Emphasis),
    Strong(Strong),
    Delete(Delete),
    InlineCode(InlineCode),
    Code(Code),
    Link(Link),
    Image(Image),
    Break(Break),
    ThematicBreak(ThematicBreak),
    Html(Html),
}

/// Document container
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Root {
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paragraph {
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

/// Heading with depth 1-6
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Heading {
    pub depth: u8,
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Blockquote {
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

/// Ordered or unordered list; children are list items
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct List {
    pub ordered: bool,
    /// First number of an ordered list
    pub start: Option<u32>,
    /// Whether items are separated by blank lines
    pub spread: bool,
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ListItem {
    pub spread: bool,
    /// `None` when the item is not a task item
    pub checked: Option<bool>,
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

/// GFM table; children are table rows
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// One entry per column
    pub align: Vec<Option<AlignKind>>,
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableRow {
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableCell {
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

/// Plain text
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Text {
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Emphasis {
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Strong {
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

/// Strikethrough
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delete {
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InlineCode {
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

/// Code block
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Code {
    pub lang: Option<String>,
    pub meta: Option<String>,
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Image {
    pub url: String,
    pub title: Option<String>,
    pub alt: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

/// Hard line break
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Break {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThematicBreak {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

/// Raw HTML (comments end up here)
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Html {
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Data>,
}

impl Node {
    /// Create a text node
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
            ..Default::default()
        })
    }

    /// Create a paragraph
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph {
            children,
            ..Default::default()
        })
    }

    /// Create an empty list item that is not a task item
    pub fn list_item() -> Self {
        Node::ListItem(ListItem::default())
    }

    /// Create an empty table row
    pub fn table_row() -> Self {
        Node::TableRow(TableRow::default())
    }

    /// Create an empty table cell
    pub fn table_cell() -> Self {
        Node::TableCell(TableCell::default())
    }

    /// The mdast `type` name of this node
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Paragraph(_) => "paragraph",
            Node::Heading(_) => "heading",
            Node::Blockquote(_) => "blockquote",
            Node::List(_) => "list",
            Node::ListItem(_) => "listItem",
            Node::Table(_) => "table",
            Node::TableRow(_) => "tableRow",
            Node::TableCell(_) => "tableCell",
            Node::Text(_) => "text",
            Node::Emphasis(_) => "emphasis",
            Node::Strong(_) => "strong",
            Node::Delete(_) => "delete",
            Node::InlineCode(_) => "inlineCode",
            Node::Code(_) => "code",
            Node::Link(_) => "link",
            Node::Image(_) => "image",
            Node::Break(_) => "break",
            Node::ThematicBreak(_) => "thematicBreak",
            Node::Html(_) => "html",
        }
    }

    /// Child nodes, if this kind of node has any
    pub fn children(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Root(n) => Some(&n.children),
            Node::Paragraph(n) => Some(&n.children),
            Node::Heading(n) => Some(&n.children),
            Node::Blockquote(n) => Some(&n.children),
            Node::List(n) => Some(&n.children),
            Node::ListItem(n) => Some(&n.children),
            Node::Table(n) => Some(&n.children),
            Node::TableRow(n) => Some(&n.children),
            Node::TableCell(n) => Some(&n.children),
            Node::Emphasis(n) => Some(&n.children),
            Node::Strong(n) => Some(&n.children),
            Node::Delete(n) => Some(&n.children),
            Node::Link(n) => Some(&n.children),
            Node::Text(_)
            | Node::InlineCode(_)
            | Node::Code(_)
            | Node::Image(_)
            | Node::Break(_)
            | Node::ThematicBreak(_)
            | Node::Html(_) => None,
        }
    }

    /// Mutable child nodes, if this kind of node has any
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(n) => Some(&mut n.children),
            Node::Paragraph(n) => Some(&mut n.children),
            Node::Heading(n) => Some(&mut n.children),
            Node::Blockquote(n) => Some(&mut n.children),
            Node::List(n) => Some(&mut n.children),
            Node::ListItem(n) => Some(&mut n.children),
            Node::Table(n) => Some(&mut n.children),
            Node::TableRow(n) => Some(&mut n.children),
            Node::TableCell(n) => Some(&mut n.children),
            Node::Emphasis(n) => Some(&mut n.children),
            Node::Strong(n) => Some(&mut n.children),
            Node::Delete(n) => Some(&mut n.children),
            Node::Link(n) => Some(&mut n.children),
            Node::Text(_)
            | Node::InlineCode(_)
            | Node::Code(_)
            | Node::Image(_)
            | Node::Break(_)
            | Node::ThematicBreak(_)
            | Node::Html(_) => None,
        }
    }

    pub fn position(&self) -> Option<&Position> {
        self.meta().0.as_ref()
    }

    pub fn set_position(&mut self, position: Option<Position>) {
        *self.meta_mut().0 = position;
    }

    pub fn data(&self) -> Option<&Data> {
        self.meta().1.as_ref()
    }

    pub fn data_mut(&mut self) -> &mut Option<Data> {
        self.meta_mut().1
    }

    fn meta(&self) -> (&Option<Position>, &Option<Data>) {
        match self {
            Node::Root(n) => (&n.position, &n.data),
            Node::Paragraph(n) => (&n.position, &n.data),
            Node::Heading(n) => (&n.position, &n.data),
            Node::Blockquote(n) => (&n.position, &n.data),
            Node::List(n) => (&n.position, &n.data),
            Node::ListItem(n) => (&n.position, &n.data),
            Node::Table(n) => (&n.position, &n.data),
            Node::TableRow(n) => (&n.position, &n.data),
            Node::TableCell(n) => (&n.position, &n.data),
            Node::Text(n) => (&n.position, &n.data),
            Node::Emphasis(n) => (&n.position, &n.data),
            Node::Strong(n) => (&n.position, &n.data),
            Node::Delete(n) => (&n.position, &n.data),
            Node::InlineCode(n) => (&n.position, &n.data),
            Node::Code(n) => (&n.position, &n.data),
            Node::Link(n) => (&n.position, &n.data),
            Node::Image(n) => (&n.position, &n.data),
            Node::Break(n) => (&n.position, &n.data),
            Node::ThematicBreak(n) => (&n.position, &n.data),
            Node::Html(n) => (&n.position, &n.data),
        }
    }

    fn meta_mut(&mut self) -> (&mut Option<Position>, &mut Option<Data>) {
        match self {
            Node::Root(n) => (&mut n.position, &mut n.data),
            Node::Paragraph(n) => (&mut n.position, &mut n.data),
            Node::Heading(n) => (&mut n.position, &mut n.data),
            Node::Blockquote(n) => (&mut n.position, &mut n.data),
            Node::List(n) => (&mut n.position, &mut n.data),
            Node::ListItem(n) => (&mut n.position, &mut n.data),
            Node::Table(n) => (&mut n.position, &mut n.data),
            Node::TableRow(n) => (&mut n.position, &mut n.data),
            Node::TableCell(n) => (&mut n.position, &mut n.data),
            Node::Text(n) => (&mut n.position, &mut n.data),
            Node::Emphasis(n) => (&mut n.position, &mut n.data),
            Node::Strong(n) => (&mut n.position, &mut n.data),
            Node::Delete(n) => (&mut n.position, &mut n.data),
            Node::InlineCode(n) => (&mut n.position, &mut n.data),
            Node::Code(n) => (&mut n.position, &mut n.data),
            Node::Link(n) => (&mut n.position, &mut n.data),
            Node::Image(n) => (&mut n.position, &mut n.data),
            Node::Break(n) => (&mut n.position, &mut n.data),
            Node::ThematicBreak(n) => (&mut n.position, &mut n.data),
            Node::Html(n) => (&mut n.position, &mut n.data),
        }
    }

    /// Copy of this node with an empty children list.
    ///
    /// Used when a node has to be re-created around different content.
    pub fn clone_without_children(&self) -> Self {
        match self {
            Node::Root(n) => Node::Root(Root {
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::Paragraph(n) => Node::Paragraph(Paragraph {
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::Heading(n) => Node::Heading(Heading {
                depth: n.depth,
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::Blockquote(n) => Node::Blockquote(Blockquote {
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::List(n) => Node::List(List {
                ordered: n.ordered,
                start: n.start,
                spread: n.spread,
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::ListItem(n) => Node::ListItem(ListItem {
                spread: n.spread,
                checked: n.checked,
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::Table(n) => Node::Table(Table {
                align: n.align.clone(),
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::TableRow(n) => Node::TableRow(TableRow {
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::TableCell(n) => Node::TableCell(TableCell {
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::Emphasis(n) => Node::Emphasis(Emphasis {
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::Strong(n) => Node::Strong(Strong {
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::Delete(n) => Node::Delete(Delete {
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            Node::Link(n) => Node::Link(Link {
                url: n.url.clone(),
                title: n.title.clone(),
                children: Vec::new(),
                position: n.position,
                data: n.data.clone(),
            }),
            literal => literal.clone(),
        }
    }

    /// Whether this node is phrasing (inline) content.
    ///
    /// A node that records the HTML element it came from is classified by
    /// that element instead of by its mdast kind.
    pub fn is_phrasing(&self) -> bool {
        if let Some(name) = self.data().and_then(|d| d.h_name.as_deref()) {
            return is_phrasing_tag(name);
        }
        matches!(
            self,
            Node::Text(_)
                | Node::Emphasis(_)
                | Node::Strong(_)
                | Node::Delete(_)
                | Node::InlineCode(_)
                | Node::Link(_)
                | Node::Image(_)
                | Node::Break(_)
                | Node::Html(_)
        )
    }

    /// Whether this is a text node holding only whitespace
    pub fn is_whitespace_text(&self) -> bool {
        match self {
            Node::Text(text) => text
                .value
                .chars()
                .all(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')),
            _ => false,
        }
    }

    /// Plain-text value of this node and its descendants.
    ///
    /// Literal nodes contribute their value, images their alt text.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text_content(&mut out);
        out
    }

    fn push_text_content(&self, out: &mut String) {
        match self {
            Node::Text(n) => out.push_str(&n.value),
            Node::InlineCode(n) => out.push_str(&n.value),
            Node::Code(n) => out.push_str(&n.value),
            Node::Html(n) => out.push_str(&n.value),
            Node::Image(n) => out.push_str(&n.alt),
            other => {
                if let Some(children) = other.children() {
                    for child in children {
                        child.push_text_content(out);
                    }
                }
            }
        }
    }
}

/// Plain-text value of a sequence of nodes
pub fn nodes_text_content(nodes: &[Node]) -> String {
    nodes.iter().map(Node::text_content).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str, children: Vec<Node>) -> Node {
        Node::Link(Link {
            url: url.to_string(),
            children,
            ..Default::default()
        })
    }

    #[test]
    fn test_phrasing_by_kind() {
        assert!(Node::text("a").is_phrasing());
        assert!(link("#", vec![]).is_phrasing());
        assert!(!Node::paragraph(vec![]).is_phrasing());
        assert!(!Node::ThematicBreak(ThematicBreak::default()).is_phrasing());
    }

    #[test]
    fn test_phrasing_prefers_provenance() {
        let mut node = Node::text("a");
        *node.data_mut() = Some(Data {
            h_name: Some("div".to_string()),
        });
        assert!(!node.is_phrasing());

        let mut para = Node::paragraph(vec![]);
        *para.data_mut() = Some(Data {
            h_name: Some("span".to_string()),
        });
        assert!(para.is_phrasing());
    }

    #[test]
    fn test_clone_without_children_keeps_fields() {
        let node = link("https://example.com", vec![Node::text("x")]);
        let copy = node.clone_without_children();
        match copy {
            Node::Link(l) => {
                assert_eq!(l.url, "https://example.com");
                assert!(l.children.is_empty());
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_text_content_includes_alt() {
        let node = Node::paragraph(vec![
            Node::text("see "),
            Node::Image(Image {
                url: "a.png".to_string(),
                alt: "chart".to_string(),
                ..Default::default()
            }),
        ]);
        assert_eq!(node.text_content(), "see chart");
    }

    #[test]
    fn test_whitespace_text() {
        assert!(Node::text(" \n\t").is_whitespace_text());
        assert!(!Node::text(" a ").is_whitespace_text());
        assert!(!Node::Break(Break::default()).is_whitespace_text());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_mdast_json() {
        let node = Node::Heading(Heading {
            depth: 2,
            children: vec![Node::text("Hi")],
            ..Default::default()
        });

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "heading",
                "depth": 2,
                "children": [{"type": "text", "value": "Hi"}]
            })
        );

        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_align_parse() {
        assert_eq!(AlignKind::parse("left"), Some(AlignKind::Left));
        assert_eq!(AlignKind::parse("center"), Some(AlignKind::Center));
        assert_eq!(AlignKind::parse("justify"), None);
    }
}
