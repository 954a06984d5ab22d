//! hastdown-core - Markdown syntax tree and normalization
//!
//! This crate provides the mdast data structures produced by `hastdown`
//! and the normalization pass that runs once over a finished tree.
//!
//! # Architecture
//!
//! ```text
//! HTML parser ──▶ hast tree ──hastdown──▶ ┌─────────────┐
//!                                         │ mdast tree  │ ──▶ any mdast serializer
//!                                         └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use hastdown_core::{normalize, Node, Root};
//!
//! let mut tree = Node::Root(Root {
//!     children: vec![Node::paragraph(vec![
//!         Node::text("  Hello "),
//!         Node::text("World  "),
//!     ])],
//!     ..Default::default()
//! });
//!
//! normalize(&mut tree);
//! assert_eq!(tree.text_content(), "Hello World");
//! ```

mod ast;
mod normalize;
mod phrasing;

pub use ast::{
    nodes_text_content, AlignKind, Blockquote, Break, Code, Data, Delete, Emphasis, Heading, Html,
    Image, InlineCode, Link, List, ListItem, Node, Paragraph, Point, Position, Root, Strong,
    Table, TableCell, TableRow, Text, ThematicBreak,
};
pub use normalize::normalize;
pub use phrasing::{is_phrasing_tag, PHRASING_ELEMENTS};
