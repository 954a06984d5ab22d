//! # hastdown
//!
//! Convert HTML syntax trees (hast) to Markdown syntax trees (mdast).
//!
//! The converter walks a source tree and looks every element up in a handler
//! table. Known elements map onto mdast nodes, unknown elements degrade to
//! their children or their text, and mixed inline and block content is
//! wrapped into paragraphs where Markdown needs it. Tables are rebuilt into a
//! rectangular grid with merged cells expanded.
//!
//! ## Design
//!
//! hastdown neither parses HTML nor prints Markdown:
//!
//! - **Input**: a [`hast::Node`] tree from any HTML parser, hast JSON, or the
//!   bundled `scraper` adapter (feature `html`)
//! - **Output**: a [`mdast::Node`] tree for any Markdown serializer
//!
//! ## Example (tree-based)
//!
//! ```rust
//! use hastdown::{hast::Node, mdast, Converter};
//!
//! let tree = Node::root(vec![
//!     Node::element("h1").with_children(vec![Node::text("Hello World")]),
//! ]);
//!
//! let converter = Converter::new();
//! let result = converter.convert(&tree);
//!
//! match &result.children().unwrap()[0] {
//!     mdast::Node::Heading(heading) => assert_eq!(heading.depth, 1),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use hastdown::Converter;
//!
//! let converter = Converter::new();
//! let result = converter.convert_html("<ul><li>One</li><li>Two</li></ul>");
//! assert_eq!(result.children().unwrap()[0].kind(), "list");
//! ```

mod coerce;
mod convert;
mod dispatch;
mod handlers;
pub mod hast;
#[cfg(feature = "html")]
pub mod html;
mod minify;
mod options;
mod service;
mod state;
mod utilities;
mod wrap;

pub use hastdown_core as mdast;

pub use coerce::to_specific_content;
pub use convert::convert;
pub use handlers::{
    flow, ignore, list_items_spread, pass_through, CellSpan, Converted, Handler, Handlers,
    NodeHandler,
};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use minify::minify_whitespace;
pub use options::Options;
pub use service::Converter;
pub use state::State;
pub use utilities::*;
pub use wrap::{drop_surrounding_breaks, wrap, wrap_needed};

/// Error type for hastdown operations
#[derive(Debug, thiserror::Error)]
pub enum HastdownError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HastdownError>;
