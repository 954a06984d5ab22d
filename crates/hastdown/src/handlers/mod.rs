//! Handler registry for hast to mdast conversion.
//!
//! Every HTML element is looked up by tag name. Elements either produce
//! nothing, hand their converted children through, hand them through wrapped
//! as blocks, or map onto a dedicated mdast node.

mod block;
mod form;
mod inline;
mod list;
mod media;
pub(crate) mod table;

use indexmap::IndexMap;

use crate::hast::{self, Element};
use crate::mdast;
use crate::state::State;
use crate::wrap::{wrap, wrap_needed};

pub use list::list_items_spread;
pub use table::CellSpan;

/// Result of a handler: one node or a flat run of nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    One(mdast::Node),
    Many(Vec<mdast::Node>),
}

impl Converted {
    pub fn is_empty(&self) -> bool {
        matches!(self, Converted::Many(nodes) if nodes.is_empty())
    }

    pub fn into_vec(self) -> Vec<mdast::Node> {
        match self {
            Converted::One(node) => vec![node],
            Converted::Many(nodes) => nodes,
        }
    }
}

impl From<mdast::Node> for Converted {
    fn from(node: mdast::Node) -> Self {
        Converted::One(node)
    }
}

impl From<Vec<mdast::Node>> for Converted {
    fn from(nodes: Vec<mdast::Node>) -> Self {
        Converted::Many(nodes)
    }
}

/// Type alias for element handlers
pub type Handler =
    Box<dyn Fn(&mut State<'_>, &Element, Option<&Element>) -> Option<Converted> + Send + Sync>;

/// Type alias for handlers of a node kind (`root`, `text`, `comment`, ...)
pub type NodeHandler =
    Box<dyn Fn(&mut State<'_>, &hast::Node, Option<&Element>) -> Option<Converted> + Send + Sync>;

/// Elements that never produce output
const IGNORED: &[&str] = &[
    "applet", "area", "basefont", "bgsound", "caption", "col", "colgroup", "command", "content",
    "datalist", "dialog", "element", "embed", "frame", "frameset", "isindex", "keygen", "link",
    "math", "menu", "menuitem", "meta", "nextid", "noembed", "noframes", "optgroup", "option",
    "param", "script", "shadow", "source", "spacer", "style", "svg", "template", "title", "track",
];

/// Elements replaced by their children
const PASS_THROUGH: &[&str] = &[
    "abbr", "acronym", "bdi", "bdo", "big", "blink", "button", "canvas", "cite", "data",
    "details", "dfn", "font", "ins", "label", "map", "marquee", "meter", "nobr", "noscript",
    "object", "output", "progress", "rb", "rbc", "rp", "rt", "rtc", "ruby", "slot", "small",
    "span", "sup", "sub", "tbody", "tfoot", "thead", "time",
];

/// Elements replaced by their children, wrapped as blocks
const FLOW: &[&str] = &[
    "address", "article", "aside", "body", "center", "div", "fieldset", "figcaption", "figure",
    "form", "footer", "header", "hgroup", "html", "legend", "main", "multicol", "nav", "picture",
    "section",
];

/// Handler table, keyed by tag name and by node kind
pub struct Handlers {
    tags: IndexMap<String, Handler>,
    nodes: IndexMap<String, NodeHandler>,
}

impl Handlers {
    /// Create the default handler table
    pub fn new() -> Self {
        let mut handlers = Self::empty();

        for tag in IGNORED {
            handlers.insert(tag, ignore);
        }
        for tag in PASS_THROUGH {
            handlers.insert(tag, pass_through);
        }
        for tag in FLOW {
            handlers.insert(tag, flow);
        }

        handlers.insert("a", inline::link);
        handlers.insert("audio", media::media);
        handlers.insert("b", inline::strong);
        handlers.insert("base", inline::base);
        handlers.insert("blockquote", block::blockquote);
        handlers.insert("br", inline::line_break);
        handlers.insert("code", inline::inline_code);
        handlers.insert("dd", list::list_item);
        handlers.insert("del", inline::delete);
        handlers.insert("dir", list::list);
        handlers.insert("dl", list::definition_list);
        handlers.insert("dt", list::list_item);
        handlers.insert("em", inline::emphasis);
        for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            handlers.insert(tag, block::heading);
        }
        handlers.insert("hr", block::thematic_break);
        handlers.insert("i", inline::emphasis);
        handlers.insert("iframe", media::iframe);
        handlers.insert("image", inline::image);
        handlers.insert("img", inline::image);
        handlers.insert("input", form::input);
        handlers.insert("kbd", inline::inline_code);
        handlers.insert("li", list::list_item);
        handlers.insert("listing", block::code);
        handlers.insert("mark", inline::emphasis);
        handlers.insert("ol", list::list);
        handlers.insert("p", block::paragraph);
        handlers.insert("plaintext", block::code);
        handlers.insert("pre", block::code);
        handlers.insert("q", inline::quote);
        handlers.insert("s", inline::delete);
        handlers.insert("samp", inline::inline_code);
        handlers.insert("select", form::select);
        handlers.insert("strike", inline::delete);
        handlers.insert("strong", inline::strong);
        handlers.insert("summary", block::paragraph);
        handlers.insert("table", table::table);
        handlers.insert("td", table::table_cell);
        handlers.insert("textarea", form::textarea);
        handlers.insert("th", table::table_cell);
        handlers.insert("tr", table::table_row);
        handlers.insert("tt", inline::inline_code);
        handlers.insert("u", inline::emphasis);
        handlers.insert("ul", list::list);
        handlers.insert("var", inline::inline_code);
        handlers.insert("video", media::media);
        handlers.insert("wbr", inline::word_break);
        handlers.insert("xmp", block::code);

        handlers.insert_node("root", root);
        handlers.insert_node("text", text);
        handlers.insert_node("comment", comment);
        handlers.insert_node("doctype", |_, _, _| None);

        handlers
    }

    /// Create a table with no handlers at all
    pub fn empty() -> Self {
        Self {
            tags: IndexMap::new(),
            nodes: IndexMap::new(),
        }
    }

    /// Set the handler for a tag, replacing any existing one
    pub fn insert<F>(&mut self, tag: &str, handler: F)
    where
        F: Fn(&mut State<'_>, &Element, Option<&Element>) -> Option<Converted>
            + Send
            + Sync
            + 'static,
    {
        self.tags.insert(tag.to_lowercase(), Box::new(handler));
    }

    /// Set the handler for a node kind, replacing any existing one
    pub fn insert_node<F>(&mut self, kind: &str, handler: F)
    where
        F: Fn(&mut State<'_>, &hast::Node, Option<&Element>) -> Option<Converted>
            + Send
            + Sync
            + 'static,
    {
        self.nodes.insert(kind.to_string(), Box::new(handler));
    }

    /// Remove the handler for a tag, so the element falls back to its
    /// children
    pub fn remove(&mut self, tag: &str) -> bool {
        self.tags.shift_remove(&tag.to_lowercase()).is_some()
    }

    /// Remove the handler for a node kind
    pub fn remove_node(&mut self, kind: &str) -> bool {
        self.nodes.shift_remove(kind).is_some()
    }

    pub fn get(&self, tag: &str) -> Option<&Handler> {
        self.tags
            .get(tag)
            .or_else(|| self.tags.get(&tag.to_lowercase()))
    }

    pub fn get_node(&self, kind: &str) -> Option<&NodeHandler> {
        self.nodes.get(kind)
    }

    /// Registered tag names, in registration order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }
}

impl Default for Handlers {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Handlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("tags", &self.tags.len())
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Produce nothing
pub fn ignore(_: &mut State<'_>, _: &Element, _: Option<&Element>) -> Option<Converted> {
    None
}

/// Produce the converted children
pub fn pass_through(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    Some(state.all(element).into())
}

/// Produce the converted children as block content
pub fn flow(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    Some(wrap(state.all(element)).into())
}

fn root(state: &mut State<'_>, node: &hast::Node, _: Option<&Element>) -> Option<Converted> {
    let mut children = state.all(node);
    if state.options().document || wrap_needed(&children) {
        children = wrap(children);
    }

    let mut result = mdast::Node::Root(mdast::Root {
        children,
        ..Default::default()
    });
    state.patch(node.position(), &mut result);
    Some(result.into())
}

fn text(state: &mut State<'_>, node: &hast::Node, _: Option<&Element>) -> Option<Converted> {
    let mut result = mdast::Node::text(node.value()?);
    state.patch(node.position(), &mut result);
    Some(result.into())
}

fn comment(state: &mut State<'_>, node: &hast::Node, _: Option<&Element>) -> Option<Converted> {
    let mut result = mdast::Node::Html(mdast::Html {
        value: format!("<!--{}-->", node.value()?),
        ..Default::default()
    });
    state.patch(node.position(), &mut result);
    Some(result.into())
}
