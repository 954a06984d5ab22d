//! HTML parsing support.
//!
//! This module parses HTML strings with `scraper` and converts the result to
//! the hast tree used by hastdown.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::hast::{Element, Node};

/// Parse an HTML fragment into a hast root.
///
/// This is useful when you need to inspect or rewrite the tree before
/// converting it.
///
/// # Example
///
/// ```rust
/// use hastdown::{parse_html, Converter};
///
/// let tree = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let converter = Converter::new();
/// let mdast = converter.convert(&tree);
/// assert_eq!(mdast.text_content(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    // The fragment parser puts everything under a synthetic `html` element
    Node::root(convert_children(document.root_element()))
}

/// Convert a scraper ElementRef to a hast element
fn convert_element(element: ElementRef) -> Element {
    let mut result = Element::new(element.value().name());
    for (name, value) in element.value().attrs() {
        result.properties.insert(name, value);
    }
    result.children = convert_children(element);
    result
}

fn convert_children(element: ElementRef) -> Vec<Node> {
    let mut children = Vec::new();

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => children.push(Node::text(&text.text)),
            ScraperNode::Comment(comment) => children.push(Node::comment(&comment.comment)),
            ScraperNode::Doctype(_) => children.push(Node::Doctype(Default::default())),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    children.push(Node::Element(convert_element(child_element)));
                }
            }
            _ => {}
        }
    }

    children
}
