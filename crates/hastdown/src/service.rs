//! Converter - the main entry point for hast to mdast conversion.

use crate::convert::convert;
use crate::handlers::{ignore, Converted, Handlers};
use crate::hast::{self, Element};
use crate::mdast;
use crate::options::Options;
use crate::state::State;
use crate::Result;

/// Converts source trees using a set of options and a handler table.
///
/// A converter holds no per-conversion state, so one instance can be shared
/// across threads and reused for any number of trees.
pub struct Converter {
    options: Options,
    handlers: Handlers,
}

impl Converter {
    /// Create a Converter with default options and handlers
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            handlers: Handlers::new(),
        }
    }

    /// Create a Converter with custom options
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            handlers: Handlers::new(),
        }
    }

    /// Convert a source tree (or fragment) to a target tree
    pub fn convert(&self, tree: &hast::Node) -> mdast::Node {
        convert(tree, &self.options, &self.handlers)
    }

    /// Decode a hast JSON document and convert it
    pub fn convert_json(&self, json: &str) -> Result<mdast::Node> {
        let tree = hast::Node::from_json(json)?;
        Ok(self.convert(&tree))
    }

    /// Parse an HTML fragment and convert it
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> mdast::Node {
        self.convert(&crate::html::parse_html(html))
    }

    /// Set the handler for a tag, replacing the default one
    pub fn add_handler<F>(&mut self, tag: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut State<'_>, &Element, Option<&Element>) -> Option<Converted>
            + Send
            + Sync
            + 'static,
    {
        self.handlers.insert(tag, handler);
        self
    }

    /// Set the handler for a node kind (`root`, `text`, `comment`, `doctype`)
    pub fn add_node_handler<F>(&mut self, kind: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut State<'_>, &hast::Node, Option<&Element>) -> Option<Converted>
            + Send
            + Sync
            + 'static,
    {
        self.handlers.insert_node(kind, handler);
        self
    }

    /// Drop elements with this tag, children included
    pub fn remove(&mut self, tag: &str) -> &mut Self {
        self.handlers.insert(tag, ignore);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the handler table
    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// Get mutable access to the handler table
    pub fn handlers_mut(&mut self) -> &mut Handlers {
        &mut self.handlers
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HastdownError;

    fn paragraph(text: &str) -> hast::Node {
        hast::Node::element("p").with_children(vec![hast::Node::text(text)])
    }

    #[test]
    fn test_simple_paragraph() {
        let converter = Converter::new();
        let result = converter.convert(&hast::Node::root(vec![paragraph("Hello World")]));
        assert_eq!(
            result,
            mdast::Node::Root(mdast::Root {
                children: vec![mdast::Node::paragraph(vec![mdast::Node::text("Hello World")])],
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_custom_handler_replaces_default() {
        let mut converter = Converter::new();
        converter.add_handler("p", |state, element, _| {
            let mut node = mdast::Node::Heading(mdast::Heading {
                depth: 2,
                children: state.all(element),
                ..Default::default()
            });
            state.patch(element.position, &mut node);
            Some(node.into())
        });

        let result = converter.convert(&hast::Node::root(vec![paragraph("Title")]));
        let kinds: Vec<_> = result.children().unwrap().iter().map(mdast::Node::kind).collect();
        assert_eq!(kinds, vec!["heading"]);
    }

    #[test]
    fn test_custom_element_tag() {
        let mut converter = Converter::new();
        converter.add_handler("x-note", |state, element, _| {
            Some(mdast::Node::Blockquote(mdast::Blockquote {
                children: crate::wrap(state.all(element)),
                ..Default::default()
            })
            .into())
        });

        let note = hast::Node::element("x-note").with_children(vec![hast::Node::text("Careful")]);
        let result = converter.convert(&hast::Node::root(vec![note]));
        assert_eq!(result.children().unwrap()[0].kind(), "blockquote");
    }

    #[test]
    fn test_remove_drops_content() {
        let mut converter = Converter::new();
        converter.remove("em");
        let tree = hast::Node::root(vec![
            hast::Node::text("keep "),
            hast::Node::element("em").with_children(vec![hast::Node::text("drop")]),
        ]);
        assert_eq!(converter.convert(&tree).text_content(), "keep");
    }

    #[test]
    fn test_node_handler_override() {
        let mut converter = Converter::new();
        converter.add_node_handler("comment", |_, _, _| None);
        let tree = hast::Node::root(vec![hast::Node::comment("hidden")]);
        assert_eq!(converter.convert(&tree).children().map(Vec::len), Some(0));
    }

    #[test]
    fn test_plugin() {
        let mut converter = Converter::new();
        converter.use_plugin(|converter| {
            converter.options_mut().checked = "✓".to_string();
            converter.remove("img");
        });
        assert_eq!(converter.options().checked, "✓");
        assert!(converter.handlers().get("img").is_some());
    }

    #[test]
    fn test_convert_json() {
        let converter = Converter::new();
        let json = r#"{
            "type": "root",
            "children": [
                {
                    "type": "element",
                    "tagName": "h2",
                    "properties": {"id": "intro"},
                    "children": [{"type": "text", "value": "Intro"}]
                }
            ]
        }"#;
        let result = converter.convert_json(json).unwrap();
        match &result.children().unwrap()[0] {
            mdast::Node::Heading(heading) => assert_eq!(heading.depth, 2),
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_json_rejects_garbage() {
        let converter = Converter::new();
        let error = converter.convert_json("{\"type\": \"nope\"}").unwrap_err();
        assert!(matches!(error, HastdownError::InvalidInput(_)));
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_convert_html() {
        let converter = Converter::new();
        let result = converter.convert_html("<p>Hello <strong>World</strong></p>");
        assert_eq!(result.text_content(), "Hello World");
        match &result.children().unwrap()[0] {
            mdast::Node::Paragraph(paragraph) => {
                assert_eq!(paragraph.children[1].kind(), "strong");
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }
}
