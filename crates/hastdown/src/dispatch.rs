//! Tree walker: per-node handler dispatch with graceful fallbacks.

use crate::handlers::Converted;
use crate::hast::{self, Element, Parent};
use crate::mdast;
use crate::state::State;

impl State<'_> {
    /// Convert one source node.
    ///
    /// Ignored elements produce nothing. Otherwise the tag handler runs, then
    /// the handler for the node kind. Unhandled literals become text and
    /// unhandled parents are replaced by their converted children.
    pub fn one(&mut self, node: &hast::Node, parent: Option<&Element>) -> Option<Converted> {
        let handlers = self.handlers;

        if let hast::Node::Element(element) = node {
            if element.is_ignored() {
                return None;
            }
            if let Some(handler) = handlers.get(&element.tag_name) {
                return handler(self, element, parent).filter(|result| !result.is_empty());
            }
        }

        if let Some(handler) = handlers.get_node(node.kind()) {
            return handler(self, node, parent).filter(|result| !result.is_empty());
        }

        if let Some(value) = node.value() {
            let mut text = mdast::Node::text(value);
            self.patch(node.position(), &mut text);
            return Some(text.into());
        }

        if node.children().is_some() {
            if let hast::Node::Element(element) = node {
                tracing::trace!(tag = %element.tag_name, "no handler, converting children");
            }
            return Some(self.all(node).into());
        }

        None
    }

    /// Convert all children of a parent, flattened, in source order
    pub fn all<P: Parent + ?Sized>(&mut self, parent: &P) -> Vec<mdast::Node> {
        let parent_element = parent.as_parent_element();
        self.all_nodes(parent.child_nodes(), parent_element)
    }

    /// Convert a sequence of sibling nodes, flattened, in source order
    pub fn all_nodes<'n, I>(&mut self, nodes: I, parent: Option<&Element>) -> Vec<mdast::Node>
    where
        I: IntoIterator<Item = &'n hast::Node>,
    {
        let mut results = Vec::new();
        for node in nodes {
            match self.one(node, parent) {
                Some(Converted::One(node)) => results.push(node),
                Some(Converted::Many(nodes)) => results.extend(nodes),
                None => {}
            }
        }
        results
    }
}
