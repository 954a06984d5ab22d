//! One complete conversion: minify a copy of the source, walk it, normalize
//! the result.

use crate::handlers::{Converted, Handlers};
use crate::hast;
use crate::mdast;
use crate::minify::minify_whitespace;
use crate::options::Options;
use crate::state::State;

/// Convert a source tree into a target tree.
///
/// The caller's tree is never touched: whitespace minification runs on a
/// copy. A node that converts to nothing yields an empty root, and a run of
/// nodes is gathered under a root.
pub fn convert(tree: &hast::Node, options: &Options, handlers: &Handlers) -> mdast::Node {
    let mut clean = tree.clone();
    minify_whitespace(&mut clean, options.newlines);

    let mut state = State::new(options, handlers, &clean);
    let mut result = match state.one(&clean, None) {
        Some(Converted::One(node)) => node,
        Some(Converted::Many(children)) => root(children),
        None => root(Vec::new()),
    };

    mdast::normalize(&mut result);
    result
}

fn root(children: Vec<mdast::Node>) -> mdast::Node {
    mdast::Node::Root(mdast::Root {
        children,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_is_not_mutated() {
        let tree = hast::Node::root(vec![hast::Node::element("p")
            .with_children(vec![hast::Node::text("  spaced   out  ")])]);
        let before = tree.clone();

        let result = convert(&tree, &Options::default(), &Handlers::new());

        assert_eq!(tree, before);
        assert_eq!(result.text_content(), "spaced out");
    }

    #[test]
    fn test_fragment_conversion() {
        let em = hast::Node::element("em").with_children(vec![hast::Node::text("x")]);
        let result = convert(&em, &Options::default(), &Handlers::new());
        assert_eq!(result.kind(), "emphasis");

        let span = hast::Node::element("span")
            .with_children(vec![hast::Node::text("a"), hast::Node::element("br")]);
        let result = convert(&span, &Options::default(), &Handlers::new());
        assert_eq!(result.kind(), "root");
        assert_eq!(result.children().map(Vec::len), Some(2));
    }

    #[test]
    fn test_nothing_converts_to_empty_root() {
        let script = hast::Node::element("script");
        let result = convert(&script, &Options::default(), &Handlers::new());
        assert_eq!(result, root(Vec::new()));
    }

    #[test]
    fn test_document_forces_paragraphs() {
        let tree = hast::Node::root(vec![hast::Node::text("plain")]);
        let options = Options::default().with_document(true);
        let result = convert(&tree, &options, &Handlers::new());
        assert_eq!(
            result.children().map(|children| children[0].kind()),
            Some("paragraph")
        );
    }

    #[test]
    fn test_newlines_option() {
        let tree = hast::Node::root(vec![hast::Node::element("p")
            .with_children(vec![hast::Node::text("one\n  two")])]);
        let kept = convert(&tree, &Options::default().with_newlines(true), &Handlers::new());
        assert_eq!(kept.text_content(), "one\ntwo");

        let collapsed = convert(&tree, &Options::default(), &Handlers::new());
        assert_eq!(collapsed.text_content(), "one two");
    }
}
