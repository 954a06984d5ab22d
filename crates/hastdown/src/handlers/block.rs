//! Block handlers: paragraphs, headings, quotes, rules and code blocks.

use super::Converted;
use crate::hast::Element;
use crate::mdast;
use crate::state::State;
use crate::utilities::trim_trailing_lines;
use crate::wrap::{drop_surrounding_breaks, wrap};

const LANGUAGE_PREFIX: &str = "language-";

pub(super) fn paragraph(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let children = drop_surrounding_breaks(state.all(element));
    if children.is_empty() {
        return None;
    }

    let mut result = mdast::Node::paragraph(children);
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn heading(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let depth = element
        .tag_name
        .chars()
        .nth(1)
        .and_then(|c| c.to_digit(10))
        .filter(|depth| *depth > 0)
        .map_or(1, |depth| depth.min(6) as u8);

    let mut result = mdast::Node::Heading(mdast::Heading {
        depth,
        children: drop_surrounding_breaks(state.all(element)),
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn blockquote(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let mut result = mdast::Node::Blockquote(mdast::Blockquote {
        children: wrap(state.all(element)),
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn thematic_break(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let mut result = mdast::Node::ThematicBreak(mdast::ThematicBreak::default());
    state.patch(element.position, &mut result);
    Some(result.into())
}

/// `pre` and friends become a code block; the language comes from a
/// `language-*` class on a `code` child of `pre`
pub(super) fn code(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let lang = if element.tag_name == "pre" {
        element
            .element_children()
            .find(|child| child.tag_name == "code")
            .and_then(|code| {
                code.class_list()
                    .into_iter()
                    .find_map(|class| class.strip_prefix(LANGUAGE_PREFIX).map(str::to_string))
            })
            .filter(|lang| !lang.is_empty())
    } else {
        None
    };

    let text = element.to_text();
    let mut result = mdast::Node::Code(mdast::Code {
        lang,
        meta: None,
        value: trim_trailing_lines(&text).to_string(),
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

#[cfg(test)]
mod tests {
    use crate::hast::Node;
    use crate::mdast;
    use crate::Converter;

    fn convert(node: Node) -> Vec<mdast::Node> {
        match Converter::new().convert(&Node::root(vec![node])) {
            mdast::Node::Root(root) => root.children,
            other => vec![other],
        }
    }

    #[test]
    fn test_heading_depth() {
        let nodes = convert(Node::element("h3").with_children(vec![Node::text("Title")]));
        match &nodes[0] {
            mdast::Node::Heading(heading) => {
                assert_eq!(heading.depth, 3);
                assert_eq!(heading.children, vec![mdast::Node::text("Title")]);
            }
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn test_heading_drops_surrounding_breaks() {
        let nodes = convert(Node::element("h1").with_children(vec![
            Node::element("br"),
            Node::text("A"),
            Node::element("br"),
        ]));
        assert_eq!(nodes[0].children().unwrap(), &vec![mdast::Node::text("A")]);
    }

    #[test]
    fn test_empty_paragraph_is_dropped() {
        let nodes = convert(Node::element("p").with_children(vec![Node::element("br")]));
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_code_block_language() {
        let pre = Node::element("pre").with_children(vec![Node::element_with_attrs(
            "code",
            vec![("class", "hljs language-rust")],
        )
        .with_children(vec![Node::text("fn main() {}\n\n")])]);
        match &convert(pre)[0] {
            mdast::Node::Code(code) => {
                assert_eq!(code.lang.as_deref(), Some("rust"));
                assert_eq!(code.meta, None);
                assert_eq!(code.value, "fn main() {}");
            }
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_code_block_keeps_markup_text() {
        let pre = Node::element("pre").with_children(vec![
            Node::text("a "),
            Node::element("b").with_children(vec![Node::text("bold")]),
            Node::text("\n  b"),
        ]);
        match &convert(pre)[0] {
            mdast::Node::Code(code) => {
                assert_eq!(code.lang, None);
                assert_eq!(code.value, "a bold\n  b");
            }
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_blockquote_wraps_inline() {
        let quote = Node::element("blockquote").with_children(vec![Node::text("said")]);
        match &convert(quote)[0] {
            mdast::Node::Blockquote(blockquote) => {
                assert_eq!(
                    blockquote.children,
                    vec![mdast::Node::paragraph(vec![mdast::Node::text("said")])]
                );
            }
            other => panic!("expected blockquote, got {other:?}"),
        }
    }

    #[test]
    fn test_thematic_break() {
        let nodes = convert(Node::element("hr"));
        assert_eq!(nodes[0].kind(), "thematicBreak");
    }
}
