//! Whitespace minification of a source tree.
//!
//! Collapses whitespace the way a browser renders it: runs of whitespace
//! become one space, whitespace next to block boundaries disappears, and
//! whitespace following other whitespace across inline siblings is dropped.
//! Preformatted elements are left alone.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::hast::{Element, Node, Text};
use crate::utilities::{is_block, is_preformatted};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t\n\x0B\x0C\r ]+").expect("valid whitespace pattern"));

static LINE_ENDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n|\r").expect("valid line ending pattern"));

/// Elements that render on their own even without text
const CONTENT_ELEMENTS: &[&str] = &[
    "audio", "canvas", "embed", "iframe", "img", "math", "object", "picture", "svg",
    "textarea", "video",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WhiteSpace {
    Normal,
    Nowrap,
    Pre,
}

#[derive(Debug, Clone, Copy)]
struct Context {
    newlines: bool,
    white_space: WhiteSpace,
    /// Whitespace at the start can be removed
    before: bool,
    /// Whitespace at the end can be removed
    after: bool,
}

#[derive(Debug, Default)]
struct Outcome {
    ignore: bool,
    strip_at_start: bool,
    remove: bool,
}

/// Minify whitespace in a tree, in place.
///
/// With `newlines`, a collapsed run that contained a line ending becomes that
/// line ending instead of a space.
pub fn minify_whitespace(node: &mut Node, newlines: bool) {
    minify(
        node,
        Context {
            newlines,
            white_space: WhiteSpace::Normal,
            before: false,
            after: false,
        },
    );
}

fn minify(node: &mut Node, cx: Context) -> Outcome {
    match node {
        Node::Root(root) => all(
            &mut root.children,
            Context {
                before: true,
                after: true,
                ..cx
            },
        ),
        Node::Element(element) => {
            let mut inner = cx;
            if is_block(&element.tag_name) {
                inner.before = true;
                inner.after = true;
            }
            inner.white_space = infer_white_space(element, cx.white_space);
            all(&mut element.children, inner)
        }
        Node::Text(text) => match cx.white_space {
            WhiteSpace::Normal => minify_text(text, cx),
            WhiteSpace::Nowrap => {
                text.value = collapse(&text.value, cx.newlines);
                Outcome::default()
            }
            WhiteSpace::Pre => Outcome::default(),
        },
        Node::Comment(_) | Node::Doctype(_) => Outcome {
            ignore: true,
            ..Outcome::default()
        },
    }
}

fn minify_text(text: &mut Text, cx: Context) -> Outcome {
    let value = collapse(&text.value, cx.newlines);
    let mut outcome = Outcome::default();
    let mut start = 0;
    let mut end = value.len();

    if cx.before && value.starts_with(removable) {
        start += 1;
    }
    if start < end && value.ends_with(removable) {
        if cx.after {
            end -= 1;
        } else {
            outcome.strip_at_start = true;
        }
    }

    if start >= end {
        outcome.remove = true;
    } else {
        text.value = value[start..end].to_string();
    }
    outcome
}

fn all(children: &mut Vec<Node>, cx: Context) -> Outcome {
    let mut before = cx.before;
    let mut index = 0;

    while index < children.len() {
        let after = strip_boundary(&children[index + 1..]).unwrap_or(cx.after);
        let outcome = minify(&mut children[index], Context { before, after, ..cx });

        if outcome.remove {
            children.remove(index);
            continue;
        }
        if !outcome.ignore {
            before = outcome.strip_at_start;
        }
        if is_content(&children[index]) {
            before = false;
        }
        if is_break(&children[index]) {
            before = true;
        }
        index += 1;
    }

    children.retain(|child| !matches!(child, Node::Text(text) if text.value.is_empty()));

    Outcome {
        ignore: false,
        strip_at_start: before || cx.after,
        remove: false,
    }
}

/// Whether whitespace before `nodes` may be stripped, if they decide it
fn strip_boundary(nodes: &[Node]) -> Option<bool> {
    for node in nodes {
        let mut result = infer_boundary(node);
        if result.is_none() && !is_skippable(node) {
            if let Some(children) = node.children() {
                result = strip_boundary(children);
            }
        }
        if result.is_some() {
            return result;
        }
    }
    None
}

fn infer_boundary(node: &Node) -> Option<bool> {
    match node {
        Node::Element(element) => {
            if element.tag_name == "br" || is_block(&element.tag_name) {
                Some(true)
            } else if is_content_element(element) {
                Some(false)
            } else {
                None
            }
        }
        Node::Text(text) if !is_whitespace(&text.value) => Some(false),
        _ => None,
    }
}

fn is_content(node: &Node) -> bool {
    node.as_element().is_some_and(is_content_element)
}

fn is_break(node: &Node) -> bool {
    node.as_element().is_some_and(|element| element.tag_name == "br")
}

fn is_content_element(element: &Element) -> bool {
    CONTENT_ELEMENTS.contains(&element.tag_name.as_str())
}

fn is_skippable(node: &Node) -> bool {
    match node {
        Node::Element(element) => element.has_flag("hidden") || element.tag_name == "title",
        Node::Comment(_) | Node::Doctype(_) => true,
        _ => false,
    }
}

fn infer_white_space(element: &Element, inherited: WhiteSpace) -> WhiteSpace {
    match element.tag_name.as_str() {
        tag if is_preformatted(tag) => WhiteSpace::Pre,
        "script" | "style" => WhiteSpace::Pre,
        "nobr" => WhiteSpace::Nowrap,
        "td" | "th" if element.has_flag("nowrap") => WhiteSpace::Nowrap,
        _ => inherited,
    }
}

fn collapse(value: &str, newlines: bool) -> String {
    WHITESPACE_RUN
        .replace_all(value, |caps: &regex::Captures| {
            if newlines {
                if let Some(line_ending) = LINE_ENDING.find(&caps[0]) {
                    return line_ending.as_str().to_string();
                }
            }
            " ".to_string()
        })
        .into_owned()
}

fn removable(c: char) -> bool {
    c == ' ' || c == '\n'
}

fn is_whitespace(value: &str) -> bool {
    value
        .chars()
        .all(|c| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(node: &Node) -> Vec<String> {
        let mut out = Vec::new();
        collect(node, &mut out);
        out
    }

    fn collect(node: &Node, out: &mut Vec<String>) {
        match node {
            Node::Text(text) => out.push(text.value.clone()),
            other => {
                for child in other.children().unwrap_or(&[]) {
                    collect(child, out);
                }
            }
        }
    }

    #[test]
    fn test_collapse_runs() {
        assert_eq!(collapse("a \n\t b", false), "a b");
        assert_eq!(collapse("a \r\n  b", true), "a\r\nb");
        assert_eq!(collapse("a  b", true), "a b");
    }

    #[test]
    fn test_strips_at_block_edges() {
        let mut tree = Node::root(vec![Node::element("p").with_children(vec![
            Node::text("  Hello "),
            Node::element("em").with_children(vec![Node::text(" big ")]),
            Node::text(" world  "),
        ])]);
        minify_whitespace(&mut tree, false);
        assert_eq!(texts(&tree), vec!["Hello ", "big ", "world"]);
    }

    #[test]
    fn test_removes_whitespace_between_blocks() {
        let mut tree = Node::root(vec![
            Node::text("\n  "),
            Node::element("p").with_children(vec![Node::text("a")]),
            Node::text("\n  "),
            Node::element("p").with_children(vec![Node::text("b")]),
            Node::text("\n"),
        ]);
        minify_whitespace(&mut tree, false);
        let children = tree.children().unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(Node::is_element));
    }

    #[test]
    fn test_keeps_space_between_inline_siblings() {
        let mut tree = Node::root(vec![Node::element("p").with_children(vec![
            Node::element("b").with_children(vec![Node::text("a")]),
            Node::text(" "),
            Node::element("i").with_children(vec![Node::text("b")]),
        ])]);
        minify_whitespace(&mut tree, false);
        assert_eq!(texts(&tree), vec!["a", " ", "b"]);
    }

    #[test]
    fn test_preformatted_untouched() {
        let mut tree = Node::root(vec![Node::element("pre").with_children(vec![
            Node::element("code").with_children(vec![Node::text("  fn main() {\n    x\n}  ")]),
        ])]);
        minify_whitespace(&mut tree, false);
        assert_eq!(texts(&tree), vec!["  fn main() {\n    x\n}  "]);
    }

    #[test]
    fn test_newlines_option() {
        let mut tree = Node::root(vec![Node::element("p").with_children(vec![Node::text(
            "a \n b",
        )])]);
        minify_whitespace(&mut tree, true);
        assert_eq!(texts(&tree), vec!["a\nb"]);
    }

    #[test]
    fn test_space_after_image_kept() {
        let mut tree = Node::root(vec![Node::element("p").with_children(vec![
            Node::element("img"),
            Node::text(" caption"),
        ])]);
        minify_whitespace(&mut tree, false);
        assert_eq!(texts(&tree), vec![" caption"]);
    }

    #[test]
    fn test_strips_around_break() {
        let mut tree = Node::root(vec![Node::element("p").with_children(vec![
            Node::text("a "),
            Node::element("br"),
            Node::text(" b"),
        ])]);
        minify_whitespace(&mut tree, false);
        assert_eq!(texts(&tree), vec!["a", "b"]);
    }

    #[test]
    fn test_white_space_modes() {
        let cases = [
            ("xmp", WhiteSpace::Pre),
            ("textarea", WhiteSpace::Pre),
            ("script", WhiteSpace::Pre),
            ("nobr", WhiteSpace::Nowrap),
            ("span", WhiteSpace::Normal),
        ];
        for (tag, expected) in cases {
            assert_eq!(infer_white_space(&Element::new(tag), WhiteSpace::Normal), expected);
        }
    }
}
