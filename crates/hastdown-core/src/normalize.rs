//! Final cleanup of a converted mdast tree.
//!
//! Runs once, depth first, after conversion: adjacent text nodes are merged,
//! whitespace around line endings is dropped, and text at the edges of
//! paragraphs, headings and the root is trimmed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::Node;

static LINE_ENDING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t ]*(\r?\n|\r)[\t ]*").expect("valid line ending pattern"));

/// Normalize text nodes in a tree, in place.
///
/// Running this twice gives the same tree as running it once.
pub fn normalize(node: &mut Node) {
    let trims_edges = matches!(node, Node::Root(_) | Node::Paragraph(_) | Node::Heading(_));

    let Some(children) = node.children_mut() else {
        return;
    };

    merge_adjacent_text(children);

    let mut index = 0;
    while index < children.len() {
        let len = children.len();
        let keep = match &mut children[index] {
            Node::Text(text) => {
                let mut value = LINE_ENDING_WHITESPACE
                    .replace_all(&text.value, "$1")
                    .into_owned();

                if trims_edges {
                    if index == 0 {
                        value = value.trim_start_matches([' ', '\t']).to_string();
                    }
                    if index == len - 1 {
                        value.truncate(value.trim_end_matches([' ', '\t']).len());
                    }
                }

                text.value = value;
                !text.value.is_empty()
            }
            other => {
                normalize(other);
                true
            }
        };

        if keep {
            index += 1;
        } else {
            children.remove(index);
        }
    }
}

/// Join runs of sibling text nodes into one node
fn merge_adjacent_text(children: &mut Vec<Node>) {
    let mut merged: Vec<Node> = Vec::with_capacity(children.len());

    for child in children.drain(..) {
        if let (Some(Node::Text(previous)), Node::Text(next)) = (merged.last_mut(), &child) {
            previous.value.push_str(&next.value);
            if let (Some(position), Some(end)) = (previous.position.as_mut(), next.position) {
                position.end = end.end;
            }
            continue;
        }
        merged.push(child);
    }

    *children = merged;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Emphasis, Point, Position, Root, Text};

    fn root(children: Vec<Node>) -> Node {
        Node::Root(Root {
            children,
            ..Default::default()
        })
    }

    fn texts(node: &Node) -> Vec<String> {
        node.children()
            .map(|c| {
                c.iter()
                    .filter_map(|n| match n {
                        Node::Text(t) => Some(t.value.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_merges_adjacent_text() {
        let mut tree = Node::paragraph(vec![Node::text("a"), Node::text("b"), Node::text("c")]);
        normalize(&mut tree);
        assert_eq!(texts(&tree), vec!["abc"]);
    }

    #[test]
    fn test_merge_extends_position() {
        let at = |offset| Point {
            line: 1,
            column: offset + 1,
            offset: Some(offset),
        };
        let mut tree = Node::paragraph(vec![
            Node::Text(Text {
                value: "a".into(),
                position: Some(Position { start: at(0), end: at(1) }),
                data: None,
            }),
            Node::Text(Text {
                value: "b".into(),
                position: Some(Position { start: at(1), end: at(2) }),
                data: None,
            }),
        ]);
        normalize(&mut tree);
        let Some(Node::Text(text)) = tree.children().and_then(|c| c.first()) else {
            panic!("expected text");
        };
        assert_eq!(text.position.map(|p| p.end.offset), Some(Some(2)));
    }

    #[test]
    fn test_collapses_whitespace_around_line_endings() {
        let mut tree = Node::paragraph(vec![Node::text("a \t\n  b  \r\n c")]);
        normalize(&mut tree);
        assert_eq!(texts(&tree), vec!["a\nb\r\nc"]);
    }

    #[test]
    fn test_trims_edges_of_paragraph() {
        let mut tree = Node::paragraph(vec![
            Node::text("  lead"),
            Node::Emphasis(Emphasis {
                children: vec![Node::text(" inner ")],
                ..Default::default()
            }),
            Node::text("tail \t"),
        ]);
        normalize(&mut tree);
        assert_eq!(texts(&tree), vec!["lead", "tail"]);
        // Not a paragraph, heading or root: left alone
        let emphasis = &tree.children().unwrap()[1];
        assert_eq!(texts(emphasis), vec![" inner "]);
    }

    #[test]
    fn test_removes_empty_text() {
        let mut tree = root(vec![Node::text("   "), Node::paragraph(vec![Node::text(" ")])]);
        normalize(&mut tree);
        let children = tree.children().unwrap();
        assert_eq!(children.len(), 1);
        assert!(children[0].children().unwrap().is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut once = root(vec![
            Node::text(" x "),
            Node::paragraph(vec![
                Node::text("  a  \n  b"),
                Node::text(" c "),
                Node::Emphasis(Emphasis {
                    children: vec![Node::text("d"), Node::text(" e")],
                    ..Default::default()
                }),
                Node::text("   "),
            ]),
        ]);
        normalize(&mut once);
        let mut twice = once.clone();
        normalize(&mut twice);
        assert_eq!(once, twice);
    }
}
