//! Block normalization: wrapping runs of inline content in paragraphs.
//!
//! `delete` and `link` may straddle block boundaries in HTML. Before runs are
//! built, such a node holding block content is split so that each block gets
//! its own copy of the node around its content.

use crate::mdast::Node;

/// Whether `nodes` contain block content anywhere that would need wrapping
pub fn wrap_needed(nodes: &[Node]) -> bool {
    nodes.iter().any(|node| {
        !node.is_phrasing() || node.children().is_some_and(|children| wrap_needed(children))
    })
}

/// Wrap runs of phrasing content in paragraphs.
///
/// Runs made only of whitespace text are dropped. Block nodes pass through.
pub fn wrap(nodes: Vec<Node>) -> Vec<Node> {
    runs(
        nodes,
        |run| {
            if run.iter().all(Node::is_whitespace_text) {
                Vec::new()
            } else {
                vec![Node::paragraph(drop_surrounding_breaks(run))]
            }
        },
        |node| node,
    )
}

/// Remove leading and trailing `break` nodes
pub fn drop_surrounding_breaks(mut nodes: Vec<Node>) -> Vec<Node> {
    let end = nodes
        .iter()
        .rposition(|node| !matches!(node, Node::Break(_)))
        .map_or(0, |index| index + 1);
    nodes.truncate(end);
    let start = nodes
        .iter()
        .position(|node| !matches!(node, Node::Break(_)))
        .unwrap_or(nodes.len());
    nodes.drain(..start);
    nodes
}

/// Split `nodes` into phrasing runs and single block nodes
fn runs<P, B>(nodes: Vec<Node>, mut on_phrasing: P, mut on_block: B) -> Vec<Node>
where
    P: FnMut(Vec<Node>) -> Vec<Node>,
    B: FnMut(Node) -> Node,
{
    let mut result = Vec::new();
    let mut queue = Vec::new();

    for node in flatten(nodes) {
        if node.is_phrasing() {
            queue.push(node);
        } else {
            if !queue.is_empty() {
                result.extend(on_phrasing(std::mem::take(&mut queue)));
            }
            result.push(on_block(node));
        }
    }

    if !queue.is_empty() {
        result.extend(on_phrasing(queue));
    }

    result
}

/// Split straddling `delete` and `link` nodes
fn flatten(nodes: Vec<Node>) -> Vec<Node> {
    let mut flattened = Vec::with_capacity(nodes.len());

    for node in nodes {
        let straddles = matches!(node, Node::Delete(_) | Node::Link(_))
            && node.children().is_some_and(|children| wrap_needed(children));
        if straddles {
            flattened.extend(split(node));
        } else {
            flattened.push(node);
        }
    }

    flattened
}

fn split(mut node: Node) -> Vec<Node> {
    let children = node.children_mut().map(std::mem::take).unwrap_or_default();
    let shell = node;

    runs(
        children,
        |run| {
            let mut parent = shell.clone_without_children();
            set_children(&mut parent, run);
            vec![parent]
        },
        |child| nest(&shell, child),
    )
}

/// Put a copy of `shell` around the content of the block `child`.
///
/// Lists, tables and rows only hold items, rows and cells, so the copy goes
/// one level further down. Flow containers get their content rewrapped.
fn nest(shell: &Node, mut child: Node) -> Node {
    let content = child.children_mut().map(std::mem::take).unwrap_or_default();
    if content.is_empty() {
        return child;
    }

    let content = match &child {
        Node::List(_) | Node::Table(_) | Node::TableRow(_) => content
            .into_iter()
            .map(|item| nest(shell, item))
            .collect(),
        Node::Root(_) | Node::Blockquote(_) | Node::ListItem(_) => {
            let mut parent = shell.clone_without_children();
            set_children(&mut parent, content);
            wrap(vec![parent])
        }
        _ => {
            let mut parent = shell.clone_without_children();
            set_children(&mut parent, content);
            vec![parent]
        }
    };

    set_children(&mut child, content);
    child
}

fn set_children(node: &mut Node, children: Vec<Node>) {
    if let Some(slot) = node.children_mut() {
        *slot = children;
    }
}
