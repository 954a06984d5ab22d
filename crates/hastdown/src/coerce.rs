//! Coercion of mixed content into a sequence of one container kind.

use std::mem::discriminant;

use crate::mdast::Node;

/// Force `nodes` into containers of the kind `build` creates.
///
/// Nodes of that kind are kept. Other nodes are queued and moved into the
/// front of the next matching container; whatever is left at the end goes
/// into the last container, or into a new one from `build`. No node is
/// dropped and order is preserved.
pub fn to_specific_content<F>(nodes: Vec<Node>, build: F) -> Vec<Node>
where
    F: Fn() -> Node,
{
    let reference = discriminant(&build());
    let mut results: Vec<Node> = Vec::new();
    let mut queue: Vec<Node> = Vec::new();

    for mut node in nodes {
        if discriminant(&node) == reference {
            if !queue.is_empty() {
                if let Some(children) = node.children_mut() {
                    queue.append(children);
                    *children = std::mem::take(&mut queue);
                }
            }
            results.push(node);
        } else {
            queue.push(node);
        }
    }

    if !queue.is_empty() {
        if results.is_empty() {
            results.push(build());
        }
        if let Some(children) = results.last_mut().and_then(Node::children_mut) {
            children.append(&mut queue);
        }
    }

    results
}
