//! List handlers: ordered and unordered lists, items, task items and
//! definition lists.

use std::borrow::Cow;

use hastdown_core::is_phrasing_tag;

use super::Converted;
use crate::coerce::to_specific_content;
use crate::hast::{Element, Node};
use crate::mdast;
use crate::state::State;
use crate::utilities::parse_integer;
use crate::wrap::wrap;

/// Whether a list with these items is loose: it has several items and at
/// least one of them is spread
pub fn list_items_spread(items: &[mdast::Node]) -> bool {
    items.len() > 1
        && items
            .iter()
            .any(|item| matches!(item, mdast::Node::ListItem(item) if item.spread))
}

pub(super) fn list(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    let ordered = element.tag_name == "ol";
    let children = to_specific_content(state.all(element), mdast::Node::list_item);

    let start = ordered.then(|| {
        element
            .attr("start")
            .and_then(|start| parse_integer(&start))
            .and_then(|start| u32::try_from(start).ok())
            .unwrap_or(1)
    });

    let mut result = mdast::Node::List(mdast::List {
        ordered,
        start,
        spread: list_items_spread(&children),
        children,
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

/// `li`, `dt` and `dd`: a list item, possibly a task item
pub(super) fn list_item(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let (checkbox, rest) = match extract_leading_checkbox(element) {
        Some((checkbox, rest)) => (Some(checkbox), Cow::Owned(rest)),
        None => (None, Cow::Borrowed(element)),
    };
    let rest: &Element = &rest;

    let checked = checkbox.map(|checkbox| checkbox.has_flag("checked"));
    let spread = spread_out(rest);
    let children = wrap(state.all(rest));

    let mut result = mdast::Node::ListItem(mdast::ListItem {
        spread,
        checked,
        children,
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

/// Find a checkbox or radio input at the start of an item, directly or as the
/// first child of a leading paragraph. Returns the control and a copy of the
/// item without it.
fn extract_leading_checkbox(element: &Element) -> Option<(&Element, Element)> {
    let head = element.children.first()?.as_element()?;

    if head.tag_name == "input" && matches!(head.input_type().as_str(), "checkbox" | "radio") {
        let rest = element.copy_with_children(element.children[1..].to_vec());
        return Some((head, rest));
    }

    if head.tag_name == "p" {
        let (checkbox, rest_head) = extract_leading_checkbox(head)?;
        let mut children = Vec::with_capacity(element.children.len());
        children.push(Node::Element(rest_head));
        children.extend(element.children[1..].iter().cloned());
        return Some((checkbox, element.copy_with_children(children)));
    }

    None
}

/// Whether an item holds a paragraph, several blocks, or a spread block
fn spread_out(element: &Element) -> bool {
    let mut seen_flow = false;

    for child in element.element_children() {
        if is_phrasing_tag(&child.tag_name) {
            continue;
        }
        if child.tag_name == "p" || seen_flow || spread_out(child) {
            return true;
        }
        seen_flow = true;
    }

    false
}

/// `dl`: groups of titles and definitions become list items
pub(super) fn definition_list(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let mut clean: Vec<&Node> = Vec::new();
    for child in &element.children {
        match child {
            Node::Element(div) if div.tag_name == "div" => clean.extend(div.children.iter()),
            other => clean.push(other),
        }
    }

    let mut groups: Vec<Group> = Vec::new();
    let mut group = Group::default();
    for (index, &child) in clean.iter().enumerate() {
        if child.is_tag("dt") {
            let after_definition = index > 0 && clean[index - 1].is_tag("dd");
            if after_definition {
                groups.push(std::mem::take(&mut group));
            }
            group.titles.push(child);
        } else {
            group.definitions.push(child);
        }
    }
    groups.push(group);

    let mut items = Vec::new();
    for group in groups {
        let mut content = group_content(state, &group.titles, element);
        content.extend(group_content(state, &group.definitions, element));
        if !content.is_empty() {
            items.push(mdast::Node::ListItem(mdast::ListItem {
                spread: content.len() > 1,
                checked: None,
                children: content,
                ..Default::default()
            }));
        }
    }

    if items.is_empty() {
        return None;
    }

    let mut result = mdast::Node::List(mdast::List {
        ordered: false,
        start: None,
        spread: list_items_spread(&items),
        children: items,
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

#[derive(Default)]
struct Group<'n> {
    titles: Vec<&'n Node>,
    definitions: Vec<&'n Node>,
}

/// Content of one side of a group: a single item is unwrapped, several
/// items become a nested list
fn group_content(state: &mut State<'_>, nodes: &[&Node], parent: &Element) -> Vec<mdast::Node> {
    let converted = state.all_nodes(nodes.iter().copied(), Some(parent));
    let mut items = to_specific_content(converted, mdast::Node::list_item);

    match items.len() {
        0 => Vec::new(),
        1 => items
            .pop()
            .and_then(|mut item| item.children_mut().map(std::mem::take))
            .unwrap_or_default(),
        _ => vec![mdast::Node::List(mdast::List {
            ordered: false,
            start: None,
            spread: list_items_spread(&items),
            children: items,
            ..Default::default()
        })],
    }
}
