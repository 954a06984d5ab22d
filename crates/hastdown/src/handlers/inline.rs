//! Phrasing handlers.

use super::Converted;
use crate::hast::Element;
use crate::mdast;
use crate::state::State;

pub(super) fn link(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    let children = state.all(element);
    let mut result = mdast::Node::Link(mdast::Link {
        url: state.resolve(element.attr("href").as_deref()),
        title: element.attr("title"),
        children,
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn image(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    let mut result = mdast::Node::Image(mdast::Image {
        url: state.resolve(element.attr("src").as_deref()),
        title: element.attr("title"),
        alt: element.attr("alt").unwrap_or_default(),
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

/// The first `<base>` freezes the base URL for the rest of the conversion
pub(super) fn base(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    state.freeze_base(element.attr("href"));
    None
}

pub(super) fn strong(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    let mut result = mdast::Node::Strong(mdast::Strong {
        children: state.all(element),
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn emphasis(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let mut result = mdast::Node::Emphasis(mdast::Emphasis {
        children: state.all(element),
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn delete(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    let mut result = mdast::Node::Delete(mdast::Delete {
        children: state.all(element),
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn inline_code(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let mut result = mdast::Node::InlineCode(mdast::InlineCode {
        value: element.to_text(),
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn line_break(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let mut result = mdast::Node::Break(mdast::Break::default());
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn word_break(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let mut result = mdast::Node::text("\u{200B}");
    state.patch(element.position, &mut result);
    Some(result.into())
}

/// `<q>` wraps its content in quotes picked by nesting depth.
///
/// Quotes are glued onto leading and trailing text instead of becoming
/// separate nodes.
pub(super) fn quote(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    let mut contents = state.nested_quote(|state| state.all(element));
    let (open, close) = state.options().quote_pair(state.quote_depth());

    let tail_is_text = matches!(contents.last(), Some(mdast::Node::Text(_)));

    match contents.first_mut() {
        Some(mdast::Node::Text(head)) => head.value.insert_str(0, &open),
        _ => contents.insert(0, mdast::Node::text(open)),
    }

    match contents.last_mut() {
        Some(mdast::Node::Text(tail)) if tail_is_text => tail.value.push_str(&close),
        _ => contents.push(mdast::Node::text(close)),
    }

    Some(contents.into())
}
