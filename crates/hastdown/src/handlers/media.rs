//! Embedded media: `audio`, `video` and `iframe`.

use super::Converted;
use crate::hast::Element;
use crate::mdast;
use crate::state::State;
use crate::wrap::wrap_needed;

/// `audio` and `video` become a link to the media.
///
/// Fallback content that already links somewhere, or that holds blocks, is
/// kept as is instead. A video poster becomes an image inside the link.
pub(super) fn media(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    let mut nodes = state.all(element);

    if nodes.iter().any(contains_link) || wrap_needed(&nodes) {
        return Some(nodes.into());
    }

    let source = element.attr("src").or_else(|| {
        element
            .element_children()
            .filter(|child| child.tag_name == "source")
            .find_map(|child| child.attr("src"))
    });

    let poster = if element.tag_name == "video" {
        element.attr("poster")
    } else {
        None
    };

    if let Some(poster) = poster {
        let mut image = mdast::Node::Image(mdast::Image {
            url: state.resolve(Some(poster.as_str())),
            title: None,
            alt: mdast::nodes_text_content(&nodes),
            ..Default::default()
        });
        state.patch(element.position, &mut image);
        nodes = vec![image];
    }

    let mut result = mdast::Node::Link(mdast::Link {
        url: state.resolve(source.as_deref()),
        title: element.attr("title"),
        children: nodes,
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

/// `iframe` becomes a link titled by its `title`, when it has one
pub(super) fn iframe(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    let source = element.attr("src")?;
    let title = element.attr("title")?;

    let mut result = mdast::Node::Link(mdast::Link {
        url: state.resolve(Some(source.as_str())),
        title: None,
        children: vec![mdast::Node::text(title)],
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

fn contains_link(node: &mdast::Node) -> bool {
    matches!(node, mdast::Node::Link(_))
        || node
            .children()
            .is_some_and(|children| children.iter().any(contains_link))
}
