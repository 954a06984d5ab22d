//! Form controls: `input`, `select` and `textarea` render their current
//! value as text.

use super::Converted;
use crate::hast::{Element, Node};
use crate::mdast;
use crate::state::State;
use crate::utilities::parse_integer;

/// An option picked from a `select` or `datalist`
#[derive(Debug, Clone, PartialEq)]
struct Choice {
    value: String,
    /// Only set when non-empty and different from the value
    label: Option<String>,
}

impl Choice {
    fn render(&self) -> String {
        match &self.label {
            Some(label) => format!("{label} ({})", self.value),
            None => self.value.clone(),
        }
    }
}

pub(super) fn input(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    let kind = element.input_type();

    if element.has_flag("disabled") || kind == "hidden" || kind == "file" {
        return None;
    }

    if kind == "checkbox" || kind == "radio" {
        let options = state.options();
        let marker = if element.has_flag("checked") {
            &options.checked
        } else {
            &options.unchecked
        };
        let mut result = mdast::Node::text(marker.clone());
        state.patch(element.position, &mut result);
        return Some(result.into());
    }

    let value = element
        .attr("value")
        .or_else(|| element.attr("placeholder"));

    if kind == "image" {
        let alt = element.attr("alt").or(value)?;
        let mut result = mdast::Node::Image(mdast::Image {
            url: state.resolve(element.attr("src").as_deref()),
            title: element.attr("title"),
            alt,
            ..Default::default()
        });
        state.patch(element.position, &mut result);
        return Some(result.into());
    }

    let mut choices = match value {
        Some(value) => vec![Choice { value, label: None }],
        None => suggestions(state, element, &kind),
    };

    if choices.is_empty() {
        return None;
    }

    if kind == "password" {
        let masked = "•".repeat(choices[0].value.chars().count());
        choices[0] = Choice {
            value: masked,
            label: None,
        };
    }

    if kind == "email" || kind == "url" {
        let mut results = Vec::with_capacity(choices.len() * 2);
        for (index, choice) in choices.iter().enumerate() {
            if index > 0 {
                results.push(mdast::Node::text(", "));
            }
            let url = if kind == "email" {
                format!("mailto:{}", choice.value)
            } else {
                state.resolve(Some(choice.value.as_str()))
            };
            let text = choice.label.clone().unwrap_or_else(|| choice.value.clone());
            let mut link = mdast::Node::Link(mdast::Link {
                url,
                title: None,
                children: vec![mdast::Node::text(text)],
                ..Default::default()
            });
            state.patch(element.position, &mut link);
            results.push(link);
        }
        return Some(results.into());
    }

    let mut result = mdast::Node::text(render_all(&choices));
    state.patch(element.position, &mut result);
    Some(result.into())
}

/// Options of the `datalist` an empty input points at through `list`
fn suggestions(state: &State<'_>, element: &Element, kind: &str) -> Vec<Choice> {
    if matches!(kind, "button" | "file" | "password" | "reset" | "submit") {
        return Vec::new();
    }

    element
        .attr("list")
        .and_then(|id| state.element_by_id(&id))
        .filter(|datalist| datalist.tag_name == "datalist")
        .map(|datalist| selected_choices(datalist, element))
        .unwrap_or_default()
}

pub(super) fn select(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    let choices = selected_choices(element, element);
    if choices.is_empty() {
        return None;
    }

    let mut result = mdast::Node::text(render_all(&choices));
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn textarea(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    let mut result = mdast::Node::text(element.to_text());
    state.patch(element.position, &mut result);
    Some(result.into())
}

fn render_all(choices: &[Choice]) -> String {
    choices
        .iter()
        .map(Choice::render)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Selected options of `container`, or the leading ones when none is
/// selected. `control` supplies `size` and `multiple`.
fn selected_choices(container: &Element, control: &Element) -> Vec<Choice> {
    let size = control
        .attr("size")
        .and_then(|size| parse_integer(&size))
        .and_then(|size| usize::try_from(size).ok())
        .filter(|size| *size > 0)
        .unwrap_or(if control.has_flag("multiple") { 4 } else { 1 });

    let mut options = Vec::new();
    collect_options(&container.children, &mut options);

    let selected: Vec<&Element> = options
        .iter()
        .copied()
        .filter(|option| option.has_flag("selected"))
        .collect();
    let picked = if selected.is_empty() { options } else { selected };

    picked
        .into_iter()
        .take(size)
        .map(|option| {
            let content = option.to_text();
            let label = if content.is_empty() {
                option.attr("label").unwrap_or_default()
            } else {
                content.clone()
            };
            let value = option.attr("value").unwrap_or(content);
            Choice {
                label: (!label.is_empty() && label != value).then_some(label),
                value,
            }
        })
        .collect()
}

fn collect_options<'n>(children: &'n [Node], options: &mut Vec<&'n Element>) {
    for child in children {
        let Some(element) = child.as_element() else {
            continue;
        };
        collect_options(&element.children, options);
        if element.tag_name == "option" && !element.has_flag("disabled") {
            options.push(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Converter, Options};

    fn convert_with(options: Options, nodes: Vec<Node>) -> Vec<mdast::Node> {
        match Converter::with_options(options).convert(&Node::root(nodes)) {
            mdast::Node::Root(root) => root.children,
            other => vec![other],
        }
    }

    fn convert(nodes: Vec<Node>) -> Vec<mdast::Node> {
        convert_with(Options::default(), nodes)
    }

    fn input(attrs: Vec<(&str, &str)>) -> Node {
        Node::element_with_attrs("input", attrs)
    }

    fn option(value: Option<&str>, text: &str, selected: bool) -> Node {
        let mut attrs = Vec::new();
        if let Some(value) = value {
            attrs.push(("value", value));
        }
        if selected {
            attrs.push(("selected", ""));
        }
        Node::element_with_attrs("option", attrs).with_children(vec![Node::text(text)])
    }

    #[test]
    fn test_suppressed_inputs() {
        let nodes = convert(vec![
            input(vec![("type", "hidden"), ("value", "secret")]),
            input(vec![("type", "file")]),
            input(vec![("value", "off"), ("disabled", "")]),
        ]);
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_checkbox_markers() {
        let options = Options::default().with_checked("☑").with_unchecked("☐");
        let checked = convert_with(
            options.clone(),
            vec![input(vec![("type", "checkbox"), ("checked", "")])],
        );
        assert_eq!(checked, vec![mdast::Node::text("☑")]);

        let unchecked = convert_with(options, vec![input(vec![("type", "RADIO")])]);
        assert_eq!(unchecked, vec![mdast::Node::text("☐")]);

        let default = convert(vec![input(vec![("type", "checkbox")])]);
        assert_eq!(default, vec![mdast::Node::text("[ ]")]);
    }

    #[test]
    fn test_text_value_and_placeholder() {
        assert_eq!(
            convert(vec![input(vec![("value", "Alice")])]),
            vec![mdast::Node::text("Alice")]
        );
        assert_eq!(
            convert(vec![input(vec![("placeholder", "Name")])]),
            vec![mdast::Node::text("Name")]
        );
        assert!(convert(vec![input(vec![])]).is_empty());
    }

    #[test]
    fn test_password_is_masked() {
        let nodes = convert(vec![input(vec![("type", "password"), ("value", "hunter2")])]);
        assert_eq!(nodes, vec![mdast::Node::text("•••••••")]);
    }

    #[test]
    fn test_image_input_needs_alt() {
        let nodes = convert(vec![input(vec![
            ("type", "image"),
            ("src", "go.png"),
            ("alt", "Go"),
        ])]);
        match &nodes[0] {
            mdast::Node::Image(image) => {
                assert_eq!(image.url, "go.png");
                assert_eq!(image.alt, "Go");
                assert_eq!(image.title, None);
            }
            other => panic!("expected image, got {other:?}"),
        }

        assert!(convert(vec![input(vec![("type", "image"), ("src", "go.png")])]).is_empty());
    }

    #[test]
    fn test_email_becomes_link() {
        let nodes = convert(vec![input(vec![("type", "email"), ("value", "a@b.test")])]);
        match &nodes[0] {
            mdast::Node::Link(link) => {
                assert_eq!(link.url, "mailto:a@b.test");
                assert_eq!(link.children, vec![mdast::Node::text("a@b.test")]);
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_datalist_suggestions() {
        let datalist = Node::element_with_attrs("datalist", vec![("id", "sites")]).with_children(
            vec![
                option(Some("https://a.test"), "A", false),
                option(Some("https://b.test"), "", false),
            ],
        );
        let field = Node::element_with_attrs(
            "input",
            vec![("type", "url"), ("list", "sites"), ("multiple", "")],
        );
        let nodes = convert(vec![field, datalist]);

        let kinds: Vec<_> = nodes.iter().map(mdast::Node::kind).collect();
        assert_eq!(kinds, vec!["link", "text", "link"]);
        match (&nodes[0], &nodes[2]) {
            (mdast::Node::Link(first), mdast::Node::Link(second)) => {
                assert_eq!(first.url, "https://a.test");
                assert_eq!(first.children, vec![mdast::Node::text("A")]);
                assert_eq!(second.children, vec![mdast::Node::text("https://b.test")]);
            }
            other => panic!("expected links, got {other:?}"),
        }
    }

    #[test]
    fn test_list_must_point_at_datalist() {
        let field = input(vec![("list", "box")]);
        let not_a_datalist = Node::element_with_attrs("div", vec![("id", "box")]);
        assert!(convert(vec![field, not_a_datalist]).is_empty());
    }

    #[test]
    fn test_select_shows_selected() {
        let select = Node::element("select").with_children(vec![
            option(Some("nl"), "Netherlands", false),
            option(Some("de"), "Germany", true),
        ]);
        assert_eq!(
            convert(vec![select]),
            vec![mdast::Node::text("Germany (de)")]
        );
    }

    #[test]
    fn test_select_falls_back_to_leading_options() {
        let select = Node::element_with_attrs("select", vec![("size", "2")]).with_children(vec![
            option(None, "One", false),
            Node::element("optgroup").with_children(vec![
                option(Some("2"), "Two", false),
                option(Some("3"), "Three", false),
            ]),
        ]);
        assert_eq!(
            convert(vec![select]),
            vec![mdast::Node::text("One, Two (2)")]
        );
    }

    #[test]
    fn test_select_skips_disabled() {
        let disabled = Node::element_with_attrs("option", vec![("disabled", "")])
            .with_children(vec![Node::text("Nope")]);
        let select = Node::element("select")
            .with_children(vec![disabled, option(None, "Yes", false)]);
        assert_eq!(convert(vec![select]), vec![mdast::Node::text("Yes")]);
    }

    #[test]
    fn test_empty_select() {
        assert!(convert(vec![Node::element("select")]).is_empty());
    }

    #[test]
    fn test_textarea() {
        let textarea = Node::element("textarea").with_children(vec![Node::text("Some notes")]);
        assert_eq!(convert(vec![textarea]), vec![mdast::Node::text("Some notes")]);
    }
}
