//! HTML syntax tree (hast) used as conversion input.
//!
//! This module provides the source tree handed to the converter. Any HTML
//! parser can produce it; the optional `html` feature ships an adapter for
//! `scraper`, and trees exported as hast JSON can be loaded with
//! [`Node::from_json`].

use std::borrow::Cow;

use hastdown_core::Position;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::Result;

/// A value in an element's property bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean attribute (`checked`, `disabled`, ...)
    Bool(bool),
    /// Numeric value as written by hast tooling (`colSpan: 2`)
    Number(f64),
    String(String),
    /// Space or comma separated list (`className`)
    List(Vec<String>),
}

impl PropertyValue {
    /// String form of the value; lists are joined with spaces
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            PropertyValue::Bool(true) => Cow::Borrowed("true"),
            PropertyValue::Bool(false) => Cow::Borrowed(""),
            PropertyValue::Number(n) if n.fract() == 0.0 => Cow::Owned(format!("{}", *n as i64)),
            PropertyValue::Number(n) => Cow::Owned(n.to_string()),
            PropertyValue::String(s) => Cow::Borrowed(s.as_str()),
            PropertyValue::List(items) => Cow::Owned(items.join(" ")),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::List(value)
    }
}

/// Attribute name → value map of an element.
///
/// Lookups accept both HTML attribute names (`colspan`, `data-mdast`,
/// `class`) and hast property names (`colSpan`, `dataMdast`, `className`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(IndexMap<String, PropertyValue>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any existing value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a property by attribute or property name
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        if let Some(value) = self.0.get(name) {
            return Some(value);
        }
        let wanted = canonical_name(name);
        self.0
            .iter()
            .find(|(key, _)| canonical_name(key) == wanted)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fold attribute and property spellings onto one key
fn canonical_name(name: &str) -> String {
    let folded: String = name
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match folded.as_str() {
        "classname" => "class".to_string(),
        "htmlfor" => "for".to_string(),
        _ => folded,
    }
}

/// A node in the source tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Root(Root),
    Element(Element),
    Text(Text),
    Comment(Comment),
    Doctype(Doctype),
}

/// Document or fragment container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// An HTML element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Lowercase tag name
    #[serde(deserialize_with = "lowercase")]
    pub tag_name: String,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

fn lowercase<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(String::deserialize(deserializer)?.to_ascii_lowercase())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Comment {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Doctype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Node {
    /// Create a root node
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root {
            children,
            position: None,
        })
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag_name);
        for (name, value) in attrs {
            element.properties.insert(name, value);
        }
        Node::Element(element)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(Text {
            value: content.to_string(),
            position: None,
        })
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Node::Comment(Comment {
            value: content.to_string(),
            position: None,
        })
    }

    /// Decode a node from hast JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The hast `type` name of this node
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Element(_) => "element",
            Node::Text(_) => "text",
            Node::Comment(_) => "comment",
            Node::Doctype(_) => "doctype",
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Check if this is an element with the given tag name
    pub fn is_tag(&self, tag_name: &str) -> bool {
        self.as_element().is_some_and(|e| e.tag_name == tag_name)
    }

    /// Literal value of text and comment nodes
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.value),
            Node::Comment(comment) => Some(&comment.value),
            _ => None,
        }
    }

    /// Child nodes of parents, `None` for literals
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.children),
            Node::Element(element) => Some(&element.children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(root) => Some(&mut root.children),
            Node::Element(element) => Some(&mut element.children),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Node::Root(n) => n.position,
            Node::Element(n) => n.position,
            Node::Text(n) => n.position,
            Node::Comment(n) => n.position,
            Node::Doctype(n) => n.position,
        }
    }

    /// Add a child node; ignored on literals
    pub fn add_child(&mut self, child: Node) {
        if let Some(children) = self.children_mut() {
            children.push(child);
        }
    }

    /// Builder form of [`Node::add_child`] for several children
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        for child in children {
            self.add_child(child);
        }
        self
    }

    /// Get all text content from this node and descendants.
    ///
    /// `<br>` contributes a line ending; comments, scripts and styles
    /// contribute nothing.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&text.value),
            Node::Element(element) => element.push_text(out),
            Node::Root(root) => {
                for child in &root.children {
                    child.push_text(out);
                }
            }
            Node::Comment(_) | Node::Doctype(_) => {}
        }
    }
}

impl Element {
    /// Create an element with no properties or children
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            properties: Properties::new(),
            children: Vec::new(),
            position: None,
        }
    }

    /// Copy of this element holding a different list of children
    pub fn copy_with_children(&self, children: Vec<Node>) -> Self {
        Self {
            tag_name: self.tag_name.clone(),
            properties: self.properties.clone(),
            children,
            position: self.position,
        }
    }

    /// Get a raw property value
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Get a non-empty attribute value as a string
    pub fn attr(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            PropertyValue::Bool(_) => None,
            value => Some(value.as_str().into_owned()).filter(|v| !v.is_empty()),
        }
    }

    /// Check if a boolean attribute is set.
    ///
    /// Presence counts as set (`checked=""` from HTML), unless the value is
    /// an explicit `false`.
    pub fn has_flag(&self, name: &str) -> bool {
        !matches!(self.get(name), None | Some(PropertyValue::Bool(false)))
    }

    /// Class names, from either a list or a space separated string
    pub fn class_list(&self) -> Vec<&str> {
        match self.get("class") {
            Some(PropertyValue::List(items)) => items.iter().map(String::as_str).collect(),
            Some(PropertyValue::String(value)) => value.split_ascii_whitespace().collect(),
            _ => Vec::new(),
        }
    }

    /// Lowercase `type` attribute of form controls
    pub fn input_type(&self) -> String {
        self.attr("type")
            .map(|t| t.to_ascii_lowercase())
            .unwrap_or_else(|| "text".to_string())
    }

    /// Whether the element is marked with `data-mdast="ignore"`
    pub fn is_ignored(&self) -> bool {
        self.attr("data-mdast").as_deref() == Some("ignore")
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Text content of this element and its descendants
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self.tag_name.as_str() {
            "br" => out.push('\n'),
            "script" | "style" | "template" => {}
            _ => {
                for child in &self.children {
                    child.push_text(out);
                }
            }
        }
    }
}

/// Something whose children can be converted
pub trait Parent {
    fn child_nodes(&self) -> &[Node];

    /// The parent as an element, for handlers that inspect their parent
    fn as_parent_element(&self) -> Option<&Element> {
        None
    }
}

impl Parent for Element {
    fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    fn as_parent_element(&self) -> Option<&Element> {
        Some(self)
    }
}

impl Parent for Root {
    fn child_nodes(&self) -> &[Node] {
        &self.children
    }
}

impl Parent for Node {
    fn child_nodes(&self) -> &[Node] {
        self.children().unwrap_or(&[])
    }

    fn as_parent_element(&self) -> Option<&Element> {
        self.as_element()
    }
}
