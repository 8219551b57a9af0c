use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

use crate::node_ref::NodeRef;
use crate::style::{format_number, Style};
use crate::ElementTag;

/// Prop names a component always claims for itself
pub const RESERVED_ATTRIBUTES: &[&str] = &["style", "class", "className"];

/// A passthrough attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Num(f64),
    Str(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Num(n) => f.write_str(&format_number(*n)),
            AttrValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Num(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Num(value as f64)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Num(value as f64)
    }
}

/// Passthrough attributes, in the order they were given
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute. Reserved names (`style`, `class`, `className`)
    /// belong to the component and are dropped; returns whether it was kept.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> bool {
        let name = name.into();
        if RESERVED_ATTRIBUTES.contains(&name.as_str()) {
            tracing::debug!("dropping reserved passthrough attribute `{}`", name);
            return false;
        }
        self.0.insert(name, value.into());
        true
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// An event delivered to an element's handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: String,
    pub default_prevented: bool,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Event {
            kind: kind.into(),
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Shared event callback
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&mut Event)>);

impl EventHandler {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&mut Event) + 'static,
    {
        EventHandler(Rc::new(handler))
    }

    pub fn call(&self, event: &mut Event) {
        (self.0)(event)
    }

    /// Whether two handles share the same callback
    pub fn ptr_eq(&self, other: &EventHandler) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler(..)")
    }
}

/// Event handlers keyed by event name (`submit`, `click`, ...)
pub type Handlers = IndexMap<String, EventHandler>;

/// A node in a rendered tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// A resolved element, ready to hand to a renderer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag: ElementTag,

    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,

    /// `Some("")` and `None` are different: the first renders an empty
    /// class attribute, the second none at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,

    #[serde(skip)]
    pub handlers: Handlers,

    #[serde(skip)]
    pub node_ref: Option<NodeRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<ElementTag>) -> Self {
        Element {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn handler(&self, kind: &str) -> Option<&EventHandler> {
        self.handlers.get(kind)
    }

    /// Deliver an event to this element's handler for `event.kind`.
    /// Returns false when no handler is registered.
    pub fn dispatch(&self, event: &mut Event) -> bool {
        match self.handlers.get(&event.kind) {
            Some(handler) => {
                handler.call(event);
                true
            }
            None => false,
        }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

/// Structural equality: handlers and node refs do not take part
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.style == other.style
            && self.class_name == other.class_name
            && self.attributes == other.attributes
            && self.handlers.len() == other.handlers.len()
            && self.handlers.keys().eq(other.handlers.keys())
            && self.children == other.children
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::Element(a), Node::Element(b)) => a == b,
            _ => false,
        }
    }
}
