use flexkit_core::{
    AttrValue, Attributes, Element, ElementTag, Event, EventHandler, FontWeight, Handlers, Node,
    Style, TypographyIntent, TypographyResolver,
};

/// Builder for Text components
///
/// Renders `span` by default. Unlike the layout components there is no base
/// style, and the class attribute is left off entirely unless one is given.
///
/// # Example
///
/// ```rust
/// use flexkit::prelude::*;
///
/// let title = text("Page Title").tag("h1").size(2.5).weight("bold").build();
///
/// assert_eq!(title.style.get("fontSize"), Some(&StyleValue::from("2.5rem")));
/// assert_eq!(title.class_name, None);
/// ```
#[derive(Debug, Clone)]
pub struct Text {
    intent: TypographyIntent,
    class_name: Option<String>,
    attributes: Attributes,
    handlers: Handlers,
    children: Vec<Node>,
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Text {
    pub fn new() -> Self {
        Text {
            intent: TypographyIntent::new(),
            class_name: None,
            attributes: Attributes::new(),
            handlers: Handlers::new(),
            children: Vec::new(),
        }
    }

    /// Text element holding `content`
    pub fn with_content(content: impl Into<String>) -> Self {
        Self::new().child(content.into())
    }

    /// Element to render as (`p`, `span`, `h1`..`h6`, `label`, `div`)
    pub fn tag(mut self, tag: impl Into<ElementTag>) -> Self {
        self.intent.tag = tag.into();
        self
    }

    /// Font size in rem
    pub fn size(mut self, rem: impl Into<f64>) -> Self {
        self.intent.font_size_rem = Some(rem.into());
        self
    }

    /// Numeric (100-900) or keyword weight
    pub fn weight(mut self, weight: impl Into<FontWeight>) -> Self {
        self.intent.font_weight = Some(weight.into());
        self
    }

    /// Accepted for compatibility; the font family is not applied to the style.
    pub fn font(self, _family: impl Into<String>) -> Self {
        self
    }

    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.intent.style = style.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn on<F>(mut self, event: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Event) + 'static,
    {
        self.handlers.insert(event.into(), EventHandler::new(handler));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Element {
        let style = TypographyResolver.resolve(&self.intent);
        let tag = self.intent.tag;

        if !tag.is_text() {
            tracing::debug!(component = "Text", tag = %tag, "passing through tag outside the text set");
        }
        tracing::trace!(component = "Text", tag = %tag, "built element");

        Element {
            tag,
            style,
            class_name: self.class_name,
            attributes: self.attributes,
            handlers: self.handlers,
            node_ref: None,
            children: self.children,
        }
    }
}

impl From<Text> for Node {
    fn from(builder: Text) -> Self {
        Node::Element(builder.build())
    }
}
