use flexkit_core::{Element, ElementTag, Style, StyleResolver};

use crate::builder::{check_layout_tag, impl_flex_methods, impl_layout_methods, LayoutProps};

/// Builder for Container components
///
/// A flex box rendered as `div` unless told otherwise. Everything it does not
/// recognize is forwarded to the element.
///
/// # Example
///
/// ```rust
/// use flexkit::prelude::*;
///
/// let element = container()
///     .tag("section")
///     .padding((1, 2))
///     .justify(Justify::SpaceBetween)
///     .wrap(Wrap::Reverse)
///     .attr("id", "toolbar")
///     .build();
///
/// assert_eq!(element.tag, "section");
/// assert_eq!(element.class_name.as_deref(), Some(""));
/// ```
#[derive(Debug, Clone)]
pub struct Container {
    props: LayoutProps,
}

impl_layout_methods!(Container);
impl_flex_methods!(Container);

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    pub fn new() -> Self {
        Container {
            props: LayoutProps::with_tag(ElementTag::DIV),
        }
    }

    pub fn build(self) -> Element {
        build_layout(self.props, "Container")
    }
}

fn build_layout(props: LayoutProps, component: &'static str) -> Element {
    check_layout_tag(&props.intent.tag, component);
    props.build(&StyleResolver::layout(), component)
}

/// Build a Container whose caller style sits on top of `preset`
fn build_with_preset(mut props: LayoutProps, preset: Style, component: &'static str) -> Element {
    props.intent.style = preset.merged(&props.intent.style);
    build_layout(props, component)
}

/// Builder for Row components
///
/// A Container whose content starts at the left edge by default.
#[derive(Debug, Clone)]
pub struct Row {
    props: LayoutProps,
}

impl_layout_methods!(Row);
impl_flex_methods!(Row);

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    pub fn new() -> Self {
        Row {
            props: LayoutProps::with_tag(ElementTag::DIV),
        }
    }

    /// Style applied before the caller's own style
    pub fn preset() -> Style {
        Style::new().with("justifyContent", "flex-start")
    }

    pub fn build(self) -> Element {
        build_with_preset(self.props, Self::preset(), "Row")
    }
}

/// Builder for Column components
///
/// A Container laid out top to bottom, content starting at the top.
#[derive(Debug, Clone)]
pub struct Column {
    props: LayoutProps,
}

impl_layout_methods!(Column);
impl_flex_methods!(Column);

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Column {
    pub fn new() -> Self {
        Column {
            props: LayoutProps::with_tag(ElementTag::DIV),
        }
    }

    /// Style applied before the caller's own style
    pub fn preset() -> Style {
        Style::new()
            .with("flexDirection", "column")
            .with("justifyContent", "flex-start")
    }

    pub fn build(self) -> Element {
        build_with_preset(self.props, Self::preset(), "Column")
    }
}
