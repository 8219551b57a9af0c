//! # Flexkit
//!
//! Flexbox layout and typography primitives with a builder API.
//!
//! `Container`, `Row`, `Column` and `Form` share one style resolver; `Text`
//! has its own. Every builder produces an [`Element`] that any
//! [`Renderer`] can mount.
//!
//! ## Example
//!
//! ```rust
//! use flexkit::prelude::*;
//!
//! let page = column()
//!     .padding(2)
//!     .child(text("Hello, flexkit!").tag("h1").size(2.0))
//!     .child(
//!         row()
//!             .justify(Justify::SpaceBetween)
//!             .child(text("left"))
//!             .child(text("right")),
//!     )
//!     .build();
//!
//! let html = Document::new(page).to_html(&HtmlOptions::default()).unwrap();
//! assert!(html.starts_with("<div style=\"display: flex; flex-direction: column"));
//! ```

mod builder;
pub mod forms;
pub mod layout;
pub mod typography;

pub use flexkit_core::{
    base_style, render, resolve, resolve_typography, AttrValue, Attributes, Document, Element,
    ElementTag, Error, Event, EventHandler, FontWeight, HtmlOptions, HtmlRenderer, Justify,
    LayoutIntent, MountedNode, Node, NodeRef, Padding, Renderer, Result, Style, StyleResolver,
    StyleValue, TypographyIntent, TypographyResolver, Wrap,
};

pub use forms::Form;
pub use layout::{Column, Container, Row};
pub use typography::Text;

// Re-export procedural macros
pub use flexkit_macros::view;

// Convenience constructors
pub fn container() -> Container {
    Container::new()
}

pub fn row() -> Row {
    Row::new()
}

pub fn column() -> Column {
    Column::new()
}

pub fn form() -> Form {
    Form::new()
}

pub fn text(content: impl Into<String>) -> Text {
    Text::with_content(content)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{column, container, form, row, text};
    pub use crate::{Column, Container, Form, Row, Text};
    pub use crate::{
        Document, Element, ElementTag, Event, FontWeight, HtmlOptions, HtmlRenderer, Justify,
        Node, NodeRef, Padding, Style, StyleValue, Wrap,
    };
    pub use flexkit_macros::view;
}
