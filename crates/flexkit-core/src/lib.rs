//! # Flexkit Core
//!
//! Core types for the flexkit layout primitives.
//!
//! This crate holds the style resolvers shared by every component, the
//! element tree components produce, and the [`Renderer`] seam a host
//! implements to turn that tree into something on screen. An HTML renderer
//! ships with the crate.

pub mod document;
pub mod element;
pub mod error;
pub mod html;
pub mod intent;
pub mod node_ref;
pub mod options;
pub mod padding;
pub mod render;
pub mod resolve;
pub mod style;
pub mod tag;

pub use document::Document;
pub use element::{AttrValue, Attributes, Element, Event, EventHandler, Handlers, Node};
pub use error::{Error, Result};
pub use html::HtmlRenderer;
pub use intent::{FontWeight, Justify, LayoutIntent, TypographyIntent, Wrap};
pub use node_ref::{MountedNode, NodeRef};
pub use options::HtmlOptions;
pub use padding::Padding;
pub use render::{render, Renderer};
pub use resolve::{base_style, resolve, resolve_typography, StyleResolver, TypographyResolver};
pub use style::{Style, StyleValue};
pub use tag::ElementTag;
