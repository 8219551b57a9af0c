//! The seam to the host rendering layer.
//!
//! A host only has to open an element with its tag, style, class and
//! attributes, write text, and close the element again. [`render`] walks a
//! tree depth-first, drives the host, and attaches node refs as elements are
//! opened.

use crate::element::{Element, Node};
use crate::error::Result;
use crate::node_ref::MountedNode;

/// A host that can render tagged elements
pub trait Renderer {
    type Output;

    /// Start an element; its children follow until the matching close
    fn open_element(&mut self, element: &Element) -> Result<()>;

    /// Write a text node
    fn text(&mut self, text: &str) -> Result<()>;

    /// Finish an element opened with [`Renderer::open_element`]
    fn close_element(&mut self, element: &Element) -> Result<()>;

    /// Produce the rendered output
    fn finish(self) -> Result<Self::Output>;
}

/// Render a tree into `renderer`
pub fn render<R: Renderer>(node: &Node, mut renderer: R) -> Result<R::Output> {
    let mut path = Vec::new();
    walk(node, &mut renderer, &mut path)?;
    renderer.finish()
}

fn walk<R: Renderer>(node: &Node, renderer: &mut R, path: &mut Vec<usize>) -> Result<()> {
    match node {
        Node::Text(text) => renderer.text(text),
        Node::Element(element) => {
            tracing::trace!(tag = %element.tag, depth = path.len(), "mounting element");
            renderer.open_element(element)?;

            if let Some(node_ref) = &element.node_ref {
                node_ref.attach(MountedNode::from_element(element, path.clone()));
            }

            for (index, child) in element.children.iter().enumerate() {
                path.push(index);
                walk(child, renderer, path)?;
                path.pop();
            }

            renderer.close_element(element)
        }
    }
}
