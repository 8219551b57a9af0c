use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::element::{Attributes, Element};
use crate::style::Style;
use crate::ElementTag;

/// What a renderer mounted for an element
#[derive(Debug, Clone, PartialEq)]
pub struct MountedNode {
    pub tag: ElementTag,
    pub style: Style,
    pub class_name: Option<String>,
    pub attributes: Attributes,
    /// Child indices from the render root down to this node
    pub path: Vec<usize>,
}

impl MountedNode {
    pub fn from_element(element: &Element, path: Vec<usize>) -> Self {
        MountedNode {
            tag: element.tag.clone(),
            style: element.style.clone(),
            class_name: element.class_name.clone(),
            attributes: element.attributes.clone(),
            path,
        }
    }
}

/// Handle to the node an element was rendered into
///
/// A parent creates a `NodeRef`, passes a clone to a component, and reads it
/// back once the tree has been rendered.
///
/// # Example
///
/// ```rust
/// use flexkit_core::{render, Element, HtmlRenderer, Node, NodeRef};
///
/// let node_ref = NodeRef::new();
/// let mut element = Element::new("section");
/// element.node_ref = Some(node_ref.clone());
///
/// render(&Node::from(element), HtmlRenderer::default()).unwrap();
/// assert_eq!(node_ref.get().unwrap().tag, "section");
/// ```
#[derive(Clone, Default)]
pub struct NodeRef {
    current: Rc<RefCell<Option<MountedNode>>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn(&MountedNode)>>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mounted node, if the element has been rendered
    pub fn get(&self) -> Option<MountedNode> {
        self.current.borrow().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Record the mounted node and notify subscribers
    ///
    /// Subscribers may register further callbacks on the same ref; those run
    /// from the next mount on.
    pub fn attach(&self, node: MountedNode) {
        *self.current.borrow_mut() = Some(node.clone());
        let subscribers = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback(&node);
        }
    }

    pub fn detach(&self) {
        self.current.borrow_mut().take();
    }

    /// Run `callback` every time the node is (re)mounted
    pub fn on_attach<F>(&self, callback: F)
    where
        F: Fn(&MountedNode) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Inspect the mounted node without cloning it
    pub fn map<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&MountedNode) -> U,
    {
        self.current.borrow().as_ref().map(f)
    }

    /// Whether two handles point at the same cell
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({:?})", self.current.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(tag: &str) -> MountedNode {
        MountedNode::from_element(&Element::new(tag), vec![0])
    }

    #[test]
    fn test_attach_and_detach() {
        let node_ref = NodeRef::new();
        assert!(!node_ref.is_attached());

        node_ref.attach(mounted("nav"));
        assert_eq!(node_ref.get().unwrap().tag, "nav");
        assert_eq!(node_ref.map(|node| node.path.clone()), Some(vec![0]));

        node_ref.detach();
        assert!(node_ref.get().is_none());
    }

    #[test]
    fn test_clones_share_the_cell() {
        let node_ref = NodeRef::new();
        let handed_out = node_ref.clone();

        handed_out.attach(mounted("aside"));
        assert!(node_ref.is_attached());
        assert!(node_ref.ptr_eq(&handed_out));
    }

    #[test]
    fn test_on_attach() {
        let node_ref = NodeRef::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        node_ref.on_attach(move |node| {
            seen_clone.borrow_mut().push(node.tag.to_string());
        });

        node_ref.attach(mounted("main"));
        node_ref.attach(mounted("footer"));

        assert_eq!(*seen.borrow(), vec!["main", "footer"]);
    }

    #[test]
    fn test_on_attach_from_inside_a_callback() {
        let node_ref = NodeRef::new();
        let late_calls = Rc::new(RefCell::new(0));

        let handle = node_ref.clone();
        let late_clone = late_calls.clone();
        node_ref.on_attach(move |node| {
            assert!(handle.is_attached());
            assert_eq!(handle.map(|mounted| mounted.tag.clone()), Some(node.tag.clone()));
            let late_clone = late_clone.clone();
            handle.on_attach(move |_| *late_clone.borrow_mut() += 1);
        });

        node_ref.attach(mounted("main"));
        assert_eq!(*late_calls.borrow(), 0);

        node_ref.attach(mounted("footer"));
        assert_eq!(*late_calls.borrow(), 1);
    }

    #[test]
    fn test_subscriber_registering_during_render() {
        use crate::element::Node;
        use crate::html::HtmlRenderer;
        use crate::render::render;

        let node_ref = NodeRef::new();
        let inner = node_ref.clone();
        node_ref.on_attach(move |_| inner.on_attach(|_| {}));

        let mut element = Element::new("section");
        element.node_ref = Some(node_ref.clone());

        let html = render(&Node::from(element), HtmlRenderer::default()).unwrap();
        assert_eq!(html, "<section></section>");
        assert!(node_ref.is_attached());
    }
}
