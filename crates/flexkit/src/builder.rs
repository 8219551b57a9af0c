//! Pieces shared by the layout builders.

use flexkit_core::{
    Element, ElementTag, EventHandler, Handlers, LayoutIntent, Node, NodeRef, StyleResolver,
};

/// Props every layout component (Container, Row, Column, Form) accepts
#[derive(Debug, Clone, Default)]
pub(crate) struct LayoutProps {
    pub(crate) intent: LayoutIntent,
    pub(crate) handlers: Handlers,
    pub(crate) node_ref: Option<NodeRef>,
    pub(crate) children: Vec<Node>,
}

impl LayoutProps {
    pub(crate) fn with_tag(tag: &str) -> Self {
        LayoutProps {
            intent: LayoutIntent::new().with_tag(tag),
            ..Default::default()
        }
    }

    /// Resolve the style and assemble the element
    pub(crate) fn build(self, resolver: &StyleResolver, component: &'static str) -> Element {
        let style = resolver.resolve(&self.intent);
        let LayoutIntent {
            tag,
            class_name,
            attributes,
            ..
        } = self.intent;

        tracing::trace!(component, tag = %tag, "built element");

        Element {
            tag,
            style,
            class_name: Some(class_name.unwrap_or_default()),
            attributes,
            handlers: self.handlers,
            node_ref: self.node_ref,
            children: self.children,
        }
    }
}

pub(crate) fn check_layout_tag(tag: &ElementTag, component: &'static str) {
    if !tag.is_layout() {
        tracing::debug!(component, tag = %tag, "passing through tag outside the layout set");
    }
}

pub(crate) fn handler<F>(handler: F) -> EventHandler
where
    F: Fn(&mut flexkit_core::Event) + 'static,
{
    EventHandler::new(handler)
}

/// Helper macro to implement the builder methods every layout component has
macro_rules! impl_layout_methods {
    ($builder:ty) => {
        impl $builder {
            /// Padding in rem: `true`, a number, `(vertical, horizontal)` or
            /// `[top, right, bottom, left]`
            pub fn padding(mut self, padding: impl Into<::flexkit_core::Padding>) -> Self {
                self.props.intent.padding = Some(padding.into());
                self
            }

            pub fn justify(mut self, justify: ::flexkit_core::Justify) -> Self {
                self.props.intent.justify = Some(justify);
                self
            }

            /// Raw style overrides; computed fields still win over these
            pub fn style(mut self, style: impl Into<::flexkit_core::Style>) -> Self {
                self.props.intent.style = style.into();
                self
            }

            pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
                self.props.intent.class_name = Some(class_name.into());
                self
            }

            /// Forward an attribute to the rendered element
            pub fn attr(
                mut self,
                name: impl Into<String>,
                value: impl Into<::flexkit_core::AttrValue>,
            ) -> Self {
                self.props.intent.attributes.insert(name, value);
                self
            }

            /// Forward an event handler to the rendered element
            pub fn on<F>(mut self, event: impl Into<String>, handler: F) -> Self
            where
                F: Fn(&mut ::flexkit_core::Event) + 'static,
            {
                self.props
                    .handlers
                    .insert(event.into(), $crate::builder::handler(handler));
                self
            }

            /// Receive the rendered node once the tree is mounted
            pub fn node_ref(mut self, node_ref: &::flexkit_core::NodeRef) -> Self {
                self.props.node_ref = Some(node_ref.clone());
                self
            }

            pub fn child(mut self, child: impl Into<::flexkit_core::Node>) -> Self {
                self.props.children.push(child.into());
                self
            }

            pub fn children<I, N>(mut self, children: I) -> Self
            where
                I: IntoIterator<Item = N>,
                N: Into<::flexkit_core::Node>,
            {
                self.props
                    .children
                    .extend(children.into_iter().map(Into::into));
                self
            }
        }

        impl From<$builder> for ::flexkit_core::Node {
            fn from(builder: $builder) -> Self {
                ::flexkit_core::Node::Element(builder.build())
            }
        }
    };
}

/// Tag and wrap, for the components that can pick either
macro_rules! impl_flex_methods {
    ($builder:ty) => {
        impl $builder {
            /// Element to render as; tags outside the layout set pass through
            pub fn tag(mut self, tag: impl Into<::flexkit_core::ElementTag>) -> Self {
                self.props.intent.tag = tag.into();
                self
            }

            /// `true`, `false` or [`Wrap::Reverse`](::flexkit_core::Wrap::Reverse)
            pub fn wrap(mut self, wrap: impl Into<::flexkit_core::Wrap>) -> Self {
                self.props.intent.wrap = wrap.into();
                self
            }
        }
    };
}

pub(crate) use impl_flex_methods;
pub(crate) use impl_layout_methods;
