use flexkit_core::{Element, ElementTag, Event, StyleResolver};

use crate::builder::{impl_layout_methods, LayoutProps};

/// Builder for Form components
///
/// A flex `form` element with the same padding and justify handling as
/// Container. It has no tag choice and does not wrap.
///
/// # Example
///
/// ```rust
/// use flexkit::prelude::*;
///
/// let form = form()
///     .padding(3)
///     .on_submit(|event| event.prevent_default())
///     .child(container().tag("input").attr("name", "username"))
///     .build();
///
/// let mut submit = Event::new("submit");
/// assert!(form.dispatch(&mut submit));
/// assert!(submit.default_prevented);
/// ```
#[derive(Debug, Clone)]
pub struct Form {
    props: LayoutProps,
}

impl_layout_methods!(Form);

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    pub fn new() -> Self {
        Form {
            props: LayoutProps::with_tag(ElementTag::FORM),
        }
    }

    /// Handler for the form's `submit` event
    pub fn on_submit<F>(self, handler: F) -> Self
    where
        F: Fn(&mut Event) + 'static,
    {
        self.on("submit", handler)
    }

    pub fn build(self) -> Element {
        self.props.build(&StyleResolver::form(), "Form")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexkit_core::{Justify, StyleValue};

    #[test]
    fn test_form_defaults() {
        let element = Form::new().build();
        assert_eq!(element.tag, "form");
        assert_eq!(element.class_name.as_deref(), Some(""));
        assert_eq!(element.style, flexkit_core::base_style());
    }

    #[test]
    fn test_form_padding_and_justify() {
        let element = Form::new()
            .padding([1, 2, 3, 4])
            .justify(Justify::FlexEnd)
            .build();

        assert_eq!(
            element.style.get("padding"),
            Some(&StyleValue::from("1rem 2rem 3rem 4rem"))
        );
        assert_eq!(
            element.style.get("justifyContent"),
            Some(&StyleValue::from("flex-end"))
        );
    }

    #[test]
    fn test_form_has_submit_handler() {
        let element = Form::new().on_submit(|_| {}).build();
        assert!(element.handler("submit").is_some());
    }
}
