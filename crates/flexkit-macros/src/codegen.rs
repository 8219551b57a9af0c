//! Code generation from parsed component blocks

use crate::parser::{Child, ComponentBlock, Property};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

/// Props that map one-to-one onto builder methods
const BUILDER_METHODS: &[&str] = &[
    "tag",
    "padding",
    "justify",
    "wrap",
    "style",
    "class_name",
    "node_ref",
    "size",
    "weight",
    "font",
];

/// How a property turns into a builder call
#[derive(Debug, PartialEq, Eq)]
enum PropertyCall {
    /// `.name(value)`
    Method(String),
    /// `.on("event", value)`
    Event(String),
    /// `.attr("name", value)`
    Attribute(String),
}

fn classify_property(name: &Ident) -> PropertyCall {
    let name = name.to_string();

    if BUILDER_METHODS.contains(&name.as_str()) {
        PropertyCall::Method(name)
    } else if let Some(event) = name.strip_prefix("on_") {
        PropertyCall::Event(event.to_string())
    } else {
        PropertyCall::Attribute(name.replace('_', "-"))
    }
}

/// Generate code from a parsed component block
pub fn generate_code(component: &ComponentBlock) -> TokenStream {
    let component_code = generate_component(component);

    quote! {
        ::flexkit::Node::from(#component_code)
    }
}

/// Generate the builder expression for a single component
fn generate_component(component: &ComponentBlock) -> TokenStream {
    let content = get_initial_content(&component.properties);
    let builder_init = builder_init(&component.component_type, content);

    let property_calls = component
        .properties
        .iter()
        .filter(|prop| !is_initial_content_property(&prop.name))
        .map(|prop| {
            let value = &prop.value;
            match classify_property(&prop.name) {
                PropertyCall::Method(method) => {
                    let method = format_ident!("{}", method);
                    quote! { .#method(#value) }
                }
                PropertyCall::Event(event) => quote! { .on(#event, #value) },
                PropertyCall::Attribute(name) => quote! { .attr(#name, #value) },
            }
        })
        .collect::<Vec<_>>();

    let child_calls = component
        .children
        .iter()
        .map(|child| match child {
            Child::Component(child_component) => {
                let child_code = generate_component(child_component);
                quote! { .child(#child_code) }
            }
            Child::Expr(expr) => quote! { .child(#expr) },
        })
        .collect::<Vec<_>>();

    quote! {
        #builder_init
            #(#property_calls)*
            #(#child_calls)*
    }
}

/// Builder expression a component block starts from
fn builder_init(ident: &Ident, content: Option<&syn::Expr>) -> TokenStream {
    let name = ident.to_string();

    let init = match name.as_str() {
        "Container" => quote! { ::flexkit::container() },
        "Row" => quote! { ::flexkit::row() },
        "Column" => quote! { ::flexkit::column() },
        "Form" => quote! { ::flexkit::form() },
        "Text" => match content {
            Some(content) => return quote! { ::flexkit::text(#content) },
            None => quote! { ::flexkit::Text::new() },
        },
        _ => {
            // User-defined builders are plain functions in scope
            let builder_fn = format_ident!("{}", to_snake_case(&name));
            quote! { #builder_fn() }
        }
    };

    match content {
        Some(content) => quote! { #init.child(#content) },
        None => init,
    }
}

/// Check if a property holds the component's text content
fn is_initial_content_property(name: &Ident) -> bool {
    matches!(name.to_string().as_str(), "content" | "text")
}

fn get_initial_content(properties: &[Property]) -> Option<&syn::Expr> {
    properties.iter().find_map(|prop| {
        if is_initial_content_property(&prop.name) {
            Some(&prop.value)
        } else {
            None
        }
    })
}

/// Convert PascalCase to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();

    for c in s.chars() {
        if c.is_uppercase() {
            if !result.is_empty() {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}
