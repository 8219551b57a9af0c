//! # Flexkit Macros
//!
//! Procedural macros for flexkit.
//!
//! This crate provides the `view!` macro, a declarative block syntax that
//! expands to the builder API.

extern crate proc_macro;

mod codegen;
mod parser;

use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Declarative view macro
///
/// Evaluates to a `flexkit::Node`. Known props (`tag`, `padding`, `justify`,
/// `wrap`, `style`, `class_name`, `node_ref`, `size`, `weight`, `font`) call
/// the builder method of the same name, `on_<event>` registers a handler,
/// `content`/`text` is the text content, and any other prop is forwarded as
/// an attribute with underscores turned into dashes.
///
/// # Example
///
/// ```ignore
/// view! {
///     Column {
///         padding: 2,
///         data_testid: "page",
///
///         Text {
///             content: "Hello, flexkit!",
///             tag: "h1",
///             size: 2.5,
///         },
///
///         Form {
///             on_submit: |event| event.prevent_default(),
///         },
///     }
/// }
/// ```
#[proc_macro]
pub fn view(input: TokenStream) -> TokenStream {
    let component_block = parse_macro_input!(input as parser::ComponentBlock);

    let generated = codegen::generate_code(&component_block);

    TokenStream::from(generated)
}
