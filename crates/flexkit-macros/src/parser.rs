//! Parser for declarative component syntax

use syn::parse::{Parse, ParseStream, Result};
use syn::{braced, Expr, Ident, Token};

/// A parsed component block with properties and children
///
/// Example:
/// ```ignore
/// Column {
///     padding: 2,
///     justify: Justify::Center,
///     Text { content: "Hello" },
/// }
/// ```
pub struct ComponentBlock {
    pub component_type: Ident,
    pub properties: Vec<Property>,
    pub children: Vec<Child>,
}

/// A property assignment in a component block
///
/// Examples:
/// - `padding: (1, 2)`
/// - `class_name: "card"`
/// - `on_submit: |event| event.prevent_default()`
pub struct Property {
    pub name: Ident,
    pub value: Expr,
}

/// A child element (either a component block or an expression)
pub enum Child {
    Component(ComponentBlock),
    Expr(Expr),
}

impl Parse for ComponentBlock {
    fn parse(input: ParseStream) -> Result<Self> {
        let component_type: Ident = input.parse()?;

        let content;
        braced!(content in input);

        let mut properties = Vec::new();
        let mut children = Vec::new();

        while !content.is_empty() {
            // `name: value` is a property; `path::to::thing` is not
            if content.peek(Ident) && content.peek2(Token![:]) && !content.peek2(Token![::]) {
                properties.push(content.parse()?);
            } else {
                children.push(content.parse()?);
            }

            if !content.is_empty() {
                content.parse::<Token![,]>()?;
            }
        }

        Ok(ComponentBlock {
            component_type,
            properties,
            children,
        })
    }
}

impl Parse for Property {
    fn parse(input: ParseStream) -> Result<Self> {
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let value: Expr = input.parse()?;

        Ok(Property { name, value })
    }
}

impl Parse for Child {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Ident) && input.peek2(syn::token::Brace) {
            Ok(Child::Component(input.parse()?))
        } else {
            Ok(Child::Expr(input.parse()?))
        }
    }
}
