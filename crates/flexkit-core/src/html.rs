use std::fmt::Write;

use crate::element::{AttrValue, Element};
use crate::error::{Error, Result};
use crate::options::HtmlOptions;
use crate::render::Renderer;

/// Renders an element tree to an HTML string
///
/// Passthrough attributes come first, then `style`, then `class`. An empty
/// class is written as `class=""`; a missing one is not written at all.
/// Tag and attribute names must match `[A-Za-z][A-Za-z0-9:._-]*`, anything
/// else fails with [`Error::InvalidName`].
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
    out: String,
    depth: usize,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        HtmlRenderer {
            options,
            out: String::new(),
            depth: 0,
        }
    }

    fn start_line(&mut self) {
        if self.options.pretty {
            let width = self.depth * self.options.indent;
            self.out.extend(std::iter::repeat(' ').take(width));
        }
    }

    fn end_line(&mut self) {
        if self.options.pretty {
            self.out.push('\n');
        }
    }

    fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        write!(
            self.out,
            " {}=\"{}\"",
            name,
            html_escape::encode_double_quoted_attribute(value)
        )?;
        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, ':' | '.' | '_' | '-'))
        }
        _ => false,
    }
}

fn check_name(kind: &'static str, name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        tracing::debug!(kind, name, "refusing to write invalid markup name");
        Err(Error::InvalidName {
            kind,
            name: name.to_string(),
        })
    }
}

fn is_self_closing(element: &Element) -> bool {
    element.tag.is_void() && element.children.is_empty()
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn open_element(&mut self, element: &Element) -> Result<()> {
        check_name("tag", element.tag.as_str())?;
        self.start_line();
        write!(self.out, "<{}", element.tag)?;

        for (name, value) in element.attributes.iter() {
            check_name("attribute", name)?;
            match value {
                AttrValue::Bool(true) => write!(self.out, " {}", name)?,
                AttrValue::Bool(false) => {}
                other => self.write_attribute(name, &other.to_string())?,
            }
        }

        let css = element.style.to_css();
        if !css.is_empty() {
            self.write_attribute("style", &css)?;
        }

        if let Some(class_name) = &element.class_name {
            self.write_attribute("class", class_name)?;
        }

        self.out.push('>');
        self.end_line();

        if !is_self_closing(element) {
            self.depth += 1;
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.start_line();
        self.out.push_str(&html_escape::encode_text(text));
        self.end_line();
        Ok(())
    }

    fn close_element(&mut self, element: &Element) -> Result<()> {
        if is_self_closing(element) {
            return Ok(());
        }

        check_name("tag", element.tag.as_str())?;
        self.depth = self.depth.saturating_sub(1);
        self.start_line();
        write!(self.out, "</{}>", element.tag)?;
        self.end_line();
        Ok(())
    }

    fn finish(self) -> Result<Self::Output> {
        let mut out = self.out;
        if out.ends_with('\n') {
            out.pop();
        }
        Ok(out)
    }
}
