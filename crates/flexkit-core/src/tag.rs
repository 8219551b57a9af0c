use serde::{Deserialize, Serialize};
use std::fmt;

/// Tags a layout component renders without complaint
pub const LAYOUT_TAGS: &[&str] = &[
    "div", "section", "header", "footer", "article", "main", "aside", "nav",
];

/// Tags a text component renders without complaint
pub const TEXT_TAGS: &[&str] = &[
    "p", "span", "h1", "h2", "h3", "h4", "h5", "h6", "label", "div",
];

/// Tags that never carry children or a closing tag in markup
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// The element tag a component renders as
///
/// Tags are plain data: anything can be named here and the host renderer
/// decides what to do with it. The allow-lists are only consulted for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementTag(String);

impl ElementTag {
    pub const DIV: &'static str = "div";
    pub const SPAN: &'static str = "span";
    pub const FORM: &'static str = "form";

    pub fn new(name: impl Into<String>) -> Self {
        ElementTag(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// One of the semantic layout tags (`div`, `section`, `nav`, ...)
    pub fn is_layout(&self) -> bool {
        LAYOUT_TAGS.contains(&self.0.as_str())
    }

    /// One of the text tags (`p`, `span`, `h1`..`h6`, `label`, `div`)
    pub fn is_text(&self) -> bool {
        TEXT_TAGS.contains(&self.0.as_str())
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.0.as_str())
    }
}

impl Default for ElementTag {
    fn default() -> Self {
        ElementTag::new(Self::DIV)
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementTag {
    fn from(name: &str) -> Self {
        ElementTag::new(name)
    }
}

impl From<String> for ElementTag {
    fn from(name: String) -> Self {
        ElementTag(name)
    }
}

impl PartialEq<str> for ElementTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ElementTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_div() {
        assert_eq!(ElementTag::default(), "div");
    }

    #[test]
    fn test_allow_lists() {
        assert!(ElementTag::from("nav").is_layout());
        assert!(!ElementTag::from("span").is_layout());
        assert!(ElementTag::from("h3").is_text());
        assert!(ElementTag::from("div").is_text());
        assert!(!ElementTag::from("section").is_text());
        assert!(ElementTag::from("input").is_void());
    }
}
