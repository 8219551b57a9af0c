use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::element::Node;
use crate::error::Result;
use crate::html::HtmlRenderer;
use crate::options::HtmlOptions;
use crate::render::render;

/// A rendered tree together with its format version
///
/// Event handlers and node refs are live values and are not part of the
/// serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Format version (currently "1.0")
    pub format_version: String,

    /// Root node of the tree
    pub root: Node,
}

impl Document {
    pub const FORMAT_VERSION: &'static str = "1.0";

    pub fn new(root: impl Into<Node>) -> Self {
        Document {
            format_version: Self::FORMAT_VERSION.to_string(),
            root: root.into(),
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Render the tree as HTML
    pub fn to_html(&self, options: &HtmlOptions) -> Result<String> {
        render(&self.root, HtmlRenderer::new(options.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::Error;

    #[test]
    fn test_document_serialization() {
        let doc = Document::new(Element::new("main"));
        let json = doc.to_json().unwrap();

        assert!(json.contains("\"format_version\": \"1.0\""));
        assert!(json.contains("\"tag\": \"main\""));
    }

    #[test]
    fn test_document_roundtrip() {
        let mut root = Element::new("section").with_class_name("");
        root.attributes.insert("id", "top");
        root.add_child("hello");

        let doc = Document::new(root);
        let parsed = Document::from_json(&doc.to_json().unwrap()).unwrap();

        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");

        let doc = Document::new(Element::new("nav"));
        doc.write_to_file(&path).unwrap();

        assert_eq!(Document::read_from_file(&path).unwrap(), doc);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(Document::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_to_html() {
        let doc = Document::new(Element::new("aside").with_class_name("x"));
        assert_eq!(
            doc.to_html(&HtmlOptions::default()).unwrap(),
            r#"<aside class="x"></aside>"#
        );
    }
}
