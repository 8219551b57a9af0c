use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Markup output options for [`crate::HtmlRenderer`]
///
/// Can be loaded from TOML:
///
/// ```toml
/// pretty = true
/// indent = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// One element per line, indented by depth
    pub pretty: bool,
    /// Spaces per depth level when `pretty` is on
    pub indent: usize,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            pretty: false,
            indent: 2,
        }
    }
}

impl HtmlOptions {
    pub fn pretty() -> Self {
        HtmlOptions {
            pretty: true,
            ..Default::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
