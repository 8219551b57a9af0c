use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::element::Attributes;
use crate::error::Error;
use crate::style::{format_number, Style, StyleValue};
use crate::{ElementTag, Padding};

/// Main-axis distribution, written verbatim into `justifyContent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

impl Justify {
    pub const ALL: [Justify; 5] = [
        Justify::FlexStart,
        Justify::FlexEnd,
        Justify::Center,
        Justify::SpaceBetween,
        Justify::SpaceAround,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Justify::FlexStart => "flex-start",
            Justify::FlexEnd => "flex-end",
            Justify::Center => "center",
            Justify::SpaceBetween => "space-between",
            Justify::SpaceAround => "space-around",
        }
    }
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Justify {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flex-start" | "start" => Ok(Justify::FlexStart),
            "flex-end" | "end" => Ok(Justify::FlexEnd),
            "center" => Ok(Justify::Center),
            "space-between" => Ok(Justify::SpaceBetween),
            "space-around" => Ok(Justify::SpaceAround),
            _ => Err(Error::UnknownToken {
                kind: "justify",
                value: s.to_string(),
            }),
        }
    }
}

/// Flex wrapping mode
///
/// Deserializes from a boolean as well as from a mode token, so
/// `"wrap": true` and `"wrap": "reverse"` both parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Wrap {
    #[default]
    NoWrap,
    Wrap,
    Reverse,
}

impl Wrap {
    /// `flexWrap` value for this mode, `None` when wrapping is off
    pub fn flex_wrap(&self) -> Option<&'static str> {
        match self {
            Wrap::NoWrap => None,
            Wrap::Wrap => Some("wrap"),
            Wrap::Reverse => Some("wrap-reverse"),
        }
    }
}

impl From<bool> for Wrap {
    fn from(wrap: bool) -> Self {
        if wrap {
            Wrap::Wrap
        } else {
            Wrap::NoWrap
        }
    }
}

impl<'de> Deserialize<'de> for Wrap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WrapRepr {
            Flag(bool),
            Token(String),
        }

        match WrapRepr::deserialize(deserializer)? {
            WrapRepr::Flag(flag) => Ok(Wrap::from(flag)),
            WrapRepr::Token(token) => token.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl FromStr for Wrap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nowrap" | "no-wrap" | "none" | "false" => Ok(Wrap::NoWrap),
            "wrap" | "normal" | "true" => Ok(Wrap::Wrap),
            "reverse" | "wrap-reverse" => Ok(Wrap::Reverse),
            _ => Err(Error::UnknownToken {
                kind: "wrap",
                value: s.to_string(),
            }),
        }
    }
}

/// Font weight: numeric (100-900) or a keyword such as `bold`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Numeric(f64),
    Named(String),
}

impl FontWeight {
    pub const DEFAULT: f64 = 400.0;

    /// `0`, `NaN` and the empty keyword fall back to the default weight
    pub fn is_set(&self) -> bool {
        match self {
            FontWeight::Numeric(n) => *n != 0.0 && !n.is_nan(),
            FontWeight::Named(name) => !name.is_empty(),
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::Numeric(Self::DEFAULT)
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Numeric(n) => f.write_str(&format_number(*n)),
            FontWeight::Named(name) => f.write_str(name),
        }
    }
}

impl From<FontWeight> for StyleValue {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Numeric(n) => StyleValue::Num(n),
            FontWeight::Named(name) => StyleValue::Str(name),
        }
    }
}

impl From<f64> for FontWeight {
    fn from(value: f64) -> Self {
        FontWeight::Numeric(value)
    }
}

impl From<i32> for FontWeight {
    fn from(value: i32) -> Self {
        FontWeight::Numeric(value as f64)
    }
}

impl From<u32> for FontWeight {
    fn from(value: u32) -> Self {
        FontWeight::Numeric(value as f64)
    }
}

impl From<&str> for FontWeight {
    fn from(name: &str) -> Self {
        FontWeight::Named(name.to_string())
    }
}

impl From<String> for FontWeight {
    fn from(name: String) -> Self {
        FontWeight::Named(name)
    }
}

/// What a caller asks of a layout component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutIntent {
    #[serde(default)]
    pub tag: ElementTag,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,

    #[serde(default)]
    pub wrap: Wrap,

    /// Raw style overrides from the caller
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Unrecognized props, forwarded to the element untouched
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl LayoutIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<ElementTag>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn with_wrap(mut self, wrap: impl Into<Wrap>) -> Self {
        self.wrap = wrap.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self
    }
}

/// What a caller asks of a text component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyIntent {
    #[serde(default = "text_tag")]
    pub tag: ElementTag,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size_rem: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,

    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

fn text_tag() -> ElementTag {
    ElementTag::new(ElementTag::SPAN)
}

impl Default for TypographyIntent {
    fn default() -> Self {
        TypographyIntent {
            tag: text_tag(),
            font_size_rem: None,
            font_weight: None,
            style: Style::new(),
        }
    }
}

impl TypographyIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, rem: f64) -> Self {
        self.font_size_rem = Some(rem);
        self
    }

    pub fn with_weight(mut self, weight: impl Into<FontWeight>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify_tokens() {
        for justify in Justify::ALL {
            assert_eq!(justify.as_str().parse::<Justify>().unwrap(), justify);
        }
        assert_eq!("start".parse::<Justify>().unwrap(), Justify::FlexStart);
        assert_eq!("end".parse::<Justify>().unwrap(), Justify::FlexEnd);
        assert!("stretch".parse::<Justify>().is_err());
    }

    #[test]
    fn test_justify_serialization() {
        let json = serde_json::to_string(&Justify::SpaceBetween).unwrap();
        assert_eq!(json, "\"space-between\"");
    }

    #[test]
    fn test_wrap_from_bool() {
        assert_eq!(Wrap::from(true), Wrap::Wrap);
        assert_eq!(Wrap::from(false), Wrap::NoWrap);
        assert_eq!(Wrap::Reverse.flex_wrap(), Some("wrap-reverse"));
        assert_eq!("reverse".parse::<Wrap>().unwrap(), Wrap::Reverse);
    }

    #[test]
    fn test_font_weight_truthiness() {
        assert!(FontWeight::from(700).is_set());
        assert!(FontWeight::from("bold").is_set());
        assert!(!FontWeight::from(0).is_set());
        assert!(!FontWeight::from("").is_set());
    }

    #[test]
    fn test_intent_defaults() {
        let layout = LayoutIntent::default();
        assert_eq!(layout.tag, "div");
        assert_eq!(layout.wrap, Wrap::NoWrap);

        let text = TypographyIntent::default();
        assert_eq!(text.tag, "span");
    }

    #[test]
    fn test_intent_from_json() {
        let intent: LayoutIntent = serde_json::from_str(
            r#"{"tag":"section","padding":[1,2],"justify":"space-around","wrap":"reverse"}"#,
        )
        .unwrap();

        assert_eq!(intent.tag, "section");
        assert_eq!(intent.padding, Some(Padding::axes(1.0, 2.0)));
        assert_eq!(intent.justify, Some(Justify::SpaceAround));
        assert_eq!(intent.wrap, Wrap::Reverse);
    }

    #[test]
    fn test_wrap_accepts_booleans() {
        let on: LayoutIntent = serde_json::from_str(r#"{"wrap":true}"#).unwrap();
        assert_eq!(on.wrap, Wrap::Wrap);

        let off: LayoutIntent = serde_json::from_str(r#"{"wrap":false}"#).unwrap();
        assert_eq!(off.wrap, Wrap::NoWrap);

        let json = serde_json::to_string(&Wrap::NoWrap).unwrap();
        assert_eq!(json, r#""no-wrap""#);
        assert_eq!(serde_json::from_str::<Wrap>(&json).unwrap(), Wrap::NoWrap);

        assert!(serde_json::from_str::<Wrap>(r#""sideways""#).is_err());
        assert!(serde_json::from_str::<Wrap>("1").is_err());
    }
}
