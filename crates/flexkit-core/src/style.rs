use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single style value
///
/// Style records are keyed by camel-case CSS property names and carry either
/// a string (`"flex"`, `"1rem 2rem"`) or a bare number (`400`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Str(String),
    Num(f64),
}

impl StyleValue {
    /// Returns the string payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            StyleValue::Num(_) => None,
        }
    }

    /// Returns the numeric payload, if this is a number value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Num(n) => Some(*n),
            StyleValue::Str(_) => None,
        }
    }

    /// An empty string value is present but carries nothing for the host
    pub fn is_empty(&self) -> bool {
        matches!(self, StyleValue::Str(s) if s.is_empty())
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Num(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Num(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Num(value as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Num(value as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Num(value as f64)
    }
}

/// Formats a number the way a script host interpolates it into a string:
/// integral values drop the fraction, `-0` prints as `0`, and magnitudes at
/// or above `1e21` or below `1e-6` switch to exponent form (`1e-7`, `1e+21`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exponent = format!("{:e}", value);
        match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exponent,
        }
    } else {
        format!("{}", value)
    }
}

/// A style record: camel-case CSS property name to value
///
/// Insertion order is kept for rendering, but equality is order-insensitive:
/// two records with the same keys and values are equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    entries: IndexMap<String, StyleValue>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder form of [`Style::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Shallow merge: every key in `overlay` replaces the key here,
    /// keys absent from `overlay` are left untouched.
    pub fn merge(&mut self, overlay: &Style) {
        for (key, value) in &overlay.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Consuming form of [`Style::merge`]
    pub fn merged(mut self, overlay: &Style) -> Self {
        self.merge(overlay);
        self
    }

    /// Inline CSS text (`display: flex; flex-direction: row`)
    ///
    /// Empty-string values are left out, matching how a DOM host drops them.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}: {}", css_property_name(key), value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (key, value) in iter {
            style.set(key, value);
        }
        style
    }
}

impl<K: Into<String>, V: Into<StyleValue>, const N: usize> From<[(K, V); N]> for Style {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Style {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = indexmap::map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Convert a camel-case property name to its CSS form (`flexDirection` →
/// `flex-direction`, `WebkitBoxFlex` → `-webkit-box-flex`)
pub fn css_property_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_format_number_exponent_range() {
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_merge_replaces_and_keeps() {
        let mut base = Style::from([("display", "flex"), ("justifyContent", "center")]);
        base.merge(&Style::from([("justifyContent", "flex-end"), ("color", "red")]));

        assert_eq!(base.get("display"), Some(&StyleValue::from("flex")));
        assert_eq!(base.get("justifyContent"), Some(&StyleValue::from("flex-end")));
        assert_eq!(base.get("color"), Some(&StyleValue::from("red")));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Style::new().with("a", "1").with("b", 2);
        let b = Style::new().with("b", 2).with("a", "1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_to_css() {
        let style = Style::new()
            .with("flexDirection", "column")
            .with("fontSize", "")
            .with("fontWeight", 400)
            .with("WebkitBoxFlex", "1");

        assert_eq!(
            style.to_css(),
            "flex-direction: column; font-weight: 400; -webkit-box-flex: 1"
        );
    }

    #[test]
    fn test_serialization() {
        let style = Style::new().with("display", "flex").with("fontWeight", 700);
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"display":"flex","fontWeight":700.0}"#);

        let parsed: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, style);
    }
}
