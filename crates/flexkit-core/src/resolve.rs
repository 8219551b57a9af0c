//! Style resolution.
//!
//! Layout components share one resolver: start from the base flex style,
//! merge the caller's raw overrides, then write the computed padding, justify
//! and wrap fields on top. Text has its own, smaller resolver.

use crate::intent::{FontWeight, LayoutIntent, TypographyIntent};
use crate::style::{format_number, Style, StyleValue};

/// The style every layout component starts from
pub fn base_style() -> Style {
    Style::new()
        .with("display", "flex")
        .with("flexDirection", "row")
        .with("justifyContent", "center")
        .with("alignItems", "center")
        .with("boxSizing", "border-box")
}

/// Resolves a [`LayoutIntent`] into a style record
///
/// One resolver is shared by every layout component; components differ only
/// in the base they start from and whether wrapping is honoured.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleResolver {
    base: Style,
    supports_wrap: bool,
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::layout()
    }
}

impl StyleResolver {
    /// Container, Row and Column
    pub fn layout() -> Self {
        StyleResolver {
            base: base_style(),
            supports_wrap: true,
        }
    }

    /// Form: same base, no wrapping
    pub fn form() -> Self {
        StyleResolver {
            base: base_style(),
            supports_wrap: false,
        }
    }

    pub fn with_base(mut self, base: Style) -> Self {
        self.base = base;
        self
    }

    pub fn with_wrap_support(mut self, supports_wrap: bool) -> Self {
        self.supports_wrap = supports_wrap;
        self
    }

    pub fn base(&self) -> &Style {
        &self.base
    }

    pub fn supports_wrap(&self) -> bool {
        self.supports_wrap
    }

    /// Resolve an intent. Total: unsupported shapes write nothing.
    pub fn resolve(&self, intent: &LayoutIntent) -> Style {
        let mut style = self.base.clone().merged(&intent.style);

        if let Some(padding) = intent.padding.as_ref().and_then(|p| p.to_css()) {
            style.set("padding", padding);
        }

        if let Some(justify) = intent.justify {
            style.set("justifyContent", justify.as_str());
        }

        if self.supports_wrap {
            if let Some(flex_wrap) = intent.wrap.flex_wrap() {
                style.set("flexWrap", flex_wrap);
            }
        }

        style
    }
}

/// Resolve with the shared layout resolver
pub fn resolve(intent: &LayoutIntent) -> Style {
    StyleResolver::layout().resolve(intent)
}

/// Resolves a [`TypographyIntent`] into a style record
///
/// There is no base: the caller's overrides are the starting point, and
/// `fontSize`/`fontWeight` are always written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypographyResolver;

impl TypographyResolver {
    pub fn resolve(&self, intent: &TypographyIntent) -> Style {
        let mut style = intent.style.clone();

        let font_size = match intent.font_size_rem {
            Some(size) if size != 0.0 && !size.is_nan() => format!("{}rem", format_number(size)),
            _ => String::new(),
        };
        style.set("fontSize", font_size);

        let font_weight: StyleValue = match &intent.font_weight {
            Some(weight) if weight.is_set() => weight.clone().into(),
            _ => FontWeight::default().into(),
        };
        style.set("fontWeight", font_weight);

        style
    }
}

/// Resolve with the typography resolver
pub fn resolve_typography(intent: &TypographyIntent) -> Style {
    TypographyResolver.resolve(intent)
}
