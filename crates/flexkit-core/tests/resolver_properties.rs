use flexkit_core::{
    resolve, resolve_typography, Justify, LayoutIntent, Padding, Style, StyleValue,
    TypographyIntent, Wrap,
};
use proptest::prelude::*;

fn padding_strategy() -> impl Strategy<Value = Padding> {
    prop_oneof![
        any::<bool>().prop_map(Padding::Flag),
        (-50i32..50).prop_map(|n| Padding::Uniform(n as f64 / 4.0)),
        prop::collection::vec((0i32..20).prop_map(|n| n as f64 / 2.0), 0..6)
            .prop_map(Padding::Sides),
    ]
}

fn justify_strategy() -> impl Strategy<Value = Justify> {
    prop::sample::select(Justify::ALL.to_vec())
}

fn wrap_strategy() -> impl Strategy<Value = Wrap> {
    prop::sample::select(vec![Wrap::NoWrap, Wrap::Wrap, Wrap::Reverse])
}

fn style_strategy() -> impl Strategy<Value = Style> {
    prop::collection::vec(
        (
            prop::sample::select(vec![
                "color",
                "margin",
                "padding",
                "justifyContent",
                "flexWrap",
                "display",
            ]),
            "[a-z0-9 -]{0,8}",
        ),
        0..4,
    )
    .prop_map(|pairs| pairs.into_iter().collect())
}

fn intent_strategy() -> impl Strategy<Value = LayoutIntent> {
    (
        prop::option::of(padding_strategy()),
        prop::option::of(justify_strategy()),
        wrap_strategy(),
        style_strategy(),
    )
        .prop_map(|(padding, justify, wrap, style)| LayoutIntent {
            padding,
            justify,
            wrap,
            style,
            ..LayoutIntent::default()
        })
}

proptest! {
    #[test]
    fn resolving_twice_gives_equal_styles(intent in intent_strategy()) {
        prop_assert_eq!(resolve(&intent), resolve(&intent.clone()));
    }

    #[test]
    fn computed_justify_always_wins(intent in intent_strategy(), justify in justify_strategy()) {
        let intent = LayoutIntent { justify: Some(justify), ..intent };
        let style = resolve(&intent);
        prop_assert_eq!(style.get("justifyContent"), Some(&StyleValue::from(justify.as_str())));
    }

    #[test]
    fn base_keys_always_present(intent in intent_strategy()) {
        let style = resolve(&intent);
        for key in ["display", "flexDirection", "justifyContent", "alignItems", "boxSizing"] {
            prop_assert!(style.contains(key));
        }
    }

    #[test]
    fn override_keys_not_computed_survive(intent in intent_strategy()) {
        let style = resolve(&intent);
        if let Some(color) = intent.style.get("color") {
            prop_assert_eq!(style.get("color"), Some(color));
        }
        if let Some(margin) = intent.style.get("margin") {
            prop_assert_eq!(style.get("margin"), Some(margin));
        }
    }

    #[test]
    fn side_padding_needs_two_or_four_values(sides in prop::collection::vec(1i32..9, 0..7)) {
        let expected = match sides.len() {
            2 | 4 => Some(
                sides
                    .iter()
                    .map(|n| format!("{}rem", n))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            _ => None,
        };
        let padding = Padding::Sides(sides.iter().map(|n| *n as f64).collect());
        prop_assert_eq!(padding.to_css(), expected);
    }

    #[test]
    fn typography_always_writes_size_and_weight(size in prop::option::of(0i32..10)) {
        let intent = TypographyIntent {
            font_size_rem: size.map(|s| s as f64),
            ..TypographyIntent::default()
        };
        let style = resolve_typography(&intent);
        prop_assert!(style.contains("fontSize"));
        prop_assert!(style.contains("fontWeight"));
    }
}
