use flexkit::prelude::*;
use proptest::prelude::*;

fn justify_strategy() -> impl Strategy<Value = Justify> {
    prop::sample::select(Justify::ALL.to_vec())
}

fn caller_style_strategy() -> impl Strategy<Value = Vec<(&'static str, String)>> {
    prop::collection::vec(
        (
            prop::sample::select(vec![
                "flexDirection",
                "justifyContent",
                "alignItems",
                "color",
                "gap",
            ]),
            "[a-z-]{1,12}",
        ),
        0..5,
    )
}

/// Value the caller asked for last, if the key was given at all
fn caller_value(pairs: &[(&'static str, String)], key: &str) -> Option<StyleValue> {
    pairs
        .iter()
        .rev()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| StyleValue::from(value.as_str()))
}

fn caller_style(pairs: &[(&'static str, String)]) -> Style {
    pairs.iter().cloned().collect()
}

proptest! {
    #[test]
    fn row_caller_style_beats_preset(pairs in caller_style_strategy()) {
        let element = row().style(caller_style(&pairs)).build();

        let expected = caller_value(&pairs, "justifyContent")
            .unwrap_or_else(|| StyleValue::from("flex-start"));
        prop_assert_eq!(element.style.get("justifyContent"), Some(&expected));

        for key in ["flexDirection", "alignItems", "color", "gap"] {
            if let Some(value) = caller_value(&pairs, key) {
                prop_assert_eq!(element.style.get(key), Some(&value));
            }
        }
    }

    #[test]
    fn column_caller_style_beats_preset(pairs in caller_style_strategy()) {
        let element = column().style(caller_style(&pairs)).build();

        let direction = caller_value(&pairs, "flexDirection")
            .unwrap_or_else(|| StyleValue::from("column"));
        prop_assert_eq!(element.style.get("flexDirection"), Some(&direction));

        let justify = caller_value(&pairs, "justifyContent")
            .unwrap_or_else(|| StyleValue::from("flex-start"));
        prop_assert_eq!(element.style.get("justifyContent"), Some(&justify));
    }

    #[test]
    fn computed_justify_beats_preset_and_caller(
        pairs in caller_style_strategy(),
        justify in justify_strategy(),
        vertical in any::<bool>(),
    ) {
        let element = if vertical {
            column().style(caller_style(&pairs)).justify(justify).build()
        } else {
            row().style(caller_style(&pairs)).justify(justify).build()
        };

        prop_assert_eq!(
            element.style.get("justifyContent"),
            Some(&StyleValue::from(justify.as_str()))
        );
    }
}
