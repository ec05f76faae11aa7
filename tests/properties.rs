use dtx_lib::color::{format_color, is_dark, luminance, Rgb};
use dtx_lib::derive::{derive_component, derive_hover, DerivationPlan};
use dtx_lib::figma::Color;
use dtx_lib::{
    apply_corrections, deep_merge, ColorValue, ComponentRecord, Correction, StateData, StateKey,
    StateMap,
};
use indexmap::IndexMap;
use proptest::prelude::*;
use serde_json::{Map, Value};

const PLAN: DerivationPlan = DerivationPlan {
    hover_delta: Some(20),
    derive_dark: true,
    synthesize_danger: true,
};

fn state(rgb: (u8, u8, u8)) -> StateData {
    StateData {
        background: ColorValue::new(rgb.0, rgb.1, rgb.2),
        text: ColorValue::new(255, 255, 255),
        border: ColorValue::Transparent,
        typography: None,
        layout: None,
    }
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z0-9 ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn json_object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-d]", json_value(), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

fn channels() -> impl Strategy<Value = (u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>())
}

proptest! {
    #[test]
    fn color_formatting_round_trips_8bit_channels(
        r in any::<u8>(),
        g in any::<u8>(),
        b in any::<u8>(),
        a in 0.0f32..=1.0,
    ) {
        let color = Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        };
        prop_assert_eq!(format_color(&color), format!("{r} {g} {b}"));
    }

    #[test]
    fn hover_moves_away_from_the_background_luminance(rgb in channels(), delta in 1u8..=255) {
        let default = state(rgb);
        let hover = derive_hover(&default, delta);
        let base = default.background.rgb().expect("opaque");
        let moved = hover.background.rgb().expect("opaque");
        let pairs = [
            (base.red, moved.red),
            (base.green, moved.green),
            (base.blue, moved.blue),
        ];

        if is_dark(base) {
            prop_assert!(pairs.iter().all(|(before, after)| after >= before));
            prop_assert!(pairs.iter().any(|(before, after)| after > before));
        } else {
            prop_assert!(pairs.iter().all(|(before, after)| after <= before));
            prop_assert!(pairs.iter().any(|(before, after)| after < before));
        }
        prop_assert_eq!(hover.text, default.text);
    }

    #[test]
    fn identical_dark_extraction_is_always_replaced(rgb in channels(), hover in channels()) {
        let mut states = StateMap::new();
        states.insert(StateKey::Default, state(rgb));
        states.insert(StateKey::Hover, state(hover));
        let mut light: IndexMap<String, StateMap> = IndexMap::new();
        light.insert("primary".to_string(), states);

        let record = derive_component(ComponentRecord::new(light.clone(), light), &PLAN);
        prop_assert!(!record.dark.is_empty());
        prop_assert_ne!(&record.dark, &record.light);
        prop_assert_ne!(
            &record.dark["primary"][&StateKey::Default],
            &record.light["primary"][&StateKey::Default]
        );
    }

    #[test]
    fn deep_merge_is_idempotent(base in json_value(), overlay in json_value()) {
        let once = deep_merge(&base, &overlay);
        let twice = deep_merge(&once, &overlay);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn corrections_apply_idempotently(
        results in json_object(),
        patch in json_object(),
        name in "[a-e]",
    ) {
        let corrections = vec![Correction::new(name, Value::Object(patch))];
        let once = apply_corrections(&results, &corrections);
        let twice = apply_corrections(&once, &corrections);
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(once.len(), results.len());
    }
}

#[test]
fn luminance_threshold_splits_black_and_white() {
    let black: Rgb = Rgb::new(0, 0, 0);
    let white: Rgb = Rgb::new(255, 255, 255);
    assert!(is_dark(black));
    assert!(!is_dark(white));
    assert!(luminance(white) > luminance(black));
}
