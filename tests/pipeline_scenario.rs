use dtx_lib::{
    parse_document, parse_local_variables, Category, ColorValue, Config, Correction,
    LocalVariables, Pipeline, StateKey,
};
use serde_json::{json, Value};

fn hex_fill(hex: &str) -> Value {
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).expect("hex") as f32 / 255.0;
    json!([{"type": "SOLID", "color": {"r": channel(1), "g": channel(3), "b": channel(5), "a": 1}}])
}

fn document(value: Value) -> dtx_lib::DocumentNode {
    parse_document(&serde_json::to_vec(&value).expect("serialize")).expect("document")
}

fn cta_document() -> dtx_lib::DocumentNode {
    document(json!({
        "name": "Marketing",
        "document": {
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [{
                "id": "1:0",
                "name": "Page 1",
                "type": "CANVAS",
                "children": [{
                    "id": "2:0",
                    "name": "CTA",
                    "type": "COMPONENT_SET",
                    "children": [
                        {
                            "id": "2:1",
                            "name": "Variant=Button primary, State=Default",
                            "type": "COMPONENT",
                            "fills": hex_fill("#1D4ED8")
                        },
                        {
                            "id": "2:2",
                            "name": "Variant=Button primary, State=Hover",
                            "type": "COMPONENT",
                            "fills": hex_fill("#2563EB")
                        },
                        {
                            "id": "2:3",
                            "name": "Variant=Button primary, State=Disabled",
                            "type": "COMPONENT",
                            "fills": hex_fill("#93C5FD")
                        }
                    ]
                }]
            }]
        }
    }))
}

#[test]
fn component_set_scenario_yields_primary_states_and_derived_dark() {
    let tokens = Pipeline::new(Config::default()).extract(&cta_document());
    let buttons = tokens.buttons.expect("buttons extracted");

    let primary = &buttons.light["primary"];
    let states: Vec<StateKey> = primary.keys().copied().collect();
    assert_eq!(
        states,
        vec![StateKey::Default, StateKey::Hover, StateKey::Disabled]
    );
    assert_eq!(primary[&StateKey::Default].background, ColorValue::new(29, 78, 216));
    assert_eq!(primary[&StateKey::Hover].background, ColorValue::new(37, 99, 235));
    assert_eq!(primary[&StateKey::Disabled].background, ColorValue::new(147, 197, 253));

    let dark_primary = &buttons.dark["primary"];
    assert_eq!(
        dark_primary[&StateKey::Default].background,
        ColorValue::new(241, 245, 249)
    );
    assert_ne!(buttons.dark, buttons.light);
}

#[test]
fn scenario_serializes_as_rgb_strings() {
    let map = Pipeline::new(Config::default())
        .run(&cta_document(), &[])
        .expect("run");

    assert_eq!(map["buttons"]["light"]["primary"]["default"]["background"], "29 78 216");
    assert_eq!(map["buttons"]["light"]["primary"]["hover"]["background"], "37 99 235");
    assert_eq!(map["buttons"]["light"]["primary"]["disabled"]["background"], "147 197 253");
    assert_eq!(map["buttons"]["dark"]["primary"]["default"]["background"], "241 245 249");
    for category in Category::ALL {
        if category != Category::Buttons {
            assert!(map[category.as_str()].is_null(), "{category} should be absent");
        }
    }
}

#[test]
fn danger_is_synthesized_from_primary() {
    let buttons = Pipeline::new(Config::default())
        .extract(&cta_document())
        .buttons
        .expect("buttons");

    let danger = &buttons.light["danger"];
    assert_eq!(danger[&StateKey::Default].background, ColorValue::new(220, 38, 38));
    assert_eq!(danger[&StateKey::Default].text, ColorValue::new(255, 255, 255));
    assert_eq!(
        buttons.dark["danger"][&StateKey::Default].background,
        ColorValue::new(248, 113, 113)
    );
}

#[test]
fn corrections_patch_the_scenario_output() {
    let corrections = vec![
        Correction::new(
            "buttons",
            json!({"dark": {"primary": {"default": {"background": "30 41 59"}}}}),
        ),
        Correction::new("carousels", json!({"light": {}})),
    ];
    let pipeline = Pipeline::new(Config::default());
    let once = pipeline.run(&cta_document(), &corrections).expect("run");
    assert_eq!(once["buttons"]["dark"]["primary"]["default"]["background"], "30 41 59");
    assert_eq!(once["buttons"]["dark"]["primary"]["default"]["text"], "15 23 42");
    assert!(!once.contains_key("carousels"));

    let twice = dtx_lib::apply_corrections(&once, &corrections);
    assert_eq!(twice, once);
}

const VARIABLES: &str = r#"{
    "meta": {
        "variables": {
            "VariableID:1:2": {
                "id": "VariableID:1:2",
                "name": "button/primary",
                "variableCollectionId": "VariableCollectionId:1:0",
                "valuesByMode": {
                    "1:0": {"r": 0.0, "g": 0.0, "b": 0.0, "a": 1},
                    "1:1": {"type": "VARIABLE_ALIAS", "id": "VariableID:1:3"}
                }
            },
            "VariableID:1:3": {
                "id": "VariableID:1:3",
                "name": "gray/100",
                "variableCollectionId": "VariableCollectionId:1:0",
                "valuesByMode": {
                    "1:0": {"r": 0.8, "g": 0.8, "b": 0.8, "a": 1},
                    "1:1": {"r": 0.8, "g": 0.8, "b": 0.8, "a": 1}
                }
            }
        },
        "variableCollections": {
            "VariableCollectionId:1:0": {
                "id": "VariableCollectionId:1:0",
                "name": "Theme",
                "defaultModeId": "1:0",
                "modes": [
                    {"modeId": "1:0", "name": "Light"},
                    {"modeId": "1:1", "name": "Dark"}
                ]
            }
        }
    }
}"#;

fn bound_document() -> dtx_lib::DocumentNode {
    document(json!({
        "id": "1:0",
        "name": "Buttons",
        "type": "FRAME",
        "children": [{
            "id": "2:1",
            "name": "Variant=Primary, State=Default",
            "type": "COMPONENT",
            "fills": [{
                "type": "SOLID",
                "color": {"r": 1, "g": 0, "b": 0, "a": 1},
                "boundVariables": {"color": {"type": "VARIABLE_ALIAS", "id": "VariableID:1:2"}}
            }]
        }]
    }))
}

#[test]
fn bound_paints_resolve_per_mode_and_keep_sourced_dark() {
    let variables =
        LocalVariables::new(parse_local_variables(VARIABLES.as_bytes()).expect("variables"));
    let config =
        Config::from_toml_str("[derivation]\nsynthesize_danger = false\n").expect("config");
    let pipeline = Pipeline::new(config).with_resolver(&variables);
    let buttons = pipeline
        .extract(&bound_document())
        .buttons
        .expect("buttons");

    let light = &buttons.light["primary"];
    assert_eq!(light[&StateKey::Default].background, ColorValue::new(0, 0, 0));
    assert_eq!(light[&StateKey::Hover].background, ColorValue::new(20, 20, 20));

    let dark = &buttons.dark["primary"];
    assert_eq!(dark[&StateKey::Default].background, ColorValue::new(204, 204, 204));
    assert_eq!(dark[&StateKey::Hover].background, ColorValue::new(184, 184, 184));
}

#[test]
fn literal_paints_are_used_without_variables() {
    let buttons = Pipeline::new(Config::default())
        .extract(&bound_document())
        .buttons
        .expect("buttons");
    assert_eq!(
        buttons.light["primary"][&StateKey::Default].background,
        ColorValue::new(255, 0, 0)
    );
}

#[test]
fn documents_without_known_sections_yield_nothing() {
    let root = document(json!({
        "id": "0:0",
        "name": "Document",
        "type": "DOCUMENT",
        "children": [{"id": "1:0", "name": "Cover", "type": "CANVAS", "children": []}]
    }));
    let tokens = Pipeline::new(Config::default()).extract(&root);
    assert!(tokens.present().is_empty());
}
