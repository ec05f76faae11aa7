//! Checkboxes and radios, merged into one record.
//!
//! Variants are keyed `checkbox-<value>` and `radio-<value>` where the value is
//! checked, unchecked or indeterminate. The text color is the check glyph's color.

use tracing::debug;

use crate::classify::TOGGLE_VARIANTS;
use crate::color::ColorValue;
use crate::figma::DocumentNode;
use crate::resolve::PaintResolver;
use crate::types::{Category, ComponentRecord, StateKey};

use super::component::{extract_component, ComponentSpec, TextSource};

const TOGGLE_KEYS: &[&str] = &["checked", "selected", "value", "status", "variant", "check"];
const TOGGLE_SURFACES: &[&str] = &[
    "box",
    "checkbox",
    "radio",
    "control",
    "container",
    "background",
    "circle",
];

pub static CHECKBOX_SPEC: ComponentSpec = ComponentSpec {
    category: Category::Checkboxes,
    sections: &["Checkboxes", "Checkbox", "Check box"],
    signature: None,
    excludes: &[],
    variant_keys: TOGGLE_KEYS,
    state_keys: &["state", "interaction"],
    variants: &TOGGLE_VARIANTS,
    default_variant: "unchecked",
    variant_prefix: Some("checkbox"),
    states: &StateKey::ALL,
    surface_names: TOGGLE_SURFACES,
    prefer_named_surface: true,
    text_source: TextSource::Icon,
    default_text: ColorValue::new(255, 255, 255),
};

pub static RADIO_SPEC: ComponentSpec = ComponentSpec {
    category: Category::Checkboxes,
    sections: &["Radio buttons", "Radio button", "Radios", "Radio"],
    signature: None,
    excludes: &[],
    variant_keys: TOGGLE_KEYS,
    state_keys: &["state", "interaction"],
    variants: &TOGGLE_VARIANTS,
    default_variant: "unchecked",
    variant_prefix: Some("radio"),
    states: &StateKey::ALL,
    surface_names: TOGGLE_SURFACES,
    prefer_named_surface: true,
    text_source: TextSource::Icon,
    default_text: ColorValue::new(255, 255, 255),
};

pub fn extract(document: &DocumentNode, paints: PaintResolver<'_>) -> Option<ComponentRecord> {
    let checkboxes = extract_component(document, &CHECKBOX_SPEC, paints);
    let radios = extract_component(document, &RADIO_SPEC, paints);
    match (checkboxes, radios) {
        (Some(mut merged), Some(radios)) => {
            merged.light.extend(radios.light);
            merged.dark.extend(radios.dark);
            Some(merged)
        }
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => {
            debug!("no checkbox or radio components");
            None
        }
    }
}
