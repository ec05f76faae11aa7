//! Buttons: primary, secondary, outline, ghost and danger variants.

use crate::classify::BUTTON_VARIANTS;
use crate::color::ColorValue;
use crate::figma::DocumentNode;
use crate::resolve::PaintResolver;
use crate::types::{Category, ComponentRecord, StateKey};

use super::component::{extract_component, ComponentSpec, TextSource, SURFACE_NAMES};

pub static SPEC: ComponentSpec = ComponentSpec {
    category: Category::Buttons,
    sections: &["Buttons", "Button"],
    signature: Some("button"),
    excludes: &["radio", "checkbox"],
    variant_keys: &["variant", "type", "hierarchy", "style", "appearance", "kind", "intent"],
    state_keys: &["state", "status", "interaction"],
    variants: &BUTTON_VARIANTS,
    default_variant: "primary",
    variant_prefix: None,
    states: &[StateKey::Default, StateKey::Hover, StateKey::Active, StateKey::Disabled],
    surface_names: SURFACE_NAMES,
    prefer_named_surface: false,
    text_source: TextSource::Text,
    default_text: ColorValue::new(255, 255, 255),
};

pub fn extract(document: &DocumentNode, paints: PaintResolver<'_>) -> Option<ComponentRecord> {
    extract_component(document, &SPEC, paints)
}
