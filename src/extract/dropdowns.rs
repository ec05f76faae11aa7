//! Dropdowns and selects: trigger, menu items and the menu panel.

use crate::classify::DROPDOWN_VARIANTS;
use crate::color::ColorValue;
use crate::figma::DocumentNode;
use crate::resolve::PaintResolver;
use crate::types::{Category, ComponentRecord, StateKey};

use super::component::{extract_component, ComponentSpec, TextSource, SURFACE_NAMES};

pub static SPEC: ComponentSpec = ComponentSpec {
    category: Category::Dropdowns,
    sections: &["Dropdowns", "Dropdown", "Select"],
    signature: None,
    excludes: &[],
    variant_keys: &["part", "element", "variant", "type", "component"],
    state_keys: &["state", "interaction"],
    variants: &DROPDOWN_VARIANTS,
    default_variant: "trigger",
    variant_prefix: None,
    states: &StateKey::ALL,
    surface_names: SURFACE_NAMES,
    prefer_named_surface: false,
    text_source: TextSource::Text,
    default_text: ColorValue::new(17, 24, 39),
};

pub fn extract(document: &DocumentNode, paints: PaintResolver<'_>) -> Option<ComponentRecord> {
    extract_component(document, &SPEC, paints)
}
