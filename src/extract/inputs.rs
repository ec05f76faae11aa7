//! Text inputs.

use crate::classify::INPUT_VARIANTS;
use crate::color::ColorValue;
use crate::figma::DocumentNode;
use crate::resolve::PaintResolver;
use crate::types::{Category, ComponentRecord, StateKey};

use super::component::{extract_component, ComponentSpec, TextSource};

/// The field box is often a child of a frame that also holds the label and helper text.
const INPUT_SURFACES: &[&str] = &["input", "field", "container", "background", "box", "control"];

pub static SPEC: ComponentSpec = ComponentSpec {
    category: Category::Inputs,
    sections: &["Inputs", "Input", "Text field", "Text input"],
    signature: None,
    excludes: &[],
    variant_keys: &["variant", "type", "style", "validation", "status"],
    state_keys: &["state", "interaction"],
    variants: &INPUT_VARIANTS,
    default_variant: "default",
    variant_prefix: None,
    states: &StateKey::ALL,
    surface_names: INPUT_SURFACES,
    prefer_named_surface: false,
    text_source: TextSource::Text,
    default_text: ColorValue::new(17, 24, 39),
};

pub fn extract(document: &DocumentNode, paints: PaintResolver<'_>) -> Option<ComponentRecord> {
    extract_component(document, &SPEC, paints)
}
