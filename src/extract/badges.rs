//! Badges, tags and chips. Unknown tones pass through as their own variant.

use crate::classify::BADGE_VARIANTS;
use crate::color::ColorValue;
use crate::figma::DocumentNode;
use crate::resolve::PaintResolver;
use crate::types::{Category, ComponentRecord, StateKey};

use super::component::{extract_component, ComponentSpec, TextSource, SURFACE_NAMES};

pub static SPEC: ComponentSpec = ComponentSpec {
    category: Category::Badges,
    sections: &["Badges", "Badge", "Tags", "Tag", "Chips"],
    signature: None,
    excludes: &[],
    variant_keys: &["variant", "type", "color", "tone", "status", "intent", "style"],
    state_keys: &["state", "interaction"],
    variants: &BADGE_VARIANTS,
    default_variant: "neutral",
    variant_prefix: None,
    states: &[StateKey::Default, StateKey::Hover, StateKey::Active, StateKey::Disabled],
    surface_names: SURFACE_NAMES,
    prefer_named_surface: false,
    text_source: TextSource::Text,
    default_text: ColorValue::new(17, 24, 39),
};

pub fn extract(document: &DocumentNode, paints: PaintResolver<'_>) -> Option<ComponentRecord> {
    extract_component(document, &SPEC, paints)
}
