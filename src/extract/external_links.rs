//! External links. Links rarely have a surface, so the text color carries the styling.

use crate::classify::LINK_VARIANTS;
use crate::color::ColorValue;
use crate::figma::DocumentNode;
use crate::resolve::PaintResolver;
use crate::types::{Category, ComponentRecord, StateKey};

use super::component::{extract_component, ComponentSpec, TextSource, SURFACE_NAMES};

pub static SPEC: ComponentSpec = ComponentSpec {
    category: Category::ExternalLinks,
    sections: &["External links", "External link"],
    signature: None,
    excludes: &[],
    variant_keys: &["variant", "type", "style", "appearance"],
    state_keys: &["state", "interaction"],
    variants: &LINK_VARIANTS,
    default_variant: "default",
    variant_prefix: None,
    states: &[StateKey::Default, StateKey::Hover, StateKey::Active, StateKey::Disabled],
    surface_names: SURFACE_NAMES,
    prefer_named_surface: false,
    text_source: TextSource::Text,
    default_text: ColorValue::new(37, 99, 235),
};

pub fn extract(document: &DocumentNode, paints: PaintResolver<'_>) -> Option<ComponentRecord> {
    extract_component(document, &SPEC, paints)
}
