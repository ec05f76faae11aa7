//! Navigation menus and sidebars.

use crate::classify::NAV_VARIANTS;
use crate::color::ColorValue;
use crate::figma::DocumentNode;
use crate::resolve::PaintResolver;
use crate::types::{Category, ComponentRecord, StateKey};

use super::component::{extract_component, ComponentSpec, TextSource, SURFACE_NAMES};

pub static SPEC: ComponentSpec = ComponentSpec {
    category: Category::NavMenus,
    sections: &["Navigation menu", "Nav menu", "Navigation", "Sidebar"],
    signature: None,
    excludes: &[],
    variant_keys: &["type", "variant", "level", "element", "item"],
    state_keys: &["state", "interaction"],
    variants: &NAV_VARIANTS,
    default_variant: "item",
    variant_prefix: None,
    states: &[StateKey::Default, StateKey::Hover, StateKey::Active, StateKey::Disabled],
    surface_names: SURFACE_NAMES,
    prefer_named_surface: false,
    text_source: TextSource::Text,
    default_text: ColorValue::new(55, 65, 81),
};

pub fn extract(document: &DocumentNode, paints: PaintResolver<'_>) -> Option<ComponentRecord> {
    extract_component(document, &SPEC, paints)
}
