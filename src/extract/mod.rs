//! Per-category extractors.
//!
//! Each extractor locates its section of the document, classifies what it finds there and
//! returns a mode-keyed record, or `None` when the document does not implement the
//! category. Component categories share the engine in [`component`]; text, typography and
//! color scales have their own walkers.

pub mod badges;
pub mod buttons;
pub mod checkboxes;
pub mod colors;
pub mod component;
pub mod dropdowns;
pub mod external_links;
pub mod inputs;
pub mod nav_menus;
pub mod text_description;
pub mod typography;


pub use component::{extract_component, ComponentSpec, Descriptor, TextSource, VariantSlot};

use crate::color::{format_number, format_px};
use crate::figma::{DocumentNode, NodeType, TypeStyle};
use crate::tree::find_section_where;
use crate::types::{LayoutData, Mode, TextStyle};

/// Find a category section. Only frames, pages, groups, sections and component sets
/// qualify, so a component whose variant name mentions the section word is never mistaken
/// for the section.
pub fn locate_section<'a>(document: &'a DocumentNode, names: &[&str]) -> Option<&'a DocumentNode> {
    locate_section_excluding(document, names, &[])
}

/// [`locate_section`] skipping containers whose name mentions any of `excludes`.
pub fn locate_section_excluding<'a>(
    document: &'a DocumentNode,
    names: &[&str],
    excludes: &[&str],
) -> Option<&'a DocumentNode> {
    find_section_where(document, names, &|node| {
        matches!(
            node.node_type,
            NodeType::Canvas
                | NodeType::Frame
                | NodeType::Group
                | NodeType::Section
                | NodeType::ComponentSet
        ) && !mentions_any(&node.name.to_lowercase(), excludes)
    })
}

/// Whether lower-cased `text` contains any of `words`.
pub(crate) fn mentions_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// Pre-order walk that tracks the nearest mode named by an enclosing frame.
///
/// `visitor` returns whether to descend into the node's children. Component sets and
/// components never set a mode context from their own name; their variant properties do.
pub(crate) fn walk_with_mode<'a>(
    node: &'a DocumentNode,
    inherited: Option<Mode>,
    visitor: &mut impl FnMut(&'a DocumentNode, Option<Mode>) -> bool,
) {
    let mode = match node.node_type {
        NodeType::Component | NodeType::ComponentSet | NodeType::Text => inherited,
        _ => inherited.or_else(|| Mode::from_label(&node.name)),
    };
    if !visitor(node, mode) {
        return;
    }
    for child in &node.children {
        walk_with_mode(child, mode, visitor);
    }
}

/// Keep the entries that apply to `mode`: ones tagged with it first, then untagged ones.
pub(crate) fn for_mode<T: Copy>(tagged: &[(T, Option<Mode>)], mode: Mode) -> Vec<T> {
    let exact = tagged
        .iter()
        .filter(|(_, tag)| *tag == Some(mode))
        .map(|(item, _)| *item);
    let untagged = tagged
        .iter()
        .filter(|(_, tag)| tag.is_none())
        .map(|(item, _)| *item);
    exact.chain(untagged).collect()
}

/// Format a TEXT node's style.
pub fn text_style(style: &TypeStyle) -> Option<TextStyle> {
    let formatted = TextStyle {
        font_family: style.font_family.clone(),
        font_size: style.font_size.map(format_px),
        font_weight: style.font_weight.map(format_number),
        line_height: style.line_height_px.map(format_px),
        letter_spacing: style.letter_spacing.map(format_px),
    };
    (!formatted.is_empty()).then_some(formatted)
}

/// Box metrics of a component: padding and gap from the component frame, radius and
/// border width from its surface.
pub fn layout_data(
    node: &DocumentNode,
    surface: &DocumentNode,
    has_border: bool,
) -> Option<LayoutData> {
    let layout = LayoutData {
        padding_top: node.padding_top.map(format_px),
        padding_right: node.padding_right.map(format_px),
        padding_bottom: node.padding_bottom.map(format_px),
        padding_left: node.padding_left.map(format_px),
        gap: node.item_spacing.map(format_px),
        corner_radius: surface
            .corner_radius
            .or(node.corner_radius)
            .map(format_px),
        border_width: if has_border {
            surface.stroke_weight.map(format_px)
        } else {
            None
        },
        opacity: node
            .opacity
            .filter(|opacity| *opacity < 1.0)
            .map(format_number),
    };
    (!layout.is_empty()).then_some(layout)
}
