//! Text description roles: title, subtitle, description and caption.
//!
//! A role is named by the TEXT layer itself or by the nearest enclosing frame, so both
//! `Title` layers and `Title` frames wrapping sample copy are recognised.

use tracing::{debug, info};

use crate::classify::TEXT_ROLES;
use crate::color::ColorValue;
use crate::figma::{DocumentNode, NodeType};
use crate::resolve::PaintResolver;
use crate::types::{CategoryRecord, Mode, TextToken};
use crate::variant::{is_noise_label, VariantProperties};

use super::{for_mode, locate_section, text_style};

pub const SECTIONS: &[&str] = &["Text description", "Description"];
const ROLE_KEYS: &[&str] = &["role", "type", "style", "variant"];
pub const DEFAULT_TEXT: ColorValue = ColorValue::new(17, 24, 39);

fn role_of(name: &str) -> Option<String> {
    if is_noise_label(name) {
        return None;
    }
    let props = VariantProperties::parse(name);
    match props.first_of(ROLE_KEYS) {
        Some((_, value)) => TEXT_ROLES.classify(value),
        None if props.is_empty() => TEXT_ROLES.classify(name),
        None => None,
    }
}

fn collect<'a>(
    node: &'a DocumentNode,
    mode: Option<Mode>,
    role: Option<&str>,
    out: &mut Vec<(&'a DocumentNode, String, Option<Mode>)>,
) {
    if !node.is_visible() {
        return;
    }
    let own = role_of(&node.name);
    let role = own.as_deref().or(role);
    if node.node_type == NodeType::Text {
        if let Some(role) = role {
            out.push((node, role.to_string(), mode));
        }
        return;
    }
    let mode = mode.or_else(|| Mode::from_label(&node.name));
    for child in &node.children {
        collect(child, mode, role, out);
    }
}

/// Text token of a TEXT node in `mode`.
pub fn text_token(node: &DocumentNode, paints: PaintResolver<'_>, mode: Mode) -> TextToken {
    let color = paints
        .resolve_paints(&node.fills, mode)
        .map(|color| ColorValue::from_color(&color))
        .unwrap_or(DEFAULT_TEXT);
    TextToken {
        color,
        typography: node.style.as_ref().and_then(text_style),
    }
}

pub fn extract(
    document: &DocumentNode,
    paints: PaintResolver<'_>,
) -> Option<CategoryRecord<TextToken>> {
    let Some(section) = locate_section(document, SECTIONS) else {
        debug!(category = "text-description", "section not found");
        return None;
    };
    let mut found = Vec::new();
    let mode = Mode::from_label(&section.name);
    for child in &section.children {
        collect(child, mode, None, &mut found);
    }

    let tagged: Vec<(usize, Option<Mode>)> = found
        .iter()
        .enumerate()
        .map(|(index, (_, _, mode))| (index, *mode))
        .collect();
    let mut record = CategoryRecord::default();
    for mode in Mode::ALL {
        let entries = record.mode_mut(mode);
        for index in for_mode(&tagged, mode) {
            let (node, role, _) = &found[index];
            if !entries.contains_key(role) {
                entries.insert(role.clone(), text_token(node, paints, mode));
            }
        }
    }
    info!(
        category = "text-description",
        light = record.light.len(),
        dark = record.dark.len(),
        "extracted text roles"
    );
    record.non_empty()
}
