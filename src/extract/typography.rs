//! Typography: one entry per named text style.

use tracing::{debug, info};

use crate::figma::{DocumentNode, NodeType};
use crate::resolve::PaintResolver;
use crate::types::{CategoryRecord, Mode, TextToken};
use crate::variant::{is_noise_label, slugify, VariantProperties};

use super::{for_mode, locate_section};
use super::text_description::text_token;

pub const SECTIONS: &[&str] = &["Typography", "Type scale", "Text styles"];
const STYLE_KEYS: &[&str] = &["style", "name", "token", "level"];

/// Style name of a layer: an explicit property, else the layer name.
fn label_of(name: &str) -> Option<String> {
    if is_noise_label(name) || Mode::from_label(name).is_some() {
        return None;
    }
    let props = VariantProperties::parse(name);
    let label = match props.first_of(STYLE_KEYS) {
        Some((_, value)) => slugify(value),
        None => slugify(name),
    };
    (!label.is_empty()).then_some(label)
}

fn collect<'a>(
    node: &'a DocumentNode,
    mode: Option<Mode>,
    label: Option<&str>,
    out: &mut Vec<(&'a DocumentNode, String, Option<Mode>)>,
) {
    if !node.is_visible() {
        return;
    }
    if node.node_type == NodeType::Text {
        if node.style.is_none() {
            return;
        }
        // Layers Figma names after their sample copy take the enclosing frame's name.
        let named_after_copy = node.characters.as_deref().map(str::trim) == Some(node.name.trim());
        let own = if named_after_copy { None } else { label_of(&node.name) };
        match own.as_deref().or(label) {
            Some(key) => out.push((node, key.to_string(), mode)),
            None => debug!(category = "typography", name = %node.name, "unlabelled text style"),
        }
        return;
    }
    let mode = mode.or_else(|| Mode::from_label(&node.name));
    let own = label_of(&node.name);
    let label = own.as_deref().or(label);
    for child in &node.children {
        collect(child, mode, label, out);
    }
}

pub fn extract(
    document: &DocumentNode,
    paints: PaintResolver<'_>,
) -> Option<CategoryRecord<TextToken>> {
    let Some(section) = locate_section(document, SECTIONS) else {
        debug!(category = "typography", "section not found");
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
            let (node, key, _) = &found[index];
            if !entries.contains_key(key) {
                entries.insert(key.clone(), text_token(node, paints, mode));
            }
        }
    }
    info!(
        category = "typography",
        styles = record.light.len(),
        "extracted text styles"
    );
    record.non_empty()
}
