//! Color swatches grouped into scales (`blue -> 500 -> "59 130 246"`).
//!
//! A swatch is a painted layer named `<scale>/<step>` (also `-`, `_` or a space), or a
//! painted layer named by a bare step inside a frame named after its scale. Layers named
//! after their hex value are ignored.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::color::ColorValue;
use crate::figma::{DocumentNode, NodeType};
use crate::resolve::PaintResolver;
use crate::types::{CategoryRecord, ColorScale, Mode};
use crate::variant::{is_noise_label, slugify};

use super::locate_section;

pub const SECTIONS: &[&str] = &["Colors", "Color palette", "Palette"];

fn scale_step() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*([a-z][a-z0-9 ]*?)\s*[/_\- ]\s*(\d{1,4}|base|default)\s*$")
            .expect("scale/step regex")
    })
}

fn bare_step() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\s*(\d{1,4}|base|default)\s*$").expect("step regex"))
}

#[derive(Debug, Clone)]
struct Swatch<'a> {
    node: &'a DocumentNode,
    scale: String,
    step: String,
}

fn is_swatch(node: &DocumentNode) -> bool {
    node.node_type != NodeType::Text && PaintResolver::effective(&node.fills).is_some()
}

fn collect<'a>(
    node: &'a DocumentNode,
    scale: Option<&str>,
    mode: Option<Mode>,
    out: &mut Vec<(Swatch<'a>, Option<Mode>)>,
) {
    if !node.is_visible() || node.node_type == NodeType::Text {
        return;
    }
    if is_noise_label(&node.name) {
        debug!(category = "colors", name = %node.name, "skipping noise label");
        return;
    }
    if is_swatch(node) {
        if let Some(caps) = scale_step().captures(&node.name) {
            out.push((
                Swatch {
                    node,
                    scale: slugify(&caps[1]),
                    step: caps[2].to_lowercase(),
                },
                mode,
            ));
            return;
        }
        if let (Some(scale), Some(caps)) = (scale, bare_step().captures(&node.name)) {
            out.push((
                Swatch {
                    node,
                    scale: scale.to_string(),
                    step: caps[1].to_lowercase(),
                },
                mode,
            ));
            return;
        }
    }

    let named_mode = Mode::from_label(&node.name);
    let mode = mode.or(named_mode);
    let own = if named_mode.is_some() {
        None
    } else {
        Some(slugify(&node.name)).filter(|slug| !slug.is_empty())
    };
    let scale = own.as_deref().or(scale);
    for child in &node.children {
        collect(child, scale, mode, out);
    }
}

/// Numeric steps ascending, named steps after them in document order.
fn sort_steps(scale: &mut ColorScale) {
    scale.sort_by(|a, _, b, _| {
        let rank = |step: &str| step.parse::<u32>().unwrap_or(u32::MAX);
        rank(a).cmp(&rank(b))
    });
}

pub fn extract(
    document: &DocumentNode,
    paints: PaintResolver<'_>,
) -> Option<CategoryRecord<ColorScale>> {
    let Some(section) = locate_section(document, SECTIONS) else {
        debug!(category = "colors", "section not found");
        return None;
    };
    let mut found = Vec::new();
    let mode = Mode::from_label(&section.name);
    for child in &section.children {
        collect(child, None, mode, &mut found);
    }

    let mut record: CategoryRecord<ColorScale> = CategoryRecord::default();
    for mode in Mode::ALL {
        let scales = record.mode_mut(mode);
        let applicable = found
            .iter()
            .filter(|(_, tag)| *tag == Some(mode))
            .chain(found.iter().filter(|(_, tag)| tag.is_none()));
        for (swatch, _) in applicable {
            let color = paints.color_value(&swatch.node.fills, mode);
            if color.is_transparent() {
                continue;
            }
            scales
                .entry(swatch.scale.clone())
                .or_default()
                .entry(swatch.step.clone())
                .or_insert(color);
        }
        scales.values_mut().for_each(sort_steps);
    }
    info!(
        category = "colors",
        scales = record.light.len(),
        swatches = found.len(),
        "extracted color scales"
    );
    record.non_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_step_names() {
        let caps = scale_step().captures("Blue/500").expect("match");
        assert_eq!(&caps[1], "Blue");
        assert_eq!(&caps[2], "500");
        let spaced = scale_step().captures("Primary blue 50").expect("match");
        assert_eq!(&spaced[1], "Primary blue");
        assert!(scale_step().captures("Blue").is_none());
        assert!(bare_step().is_match(" 900 "));
    }

    #[test]
    fn steps_sort_numerically() {
        let mut scale = ColorScale::new();
        scale.insert("base".into(), ColorValue::new(1, 1, 1));
        scale.insert("500".into(), ColorValue::new(2, 2, 2));
        scale.insert("50".into(), ColorValue::new(3, 3, 3));
        sort_steps(&mut scale);
        let keys: Vec<&str> = scale.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["50", "500", "base"]);
    }
}
