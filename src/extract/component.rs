//! Shared extraction engine for component categories.
//!
//! A [`ComponentSpec`] describes where a category lives in the document and how its layer
//! names are spelled. Every candidate node is parsed exactly once into a [`Descriptor`];
//! ranking, mode filtering and state assembly only ever look at descriptors.

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::classify::{classify_state, Classifier, SHARED_DISABLED};
use crate::color::ColorValue;
use crate::figma::{DocumentNode, NodeType};
use crate::resolve::PaintResolver;
use crate::tree::{find_all_of_type, find_descendant};
use crate::types::{Category, ComponentRecord, Mode, StateData, StateKey, StateMap};
use crate::variant::{is_noise_label, is_truthy, words, VariantProperties};

use super::{layout_data, locate_section_excluding, mentions_any, text_style, walk_with_mode};

/// Property keys that pin a candidate to a mode.
const MODE_KEYS: &[&str] = &["mode", "theme", "color mode", "appearance mode", "color scheme"];

/// Key fragments of optional decorations (`Icon left=True`, `Dot=Yes`).
const AUX_KEYWORDS: &[&str] = &["icon", "dot", "avatar", "close", "dismiss", "badge", "loading"];

const SIZE_KEYS: &[&str] = &["size", "scale"];
const PREFERRED_SIZES: &[&str] = &["m", "md", "medium", "default", "base", "regular"];

/// Words that mark a layer as the painted surface of a component.
pub const SURFACE_NAMES: &[&str] = &[
    "background",
    "bg",
    "container",
    "surface",
    "box",
    "control",
    "base",
    "fill",
];

/// Where the text color of a state comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// First visible TEXT descendant.
    Text,
    /// First visible painted vector glyph, then TEXT.
    Icon,
}

/// Static description of one component category.
#[derive(Debug, Clone, Copy)]
pub struct ComponentSpec {
    pub category: Category,
    /// Section names, tried exactly and then as substrings.
    pub sections: &'static [&'static str],
    /// When no section is found, component sets whose name or variant values mention this
    /// word are used instead.
    pub signature: Option<&'static str>,
    /// Words that mark a section or component set as another category's
    /// ("Radio buttons" is not a buttons section).
    pub excludes: &'static [&'static str],
    pub variant_keys: &'static [&'static str],
    pub state_keys: &'static [&'static str],
    pub variants: &'static Classifier,
    /// Variant assumed for candidates that do not name one.
    pub default_variant: &'static str,
    /// Prepended to every variant key (`radio` -> `radio-checked`).
    pub variant_prefix: Option<&'static str>,
    pub states: &'static [StateKey],
    pub surface_names: &'static [&'static str],
    /// Look for a named surface layer before using the candidate's own paints.
    pub prefer_named_surface: bool,
    pub text_source: TextSource,
    pub default_text: ColorValue,
}

/// Variant a candidate contributes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariantSlot {
    Named(String),
    /// A "disabled" variant whose styling is shared by every variant lacking one.
    SharedDisabled,
}

/// Canonical, parsed form of a candidate's layer name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub variant: VariantSlot,
    pub state: StateKey,
    pub mode: Option<Mode>,
    pub aux_flags: Vec<String>,
    /// 0 for the preferred (medium/default) size or no size at all.
    pub size_rank: u8,
    /// Whether the name carried any `key=value` property.
    pub explicit: bool,
}

impl Descriptor {
    /// Parse a component's name. `context` is the mode named by an enclosing frame.
    pub fn parse(name: &str, spec: &ComponentSpec, context: Option<Mode>) -> Option<Self> {
        let props = VariantProperties::parse(name);
        let mode = props
            .first_of(MODE_KEYS)
            .and_then(|(_, value)| Mode::from_label(value))
            .or(context);

        let mut variant_raw = props.first_of(spec.variant_keys).map(|(_, value)| value);
        let mut state = StateKey::Default;
        if let Some((_, raw)) = props.first_of(spec.state_keys) {
            match classify_state(raw) {
                Some(parsed) => state = parsed,
                // "State=Checked" on a toggle names the variant, not the state.
                None if variant_raw.is_none() => variant_raw = Some(raw),
                None => {
                    debug!(category = %spec.category, name, "unrecognised state");
                    return None;
                }
            }
        }
        if props.get("disabled").is_some_and(is_truthy) {
            state = StateKey::Disabled;
        }

        let variant = match variant_raw {
            Some(raw) => spec.variants.classify(raw),
            None if props.is_empty() => spec
                .variants
                .classify_known(name)
                .or_else(|| Some(spec.default_variant.to_string())),
            None => Some(spec.default_variant.to_string()),
        };
        let Some(variant) = variant else {
            debug!(category = %spec.category, name, "unrecognised variant");
            return None;
        };

        let aux_flags = props
            .iter()
            .filter(|(key, value)| {
                !spec.variant_keys.contains(key)
                    && !spec.state_keys.contains(key)
                    && !SIZE_KEYS.contains(key)
                    && AUX_KEYWORDS.iter().any(|aux| key.contains(aux))
                    && is_truthy(value)
            })
            .map(|(key, _)| key.to_string())
            .collect();
        let size_rank = match props.first_of(SIZE_KEYS) {
            Some((_, size)) if !PREFERRED_SIZES.contains(&size) => 1,
            _ => 0,
        };

        Some(Self {
            variant: spec.slot(variant),
            state,
            mode,
            aux_flags,
            size_rank,
            explicit: !props.is_empty(),
        })
    }

    /// Lower ranks win when several candidates describe the same variant and state.
    fn rank(&self, index: usize) -> (bool, usize, u8, usize) {
        (self.mode.is_none(), self.aux_flags.len(), self.size_rank, index)
    }
}

impl ComponentSpec {
    fn slot(&self, key: String) -> VariantSlot {
        if key == SHARED_DISABLED {
            return VariantSlot::SharedDisabled;
        }
        match self.variant_prefix {
            Some(prefix) => VariantSlot::Named(format!("{}-{}", prefix, key)),
            None => VariantSlot::Named(key),
        }
    }

    fn accepts(&self, state: StateKey) -> bool {
        self.states.contains(&state)
    }
}

/// A node considered for a category together with its parsed descriptor.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub node: &'a DocumentNode,
    pub descriptor: Descriptor,
}

/// Extract a component category in both modes. `None` when nothing was found.
pub fn extract_component(
    document: &DocumentNode,
    spec: &ComponentSpec,
    paints: PaintResolver<'_>,
) -> Option<ComponentRecord> {
    let candidates = collect_candidates(document, spec);
    if candidates.is_empty() {
        debug!(category = %spec.category, "no component candidates");
        return None;
    }
    let mut record = ComponentRecord::default();
    for mode in Mode::ALL {
        *record.mode_mut(mode) = build_mode(&candidates, spec, paints, mode);
    }
    info!(
        category = %spec.category,
        candidates = candidates.len(),
        light = record.light.len(),
        dark = record.dark.len(),
        "extracted component variants"
    );
    record.non_empty()
}

/// Roots to search: the named section, else component sets carrying the signature word.
fn roots<'a>(document: &'a DocumentNode, spec: &ComponentSpec) -> Vec<&'a DocumentNode> {
    if let Some(section) = locate_section_excluding(document, spec.sections, spec.excludes) {
        return vec![section];
    }
    let Some(signature) = spec.signature else {
        return Vec::new();
    };
    let claims = |text: &str| text.contains(signature) && !mentions_any(text, spec.excludes);
    find_all_of_type(document, NodeType::ComponentSet)
        .into_iter()
        .filter(|set| {
            claims(&set.name.to_lowercase())
                || set.children.iter().any(|child| {
                    VariantProperties::parse(&child.name)
                        .iter()
                        .any(|(_, value)| claims(value))
                })
        })
        .collect()
}

pub fn collect_candidates<'a>(
    document: &'a DocumentNode,
    spec: &ComponentSpec,
) -> Vec<Candidate<'a>> {
    let roots = roots(document, spec);
    if roots.is_empty() {
        debug!(category = %spec.category, "section not found");
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for &root in &roots {
        walk_with_mode(root, None, &mut |node, mode| {
            if node.node_type != NodeType::Component {
                return true;
            }
            if let Some(descriptor) = Descriptor::parse(&node.name, spec, mode) {
                candidates.push(Candidate { node, descriptor });
            }
            false
        });
    }
    // Bare components (icons, helpers) only count when nothing is named by property.
    if candidates.iter().any(|c| c.descriptor.explicit) {
        candidates.retain(|c| c.descriptor.explicit);
    }

    if candidates.is_empty() {
        for &root in &roots {
            labeled_rows(root, spec, None, &mut candidates);
        }
    }
    candidates
}

/// Hand-laid-out sections: rows named after a state, holding one frame per variant.
fn labeled_rows<'a>(
    node: &'a DocumentNode,
    spec: &ComponentSpec,
    context: Option<Mode>,
    out: &mut Vec<Candidate<'a>>,
) {
    for row in &node.children {
        if is_noise_label(&row.name) {
            debug!(category = %spec.category, name = %row.name, "skipping noise label");
            continue;
        }
        if let Some(state) = classify_state(&row.name) {
            let mode = context.or_else(|| Mode::from_label(&row.name));
            for item in row
                .children
                .iter()
                .filter(|item| item.node_type.is_container() && item.is_visible())
            {
                if is_noise_label(&item.name) {
                    continue;
                }
                let Some(key) = spec.variants.classify(&item.name) else {
                    continue;
                };
                out.push(Candidate {
                    node: item,
                    descriptor: Descriptor {
                        variant: spec.slot(key),
                        state,
                        mode,
                        aux_flags: Vec::new(),
                        size_rank: 0,
                        explicit: true,
                    },
                });
            }
        } else if let Some(mode) = context.or_else(|| Mode::from_label(&row.name)) {
            labeled_rows(row, spec, Some(mode), out);
        }
    }
}

/// Assemble one mode's variants from the best candidate per variant and state.
pub fn build_mode(
    candidates: &[Candidate<'_>],
    spec: &ComponentSpec,
    paints: PaintResolver<'_>,
    mode: Mode,
) -> IndexMap<String, StateMap> {
    let mut best: IndexMap<(VariantSlot, StateKey), usize> = IndexMap::new();
    for (index, candidate) in candidates.iter().enumerate() {
        let descriptor = &candidate.descriptor;
        if descriptor.mode.is_some_and(|tag| tag != mode) || !spec.accepts(descriptor.state) {
            continue;
        }
        match best.entry((descriptor.variant.clone(), descriptor.state)) {
            Entry::Occupied(mut slot) => {
                let current = *slot.get();
                if descriptor.rank(index) < candidates[current].descriptor.rank(current) {
                    slot.insert(index);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }

    let mut variants: IndexMap<String, StateMap> = IndexMap::new();
    let mut shared_disabled = None;
    for ((slot, state), index) in best {
        let data = state_data(candidates[index].node, spec, paints, mode);
        match slot {
            VariantSlot::Named(name) => {
                variants.entry(name).or_default().insert(state, data);
            }
            VariantSlot::SharedDisabled => {
                if state == StateKey::Default || shared_disabled.is_none() {
                    shared_disabled = Some(data);
                }
            }
        }
    }

    if spec.accepts(StateKey::Disabled) {
        if let Some(disabled) = shared_disabled {
            let filled = backfill_shared_disabled(&mut variants, &disabled);
            debug!(
                category = %spec.category,
                %mode,
                variants = filled,
                "shared disabled state applied"
            );
        }
    }
    for states in variants.values_mut() {
        states.sort_keys();
    }
    variants
}

/// Give every variant without a disabled state a copy of `disabled`. Returns how many
/// variants were filled.
pub fn backfill_shared_disabled(
    variants: &mut IndexMap<String, StateMap>,
    disabled: &StateData,
) -> usize {
    let mut filled = 0;
    for states in variants.values_mut() {
        if !states.contains_key(&StateKey::Disabled) {
            states.insert(StateKey::Disabled, disabled.clone());
            filled += 1;
        }
    }
    filled
}

/// Styling of one candidate node in `mode`.
pub fn state_data(
    node: &DocumentNode,
    spec: &ComponentSpec,
    paints: PaintResolver<'_>,
    mode: Mode,
) -> StateData {
    let surface = surface_of(node, spec);
    let background = paints.color_value(&surface.fills, mode);
    let border = paints.color_value(&surface.strokes, mode);

    let label = find_descendant(node, &|n| n.node_type == NodeType::Text && n.is_visible());
    let glyph = match spec.text_source {
        TextSource::Icon => find_descendant(node, &|n| {
            n.node_type.is_vector_like()
                && n.is_visible()
                && !std::ptr::eq(n, surface)
                && PaintResolver::effective(&n.fills).is_some()
        }),
        TextSource::Text => None,
    };
    let text = glyph
        .or(label)
        .and_then(|n| paints.resolve_paints(&n.fills, mode))
        .map(|color| ColorValue::from_color(&color))
        .unwrap_or(spec.default_text);

    StateData {
        background,
        text,
        border,
        typography: label.and_then(|n| n.style.as_ref()).and_then(text_style),
        layout: layout_data(node, surface, !border.is_transparent()),
    }
}

fn is_painted(node: &DocumentNode) -> bool {
    PaintResolver::effective(&node.fills).is_some()
        || PaintResolver::effective(&node.strokes).is_some()
}

fn surface_of<'a>(node: &'a DocumentNode, spec: &ComponentSpec) -> &'a DocumentNode {
    let named = || {
        find_descendant(node, &|n| {
            n.is_visible()
                && n.node_type != NodeType::Text
                && words(&n.name).any(|word| spec.surface_names.contains(&word.as_str()))
        })
    };
    if spec.prefer_named_surface {
        return named().unwrap_or(node);
    }
    if is_painted(node) {
        node
    } else {
        named().unwrap_or(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::BUTTON_VARIANTS;

    static SPEC: ComponentSpec = ComponentSpec {
        category: Category::Buttons,
        sections: &["Buttons"],
        signature: Some("button"),
        excludes: &["radio", "checkbox"],
        variant_keys: &["variant", "type"],
        state_keys: &["state"],
        variants: &BUTTON_VARIANTS,
        default_variant: "primary",
        variant_prefix: None,
        states: &[StateKey::Default, StateKey::Hover, StateKey::Active, StateKey::Disabled],
        surface_names: SURFACE_NAMES,
        prefer_named_surface: false,
        text_source: TextSource::Text,
        default_text: ColorValue::new(255, 255, 255),
    };

    fn descriptor(name: &str, context: Option<Mode>) -> Descriptor {
        Descriptor::parse(name, &SPEC, context).expect("descriptor")
    }

    #[test]
    fn descriptor_from_variant_name() {
        let d = descriptor("Variant=Button primary, State=Hover", None);
        assert_eq!(d.variant, VariantSlot::Named("primary".to_string()));
        assert_eq!(d.state, StateKey::Hover);
        assert_eq!(d.mode, None);
        assert!(d.aux_flags.is_empty());
        assert!(d.explicit);
    }

    #[test]
    fn descriptor_mode_from_property_beats_context() {
        let d = descriptor("Variant=Primary, Theme=Dark", Some(Mode::Light));
        assert_eq!(d.mode, Some(Mode::Dark));
        let inherited = descriptor("Variant=Primary", Some(Mode::Light));
        assert_eq!(inherited.mode, Some(Mode::Light));
    }

    #[test]
    fn descriptor_flags_and_size() {
        let d = descriptor("Variant=Primary, Icon left=True, Size=Large", None);
        assert_eq!(d.aux_flags, vec!["icon left".to_string()]);
        assert_eq!(d.size_rank, 1);
        let plain = descriptor("Variant=Primary, Icon left=False, Size=M", None);
        assert!(plain.aux_flags.is_empty());
        assert_eq!(plain.size_rank, 0);
    }

    #[test]
    fn descriptor_disabled_variant_and_flag() {
        let shared = descriptor("Variant=Disabled", None);
        assert_eq!(shared.variant, VariantSlot::SharedDisabled);
        let flagged = descriptor("Variant=Secondary, Disabled=True", None);
        assert_eq!(flagged.state, StateKey::Disabled);
    }

    #[test]
    fn descriptor_rejects_unknown_spellings() {
        assert!(Descriptor::parse("Variant=Fancy", &SPEC, None).is_none());
        assert!(Descriptor::parse("Variant=Primary, State=Wobbly", &SPEC, None).is_none());
    }

    #[test]
    fn bare_names_classify_or_use_default_variant() {
        let named = descriptor("Ghost", None);
        assert_eq!(named.variant, VariantSlot::Named("ghost".to_string()));
        assert!(!named.explicit);
        let bare = descriptor("Frame 12", None);
        assert_eq!(bare.variant, VariantSlot::Named("primary".to_string()));
    }

    #[test]
    fn shared_disabled_fills_only_missing_states() {
        let state = |r| StateData {
            background: ColorValue::new(r, 0, 0),
            text: ColorValue::Transparent,
            border: ColorValue::Transparent,
            typography: None,
            layout: None,
        };
        let mut variants: IndexMap<String, StateMap> = IndexMap::new();
        variants.insert("primary".into(), IndexMap::from([(StateKey::Default, state(1))]));
        variants.insert(
            "secondary".into(),
            IndexMap::from([(StateKey::Default, state(2)), (StateKey::Disabled, state(3))]),
        );
        assert_eq!(backfill_shared_disabled(&mut variants, &state(9)), 1);
        assert_eq!(variants["primary"][&StateKey::Disabled], state(9));
        assert_eq!(variants["secondary"][&StateKey::Disabled], state(3));
    }
}
