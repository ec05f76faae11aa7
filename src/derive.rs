//! Derivation engine.
//!
//! Fills gaps left by extraction: hover states from default states, a danger variant from
//! the primary variant, and whole dark-mode records from light-mode ones. The palettes
//! below are fixed design data and are reproduced exactly, never computed.

use indexmap::IndexMap;
use tracing::debug;

use crate::color::{darken, is_dark, lighten, mix, ColorValue, BLACK, WHITE};
use crate::types::{
    CategoryRecord, ComponentRecord, LayoutData, StateData, StateKey, StateMap, TextToken,
};

/// Background of a hover state derived from a transparent default.
pub const HOVER_ON_TRANSPARENT: ColorValue = ColorValue::new(243, 244, 246);

/// Dark-mode hover background of a transparent variant.
pub const TRANSPARENT_DARK_HOVER: ColorValue = ColorValue::new(55, 65, 81);
/// Dark-mode border of a transparent variant.
pub const TRANSPARENT_DARK_BORDER: ColorValue = ColorValue::new(107, 114, 128);
/// How far text of a transparent variant moves toward white in dark mode.
pub const TRANSPARENT_DARK_TEXT_MIX: f32 = 0.6;

/// How far text-only colors move toward the opposite end in dark mode.
pub const TEXT_DARK_MIX: f32 = 0.85;

pub const PRIMARY: &str = "primary";
pub const DANGER: &str = "danger";

/// Where a record entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Read from the document.
    Sourced,
    /// Computed from a sibling entry.
    Derived,
    /// Built from a fixed palette.
    Synthesized,
}

/// Colors of one state in a fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatePalette {
    pub background: ColorValue,
    pub text: ColorValue,
    /// Used only where the source state has a border.
    pub border: ColorValue,
}

impl StatePalette {
    const fn new(background: ColorValue, text: ColorValue, border: ColorValue) -> Self {
        Self {
            background,
            text,
            border,
        }
    }
}

/// A fixed palette covering every interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePalette {
    pub default: StatePalette,
    pub hover: StatePalette,
    pub active: StatePalette,
    pub focus: StatePalette,
    pub disabled: StatePalette,
}

impl ModePalette {
    pub fn state(&self, state: StateKey) -> &StatePalette {
        match state {
            StateKey::Default => &self.default,
            StateKey::Hover => &self.hover,
            StateKey::Active => &self.active,
            StateKey::Focus => &self.focus,
            StateKey::Disabled => &self.disabled,
        }
    }

    /// Restyle a state with this palette, keeping typography and shape.
    fn apply(&self, state: StateKey, source: &StateData) -> StateData {
        let palette = self.state(state);
        StateData {
            background: palette.background,
            text: palette.text,
            border: if source.border.is_transparent() {
                ColorValue::Transparent
            } else {
                palette.border
            },
            typography: source.typography.clone(),
            layout: source.layout.clone(),
        }
    }
}

const fn rgb(red: u8, green: u8, blue: u8) -> ColorValue {
    ColorValue::new(red, green, blue)
}

/// Dark mode for variants with a dark background: a light, inverted surface.
pub const DARK_INVERTED: ModePalette = {
    let text = rgb(15, 23, 42);
    let border = rgb(203, 213, 225);
    ModePalette {
        default: StatePalette::new(rgb(241, 245, 249), text, border),
        hover: StatePalette::new(rgb(226, 232, 240), text, border),
        active: StatePalette::new(rgb(203, 213, 225), text, border),
        focus: StatePalette::new(rgb(241, 245, 249), text, border),
        disabled: StatePalette::new(rgb(51, 65, 85), rgb(148, 163, 184), border),
    }
};

/// Dark mode for variants with a light background: a dark surface.
pub const DARK_SURFACE: ModePalette = {
    let text = rgb(243, 244, 246);
    let border = rgb(75, 85, 99);
    ModePalette {
        default: StatePalette::new(rgb(31, 41, 55), text, border),
        hover: StatePalette::new(rgb(55, 65, 81), text, border),
        active: StatePalette::new(rgb(75, 85, 99), text, border),
        focus: StatePalette::new(rgb(31, 41, 55), text, border),
        disabled: StatePalette::new(rgb(17, 24, 39), rgb(107, 114, 128), border),
    }
};

/// Dark-mode danger: lighter reds with a deep red label.
pub const DARK_DANGER: ModePalette = {
    let text = rgb(69, 10, 10);
    ModePalette {
        default: StatePalette::new(rgb(248, 113, 113), text, rgb(248, 113, 113)),
        hover: StatePalette::new(rgb(252, 165, 165), text, rgb(252, 165, 165)),
        active: StatePalette::new(rgb(239, 68, 68), text, rgb(239, 68, 68)),
        focus: StatePalette::new(rgb(248, 113, 113), text, rgb(248, 113, 113)),
        disabled: StatePalette::new(rgb(127, 29, 29), rgb(254, 202, 202), rgb(127, 29, 29)),
    }
};

/// Light-mode danger synthesized from the primary variant's shape.
pub const LIGHT_DANGER: ModePalette = {
    let text = rgb(255, 255, 255);
    ModePalette {
        default: StatePalette::new(rgb(220, 38, 38), text, rgb(220, 38, 38)),
        hover: StatePalette::new(rgb(185, 28, 28), text, rgb(185, 28, 28)),
        active: StatePalette::new(rgb(153, 27, 27), text, rgb(153, 27, 27)),
        focus: StatePalette::new(rgb(220, 38, 38), text, rgb(220, 38, 38)),
        disabled: StatePalette::new(rgb(252, 165, 165), text, rgb(252, 165, 165)),
    }
};

/// Which derivations run for a component category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationPlan {
    /// `None` disables hover derivation; otherwise the RGB delta.
    pub hover_delta: Option<u8>,
    pub derive_dark: bool,
    pub synthesize_danger: bool,
}

/// Hover state computed from a default state.
///
/// Transparent backgrounds get a fixed light gray; dark backgrounds are lightened and
/// light ones darkened by `delta` per channel. Text, border and shape are unchanged.
pub fn derive_hover(default: &StateData, delta: u8) -> StateData {
    let background = match default.background.rgb() {
        None => HOVER_ON_TRANSPARENT,
        Some(color) if is_dark(color) => lighten(color, delta).into(),
        Some(color) => darken(color, delta).into(),
    };
    StateData {
        background,
        ..default.clone()
    }
}

/// Add a hover state to every variant that has a default state but no hover.
pub fn fill_missing_hover(
    variants: &mut IndexMap<String, StateMap>,
    delta: u8,
) -> Vec<(String, Provenance)> {
    let mut changed = Vec::new();
    for (name, states) in variants.iter_mut() {
        if states.contains_key(&StateKey::Hover) {
            continue;
        }
        let Some(default) = states.get(&StateKey::Default) else {
            continue;
        };
        let hover = derive_hover(default, delta);
        states.insert(StateKey::Hover, hover);
        states.sort_keys();
        changed.push((name.clone(), Provenance::Derived));
    }
    changed
}

/// Build `target` from `source`'s states and shape with a fixed palette, if `target` is
/// missing and `source` exists.
pub fn synthesize_variant(
    variants: &mut IndexMap<String, StateMap>,
    target: &str,
    source: &str,
    palette: &ModePalette,
) -> Option<Provenance> {
    if variants.contains_key(target) {
        return None;
    }
    let Some(template) = variants.get(source) else {
        debug!(variant = target, source, "no source variant to synthesize from");
        return None;
    };
    let states: StateMap = template
        .iter()
        .map(|(state, data)| {
            let mut styled = palette.apply(*state, data);
            styled.layout = shape_of(data);
            (*state, styled)
        })
        .collect();
    variants.insert(target.to_string(), states);
    Some(Provenance::Synthesized)
}

/// Corner radius and border width only.
fn shape_of(data: &StateData) -> Option<LayoutData> {
    let shape = LayoutData {
        corner_radius: data.corner_radius().map(str::to_string),
        border_width: data.border_width().map(str::to_string),
        ..LayoutData::default()
    };
    (!shape.is_empty()).then_some(shape)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Transparent,
    Dark,
    Light,
}

fn surface_of(states: &StateMap) -> Surface {
    let base = states
        .get(&StateKey::Default)
        .or_else(|| states.values().next());
    match base.and_then(|data| data.background.rgb()) {
        None => Surface::Transparent,
        Some(color) if is_dark(color) => Surface::Dark,
        Some(_) => Surface::Light,
    }
}

/// Dark-mode states of one light-mode variant.
pub fn derive_dark_variant(name: &str, light: &StateMap) -> StateMap {
    if name == DANGER {
        return light
            .iter()
            .map(|(state, data)| (*state, DARK_DANGER.apply(*state, data)))
            .collect();
    }
    let palette = match surface_of(light) {
        Surface::Dark => &DARK_INVERTED,
        Surface::Light => &DARK_SURFACE,
        Surface::Transparent => {
            return light
                .iter()
                .map(|(state, data)| (*state, transparent_dark(data)))
                .collect();
        }
    };
    light
        .iter()
        .map(|(state, data)| (*state, palette.apply(*state, data)))
        .collect()
}

fn transparent_dark(data: &StateData) -> StateData {
    let text = match data.text.rgb() {
        Some(color) => mix(color, WHITE, TRANSPARENT_DARK_TEXT_MIX).into(),
        None => ColorValue::Transparent,
    };
    StateData {
        background: if data.background.is_transparent() {
            ColorValue::Transparent
        } else {
            TRANSPARENT_DARK_HOVER
        },
        text,
        border: if data.border.is_transparent() {
            ColorValue::Transparent
        } else {
            TRANSPARENT_DARK_BORDER
        },
        typography: data.typography.clone(),
        layout: data.layout.clone(),
    }
}

/// Whole dark-mode variant map derived from light mode.
pub fn derive_dark(light: &IndexMap<String, StateMap>) -> IndexMap<String, StateMap> {
    light
        .iter()
        .map(|(name, states)| (name.clone(), derive_dark_variant(name, states)))
        .collect()
}

/// Run the derivation steps on an extracted component record.
///
/// The dark record is kept only when it was extracted and differs from light mode; an
/// empty or identical dark record is replaced by one derived from the completed light
/// record.
pub fn derive_component(record: ComponentRecord, plan: &DerivationPlan) -> ComponentRecord {
    let ComponentRecord { mut light, mut dark } = record;
    let dark_sourced = !dark.is_empty() && dark != light;

    complete_mode(&mut light, plan, &LIGHT_DANGER, "light");

    if dark_sourced {
        debug!(provenance = ?Provenance::Sourced, variants = dark.len(), "dark mode extracted");
        complete_mode(&mut dark, plan, &DARK_DANGER, "dark");
    } else if plan.derive_dark && !light.is_empty() {
        dark = derive_dark(&light);
        debug!(variants = dark.len(), "dark mode derived from light mode");
    } else {
        // A literal copy of light mode is not a dark theme.
        dark.clear();
    }
    ComponentRecord::new(light, dark)
}

fn complete_mode(
    variants: &mut IndexMap<String, StateMap>,
    plan: &DerivationPlan,
    danger: &ModePalette,
    mode: &str,
) {
    if let Some(delta) = plan.hover_delta {
        for (name, provenance) in fill_missing_hover(variants, delta) {
            debug!(mode, variant = %name, ?provenance, "hover state derived");
        }
    }
    if plan.synthesize_danger {
        if let Some(provenance) = synthesize_variant(variants, DANGER, PRIMARY, danger) {
            debug!(mode, variant = DANGER, ?provenance, "variant synthesized");
        }
    }
}

/// Dark text color for text-only tokens: dark colors brighten, light colors deepen.
pub fn dark_text(color: ColorValue) -> ColorValue {
    match color.rgb() {
        Some(rgb) if is_dark(rgb) => mix(rgb, WHITE, TEXT_DARK_MIX).into(),
        Some(rgb) => mix(rgb, BLACK, TEXT_DARK_MIX).into(),
        None => ColorValue::Transparent,
    }
}

/// Dark text tokens: kept when extracted and distinct, otherwise derived from light mode.
pub fn derive_text_dark(record: CategoryRecord<TextToken>) -> CategoryRecord<TextToken> {
    let CategoryRecord { light, dark } = record;
    if !dark.is_empty() && dark != light {
        return CategoryRecord::new(light, dark);
    }
    let dark = light
        .iter()
        .map(|(role, token)| {
            let derived = TextToken {
                color: dark_text(token.color),
                typography: token.typography.clone(),
            };
            (role.clone(), derived)
        })
        .collect();
    CategoryRecord::new(light, dark)
}

/// Mode-independent categories: drop a dark record that merely repeats light mode.
pub fn drop_repeated_dark<T: PartialEq>(mut record: CategoryRecord<T>) -> CategoryRecord<T> {
    if record.dark == record.light {
        record.dark.clear();
    }
    record
}
