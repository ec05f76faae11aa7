//! Raw property value -> canonical key classification.
//!
//! Every category classifies its variant and state names through a [`Classifier`]: a
//! static table of exact spellings plus a fallback rule for spellings the table does not
//! know. The tables below are the only place raw spellings are listed.

use crate::types::StateKey;
use crate::variant::slugify;

/// Variant key that marks a "disabled" variant to be redistributed as a shared state.
pub const SHARED_DISABLED: &str = "disabled";

/// What to do with a value the exact table does not contain.
#[derive(Debug, Clone, Copy)]
pub enum Fallback {
    /// Unknown values are not classified.
    Reject,
    /// First `(needle, key)` whose needle is a substring of the value.
    Keywords(&'static [(&'static str, &'static str)]),
    /// Unknown values become their own slug.
    Passthrough,
}

#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    table: &'static [(&'static str, &'static str)],
    fallback: Fallback,
}

impl Classifier {
    pub const fn new(table: &'static [(&'static str, &'static str)], fallback: Fallback) -> Self {
        Self { table, fallback }
    }

    pub fn classify(&self, raw: &str) -> Option<String> {
        let value = normalize(raw);
        if value.is_empty() {
            return None;
        }
        if let Some((_, key)) = self.table.iter().find(|(spelling, _)| *spelling == value) {
            return Some((*key).to_string());
        }
        match self.fallback {
            Fallback::Reject => None,
            Fallback::Keywords(keywords) => keywords
                .iter()
                .find(|(needle, _)| value.contains(needle))
                .map(|(_, key)| (*key).to_string()),
            Fallback::Passthrough => Some(slugify(&value)).filter(|slug| !slug.is_empty()),
        }
    }

    /// Like [`Classifier::classify`], but never passes unknown values through.
    pub fn classify_known(&self, raw: &str) -> Option<String> {
        match self.fallback {
            Fallback::Passthrough => Classifier::new(self.table, Fallback::Reject).classify(raw),
            _ => self.classify(raw),
        }
    }
}

/// Lower-case, trim, treat `_` as a space and collapse runs of whitespace.
fn normalize(raw: &str) -> String {
    raw.replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Interaction states, shared by every category.
pub static STATES: Classifier = Classifier::new(
    &[
        ("default", "default"),
        ("enabled", "default"),
        ("rest", "default"),
        ("resting", "default"),
        ("idle", "default"),
        ("normal", "default"),
        ("static", "default"),
        ("base", "default"),
        ("hover", "hover"),
        ("hovered", "hover"),
        ("hovering", "hover"),
        ("mouse over", "hover"),
        ("mouseover", "hover"),
        ("active", "active"),
        ("pressed", "active"),
        ("press", "active"),
        ("clicked", "active"),
        ("selected", "active"),
        ("current", "active"),
        ("open", "active"),
        ("focus", "focus"),
        ("focused", "focus"),
        ("focus visible", "focus"),
        ("focus-visible", "focus"),
        ("focus ring", "focus"),
        ("disabled", "disabled"),
        ("inactive", "disabled"),
        ("unavailable", "disabled"),
    ],
    Fallback::Keywords(&[
        ("hover", "hover"),
        ("press", "active"),
        ("focus", "focus"),
        ("disab", "disabled"),
        ("default", "default"),
        ("enabled", "default"),
    ]),
);

/// Classify a raw state value into a [`StateKey`].
pub fn classify_state(raw: &str) -> Option<StateKey> {
    STATES.classify(raw)?.parse().ok()
}

pub static BUTTON_VARIANTS: Classifier = Classifier::new(
    &[
        ("primary", "primary"),
        ("button primary", "primary"),
        ("btn primary", "primary"),
        ("primary button", "primary"),
        ("filled", "primary"),
        ("solid", "primary"),
        ("fill", "primary"),
        ("brand", "primary"),
        ("contained", "primary"),
        ("secondary", "secondary"),
        ("button secondary", "secondary"),
        ("btn secondary", "secondary"),
        ("neutral", "secondary"),
        ("tonal", "secondary"),
        ("soft", "secondary"),
        ("subtle", "secondary"),
        ("outline", "outline"),
        ("outlined", "outline"),
        ("button outline", "outline"),
        ("bordered", "outline"),
        ("stroke", "outline"),
        ("outline-fill:neutral", "outline"),
        ("outline-fill:none", "outline"),
        ("ghost", "ghost"),
        ("button ghost", "ghost"),
        ("tertiary", "ghost"),
        ("button tertiary", "ghost"),
        ("text", "ghost"),
        ("link", "ghost"),
        ("plain", "ghost"),
        ("borderless", "ghost"),
        ("minimal", "ghost"),
        ("danger", "danger"),
        ("button danger", "danger"),
        ("destructive", "danger"),
        ("error", "danger"),
        ("critical", "danger"),
        ("negative", "danger"),
        ("delete", "danger"),
        ("disabled", SHARED_DISABLED),
        ("button disabled", SHARED_DISABLED),
    ],
    Fallback::Keywords(&[
        ("primary", "primary"),
        ("secondary", "secondary"),
        ("outline", "outline"),
        ("ghost", "ghost"),
        ("tertiary", "ghost"),
        ("danger", "danger"),
        ("destruct", "danger"),
        ("disabled", SHARED_DISABLED),
    ]),
);

pub static BADGE_VARIANTS: Classifier = Classifier::new(
    &[
        ("neutral", "neutral"),
        ("default", "neutral"),
        ("gray", "neutral"),
        ("grey", "neutral"),
        ("info", "info"),
        ("informative", "info"),
        ("blue", "info"),
        ("success", "success"),
        ("positive", "success"),
        ("green", "success"),
        ("warning", "warning"),
        ("caution", "warning"),
        ("yellow", "warning"),
        ("orange", "warning"),
        ("danger", "danger"),
        ("error", "danger"),
        ("critical", "danger"),
        ("negative", "danger"),
        ("red", "danger"),
        ("brand", "brand"),
        ("primary", "brand"),
        ("disabled", SHARED_DISABLED),
    ],
    Fallback::Passthrough,
);

pub static INPUT_VARIANTS: Classifier = Classifier::new(
    &[
        ("default", "default"),
        ("outlined", "default"),
        ("outline", "default"),
        ("text", "default"),
        ("filled", "filled"),
        ("fill", "filled"),
        ("error", "error"),
        ("invalid", "error"),
        ("destructive", "error"),
        ("danger", "error"),
        ("success", "success"),
        ("valid", "success"),
        ("disabled", SHARED_DISABLED),
    ],
    Fallback::Keywords(&[("error", "error"), ("fill", "filled"), ("success", "success")]),
);

pub static DROPDOWN_VARIANTS: Classifier = Classifier::new(
    &[
        ("trigger", "trigger"),
        ("button", "trigger"),
        ("field", "trigger"),
        ("select", "trigger"),
        ("input", "trigger"),
        ("item", "item"),
        ("option", "item"),
        ("menu item", "item"),
        ("list item", "item"),
        ("menu", "menu"),
        ("list", "menu"),
        ("panel", "menu"),
        ("popover", "menu"),
        ("disabled", SHARED_DISABLED),
    ],
    Fallback::Passthrough,
);

pub static NAV_VARIANTS: Classifier = Classifier::new(
    &[
        ("item", "item"),
        ("nav item", "item"),
        ("menu item", "item"),
        ("link", "item"),
        ("default", "item"),
        ("sub item", "subitem"),
        ("subitem", "subitem"),
        ("sub-item", "subitem"),
        ("child", "subitem"),
        ("nested", "subitem"),
        ("header", "header"),
        ("section", "header"),
        ("group", "header"),
        ("title", "header"),
        ("tab", "tab"),
        ("disabled", SHARED_DISABLED),
    ],
    Fallback::Passthrough,
);

pub static TOGGLE_VARIANTS: Classifier = Classifier::new(
    &[
        ("true", "checked"),
        ("yes", "checked"),
        ("on", "checked"),
        ("checked", "checked"),
        ("selected", "checked"),
        ("false", "unchecked"),
        ("no", "unchecked"),
        ("off", "unchecked"),
        ("unchecked", "unchecked"),
        ("unselected", "unchecked"),
        ("empty", "unchecked"),
        ("indeterminate", "indeterminate"),
        ("mixed", "indeterminate"),
        ("partial", "indeterminate"),
        ("partially checked", "indeterminate"),
    ],
    Fallback::Keywords(&[
        ("indeterminate", "indeterminate"),
        ("unchecked", "unchecked"),
        ("checked", "checked"),
    ]),
);

pub static LINK_VARIANTS: Classifier = Classifier::new(
    &[
        ("default", "default"),
        ("inline", "default"),
        ("standalone", "default"),
        ("primary", "default"),
        ("subtle", "subtle"),
        ("secondary", "subtle"),
        ("muted", "subtle"),
        ("inverse", "inverse"),
        ("inverted", "inverse"),
        ("on dark", "inverse"),
        ("disabled", SHARED_DISABLED),
    ],
    Fallback::Passthrough,
);

pub static TEXT_ROLES: Classifier = Classifier::new(
    &[
        ("title", "title"),
        ("heading", "title"),
        ("headline", "title"),
        ("header", "title"),
        ("subtitle", "subtitle"),
        ("subheading", "subtitle"),
        ("subheader", "subtitle"),
        ("description", "description"),
        ("body", "description"),
        ("paragraph", "description"),
        ("text", "description"),
        ("content", "description"),
        ("caption", "caption"),
        ("helper", "caption"),
        ("hint", "caption"),
        ("footnote", "caption"),
        ("meta", "caption"),
    ],
    Fallback::Keywords(&[
        ("subtitle", "subtitle"),
        ("subhead", "subtitle"),
        ("title", "title"),
        ("heading", "title"),
        ("description", "description"),
        ("body", "description"),
        ("caption", "caption"),
        ("helper", "caption"),
    ]),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_table_maps_many_spellings_to_one_key() {
        for raw in ["Button primary", "PRIMARY", "filled", "btn_primary"] {
            assert_eq!(BUTTON_VARIANTS.classify(raw).as_deref(), Some("primary"), "{raw}");
        }
        assert_eq!(
            BUTTON_VARIANTS.classify("outline-fill:neutral").as_deref(),
            Some("outline")
        );
        assert_eq!(BUTTON_VARIANTS.classify("Tertiary").as_deref(), Some("ghost"));
        assert_eq!(BUTTON_VARIANTS.classify("Destructive").as_deref(), Some("danger"));
    }

    #[test]
    fn keyword_fallback_catches_decorated_names() {
        assert_eq!(
            BUTTON_VARIANTS.classify("Primary (large)").as_deref(),
            Some("primary")
        );
        assert_eq!(BUTTON_VARIANTS.classify("Unknown thing"), None);
    }

    #[test]
    fn passthrough_fallback_slugs_unknown_values() {
        assert_eq!(
            BADGE_VARIANTS.classify("Purple Haze").as_deref(),
            Some("purple-haze")
        );
        assert_eq!(BADGE_VARIANTS.classify("  "), None);
        assert_eq!(BADGE_VARIANTS.classify_known("Purple Haze"), None);
        assert_eq!(BADGE_VARIANTS.classify_known("Error").as_deref(), Some("danger"));
    }

    #[test]
    fn disabled_variant_maps_to_shared_marker() {
        assert_eq!(
            BUTTON_VARIANTS.classify("Disabled").as_deref(),
            Some(SHARED_DISABLED)
        );
        assert_eq!(
            INPUT_VARIANTS.classify("disabled").as_deref(),
            Some(SHARED_DISABLED)
        );
    }

    #[test]
    fn states_classify_to_canonical_keys() {
        assert_eq!(classify_state("Enabled"), Some(StateKey::Default));
        assert_eq!(classify_state("hover"), Some(StateKey::Hover));
        assert_eq!(classify_state("Pressed"), Some(StateKey::Active));
        assert_eq!(classify_state("Focus visible"), Some(StateKey::Focus));
        assert_eq!(classify_state("disabled"), Some(StateKey::Disabled));
        assert_eq!(classify_state("On hover"), Some(StateKey::Hover));
        assert_eq!(classify_state("checked"), None);
        assert_eq!(classify_state("1D4ED8"), None);
    }

    #[test]
    fn toggle_values() {
        assert_eq!(TOGGLE_VARIANTS.classify("True").as_deref(), Some("checked"));
        assert_eq!(TOGGLE_VARIANTS.classify("off").as_deref(), Some("unchecked"));
        assert_eq!(
            TOGGLE_VARIANTS.classify("Mixed").as_deref(),
            Some("indeterminate")
        );
        assert_eq!(
            TOGGLE_VARIANTS.classify("is unchecked").as_deref(),
            Some("unchecked")
        );
    }

    #[test]
    fn text_roles() {
        assert_eq!(TEXT_ROLES.classify("Heading").as_deref(), Some("title"));
        assert_eq!(TEXT_ROLES.classify("Card subtitle").as_deref(), Some("subtitle"));
        assert_eq!(TEXT_ROLES.classify("Helper text").as_deref(), Some("caption"));
        assert_eq!(TEXT_ROLES.classify("Icon"), None);
    }
}
