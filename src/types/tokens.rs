//! Normalized token records.
//!
//! This module contains the output data model:
//! - [`Mode`] and [`Category`] - the two axes results are keyed by
//! - [`StateKey`], [`StateData`] - per-state component styling
//! - [`CategoryRecord`] - a light/dark pair of keyed entries
//! - [`TokenSet`] - every category's record for one document

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::color::ColorValue;
use crate::error::DtxError;
use crate::variant::words;
use crate::Result;

/// Theme context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Mode named by a whole word in a label (`"Dark mode"`, `"theme=light"`).
    /// `"Highlight"` does not count.
    pub fn from_label(label: &str) -> Option<Mode> {
        words(label).find_map(|word| match word.as_str() {
            "light" => Some(Mode::Light),
            "dark" => Some(Mode::Dark),
            _ => None,
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component categories the engine knows how to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Buttons,
    Badges,
    Inputs,
    Dropdowns,
    NavMenus,
    Checkboxes,
    ExternalLinks,
    TextDescription,
    Typography,
    Colors,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Buttons,
        Category::Badges,
        Category::Inputs,
        Category::Dropdowns,
        Category::NavMenus,
        Category::Checkboxes,
        Category::ExternalLinks,
        Category::TextDescription,
        Category::Typography,
        Category::Colors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Buttons => "buttons",
            Category::Badges => "badges",
            Category::Inputs => "inputs",
            Category::Dropdowns => "dropdowns",
            Category::NavMenus => "nav-menus",
            Category::Checkboxes => "checkboxes",
            Category::ExternalLinks => "external-links",
            Category::TextDescription => "text-description",
            Category::Typography => "typography",
            Category::Colors => "colors",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DtxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| DtxError::Config(format!("Unknown category: {}", s)))
    }
}

/// Canonical interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKey {
    Default,
    Hover,
    Active,
    Focus,
    Disabled,
}

impl StateKey {
    pub const ALL: [StateKey; 5] = [
        StateKey::Default,
        StateKey::Hover,
        StateKey::Active,
        StateKey::Focus,
        StateKey::Disabled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::Default => "default",
            StateKey::Hover => "hover",
            StateKey::Active => "active",
            StateKey::Focus => "focus",
            StateKey::Disabled => "disabled",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateKey {
    type Err = DtxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StateKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DtxError::Unknown(format!("Unknown state key: {}", s)))
    }
}

/// Pre-formatted typography (`"16px"`, `"600"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
}

impl TextStyle {
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_size.is_none()
            && self.font_weight.is_none()
            && self.line_height.is_none()
            && self.letter_spacing.is_none()
    }
}

/// Pre-formatted box metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
}

impl LayoutData {
    pub fn is_empty(&self) -> bool {
        *self == LayoutData::default()
    }
}

/// Styling of one component variant in one interaction state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateData {
    pub background: ColorValue,
    pub text: ColorValue,
    pub border: ColorValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutData>,
}

impl StateData {
    pub fn corner_radius(&self) -> Option<&str> {
        self.layout.as_ref()?.corner_radius.as_deref()
    }

    pub fn border_width(&self) -> Option<&str> {
        self.layout.as_ref()?.border_width.as_deref()
    }
}

/// States of one variant, in canonical [`StateKey`] order once finalized.
pub type StateMap = IndexMap<StateKey, StateData>;

/// Color and typography of a text role or a named text style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextToken {
    pub color: ColorValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TextStyle>,
}

/// Steps of one color scale (`"500" -> "59 130 246"`).
pub type ColorScale = IndexMap<String, ColorValue>;

/// Light and dark entries of one category, keyed by variant/role/scale name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord<T> {
    #[serde(default)]
    pub light: IndexMap<String, T>,
    #[serde(default)]
    pub dark: IndexMap<String, T>,
}

impl<T> Default for CategoryRecord<T> {
    fn default() -> Self {
        Self {
            light: IndexMap::new(),
            dark: IndexMap::new(),
        }
    }
}

impl<T> CategoryRecord<T> {
    pub fn new(light: IndexMap<String, T>, dark: IndexMap<String, T>) -> Self {
        Self { light, dark }
    }

    pub fn mode(&self, mode: Mode) -> &IndexMap<String, T> {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn mode_mut(&mut self, mode: Mode) -> &mut IndexMap<String, T> {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    /// `None` when neither mode has entries, so a returned record is never empty.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// Component categories: variant -> state -> styling.
pub type ComponentRecord = CategoryRecord<StateMap>;

/// Every category's record for one document. `None` means the category is not present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSet {
    pub buttons: Option<ComponentRecord>,
    pub badges: Option<ComponentRecord>,
    pub inputs: Option<ComponentRecord>,
    pub dropdowns: Option<ComponentRecord>,
    pub nav_menus: Option<ComponentRecord>,
    pub checkboxes: Option<ComponentRecord>,
    pub external_links: Option<ComponentRecord>,
    pub text_description: Option<CategoryRecord<TextToken>>,
    pub typography: Option<CategoryRecord<TextToken>>,
    pub colors: Option<CategoryRecord<ColorScale>>,
}

impl TokenSet {
    pub fn component(&self, category: Category) -> Option<&ComponentRecord> {
        self.component_slot(category)?.as_ref()
    }

    /// Storage slot for a component category; `None` for non-component categories.
    pub fn component_slot(&self, category: Category) -> Option<&Option<ComponentRecord>> {
        match category {
            Category::Buttons => Some(&self.buttons),
            Category::Badges => Some(&self.badges),
            Category::Inputs => Some(&self.inputs),
            Category::Dropdowns => Some(&self.dropdowns),
            Category::NavMenus => Some(&self.nav_menus),
            Category::Checkboxes => Some(&self.checkboxes),
            Category::ExternalLinks => Some(&self.external_links),
            Category::TextDescription | Category::Typography | Category::Colors => None,
        }
    }

    pub fn component_slot_mut(
        &mut self,
        category: Category,
    ) -> Option<&mut Option<ComponentRecord>> {
        match category {
            Category::Buttons => Some(&mut self.buttons),
            Category::Badges => Some(&mut self.badges),
            Category::Inputs => Some(&mut self.inputs),
            Category::Dropdowns => Some(&mut self.dropdowns),
            Category::NavMenus => Some(&mut self.nav_menus),
            Category::Checkboxes => Some(&mut self.checkboxes),
            Category::ExternalLinks => Some(&mut self.external_links),
            Category::TextDescription | Category::Typography | Category::Colors => None,
        }
    }

    pub fn is_present(&self, category: Category) -> bool {
        match category {
            Category::TextDescription => self.text_description.is_some(),
            Category::Typography => self.typography.is_some(),
            Category::Colors => self.colors.is_some(),
            other => self.component(other).is_some(),
        }
    }

    /// Categories with a record, in [`Category::ALL`] order.
    pub fn present(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.is_present(*category))
            .collect()
    }

    /// Serialize to `category name -> record | null` for every category.
    pub fn to_map(&self) -> Result<Map<String, Value>> {
        let mut map = Map::new();
        for category in Category::ALL {
            let value = match category {
                Category::TextDescription => serde_json::to_value(&self.text_description)?,
                Category::Typography => serde_json::to_value(&self.typography)?,
                Category::Colors => serde_json::to_value(&self.colors)?,
                other => serde_json::to_value(self.component(other))?,
            };
            map.insert(category.as_str().to_string(), value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(bg: ColorValue) -> StateData {
        StateData {
            background: bg,
            text: ColorValue::new(255, 255, 255),
            border: ColorValue::Transparent,
            typography: None,
            layout: None,
        }
    }

    #[test]
    fn mode_from_label_requires_whole_word() {
        assert_eq!(Mode::from_label("Dark mode"), Some(Mode::Dark));
        assert_eq!(Mode::from_label("Buttons / Light"), Some(Mode::Light));
        assert_eq!(Mode::from_label("Highlight"), None);
        assert_eq!(Mode::from_label("Darkened"), None);
    }

    #[test]
    fn category_parse_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().expect("parse");
            assert_eq!(parsed, category);
        }
        assert_eq!("NAV_MENUS".parse::<Category>().ok(), Some(Category::NavMenus));
        let err = "cards".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Unknown category"));
    }

    #[test]
    fn category_serde_matches_as_str() {
        let json = serde_json::to_string(&Category::ExternalLinks).expect("serialize");
        assert_eq!(json, "\"external-links\"");
    }

    #[test]
    fn empty_record_collapses_to_none() {
        let record: ComponentRecord = CategoryRecord::default();
        assert!(record.non_empty().is_none());

        let mut light = IndexMap::new();
        light.insert("primary".to_string(), StateMap::new());
        let record: ComponentRecord = CategoryRecord::new(light, IndexMap::new());
        assert!(record.non_empty().is_some());
    }

    #[test]
    fn state_data_serializes_colors_as_strings_and_skips_empty_parts() {
        let json = serde_json::to_value(state(ColorValue::new(29, 78, 216))).expect("serialize");
        assert_eq!(json["background"], "29 78 216");
        assert_eq!(json["border"], "transparent");
        assert!(json.get("typography").is_none());
        assert!(json.get("layout").is_none());
    }

    #[test]
    fn token_set_map_lists_every_category() {
        let mut set = TokenSet::default();
        let mut states = StateMap::new();
        states.insert(StateKey::Default, state(ColorValue::new(1, 2, 3)));
        let mut light = IndexMap::new();
        light.insert("primary".to_string(), states);
        set.buttons = Some(CategoryRecord::new(light, IndexMap::new()));

        let map = set.to_map().expect("map");
        assert_eq!(map.len(), Category::ALL.len());
        assert!(map["badges"].is_null());
        assert_eq!(
            map["buttons"]["light"]["primary"]["default"]["background"],
            "1 2 3"
        );
        assert_eq!(set.present(), vec![Category::Buttons]);
    }
}
