//! Variant-name parsing.
//!
//! Component layers encode their variant properties in the display name, e.g.
//! `"Variant=Button primary, State=Hover"` or `"scale=m (default), appearance=solid"`.
//! Names are parsed here exactly once; everything downstream consumes the parsed form.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

fn default_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\s*\(default\)\s*$").expect("default marker regex"))
}

fn noise_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("noise label regex"))
}

/// Lower-cased `key -> value` pairs parsed from a layer name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantProperties {
    entries: IndexMap<String, String>,
}

impl VariantProperties {
    /// Parse a `key=value, key=value` name.
    ///
    /// Segments without `=` are dropped, keys and values are trimmed and lower-cased, a
    /// trailing `(default)` marker is stripped from values, and the last duplicate key wins.
    pub fn parse(name: &str) -> Self {
        let mut entries = IndexMap::new();
        for segment in name.split(',') {
            let Some((key, value)) = segment.split_once('=') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            let value = value.trim().to_lowercase();
            let value = default_marker().replace(&value, "").trim().to_string();
            // shift_remove keeps "last wins" ordering stable for iteration
            entries.shift_remove(&key);
            entries.insert(key, value);
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// First key of `keys` that is present, with its value.
    pub fn first_of<'k>(&self, keys: &[&'k str]) -> Option<(&'k str, &str)> {
        keys.iter()
            .find_map(|key| self.get(key).map(|value| (*key, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Whether a property value switches a boolean toggle on.
pub fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim(),
        "" | "false" | "no" | "off" | "none" | "0" | "hidden" | "without"
    )
}

/// A bare 6-digit hex string, as left behind by swatch layers named after their color.
pub fn is_noise_label(name: &str) -> bool {
    noise_label().is_match(name.trim())
}

/// Lower-case, hyphen-separated slug (`"Heading 1 / Bold"` -> `"heading-1-bold"`).
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Alphanumeric words of a name, lower-cased.
pub fn words(name: &str) -> impl Iterator<Item = String> + '_ {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}
