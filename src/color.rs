//! Color and unit primitives.
//!
//! Token colors are written as `"R G B"` integer triples (alpha dropped) so they can be
//! dropped straight into `rgb(var(--token) / <alpha>)` style declarations.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::figma::Color;

/// 8-bit sRGB triple.
pub type Rgb = Srgb<u8>;

/// Luminance below this is classified as "dark".
pub const DARK_LUMINANCE_THRESHOLD: f32 = 128.0;

pub const WHITE: Rgb = Srgb::new(255, 255, 255);
pub const BLACK: Rgb = Srgb::new(0, 0, 0);

/// Convert a 0-1 float channel to 0-255, rounding to nearest.
fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a Figma color to an 8-bit triple. Alpha is ignored.
pub fn to_rgb(color: &Color) -> Rgb {
    Srgb::new(
        channel_to_u8(color.r),
        channel_to_u8(color.g),
        channel_to_u8(color.b),
    )
}

/// Format an 8-bit triple as `"R G B"`.
pub fn format_rgb(rgb: Rgb) -> String {
    format!("{} {} {}", rgb.red, rgb.green, rgb.blue)
}

/// Format a Figma color as `"R G B"`.
pub fn format_color(color: &Color) -> String {
    format_rgb(to_rgb(color))
}

/// Weighted luminance `0.299r + 0.587g + 0.114b` on the 0-255 scale.
pub fn luminance(rgb: Rgb) -> f32 {
    0.299 * rgb.red as f32 + 0.587 * rgb.green as f32 + 0.114 * rgb.blue as f32
}

pub fn is_dark(rgb: Rgb) -> bool {
    luminance(rgb) < DARK_LUMINANCE_THRESHOLD
}

/// Add `delta` to every channel, clamped at 255.
pub fn lighten(rgb: Rgb, delta: u8) -> Rgb {
    Srgb::new(
        rgb.red.saturating_add(delta),
        rgb.green.saturating_add(delta),
        rgb.blue.saturating_add(delta),
    )
}

/// Subtract `delta` from every channel, clamped at 0.
pub fn darken(rgb: Rgb, delta: u8) -> Rgb {
    Srgb::new(
        rgb.red.saturating_sub(delta),
        rgb.green.saturating_sub(delta),
        rgb.blue.saturating_sub(delta),
    )
}

/// Linear blend of `rgb` toward `target`; `ratio` 0.0 keeps `rgb`, 1.0 yields `target`.
pub fn mix(rgb: Rgb, target: Rgb, ratio: f32) -> Rgb {
    let ratio = ratio.clamp(0.0, 1.0);
    let blend = |from: u8, to: u8| -> u8 {
        (from as f32 + (to as f32 - from as f32) * ratio)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Srgb::new(
        blend(rgb.red, target.red),
        blend(rgb.green, target.green),
        blend(rgb.blue, target.blue),
    )
}

/// Format a number with at most two decimals and no trailing zeros (`16.0` -> `"16"`).
pub fn format_number(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Format a pixel length (`12.5` -> `"12.5px"`).
pub fn format_px(value: f32) -> String {
    format!("{}px", format_number(value))
}

/// A token color: either `"transparent"` or an `"R G B"` triple.
///
/// Serialized as a plain string so downstream styling code can always rely on the field
/// being present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorValue {
    #[default]
    Transparent,
    Rgb(Rgb),
}

impl ColorValue {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        ColorValue::Rgb(Srgb::new(red, green, blue))
    }

    pub fn from_color(color: &Color) -> Self {
        ColorValue::Rgb(to_rgb(color))
    }

    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            ColorValue::Transparent => None,
            ColorValue::Rgb(rgb) => Some(*rgb),
        }
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, ColorValue::Transparent)
    }

    /// `Some(true)` for dark colors, `None` for transparent.
    pub fn is_dark(&self) -> Option<bool> {
        self.rgb().map(is_dark)
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        ColorValue::Rgb(rgb)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Transparent => write!(f, "transparent"),
            ColorValue::Rgb(rgb) => write!(f, "{}", format_rgb(*rgb)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color token '{0}': expected \"transparent\" or \"R G B\"")]
pub struct ColorParseError(pub String);

impl FromStr for ColorValue {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(ColorValue::Transparent);
        }
        let channels: Vec<u8> = trimmed
            .split_whitespace()
            .map(|part| part.parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| ColorParseError(s.to_string()))?;
        match channels.as_slice() {
            [r, g, b] => Ok(ColorValue::new(*r, *g, *b)),
            _ => Err(ColorParseError(s.to_string())),
        }
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
