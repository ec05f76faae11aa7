//! Figma document types for parsing exported scene-graph JSON.
//!
//! Only the fields the token extractors read are modelled; everything else in the
//! export is ignored by serde.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Figma node types. Unknown types deserialize to [`NodeType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    #[default]
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Line,
    Star,
    RegularPolygon,
    BooleanOperation,
    #[serde(other)]
    Other,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Document => "DOCUMENT",
            NodeType::Canvas => "CANVAS",
            NodeType::Frame => "FRAME",
            NodeType::Group => "GROUP",
            NodeType::Section => "SECTION",
            NodeType::Component => "COMPONENT",
            NodeType::ComponentSet => "COMPONENT_SET",
            NodeType::Instance => "INSTANCE",
            NodeType::Text => "TEXT",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::Vector => "VECTOR",
            NodeType::Line => "LINE",
            NodeType::Star => "STAR",
            NodeType::RegularPolygon => "REGULAR_POLYGON",
            NodeType::BooleanOperation => "BOOLEAN_OPERATION",
            NodeType::Other => "OTHER",
        }
    }

    /// Shapes that carry an icon glyph (check marks, radio dots).
    pub fn is_vector_like(&self) -> bool {
        matches!(
            self,
            NodeType::Vector
                | NodeType::BooleanOperation
                | NodeType::Star
                | NodeType::Line
                | NodeType::RegularPolygon
                | NodeType::Ellipse
        )
    }

    /// Nodes that can act as a component candidate in a hand-laid-out row.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeType::Frame
                | NodeType::Group
                | NodeType::Component
                | NodeType::Instance
                | NodeType::Section
        )
    }
}

/// A `GET /v1/files/:key` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    pub document: DocumentNode,
}

/// One node of the exported document tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TypeStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<DocumentNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint, weight: f32) -> Self {
        self.strokes.push(paint);
        self.stroke_weight = Some(weight);
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn with_padding(mut self, vertical: f32, horizontal: f32) -> Self {
        self.padding_top = Some(vertical);
        self.padding_bottom = Some(vertical);
        self.padding_left = Some(horizontal);
        self.padding_right = Some(horizontal);
        self
    }

    pub fn with_style(mut self, style: TypeStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_characters(mut self, text: impl Into<String>) -> Self {
        self.characters = Some(text.into());
        self
    }

    /// Hidden layers are still part of the tree but never contribute colors.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// Fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(
        rename = "boundVariables",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub variable_binding: Option<PaintBindings>,
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self {
            paint_type: "SOLID".to_string(),
            visible: None,
            opacity: None,
            color: Some(color),
            variable_binding: None,
        }
    }

    pub fn bound(color: Color, variable_id: impl Into<String>) -> Self {
        Self {
            variable_binding: Some(PaintBindings {
                color: Some(VariableAlias::new(variable_id)),
            }),
            ..Self::solid(color)
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = Some(false);
        self
    }

    pub fn is_solid(&self) -> bool {
        self.paint_type.eq_ignore_ascii_case("SOLID")
    }

    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    pub fn binding(&self) -> Option<&VariableAlias> {
        self.variable_binding.as_ref()?.color.as_ref()
    }
}

/// `boundVariables` on a paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintBindings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<VariableAlias>,
}

/// Reference to an externally defined variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type", default = "VariableAlias::default_kind")]
    pub kind: String,
    pub id: String,
}

impl VariableAlias {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: Self::default_kind(),
            id: id.into(),
        }
    }

    fn default_kind() -> String {
        "VARIABLE_ALIAS".to_string()
    }
}

/// RGBA color from Figma (0.0-1.0 range).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "Color::opaque")]
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color from a `#RRGGBB` or `RRGGBB` hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(
            channel(0)? as f32 / 255.0,
            channel(2)? as f32 / 255.0,
            channel(4)? as f32 / 255.0,
        ))
    }

    fn opaque() -> f32 {
        1.0
    }
}

/// Typography style of a TEXT node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height_px: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
}

/// Layer effect (shadow, blur). Kept for completeness of the node model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// A `GET /v1/files/:key/variables/local` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalVariablesResponse {
    pub meta: LocalVariablesMeta,
}

/// Variables and their collections, keyed by id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalVariablesMeta {
    #[serde(default)]
    pub variables: IndexMap<String, Variable>,
    #[serde(default)]
    pub variable_collections: IndexMap<String, VariableCollection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub variable_collection_id: String,
    #[serde(default)]
    pub resolved_type: Option<String>,
    #[serde(default)]
    pub values_by_mode: IndexMap<String, VariableValue>,
}

/// A per-mode variable value: either a literal color or an alias to another variable.
/// Non-color values (floats, strings, booleans) are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Alias(VariableAlias),
    Color(Color),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub modes: Vec<VariableMode>,
    #[serde(default)]
    pub default_mode_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableMode {
    pub mode_id: String,
    pub name: String,
}
