//! Variable and paint resolution.
//!
//! A paint may be bound to a design variable whose value differs per mode. When a
//! [`VariableResolver`] is available the binding is resolved for the requested [`Mode`];
//! otherwise, or when resolution yields nothing, the paint's literal color is used.

use std::fmt;

use crate::color::ColorValue;
use crate::figma::{Color, LocalVariablesMeta, Paint, VariableAlias, VariableValue};
use crate::types::Mode;

/// Longest alias chain followed before giving up.
const MAX_ALIAS_DEPTH: usize = 8;

/// Capability that turns a variable binding into a concrete color for a mode.
pub trait VariableResolver {
    fn resolve(&self, alias: &VariableAlias, mode: Mode) -> Option<Color>;
}

impl<F> VariableResolver for F
where
    F: Fn(&VariableAlias, Mode) -> Option<Color>,
{
    fn resolve(&self, alias: &VariableAlias, mode: Mode) -> Option<Color> {
        self(alias, mode)
    }
}

/// Resolves fills and strokes to colors.
#[derive(Clone, Copy, Default)]
pub struct PaintResolver<'a> {
    variables: Option<&'a dyn VariableResolver>,
}

impl fmt::Debug for PaintResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintResolver")
            .field("variables", &self.variables.is_some())
            .finish()
    }
}

impl<'a> PaintResolver<'a> {
    pub fn new(variables: Option<&'a dyn VariableResolver>) -> Self {
        Self { variables }
    }

    /// A resolver that only reads literal paint colors.
    pub fn literal() -> Self {
        Self { variables: None }
    }

    pub fn has_variables(&self) -> bool {
        self.variables.is_some()
    }

    /// Resolve a single paint for `mode`.
    pub fn resolve(&self, paint: &Paint, mode: Mode) -> Option<Color> {
        if let (Some(variables), Some(alias)) = (self.variables, paint.binding()) {
            if let Some(color) = variables.resolve(alias, mode) {
                return Some(color);
            }
        }
        paint.color
    }

    /// The first visible solid paint. Later or hidden paints are ignored; there is no
    /// compositing.
    pub fn effective(paints: &[Paint]) -> Option<&Paint> {
        paints
            .iter()
            .find(|paint| paint.is_solid() && paint.is_visible())
    }

    /// Resolve the effective paint of a list.
    pub fn resolve_paints(&self, paints: &[Paint], mode: Mode) -> Option<Color> {
        Self::effective(paints).and_then(|paint| self.resolve(paint, mode))
    }

    /// Token color of a paint list; `transparent` when nothing resolves.
    pub fn color_value(&self, paints: &[Paint], mode: Mode) -> ColorValue {
        self.resolve_paints(paints, mode)
            .map(|color| ColorValue::from_color(&color))
            .unwrap_or(ColorValue::Transparent)
    }
}

/// [`VariableResolver`] over a local-variables payload.
///
/// The mode of each collection is picked by name (`"Light"`, `"Dark mode"`, ...). A
/// collection without a matching mode falls back to its default mode, so single-mode
/// collections resolve identically for both modes.
#[derive(Debug, Clone, Default)]
pub struct LocalVariables {
    meta: LocalVariablesMeta,
}

impl LocalVariables {
    pub fn new(meta: LocalVariablesMeta) -> Self {
        Self { meta }
    }

    pub fn len(&self) -> usize {
        self.meta.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meta.variables.is_empty()
    }

    fn mode_id(&self, collection_id: &str, mode: Mode) -> Option<&str> {
        let collection = self.meta.variable_collections.get(collection_id)?;
        collection
            .modes
            .iter()
            .find(|candidate| Mode::from_label(&candidate.name) == Some(mode))
            .map(|candidate| candidate.mode_id.as_str())
            .or(collection.default_mode_id.as_deref())
            .or_else(|| collection.modes.first().map(|m| m.mode_id.as_str()))
    }

    fn resolve_id(&self, id: &str, mode: Mode, depth: usize) -> Option<Color> {
        if depth >= MAX_ALIAS_DEPTH {
            tracing::warn!(variable = id, "variable alias chain too deep; giving up");
            return None;
        }
        let variable = self.meta.variables.get(id)?;
        let mode_id = self.mode_id(&variable.variable_collection_id, mode);
        let value = mode_id
            .and_then(|mode_id| variable.values_by_mode.get(mode_id))
            .or_else(|| variable.values_by_mode.values().next())?;
        match value {
            VariableValue::Color(color) => Some(*color),
            VariableValue::Alias(alias) => self.resolve_id(&alias.id, mode, depth + 1),
            VariableValue::Other(_) => None,
        }
    }
}

impl VariableResolver for LocalVariables {
    fn resolve(&self, alias: &VariableAlias, mode: Mode) -> Option<Color> {
        self.resolve_id(&alias.id, mode, 0)
    }
}
