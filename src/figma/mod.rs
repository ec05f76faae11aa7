//! Figma document input.
//!
//! This module provides:
//! - API types for parsing exported Figma JSON ([`DocumentNode`], [`Paint`], ...)
//! - [`parse_document`] - accepts a full file response or a bare node
//! - [`parse_local_variables`] - accepts a local-variables response or its `meta` body

pub mod api_types;


pub use api_types::{
    Color, DocumentNode, Effect, FigmaFile, LocalVariablesMeta, LocalVariablesResponse, NodeType,
    Paint, PaintBindings, TypeStyle, Variable, VariableAlias, VariableCollection, VariableMode,
    VariableValue,
};

use crate::{DtxError, Result};
use serde_json::Value;

/// Parse a document tree from exported JSON.
///
/// Both `{"name": ..., "document": {...}}` (the files endpoint) and a bare node object are
/// accepted. Anything else is a [`DtxError::Document`].
pub fn parse_document(bytes: &[u8]) -> Result<DocumentNode> {
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Object(map) = &value else {
        return Err(DtxError::Document(
            "expected a JSON object at the top level".to_string(),
        ));
    };

    if map.contains_key("document") {
        let file: FigmaFile = serde_json::from_value(value)?;
        return Ok(file.document);
    }
    if map.contains_key("type") || map.contains_key("children") {
        return Ok(serde_json::from_value(value)?);
    }

    Err(DtxError::Document(
        "JSON has neither a `document` field nor node fields (`type`, `children`)".to_string(),
    ))
}

/// Parse a local-variables payload into its `meta` body.
pub fn parse_local_variables(bytes: &[u8]) -> Result<LocalVariablesMeta> {
    let value: Value = serde_json::from_slice(bytes)?;
    if value.get("meta").is_some() {
        let response: LocalVariablesResponse = serde_json::from_value(value)?;
        return Ok(response.meta);
    }
    if value.get("variables").is_some() {
        return Ok(serde_json::from_value(value)?);
    }
    Err(DtxError::Document(
        "variables JSON has neither a `meta` nor a `variables` field".to_string(),
    ))
}
