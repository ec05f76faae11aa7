//! Correction overlay.
//!
//! Human-authored JSON files patch the automated results. Each file is named after the
//! category it corrects (`buttons.json`) and holds a partial record that is deep-merged
//! over the extracted one; correction values always win.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{DtxError, Result};

/// One correction document, keyed by the category it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    pub name: String,
    pub value: Value,
}

impl Correction {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Merge `overlay` over `base` without touching either.
///
/// Objects merge key by key, recursively; anything else in `overlay` (scalars, arrays,
/// `null`) replaces the base value outright.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            let mut merged = base.clone();
            for (key, value) in overlay {
                let next = match base.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        _ => overlay.clone(),
    }
}

/// Apply corrections to serialized results (`category -> record | null`).
///
/// A correction for a category that is absent replaces the `null`. A correction whose name
/// is not a key of `results` is skipped with a warning.
pub fn apply_corrections(
    results: &Map<String, Value>,
    corrections: &[Correction],
) -> Map<String, Value> {
    let mut merged = results.clone();
    for correction in corrections {
        let Some(slot) = merged.get_mut(&correction.name) else {
            warn!(name = %correction.name, "correction does not match any category; skipping");
            continue;
        };
        *slot = deep_merge(slot, &correction.value);
        info!(category = %correction.name, "correction applied");
    }
    merged
}

/// Read one correction file; the file stem names the category.
pub fn load_correction(path: &Path) -> Result<Correction> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            DtxError::correction(path.display().to_string(), "file name is not valid UTF-8")
        })?
        .to_string();
    let content = fs::read_to_string(path).map_err(|e| DtxError::correction(&name, e.to_string()))?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| DtxError::correction(&name, e.to_string()))?;
    if !value.is_object() {
        return Err(DtxError::correction(&name, "expected a JSON object"));
    }
    Ok(Correction::new(name, value))
}

/// Load every `*.json` file in `dir`, in file-name order.
pub fn load_corrections(dir: &Path) -> Result<Vec<Correction>> {
    if !dir.is_dir() {
        return Err(DtxError::Config(format!(
            "Corrections directory not found: {}",
            dir.display()
        )));
    }
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if path.is_file() && is_json {
            paths.push(path);
        }
    }
    paths.sort();
    paths.iter().map(|path| load_correction(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn nested_objects_merge_leafwise() {
        let base = json!({
            "light": {"primary": {"default": {"background": "1 2 3", "text": "4 5 6"}}}
        });
        let overlay = json!({"light": {"primary": {"default": {"background": "9 9 9"}}}});
        let merged = deep_merge(&base, &overlay);
        assert_eq!(
            merged,
            json!({"light": {"primary": {"default": {"background": "9 9 9", "text": "4 5 6"}}}})
        );
        // Inputs are untouched.
        assert_eq!(base["light"]["primary"]["default"]["background"], "1 2 3");
    }

    #[test]
    fn non_objects_replace() {
        assert_eq!(deep_merge(&json!({"a": [1, 2]}), &json!({"a": [3]})), json!({"a": [3]}));
        assert_eq!(deep_merge(&json!({"a": 1}), &json!({"a": null})), json!({"a": null}));
        assert_eq!(deep_merge(&json!(null), &json!({"b": 2})), json!({"b": 2}));
        assert_eq!(deep_merge(&json!({"a": 1}), &json!("x")), json!("x"));
    }

    #[test]
    fn corrections_apply_once_and_skip_unknown_names() {
        let results = as_map(json!({
            "buttons": {"light": {"primary": {"default": {"background": "1 2 3"}}}, "dark": {}},
            "badges": null
        }));
        let corrections = vec![
            Correction::new(
                "buttons",
                json!({"dark": {"primary": {"default": {"background": "7 7 7"}}}}),
            ),
            Correction::new("badges", json!({"light": {"info": {}}, "dark": {}})),
            Correction::new("carousels", json!({"light": {}})),
        ];
        let merged = apply_corrections(&results, &corrections);
        assert_eq!(merged["buttons"]["dark"]["primary"]["default"]["background"], "7 7 7");
        assert_eq!(merged["buttons"]["light"]["primary"]["default"]["background"], "1 2 3");
        assert_eq!(merged["badges"], json!({"light": {"info": {}}, "dark": {}}));
        assert!(!merged.contains_key("carousels"));
        assert!(results["badges"].is_null());

        let twice = apply_corrections(&merged, &corrections);
        assert_eq!(twice, merged);
    }

    #[test]
    fn loads_json_files_in_name_order() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("buttons.json"), r#"{"light": {}}"#).expect("write");
        fs::write(dir.path().join("badges.json"), r#"{"dark": {}}"#).expect("write");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write");

        let corrections = load_corrections(dir.path()).expect("corrections");
        let names: Vec<&str> = corrections.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["badges", "buttons"]);
        assert_eq!(corrections[1].value, json!({"light": {}}));
    }

    #[test]
    fn malformed_correction_is_an_error() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("inputs.json"), "{not json").expect("write");
        let err = load_corrections(dir.path()).expect_err("parse error");
        assert!(matches!(err, DtxError::Correction { ref name, .. } if name == "inputs"));

        fs::write(dir.path().join("inputs.json"), "[1, 2]").expect("write");
        let err = load_corrections(dir.path()).expect_err("not an object");
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn missing_directory_is_a_config_error() {
        let dir = tempdir().expect("tempdir");
        let err = load_corrections(&dir.path().join("missing")).expect_err("missing");
        assert!(matches!(err, DtxError::Config(_)));
        assert!(err.to_string().contains("not found"));
    }
}
