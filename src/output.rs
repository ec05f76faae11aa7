use crate::error::ErrorPayload;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema version for output payloads.
pub const DTX_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum DtxOutput {
    Extract(TokenOutput),
    Categories(CategoriesOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOutput {
    pub version: String,
    /// Name of the source document, when the export carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// Categories with a record after corrections.
    pub categories: Vec<Category>,
    /// `category -> record | null` for every known category.
    pub tokens: Map<String, Value>,
}

impl TokenOutput {
    pub fn new(document: Option<String>, tokens: Map<String, Value>) -> Self {
        let categories = Category::ALL
            .into_iter()
            .filter(|category| {
                tokens
                    .get(category.as_str())
                    .is_some_and(|value| !value.is_null())
            })
            .collect();
        Self {
            version: DTX_OUTPUT_VERSION.to_string(),
            document,
            categories,
            tokens,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesOutput {
    pub version: String,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use serde_json::json;

    #[test]
    fn token_output_lists_present_categories() {
        let mut tokens = Map::new();
        tokens.insert("buttons".into(), json!({"light": {}, "dark": {}}));
        tokens.insert("badges".into(), Value::Null);
        tokens.insert(
            "colors".into(),
            json!({"light": {"blue": {"500": "59 130 246"}}, "dark": {}}),
        );

        let output = DtxOutput::Extract(TokenOutput::new(Some("Design System".into()), tokens));
        let json = serde_json::to_value(&output).expect("serialize extract output");
        assert_eq!(json["mode"], "extract");
        assert_eq!(json["version"], DTX_OUTPUT_VERSION);
        assert_eq!(json["document"], "Design System");
        assert_eq!(json["categories"], json!(["buttons", "colors"]));
        assert!(json["tokens"]["badges"].is_null());
    }

    #[test]
    fn categories_output_serializes() {
        let output = DtxOutput::Categories(CategoriesOutput {
            version: DTX_OUTPUT_VERSION.to_string(),
            categories: Category::ALL.to_vec(),
        });
        let json = serde_json::to_string(&output).expect("serialize categories output");
        assert!(json.contains("\"mode\":\"categories\""));
        assert!(json.contains("\"nav-menus\""));
    }

    #[test]
    fn error_output_serializes() {
        let output = DtxOutput::Error(ErrorOutput {
            version: DTX_OUTPUT_VERSION.to_string(),
            message: Some("boom".to_string()),
            error: ErrorPayload::new(ErrorCategory::Document, "boom".to_string(), "fix it"),
        });
        let json = serde_json::to_string(&output).expect("serialize error output");
        assert!(json.contains("\"mode\":\"error\""));
        assert!(json.contains("\"category\":\"document\""));
        assert!(!json.contains("\"document\":"));
    }
}
