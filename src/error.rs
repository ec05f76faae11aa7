use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DtxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid document: {0}")]
    Document(String),

    #[error("Correction '{name}' error: {message}")]
    Correction { name: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl DtxError {
    pub fn correction(name: impl Into<String>, message: impl Into<String>) -> Self {
        DtxError::Correction {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            DtxError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            DtxError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Document,
                e.to_string(),
                "Check that the input is valid JSON exported from the design tool.",
            ),
            DtxError::ConfigParse(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Fix the TOML syntax in the config file or remove --config to use defaults.",
            ),
            DtxError::Document(msg) => ErrorPayload::new(
                ErrorCategory::Document,
                msg.to_string(),
                "Pass a files-endpoint response ({\"document\": ...}) or a single node object.",
            ),
            DtxError::Correction { name, message } => ErrorPayload::new(
                ErrorCategory::Correction,
                format!("Correction '{}': {}", name, message),
                "Each correction file must be a JSON object named <category>.json.",
            ),
            DtxError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("unknown category") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Run `dtx categories` to list valid category names.",
                    )
                } else if lower.contains("hover_delta") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Set derivation.hover_delta to a value between 1 and 255.",
                    )
                } else if lower.contains("not found") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Verify the file exists; use an absolute path or run from the working directory.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags/paths and the config file.",
                    )
                }
            }
            DtxError::Unknown(msg) => ErrorPayload::new(
                ErrorCategory::Unknown,
                msg.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, DtxError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Document,
    Correction,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
