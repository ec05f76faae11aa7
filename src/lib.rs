//! Design Token Extractor (DTX) Library
//!
//! Turns an exported design document (a Figma node tree) into structured design tokens:
//! per-variant, per-state, per-mode component styling plus text, typography and color
//! scales. Missing states, dark mode and danger variants are derived with fixed
//! heuristics, and human-authored corrections are merged over the result.
//!
//! # Module Overview
//!
//! - [`figma`] - Document and local-variables input types
//! - [`variant`] / [`classify`] - Variant-name parsing and name classification
//! - [`tree`] - Tree navigation helpers
//! - [`resolve`] - Variable and paint resolution per mode
//! - [`extract`] - Per-category extractors
//! - [`derive`] - Hover, dark-mode and danger derivation
//! - [`normalize`] - Cross-variant normalization
//! - [`overlay`] - Correction overlay
//! - [`pipeline`] - End-to-end orchestration
//! - [`config`] - Configuration file support
//! - [`types`] - Token records
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use dtx_lib::{load_corrections, parse_document, Config, Pipeline};
//!
//! # fn example() -> dtx_lib::Result<()> {
//! let bytes = std::fs::read("design.json")?;
//! let document = parse_document(&bytes)?;
//! let corrections = load_corrections(std::path::Path::new("corrections"))?;
//!
//! let pipeline = Pipeline::new(Config::default());
//! let tokens = pipeline.run(&document, &corrections)?;
//! println!("{}", serde_json::to_string_pretty(&tokens)?);
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod color;
pub mod config;
pub mod derive;
pub mod error;
pub mod extract;
pub mod figma;
pub mod normalize;
pub mod output;
pub mod overlay;
pub mod pipeline;
pub mod resolve;
pub mod tree;
pub mod types;
pub mod variant;

pub use color::ColorValue;
pub use config::Config;
pub use derive::{DerivationPlan, Provenance};
pub use error::{DtxError, ErrorCategory, ErrorPayload, Result};
pub use figma::{parse_document, parse_local_variables, DocumentNode, NodeType};
pub use output::{CategoriesOutput, DtxOutput, ErrorOutput, TokenOutput, DTX_OUTPUT_VERSION};
pub use overlay::{apply_corrections, deep_merge, load_corrections, Correction};
pub use pipeline::Pipeline;
pub use resolve::{LocalVariables, PaintResolver, VariableResolver};
pub use types::{
    Category, CategoryRecord, ComponentRecord, Mode, StateData, StateKey, StateMap, TextToken,
    TokenSet,
};
pub use variant::VariantProperties;
