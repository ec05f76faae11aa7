//! End-to-end token extraction.
//!
//! Per component category the order is: extract (with shared disabled backfill), derive
//! hover/danger/dark, normalize corner radii. Text categories derive or drop their dark
//! record. Corrections are applied last, over the serialized map.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::Config;
use crate::derive::{derive_component, derive_text_dark, drop_repeated_dark};
use crate::extract;
use crate::figma::DocumentNode;
use crate::normalize::normalize_record;
use crate::overlay::{apply_corrections, Correction};
use crate::resolve::{PaintResolver, VariableResolver};
use crate::types::{Category, ComponentRecord, TokenSet};
use crate::Result;

type ComponentExtractor = fn(&DocumentNode, PaintResolver<'_>) -> Option<ComponentRecord>;

fn component_extractor(category: Category) -> Option<ComponentExtractor> {
    let extractor: ComponentExtractor = match category {
        Category::Buttons => extract::buttons::extract,
        Category::Badges => extract::badges::extract,
        Category::Inputs => extract::inputs::extract,
        Category::Dropdowns => extract::dropdowns::extract,
        Category::NavMenus => extract::nav_menus::extract,
        Category::Checkboxes => extract::checkboxes::extract,
        Category::ExternalLinks => extract::external_links::extract,
        Category::TextDescription | Category::Typography | Category::Colors => return None,
    };
    Some(extractor)
}

/// Runs extraction over one document with a fixed config and resolver set.
pub struct Pipeline<'a> {
    config: Config,
    resolver: Option<&'a dyn VariableResolver>,
    overrides: HashMap<Category, &'a dyn VariableResolver>,
}

impl fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut overrides: Vec<Category> = self.overrides.keys().copied().collect();
        overrides.sort();
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("resolver", &self.resolver.is_some())
            .field("overrides", &overrides)
            .finish()
    }
}

impl<'a> Pipeline<'a> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            resolver: None,
            overrides: HashMap::new(),
        }
    }

    /// Resolver used by every category without an override.
    pub fn with_resolver(mut self, resolver: &'a dyn VariableResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_category_resolver(
        mut self,
        category: Category,
        resolver: &'a dyn VariableResolver,
    ) -> Self {
        self.overrides.insert(category, resolver);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Paint resolver for a category: its override, else the default resolver.
    pub fn paints(&self, category: Category) -> PaintResolver<'a> {
        let variables = self.overrides.get(&category).copied().or(self.resolver);
        PaintResolver::new(variables)
    }

    /// Extract, derive and normalize every enabled category.
    pub fn extract(&self, document: &DocumentNode) -> TokenSet {
        let mut tokens = TokenSet::default();
        for category in Category::ALL {
            if !self.config.is_enabled(category) {
                debug!(%category, "category disabled");
                continue;
            }
            let paints = self.paints(category);
            match category {
                Category::TextDescription => {
                    tokens.text_description =
                        extract::text_description::extract(document, paints).map(derive_text_dark);
                }
                Category::Typography => {
                    tokens.typography = extract::typography::extract(document, paints)
                        .map(drop_repeated_dark);
                }
                Category::Colors => {
                    tokens.colors =
                        extract::colors::extract(document, paints).map(drop_repeated_dark);
                }
                component => {
                    let record = self.component(component, document, paints);
                    if let Some(slot) = tokens.component_slot_mut(component) {
                        *slot = record;
                    }
                }
            }
        }
        info!(
            present = tokens.present().len(),
            enabled = self.config.extraction.categories.len(),
            "extraction finished"
        );
        tokens
    }

    fn component(
        &self,
        category: Category,
        document: &DocumentNode,
        paints: PaintResolver<'_>,
    ) -> Option<ComponentRecord> {
        let extractor = component_extractor(category)?;
        let record = extractor(document, paints)?;
        let mut record = derive_component(record, &self.config.derivation_plan(category));
        if self.config.normalization.backfill_corner_radius {
            normalize_record(&mut record);
        }
        record.non_empty()
    }

    /// Full run: extraction, serialization to `category -> record | null`, corrections.
    pub fn run(
        &self,
        document: &DocumentNode,
        corrections: &[Correction],
    ) -> Result<Map<String, Value>> {
        let results = self.extract(document).to_map()?;
        Ok(apply_corrections(&results, corrections))
    }
}
