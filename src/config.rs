use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::derive::DerivationPlan;
use crate::types::Category;
use crate::{DtxError, Result};

const APP_DIR: &str = "dtx";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub derivation: DerivationConfig,
    pub normalization: NormalizationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    /// Categories to extract; the rest are reported as absent.
    pub categories: Vec<Category>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DerivationConfig {
    /// Per-channel RGB step between a default state and its derived hover.
    pub hover_delta: u8,
    pub derive_hover: bool,
    pub derive_dark: bool,
    pub synthesize_danger: bool,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            hover_delta: 20,
            derive_hover: true,
            derive_dark: true,
            synthesize_danger: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizationConfig {
    pub backfill_corner_radius: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            backfill_corner_radius: true,
        }
    }
}

impl Config {
    /// Load config. Priority: explicit path > `$XDG_CONFIG_HOME/dtx/config.toml` or
    /// `~/.config/dtx/config.toml` > defaults.
    ///
    /// An explicit path must exist; a missing central file just means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(explicit) => {
                if !explicit.is_file() {
                    return Err(DtxError::Config(format!(
                        "Config file not found: {}",
                        explicit.display()
                    )));
                }
                explicit.to_path_buf()
            }
            None => match Self::central_config_path().filter(|p| p.is_file()) {
                Some(central) => central,
                None => return Ok(Self::default()),
            },
        };
        tracing::debug!(?path, "loading config");
        let content = fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `$XDG_CONFIG_HOME/dtx/config.toml`, else `$HOME/.config/dtx/config.toml`.
    pub fn central_config_path() -> Option<PathBuf> {
        let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
        let home = std::env::var_os("HOME").map(PathBuf::from);
        config_path_in(xdg.as_deref(), home.as_deref())
    }

    pub fn validate(&self) -> Result<()> {
        if self.derivation.hover_delta == 0 {
            return Err(DtxError::Config(
                "derivation.hover_delta must be at least 1".to_string(),
            ));
        }
        if self.extraction.categories.is_empty() {
            return Err(DtxError::Config(
                "extraction.categories must name at least one category".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.extraction.categories.contains(&category)
    }

    /// Derivation steps for a component category.
    pub fn derivation_plan(&self, category: Category) -> DerivationPlan {
        let derivation = &self.derivation;
        DerivationPlan {
            // Badges are static labels.
            hover_delta: (derivation.derive_hover && category != Category::Badges)
                .then_some(derivation.hover_delta),
            derive_dark: derivation.derive_dark,
            synthesize_danger: derivation.synthesize_danger && category == Category::Buttons,
        }
    }
}

fn config_path_in(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    let root = match xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        Some(xdg) => xdg.to_path_buf(),
        None => home?.join(".config"),
    };
    Some(root.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_values_match_expected() {
        let cfg = Config::default();

        assert_eq!(cfg.extraction.categories.len(), Category::ALL.len());
        assert_eq!(cfg.derivation.hover_delta, 20);
        assert!(cfg.derivation.derive_hover);
        assert!(cfg.derivation.derive_dark);
        assert!(cfg.derivation.synthesize_danger);
        assert!(cfg.normalization.backfill_corner_radius);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            [extraction]
            categories = ["buttons", "nav-menus"]

            [derivation]
            hover_delta = 32
            "#,
        )
        .expect("config");

        assert_eq!(
            cfg.extraction.categories,
            vec![Category::Buttons, Category::NavMenus]
        );
        assert_eq!(cfg.derivation.hover_delta, 32);
        assert!(cfg.derivation.derive_dark);
        assert!(cfg.is_enabled(Category::NavMenus));
        assert!(!cfg.is_enabled(Category::Colors));
    }

    #[test]
    fn unknown_keys_and_bad_values_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("[derivation]\nhover_delta = 300\n"),
            Err(DtxError::ConfigParse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[extraction]\ncategories = [\"carousels\"]\n"),
            Err(DtxError::ConfigParse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[derivation]\nhover = 3\n"),
            Err(DtxError::ConfigParse(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_delta_and_empty_categories() {
        let mut cfg = Config::default();
        cfg.derivation.hover_delta = 0;
        let err = cfg.validate().expect_err("zero delta");
        assert!(err.to_string().contains("hover_delta"));

        let mut cfg = Config::default();
        cfg.extraction.categories.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_reads_explicit_file_and_rejects_missing_one() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("dtx.toml");
        fs::write(&path, "[normalization]\nbackfill_corner_radius = false\n").expect("write");

        let cfg = Config::load(Some(&path)).expect("config");
        assert!(!cfg.normalization.backfill_corner_radius);

        let missing = dir.path().join("missing.toml");
        let err = Config::load(Some(&missing)).expect_err("missing");
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn derivation_plan_per_category() {
        let cfg = Config::default();
        let buttons = cfg.derivation_plan(Category::Buttons);
        assert_eq!(buttons.hover_delta, Some(20));
        assert!(buttons.synthesize_danger);

        let badges = cfg.derivation_plan(Category::Badges);
        assert_eq!(badges.hover_delta, None);
        assert!(!badges.synthesize_danger);
        assert!(badges.derive_dark);
    }

    #[test]
    fn config_path_prefers_xdg_config_home() {
        let path = config_path_in(
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        );
        assert_eq!(path, Some(PathBuf::from("/tmp/config-root/dtx/config.toml")));
    }

    #[test]
    fn config_path_falls_back_to_home_dot_config() {
        let path = config_path_in(Some(Path::new("")), Some(Path::new("/tmp/home")));
        assert_eq!(path, Some(PathBuf::from("/tmp/home/.config/dtx/config.toml")));
        assert_eq!(config_path_in(None, None), None);
    }
}
