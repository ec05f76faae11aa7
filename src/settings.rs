use std::path::Path;

use dtx_lib::{Category, Config, DtxError};

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/dtx/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, DtxError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        DtxError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        DtxError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Replace the configured categories when `--categories` was given.
pub fn apply_category_flag(config: &mut Config, raw: Option<&[String]>) -> Result<(), DtxError> {
    let Some(raw) = raw else {
        return Ok(());
    };
    let mut categories = Vec::new();
    for name in raw.iter().map(|name| name.trim()).filter(|name| !name.is_empty()) {
        let category: Category = name.parse()?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    if categories.is_empty() {
        return Err(DtxError::Config(
            "--categories must name at least one category".to_string(),
        ));
    }
    config.extraction.categories = categories;
    Ok(())
}

/// Log effective config (verbose mode).
pub fn log_effective_config(config: &Config, config_path: Option<&Path>) {
    tracing::info!("{}", format_effective_config(config, config_path));
}

/// Format effective config as a single-line string.
pub fn format_effective_config(config: &Config, config_source: Option<&Path>) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .or_else(|| {
            Config::central_config_path()
                .filter(|p| p.is_file())
                .map(|p| p.display().to_string())
        })
        .unwrap_or_else(|| "defaults".to_string());
    let categories: Vec<&str> = config
        .extraction
        .categories
        .iter()
        .map(|category| category.as_str())
        .collect();
    let derivation = &config.derivation;
    format!(
        "Effective config [{source}]: categories={}, hover_delta={}, derive: hover={}, dark={}, danger={}, backfill_corner_radius={}",
        categories.join(","),
        derivation.hover_delta,
        derivation.derive_hover,
        derivation.derive_dark,
        derivation.synthesize_danger,
        config.normalization.backfill_corner_radius
    )
}
