pub mod coverage;
pub mod demo;
pub mod lookup;

use anyhow::{Context, Result};
use fieldcheck_core::{Catalog, Language, ValidatorConfig};
use fieldcheck_parser::{load_catalog, parse_config_file};
use std::path::Path;
use tracing::info;

/// Loads the configuration file, if any, and the catalog it describes.
///
/// Overlay paths are resolved relative to the configuration file.
pub fn load_context(config_path: Option<&Path>) -> Result<(ValidatorConfig, Catalog)> {
    let Some(path) = config_path else {
        return Ok((ValidatorConfig::default(), Catalog::builtin()));
    };

    let config = parse_config_file(path)
        .with_context(|| format!("Failed to load configuration: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let catalog = load_catalog(&config, base_dir)
        .with_context(|| format!("Failed to load catalog overlays for {}", path.display()))?;

    info!(
        "Loaded configuration with {} catalog overlay(s)",
        config.catalog_overlays.len()
    );
    Ok((config, catalog))
}

/// Parses a `--lang` argument, falling back to `default`.
pub fn parse_language(lang: Option<&str>, default: Language) -> Result<Language> {
    match lang {
        Some(code) => code
            .parse::<Language>()
            .with_context(|| format!("Unsupported language: {}", code)),
        None => Ok(default),
    }
}
