//! Loaders for fieldcheck configuration and message catalogs (YAML/TOML formats).
//!
//! Validator settings and catalog overlays live in small flat files read once at
//! start-up. This crate turns them into [`ValidatorConfig`] values and a ready
//! [`Catalog`].
//!
//! # Example
//!
//! ```rust
//! use fieldcheck_parser::parse_config_yaml;
//! use fieldcheck_core::{CapabilityPolicy, Language};
//!
//! let yaml = r#"
//! language: fa
//! capability_timeout_ms: 1500
//! capability_policy: fail_open
//! "#;
//!
//! let config = parse_config_yaml(yaml).expect("Failed to parse config");
//! assert_eq!(config.language, Language::Fa);
//! assert_eq!(config.capability_policy, CapabilityPolicy::FailOpen);
//! ```

use fieldcheck_core::{Catalog, CatalogOverlay, ValidationError, ValidatorConfig};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading configuration or catalogs.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Parsed configuration is inconsistent
    #[error(transparent)]
    InvalidConfig(#[from] ValidationError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Detect the file format from a path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `FileFormat::Yaml`
/// * `.toml` → `FileFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<FileFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "toml" => Ok(FileFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a validator configuration from a YAML string.
///
/// Missing keys take their default values. The result is validated.
pub fn parse_config_yaml(content: &str) -> Result<ValidatorConfig> {
    let config: ValidatorConfig = serde_yaml_ng::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a validator configuration from a TOML string.
///
/// # Example
///
/// ```rust
/// use fieldcheck_parser::parse_config_toml;
///
/// let toml = r#"
/// language = "en"
/// capability_timeout_ms = 800
///
/// [[catalog_overlays]]
/// language = "fa"
/// path = "lang/fa.toml"
/// "#;
///
/// let config = parse_config_toml(toml).unwrap();
/// assert_eq!(config.capability_timeout_ms, 800);
/// assert_eq!(config.catalog_overlays.len(), 1);
/// ```
pub fn parse_config_toml(content: &str) -> Result<ValidatorConfig> {
    let config: ValidatorConfig =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Parse a validator configuration from a file with automatic format detection.
///
/// ```no_run
/// use fieldcheck_parser::parse_config_file;
/// use std::path::Path;
///
/// let config = parse_config_file(Path::new("fieldcheck.toml")).unwrap();
/// println!("Messages in: {}", config.language);
/// ```
pub fn parse_config_file(path: &Path) -> Result<ValidatorConfig> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    let config = match format {
        FileFormat::Yaml => parse_config_yaml(&content)?,
        FileFormat::Toml => parse_config_toml(&content)?,
    };

    info!("Configuration loaded from {}", path.display());
    Ok(config)
}

/// Parse a catalog overlay from a YAML string.
///
/// The document holds up to three flat mappings: `errors`, `messages` and
/// `info`.
pub fn parse_catalog_yaml(content: &str) -> Result<CatalogOverlay> {
    Ok(serde_yaml_ng::from_str(content)?)
}

/// Parse a catalog overlay from a TOML string.
pub fn parse_catalog_toml(content: &str) -> Result<CatalogOverlay> {
    toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))
}

/// Parse a catalog overlay from a file with automatic format detection.
pub fn parse_catalog_file(path: &Path) -> Result<CatalogOverlay> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        FileFormat::Yaml => parse_catalog_yaml(&content),
        FileFormat::Toml => parse_catalog_toml(&content),
    }
}

/// Build the catalog described by a configuration.
///
/// Starts from the built-in tables, sets the configured default language and
/// applies every overlay file in order. Relative overlay paths are resolved
/// against `base_dir`.
pub fn load_catalog(config: &ValidatorConfig, base_dir: &Path) -> Result<Catalog> {
    let mut catalog = Catalog::builtin().with_default_language(config.default_language);

    for overlay_file in &config.catalog_overlays {
        let path = base_dir.join(&overlay_file.path);
        let overlay = parse_catalog_file(&path)?;
        info!(
            "Catalog overlay for '{}' loaded from {} ({} entries)",
            overlay_file.language,
            path.display(),
            overlay.len()
        );
        catalog.apply_overlay(overlay_file.language, overlay);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcheck_core::{CapabilityPolicy, Language};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_config_yaml_defaults() {
        let config = parse_config_yaml("language: fa\n").expect("valid YAML");

        assert_eq!(config.language, Language::Fa);
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.capability_timeout_ms, 5_000);
        assert_eq!(config.capability_policy, CapabilityPolicy::FailClosed);
    }

    #[test]
    fn test_parse_config_yaml_with_overlays() {
        let yaml = r#"
language: en
default_language: en
capability_timeout_ms: 300
capability_policy: fail_open
catalog_overlays:
  - language: fa
    path: lang/fa.yml
"#;

        let config = parse_config_yaml(yaml).expect("valid YAML");
        assert_eq!(config.capability_timeout_ms, 300);
        assert_eq!(config.capability_policy, CapabilityPolicy::FailOpen);
        assert_eq!(config.catalog_overlays[0].language, Language::Fa);
        assert_eq!(
            config.catalog_overlays[0].path,
            std::path::PathBuf::from("lang/fa.yml")
        );
    }

    #[test]
    fn test_parse_config_unknown_language() {
        let result = parse_config_yaml("language: de\n");
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_parse_config_zero_timeout() {
        let result = parse_config_toml("capability_timeout_ms = 0\n");
        assert!(matches!(
            result.unwrap_err(),
            ParserError::InvalidConfig(ValidationError::Configuration(_))
        ));
    }

    #[test]
    fn test_parse_config_invalid_toml() {
        let result = parse_config_toml("language = [\n");
        assert!(matches!(result.unwrap_err(), ParserError::TomlError(_)));
    }

    #[test]
    fn test_parse_catalog_yaml() {
        let yaml = r#"
errors:
  required: "Please fill in {attribute}."
messages:
  attributes.pan: card number
"#;

        let overlay = parse_catalog_yaml(yaml).expect("valid YAML");
        assert_eq!(overlay.errors["required"], "Please fill in {attribute}.");
        assert_eq!(overlay.messages["attributes.pan"], "card number");
        assert!(overlay.info.is_empty());
    }

    #[test]
    fn test_parse_catalog_toml() {
        let toml = r#"
[errors]
numeric = "{attribute} must be numeric"

[info]
report_title = "REPORT"
"#;

        let overlay = parse_catalog_toml(toml).expect("valid TOML");
        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay.info["report_title"], "REPORT");
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("config.yaml")).unwrap(),
            FileFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("config.YML")).unwrap(),
            FileFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("config.toml")).unwrap(),
            FileFormat::Toml
        );
        assert!(matches!(
            detect_format(Path::new("config.json")).unwrap_err(),
            ParserError::UnsupportedFormat(_)
        ));
        assert!(matches!(
            detect_format(Path::new("config")).unwrap_err(),
            ParserError::InvalidExtension
        ));
    }
}
