//! Validator configuration.

use crate::error::Result;
use crate::{Language, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// What a capability-backed rule does when its capability fails or times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityPolicy {
    /// Inability to verify counts as a failure of the rule
    #[default]
    FailClosed,
    /// Inability to verify lets the rule pass
    FailOpen,
}

/// A catalog overlay file for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayFile {
    /// Language the entries belong to
    pub language: Language,
    /// Path to a flat YAML or TOML catalog file
    pub path: PathBuf,
}

/// Settings shared by every chain a validator builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Language messages are rendered in
    pub language: Language,

    /// Fallback language for missing translations
    pub default_language: Language,

    /// Timeout handed to injected capabilities, in milliseconds
    pub capability_timeout_ms: u64,

    /// Behaviour when a capability cannot answer
    pub capability_policy: CapabilityPolicy,

    /// Extra catalog files applied on top of the built-in tables
    pub catalog_overlays: Vec<OverlayFile>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            default_language: Language::En,
            capability_timeout_ms: 5_000,
            capability_policy: CapabilityPolicy::FailClosed,
            catalog_overlays: Vec::new(),
        }
    }
}

impl ValidatorConfig {
    /// Creates a new builder for `ValidatorConfig`.
    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::default()
    }

    /// Returns the capability timeout.
    pub fn capability_timeout(&self) -> Duration {
        Duration::from_millis(self.capability_timeout_ms)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.capability_timeout_ms == 0 {
            return Err(ValidationError::configuration(
                "capability_timeout_ms must be greater than zero",
            ));
        }

        if let Some(overlay) = self
            .catalog_overlays
            .iter()
            .find(|overlay| overlay.path.as_os_str().is_empty())
        {
            return Err(ValidationError::configuration(format!(
                "catalog overlay for '{}' has an empty path",
                overlay.language
            )));
        }

        Ok(())
    }
}

/// Builder for `ValidatorConfig`.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfigBuilder {
    config: ValidatorConfig,
}

impl ValidatorConfigBuilder {
    /// Sets the language messages are rendered in.
    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Sets the fallback language.
    pub fn default_language(mut self, language: Language) -> Self {
        self.config.default_language = language;
        self
    }

    /// Sets the capability timeout.
    pub fn capability_timeout(mut self, timeout: Duration) -> Self {
        self.config.capability_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Sets the capability failure policy.
    pub fn capability_policy(mut self, policy: CapabilityPolicy) -> Self {
        self.config.capability_policy = policy;
        self
    }

    /// Adds a catalog overlay file.
    pub fn overlay(mut self, language: Language, path: impl Into<PathBuf>) -> Self {
        self.config.catalog_overlays.push(OverlayFile {
            language,
            path: path.into(),
        });
        self
    }

    /// Builds the `ValidatorConfig`.
    ///
    /// Returns an error if the configuration is inconsistent.
    pub fn build(self) -> Result<ValidatorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
