//! Message catalog.
//!
//! Flat key-to-template tables per language and section. Lookups fall back from
//! the requested language to the catalog's default language; a key missing
//! from both is reported as [`CatalogError::MissingKey`], never as an empty
//! string.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck_core::{Catalog, Language, interpolate};
//!
//! let catalog = Catalog::builtin();
//! let template = catalog.trans_err(Language::En, "required").unwrap();
//! let message = interpolate(template, &[("attribute", "email".to_string())]);
//! assert_eq!(message, "The email field is required.");
//! ```

mod en;
mod fa;

use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Languages with built-in message tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Persian
    Fa,
}

impl Language {
    /// All supported languages.
    pub const ALL: &'static [Language] = &[Language::En, Language::Fa];

    /// Returns the language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "fa" | "farsi" | "persian" => Ok(Language::Fa),
            other => Err(CatalogError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Catalog sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Rule failure templates, keyed by rule key
    Errors,
    /// Attribute display names (`attributes.<name>`) and user-facing strings
    Messages,
    /// System information strings
    Info,
}

impl Section {
    /// Returns the section name.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Errors => "errors",
            Section::Messages => "messages",
            Section::Info => "info",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Additional catalog entries for one language, typically loaded from a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOverlay {
    /// Entries for the `errors` section
    pub errors: BTreeMap<String, String>,
    /// Entries for the `messages` section
    pub messages: BTreeMap<String, String>,
    /// Entries for the `info` section
    pub info: BTreeMap<String, String>,
}

impl CatalogOverlay {
    /// Returns the total number of entries.
    pub fn len(&self) -> usize {
        self.errors.len() + self.messages.len() + self.info.len()
    }

    /// Returns true if the overlay carries no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type Table = HashMap<String, String>;

/// Localized template store.
///
/// Built once at start-up and shared by reference afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_language: Language,
    tables: HashMap<(Language, Section), Table>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new(default_language: Language) -> Self {
        Self {
            default_language,
            tables: HashMap::new(),
        }
    }

    /// Creates a catalog holding the built-in English and Persian tables.
    pub fn builtin() -> Self {
        let mut catalog = Self::new(Language::En);
        for (language, section, entries) in [
            (Language::En, Section::Errors, en::ERRORS),
            (Language::En, Section::Messages, en::MESSAGES),
            (Language::En, Section::Info, en::INFO),
            (Language::Fa, Section::Errors, fa::ERRORS),
            (Language::Fa, Section::Messages, fa::MESSAGES),
        ] {
            catalog.extend(
                language,
                section,
                entries.iter().map(|(k, v)| (k.to_string(), v.to_string())),
            );
        }
        catalog
    }

    /// Sets the fallback language.
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Returns the fallback language.
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Adds or replaces a single template.
    pub fn insert(
        &mut self,
        language: Language,
        section: Section,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.tables
            .entry((language, section))
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Adds or replaces many templates.
    pub fn extend(
        &mut self,
        language: Language,
        section: Section,
        entries: impl IntoIterator<Item = (String, String)>,
    ) {
        self.tables
            .entry((language, section))
            .or_default()
            .extend(entries);
    }

    /// Merges an overlay into the tables of `language`.
    pub fn apply_overlay(&mut self, language: Language, overlay: CatalogOverlay) {
        debug!(
            "Applying catalog overlay for '{}' ({} entries)",
            language,
            overlay.len()
        );
        self.extend(language, Section::Errors, overlay.errors);
        self.extend(language, Section::Messages, overlay.messages);
        self.extend(language, Section::Info, overlay.info);
    }

    /// Looks up a template without falling back.
    pub fn get(&self, language: Language, section: Section, key: &str) -> Option<&str> {
        self.tables
            .get(&(language, section))
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Looks up a template, falling back to the default language.
    pub fn lookup(
        &self,
        language: Language,
        section: Section,
        key: &str,
    ) -> Result<&str, CatalogError> {
        self.lookup_with_fallback(language, self.default_language, section, key)
    }

    /// Looks up a template, falling back to `fallback` instead of the
    /// catalog's own default language.
    pub fn lookup_with_fallback(
        &self,
        language: Language,
        fallback: Language,
        section: Section,
        key: &str,
    ) -> Result<&str, CatalogError> {
        if let Some(template) = self.get(language, section, key) {
            return Ok(template);
        }

        if language != fallback {
            if let Some(template) = self.get(fallback, section, key) {
                debug!(
                    "No '{}' {} entry for '{}', using '{}'",
                    key, section, language, fallback
                );
                return Ok(template);
            }
        }

        warn!("Missing {} entry '{}' for '{}'", section, key, language);
        Err(CatalogError::MissingKey {
            section: section.name().to_string(),
            language: language.code().to_string(),
            default: fallback.code().to_string(),
            key: key.to_string(),
        })
    }

    /// Looks up a rule failure template.
    pub fn trans_err(&self, language: Language, key: &str) -> Result<&str, CatalogError> {
        self.lookup(language, Section::Errors, key)
    }

    /// Looks up a user-facing message.
    pub fn trans_msg(&self, language: Language, key: &str) -> Result<&str, CatalogError> {
        self.lookup(language, Section::Messages, key)
    }

    /// Looks up an error template in English regardless of the selected language.
    pub fn sys_err(&self, key: &str) -> Result<&str, CatalogError> {
        self.lookup(Language::En, Section::Errors, key)
    }

    /// Looks up a system information string in English.
    pub fn sys_info(&self, key: &str) -> Result<&str, CatalogError> {
        self.lookup(Language::En, Section::Info, key)
    }

    /// Looks up and interpolates a template.
    pub fn render(
        &self,
        language: Language,
        section: Section,
        key: &str,
        params: &[(&str, String)],
    ) -> Result<String, CatalogError> {
        self.render_with_fallback(language, self.default_language, section, key, params)
    }

    /// Looks up with an explicit fallback language and interpolates.
    pub fn render_with_fallback(
        &self,
        language: Language,
        fallback: Language,
        section: Section,
        key: &str,
        params: &[(&str, String)],
    ) -> Result<String, CatalogError> {
        self.lookup_with_fallback(language, fallback, section, key)
            .map(|template| interpolate(template, params))
    }

    /// Returns the sorted keys defined for a language without fallback.
    pub fn keys(&self, language: Language, section: Section) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(&(language, section))
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Returns keys present in the default language but missing from `language`.
    pub fn missing_keys(&self, language: Language, section: Section) -> Vec<&str> {
        self.keys(self.default_language, section)
            .into_iter()
            .filter(|key| self.get(language, section, key).is_none())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Replaces `{name}` placeholders with the given parameter values.
///
/// Unknown placeholders are left untouched. Substituted values are never
/// scanned again, so a value containing `{name}` is inserted verbatim.
pub fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let param = after
            .find('}')
            .map(|close| &after[..close])
            .and_then(|name| params.iter().find(|(key, _)| *key == name));

        match param {
            Some((key, value)) => {
                result.push_str(value);
                rest = &after[key.len() + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_rule_has_english_template() {
        let catalog = Catalog::builtin();
        for rule in Rule::ALL {
            assert!(
                catalog.get(Language::En, Section::Errors, rule.key()).is_some(),
                "missing en template for {}",
                rule
            );
        }
    }

    #[test]
    fn test_persian_covers_all_error_templates() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.missing_keys(Language::Fa, Section::Errors),
            Vec::<&str>::new()
        );
    }

    #[test]
    fn test_languages_differ() {
        let catalog = Catalog::builtin();
        for key in catalog.keys(Language::En, Section::Errors) {
            let en = catalog.trans_err(Language::En, key).unwrap();
            let fa = catalog.trans_err(Language::Fa, key).unwrap();
            assert!(!en.is_empty());
            assert!(!fa.is_empty());
            assert_ne!(en, fa, "identical templates for {}", key);
        }
    }

    #[test]
    fn test_fallback_to_default_language() {
        let mut catalog = Catalog::new(Language::En);
        catalog.insert(Language::En, Section::Errors, "custom", "English only");

        assert_eq!(
            catalog.trans_err(Language::Fa, "custom").unwrap(),
            "English only"
        );
    }

    #[test]
    fn test_missing_key_is_reported() {
        let catalog = Catalog::new(Language::En);
        let err = catalog.trans_err(Language::Fa, "absent").unwrap_err();
        assert!(matches!(err, CatalogError::MissingKey { ref key, .. } if key == "absent"));
    }

    #[test]
    fn test_system_strings_are_english() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.sys_err("required").unwrap(),
            catalog.trans_err(Language::En, "required").unwrap()
        );
        assert!(catalog.sys_info("report_title").is_ok());
    }

    #[test]
    fn test_interpolate() {
        let message = interpolate(
            "The {attribute} must be between {min} and {max}.",
            &[
                ("attribute", "age".to_string()),
                ("min", "1".to_string()),
                ("max", "9".to_string()),
            ],
        );
        assert_eq!(message, "The age must be between 1 and 9.");
        assert_eq!(interpolate("{unknown}", &[]), "{unknown}");
    }

    #[test]
    fn test_interpolate_does_not_rescan_values() {
        let message = interpolate(
            "The {attribute} field is required unless {other} is in {values}.",
            &[
                ("attribute", "{values}".to_string()),
                ("other", "role".to_string()),
                ("values", "guest".to_string()),
            ],
        );
        assert_eq!(
            message,
            "The {values} field is required unless role is in guest."
        );
        assert_eq!(
            interpolate("{{a} {b", &[("a", "x".to_string())]),
            "{x {b"
        );
    }

    #[test]
    fn test_lookup_with_explicit_fallback() {
        let mut catalog = Catalog::new(Language::En);
        catalog.insert(Language::Fa, Section::Errors, "custom", "فقط فارسی");

        assert!(catalog.trans_err(Language::En, "custom").is_err());
        assert_eq!(
            catalog
                .lookup_with_fallback(Language::En, Language::Fa, Section::Errors, "custom")
                .unwrap(),
            "فقط فارسی"
        );
    }

    #[test]
    fn test_apply_overlay() {
        let mut catalog = Catalog::builtin();
        let mut overlay = CatalogOverlay::default();
        overlay
            .errors
            .insert("required".to_string(), "Fill in {attribute}!".to_string());
        overlay
            .messages
            .insert("attributes.email".to_string(), "E-mail".to_string());

        catalog.apply_overlay(Language::En, overlay);

        assert_eq!(
            catalog.trans_err(Language::En, "required").unwrap(),
            "Fill in {attribute}!"
        );
        assert_eq!(
            catalog.trans_msg(Language::En, "attributes.email").unwrap(),
            "E-mail"
        );
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("FA".parse::<Language>().unwrap(), Language::Fa);
        assert_eq!("english".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
    }
}
