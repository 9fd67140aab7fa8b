//! Validator entry point.

use crate::attribute::Attribute;
use fieldcheck_core::{
    Catalog, FieldResolver, HostResolver, Language, RecordStore, Section, ValidatorConfig, Value,
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Starts rule chains against a shared catalog and session.
///
/// The validator borrows everything it reads. One validator can hand out any
/// number of [`Attribute`] chains; each chain owns its own state.
///
/// # Example
///
/// ```rust
/// use fieldcheck_core::{Catalog, Language, Session, ValidatorConfig};
/// use fieldcheck_rules::Validator;
///
/// let catalog = Catalog::builtin();
/// let session = Session::new();
/// let config = ValidatorConfig::builder().language(Language::Fa).build().unwrap();
/// let validator = Validator::new(&catalog, &session).with_config(config);
///
/// let errors = validator.attribute("age").is(3).numeric().errors().unwrap();
/// assert!(errors.passed());
/// ```
pub struct Validator<'a> {
    catalog: &'a Catalog,
    fields: &'a dyn FieldResolver,
    config: ValidatorConfig,
    hosts: Option<&'a dyn HostResolver>,
    records: Option<&'a dyn RecordStore>,
    regex_cache: RegexCache,
}

impl<'a> Validator<'a> {
    /// Creates a validator with the default configuration, falling back to
    /// the catalog's default language.
    pub fn new(catalog: &'a Catalog, fields: &'a dyn FieldResolver) -> Self {
        let config = ValidatorConfig {
            default_language: catalog.default_language(),
            ..ValidatorConfig::default()
        };
        Self {
            catalog,
            fields,
            config,
            hosts: None,
            records: None,
            regex_cache: RegexCache::default(),
        }
    }

    /// Replaces the configuration. Its `default_language` becomes the
    /// fallback for every catalog lookup made by this validator.
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the language new chains start in.
    pub fn with_language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Injects the resolver used by `active_url`.
    pub fn with_host_resolver(mut self, hosts: &'a dyn HostResolver) -> Self {
        self.hosts = Some(hosts);
        self
    }

    /// Injects the store used by `exists` and `unique`.
    pub fn with_record_store(mut self, records: &'a dyn RecordStore) -> Self {
        self.records = Some(records);
        self
    }

    /// Starts a chain for `name`. The value starts out null; bind one with
    /// [`Attribute::is`].
    pub fn attribute(&self, name: impl Into<String>) -> Attribute<'_> {
        Attribute::new(self, name.into(), Value::Null)
    }

    /// Starts a chain for a session field, bound to its current value.
    ///
    /// A field the session does not hold is bound to null.
    pub fn field(&self, name: impl Into<String>) -> Attribute<'_> {
        let name = name.into();
        let value = self.fields.resolve(&name).cloned().unwrap_or_default();
        Attribute::new(self, name, value)
    }

    /// Returns the message catalog.
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub(crate) fn resolve(&self, field: &str) -> Option<&Value> {
        self.fields.resolve(field)
    }

    pub(crate) fn hosts(&self) -> Option<&dyn HostResolver> {
        self.hosts
    }

    pub(crate) fn records(&self) -> Option<&dyn RecordStore> {
        self.records
    }

    pub(crate) fn regex(&self, pattern: &str) -> Result<Regex, regex::Error> {
        self.regex_cache.get_or_compile(pattern)
    }

    /// Returns the display name of an attribute: the `attributes.<name>`
    /// message when the catalog has one, otherwise the raw name.
    pub(crate) fn display_name(&self, language: Language, name: &str) -> String {
        self.message_or(language, &format!("attributes.{}", name), name)
    }

    /// Returns the translated name of a value domain such as `numeric`.
    pub(crate) fn type_name(&self, language: Language, expected: &str) -> String {
        self.message_or(language, &format!("types.{}", expected), expected)
    }

    fn message_or(&self, language: Language, key: &str, fallback: &str) -> String {
        self.catalog
            .get(language, Section::Messages, key)
            .or_else(|| {
                self.catalog
                    .get(self.config.default_language, Section::Messages, key)
            })
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Compiled patterns shared by every chain of a validator.
#[derive(Debug, Default)]
struct RegexCache {
    patterns: Mutex<HashMap<String, Regex>>,
}

impl RegexCache {
    fn get_or_compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        let mut patterns = self
            .patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(regex) = patterns.get(pattern) {
            return Ok(regex.clone());
        }

        let regex = Regex::new(pattern)?;
        debug!("Compiled regex pattern '{}'", pattern);
        patterns.insert(pattern.to_string(), regex.clone());
        Ok(regex)
    }
}
