//! Per-attribute rule chain.

use crate::rules::Outcome;
use crate::validator::Validator;
use fieldcheck_core::{
    CapabilityPolicy, ErrorBag, FailureKind, FieldError, Language, Rule, Section,
    ValidationError, Value,
};
use tracing::{debug, warn};

/// A rule chain for one attribute.
///
/// Every rule method evaluates immediately against the bound value and
/// returns the handle, so rules read in the order they run. Failures are
/// accumulated; nothing short-circuits. Malformed rule parameters do not
/// produce messages: the first one is kept and returned by
/// [`errors`](Attribute::errors).
pub struct Attribute<'v> {
    validator: &'v Validator<'v>,
    name: String,
    value: Value,
    language: Language,
    errors: Vec<FieldError>,
    fault: Option<ValidationError>,
}

impl<'v> Attribute<'v> {
    pub(crate) fn new(validator: &'v Validator<'v>, name: String, value: Value) -> Self {
        let fault = name
            .trim()
            .is_empty()
            .then_some(ValidationError::EmptyAttributeName);
        Self {
            validator,
            language: validator.config().language,
            name,
            value,
            errors: Vec::new(),
            fault,
        }
    }

    /// Binds the value later rules evaluate.
    pub fn is(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Switches the language of messages produced by later rules.
    pub fn lang(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Returns the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bound value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the current message language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the failures recorded so far.
    pub fn recorded(&self) -> &[FieldError] {
        &self.errors
    }

    /// Finishes the chain.
    ///
    /// Returns the recorded failures under the attribute name, in the order
    /// the rules ran. An attribute without failures is listed with an empty
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error the chain hit: an empty
    /// attribute name, malformed rule parameters or an invalid pattern.
    pub fn errors(self) -> fieldcheck_core::Result<ErrorBag> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        debug!(
            "Attribute '{}' finished with {} error(s)",
            self.name,
            self.errors.len()
        );
        Ok(ErrorBag::for_attribute(self.name, self.errors))
    }

    pub(crate) fn validator(&self) -> &'v Validator<'v> {
        self.validator
    }

    /// Records a configuration error. Later rules are not evaluated.
    pub(crate) fn reject(self, rule: Rule, reason: impl Into<String>) -> Self {
        let error = ValidationError::invalid_rule(self.name.clone(), rule.key(), reason);
        self.fault(error)
    }

    pub(crate) fn fault(mut self, error: ValidationError) -> Self {
        if self.fault.is_none() {
            warn!("Rule chain for '{}' is misconfigured: {}", self.name, error);
            self.fault = Some(error);
        }
        self
    }

    pub(crate) fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// Records the outcome of a rule.
    pub(crate) fn apply(mut self, rule: Rule, outcome: Outcome) -> Self {
        if self.fault.is_some() {
            return self;
        }

        let validator = self.validator;
        let (kind, key, params) = match outcome {
            Outcome::Pass => return self,
            Outcome::Fail(params) => (FailureKind::Invalid, rule.key(), params),
            Outcome::TypeMismatch(expected) => {
                debug!(
                    "Rule '{}' cannot read {} value of '{}' as {}",
                    rule,
                    self.value.type_name(),
                    self.name,
                    expected
                );
                (
                    FailureKind::TypeMismatch,
                    "type_mismatch",
                    vec![
                        ("expected", validator.type_name(self.language, expected)),
                        ("rule", rule.key().to_string()),
                    ],
                )
            }
            Outcome::MissingReference(field) => {
                warn!(
                    "Rule '{}' on '{}' references missing field '{}'",
                    rule, self.name, field
                );
                (
                    FailureKind::MissingReference,
                    "missing_reference",
                    vec![("other", field)],
                )
            }
            Outcome::Unverified(error, params) => match validator.config().capability_policy {
                CapabilityPolicy::FailOpen => {
                    warn!(
                        "Rule '{}' on '{}' unverified, passing: {}",
                        rule, self.name, error
                    );
                    return self;
                }
                CapabilityPolicy::FailClosed => {
                    warn!(
                        "Rule '{}' on '{}' unverified, failing: {}",
                        rule, self.name, error
                    );
                    (FailureKind::Unverified, rule.key(), params)
                }
            },
        };

        let message = self.render(key, params);
        let (kind, message) = match message {
            Ok(message) => (kind, message),
            Err(missing) => (FailureKind::MissingTranslation, missing),
        };

        debug!("Rule '{}' failed for '{}'", rule, self.name);
        self.errors.push(FieldError::new(rule, kind, message));
        self
    }

    fn render(&self, key: &str, params: Vec<(&'static str, String)>) -> Result<String, String> {
        let validator = self.validator;
        let mut resolved = Vec::with_capacity(params.len() + 1);
        resolved.push((
            "attribute",
            validator.display_name(self.language, &self.name),
        ));
        for (param, value) in params {
            let value = match param {
                "other" => validator.display_name(self.language, &value),
                _ => value,
            };
            resolved.push((param, value));
        }

        validator
            .catalog()
            .render_with_fallback(
                self.language,
                validator.config().default_language,
                Section::Errors,
                key,
                &resolved,
            )
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcheck_core::{Catalog, Session};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_chain_passes() {
        let catalog = Catalog::builtin();
        let session = Session::new();
        let validator = Validator::new(&catalog, &session);

        let errors = validator.attribute("age").errors().unwrap();
        assert_eq!(errors.get("age"), Some(&[][..]));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let catalog = Catalog::builtin();
        let session = Session::new();
        let validator = Validator::new(&catalog, &session);

        let result = validator.attribute("  ").required().errors();
        assert_eq!(result.unwrap_err(), ValidationError::EmptyAttributeName);
    }

    #[test]
    fn test_missing_translation_is_reported() {
        let catalog = Catalog::new(Language::En);
        let session = Session::new();
        let validator = Validator::new(&catalog, &session);

        let errors = validator.attribute("age").required().errors().unwrap();
        let recorded = errors.get("age").unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].kind, FailureKind::MissingTranslation);
        assert!(recorded[0].message.contains("required"));
    }

    #[test]
    fn test_first_fault_wins() {
        let catalog = Catalog::builtin();
        let session = Session::new();
        let validator = Validator::new(&catalog, &session);

        let result = validator
            .attribute("code")
            .digits(0)
            .regex("[")
            .required()
            .errors();
        assert!(matches!(
            result.unwrap_err(),
            ValidationError::InvalidRule { ref rule, .. } if rule == "digits"
        ));
    }

    #[test]
    fn test_lang_switch_mid_chain() {
        let catalog = Catalog::builtin();
        let session = Session::new();
        let validator = Validator::new(&catalog, &session);

        let errors = validator
            .attribute("age")
            .required()
            .lang(Language::Fa)
            .required()
            .errors()
            .unwrap();
        let messages = errors.messages("age");
        assert_eq!(messages[0], "The age field is required.");
        assert_ne!(messages[1], messages[0]);
    }
}
