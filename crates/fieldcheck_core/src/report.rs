//! Validation results.
//!
//! A finished chain yields an [`ErrorBag`]: the ordered failures recorded for
//! each attribute. Bags from several chains merge into one multi-attribute
//! result.

use crate::Rule;
use serde::Serialize;
use std::collections::BTreeMap;

/// Why a rule recorded an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The value violates the rule
    Invalid,
    /// The value could not be coerced into the rule's domain
    TypeMismatch,
    /// A cross-field rule referenced a field missing from the session
    MissingReference,
    /// No catalog template exists for the message key
    MissingTranslation,
    /// An injected capability failed and the policy is fail-closed
    Unverified,
}

/// A single recorded failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Rule that failed
    pub rule: Rule,
    /// Failure classification
    pub kind: FailureKind,
    /// Localized, interpolated message
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(rule: Rule, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            rule,
            kind,
            message: message.into(),
        }
    }
}

/// Errors keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorBag {
    entries: BTreeMap<String, Vec<FieldError>>,
}

impl ErrorBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bag for one attribute. The attribute is listed even when
    /// `errors` is empty.
    pub fn for_attribute(attribute: impl Into<String>, errors: Vec<FieldError>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(attribute.into(), errors);
        Self { entries }
    }

    /// Returns the errors recorded for an attribute.
    pub fn get(&self, attribute: &str) -> Option<&[FieldError]> {
        self.entries.get(attribute).map(Vec::as_slice)
    }

    /// Returns the messages recorded for an attribute, in rule order.
    pub fn messages(&self, attribute: &str) -> Vec<&str> {
        self.get(attribute)
            .map(|errors| errors.iter().map(|e| e.message.as_str()).collect())
            .unwrap_or_default()
    }

    /// Returns the first message recorded for an attribute.
    pub fn first(&self, attribute: &str) -> Option<&str> {
        self.get(attribute)
            .and_then(|errors| errors.first())
            .map(|e| e.message.as_str())
    }

    /// Returns true if any attribute recorded a failure.
    pub fn has_errors(&self) -> bool {
        self.entries.values().any(|errors| !errors.is_empty())
    }

    /// Returns true if no attribute recorded a failure.
    pub fn passed(&self) -> bool {
        !self.has_errors()
    }

    /// Returns true if the bag lists no attribute at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the attribute-to-errors mapping.
    pub fn entries(&self) -> &BTreeMap<String, Vec<FieldError>> {
        &self.entries
    }

    /// Returns the total number of recorded failures.
    pub fn error_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Returns the attribute names in the bag.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over attributes and their errors.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldError])> {
        self.entries
            .iter()
            .map(|(attribute, errors)| (attribute.as_str(), errors.as_slice()))
    }

    /// Folds another bag into this one, appending to existing attributes.
    pub fn merge(&mut self, other: ErrorBag) {
        for (attribute, errors) in other.entries {
            self.entries.entry(attribute).or_default().extend(errors);
        }
    }

    /// Returns the plain attribute-to-messages mapping.
    pub fn to_messages(&self) -> BTreeMap<String, Vec<String>> {
        self.entries
            .iter()
            .map(|(attribute, errors)| {
                (
                    attribute.clone(),
                    errors.iter().map(|e| e.message.clone()).collect(),
                )
            })
            .collect()
    }
}

impl From<ErrorBag> for BTreeMap<String, Vec<String>> {
    fn from(bag: ErrorBag) -> Self {
        bag.entries
            .into_iter()
            .map(|(attribute, errors)| {
                (
                    attribute,
                    errors.into_iter().map(|e| e.message).collect(),
                )
            })
            .collect()
    }
}

impl FromIterator<ErrorBag> for ErrorBag {
    fn from_iter<T: IntoIterator<Item = ErrorBag>>(iter: T) -> Self {
        let mut merged = ErrorBag::new();
        for bag in iter {
            merged.merge(bag);
        }
        merged
    }
}
