//! Error types for fieldcheck.
//!
//! Validation failures are not errors here: they are accumulated as
//! [`FieldError`](crate::FieldError) entries. The types below cover the
//! conditions a caller has to handle or a programmer has to fix.

use thiserror::Error;

/// Result type for fieldcheck operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Programmer-facing errors that make a rule chain unusable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Rule invoked with malformed parameters
    #[error("Invalid parameters for rule '{rule}' on attribute '{attribute}': {reason}")]
    InvalidRule {
        /// Attribute the chain was built for
        attribute: String,
        /// Rule key
        rule: String,
        /// What is wrong with the parameters
        reason: String,
    },

    /// Regex parameter failed to compile
    #[error("Invalid regex pattern '{pattern}' for rule '{rule}': {error}")]
    InvalidRegex {
        /// Rule key
        rule: String,
        /// Offending pattern
        pattern: String,
        /// Compiler message
        error: String,
    },

    /// Chain started without an attribute name
    #[error("Attribute name must not be empty")]
    EmptyAttributeName,

    /// Validator configuration rejected
    #[error("Invalid validator configuration: {0}")]
    Configuration(String),
}

impl ValidationError {
    /// Creates a new invalid rule error.
    pub fn invalid_rule(
        attribute: impl Into<String>,
        rule: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRule {
            attribute: attribute.into(),
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new invalid regex error.
    pub fn invalid_regex(
        rule: impl Into<String>,
        pattern: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self::InvalidRegex {
            rule: rule.into(),
            pattern: pattern.into(),
            error: error.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Message catalog lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Key absent from both the requested and the default language
    #[error("Missing {section} entry '{key}' for language '{language}' (default '{default}')")]
    MissingKey {
        /// Catalog section searched
        section: String,
        /// Requested language
        language: String,
        /// Default language tried as fallback
        default: String,
        /// Message key
        key: String,
    },

    /// Language code not recognized
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

/// Failures of injected network/storage capabilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// No implementation was injected into the validator
    #[error("Capability '{0}' is not configured")]
    NotConfigured(String),

    /// The check did not answer within the configured timeout
    #[error("Capability '{capability}' timed out after {timeout_ms}ms")]
    Timeout {
        /// Capability name
        capability: String,
        /// Timeout that elapsed
        timeout_ms: u64,
    },

    /// The check itself failed
    #[error("Capability '{capability}' failed: {message}")]
    Failed {
        /// Capability name
        capability: String,
        /// Failure details
        message: String,
    },
}

impl CapabilityError {
    /// Creates a new capability failure.
    pub fn failed(capability: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            capability: capability.into(),
            message: message.into(),
        }
    }

    /// Creates a new capability timeout.
    pub fn timeout(capability: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            capability: capability.into(),
            timeout_ms,
        }
    }
}
