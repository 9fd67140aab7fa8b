//! Rule evaluators.
//!
//! Each module holds the pure evaluation functions of one rule family and the
//! [`Attribute`](crate::Attribute) methods that expose them. Evaluators only
//! look at values; parameter checks, session lookups and capability calls
//! happen in the methods.

mod bounds;
mod conditional;
mod external;
mod files;
mod format;
mod literal;
mod membership;
mod password;
mod presence;
mod types;

use fieldcheck_core::{CapabilityError, Value};

/// Message parameters of a failed rule, in addition to `attribute`.
pub(crate) type Params = Vec<(&'static str, String)>;

/// Result of evaluating one rule against a value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome {
    /// The value satisfies the rule
    Pass,
    /// The value violates the rule
    Fail(Params),
    /// The value cannot be coerced into the rule's domain
    TypeMismatch(&'static str),
    /// A referenced session field is absent
    MissingReference(String),
    /// An injected capability could not answer
    Unverified(CapabilityError, Params),
}

impl Outcome {
    pub(crate) fn check(passed: bool) -> Self {
        Self::check_with(passed, Vec::new())
    }

    pub(crate) fn check_with(passed: bool, params: Params) -> Self {
        if passed { Outcome::Pass } else { Outcome::Fail(params) }
    }
}

/// Joins parameter values for the `{values}` placeholder.
pub(crate) fn join_values<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collects rule parameters into values.
pub(crate) fn collect_values<I, V>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    values.into_iter().map(Into::into).collect()
}

/// Collects string rule parameters.
pub(crate) fn collect_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}
