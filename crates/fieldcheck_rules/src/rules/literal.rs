//! Acceptance literals.

use super::Outcome;
use crate::Attribute;
use fieldcheck_core::{Rule, Value};

/// `true`, `1`, `"1"`, `"true"`, `"yes"` or `"on"`, case-insensitively.
pub(crate) fn is_accepted(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Int(i) => *i == 1,
        Value::String(s) => matches!(s.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        _ => false,
    }
}

/// `false`, `0`, `"0"`, `"false"`, `"no"` or `"off"`, case-insensitively.
pub(crate) fn is_declined(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !*b,
        Value::Int(i) => *i == 0,
        Value::String(s) => matches!(s.to_lowercase().as_str(), "0" | "false" | "no" | "off"),
        _ => false,
    }
}

impl Attribute<'_> {
    /// The value must be `true`, `1`, `"true"`, `"yes"` or `"on"`.
    pub fn accepted(self) -> Self {
        let outcome = Outcome::check(is_accepted(self.value()));
        self.apply(Rule::Accepted, outcome)
    }

    /// The value must be `false`, `0`, `"false"`, `"no"` or `"off"`.
    pub fn declined(self) -> Self {
        let outcome = Outcome::check(is_declined(self.value()));
        self.apply(Rule::Declined, outcome)
    }
}
