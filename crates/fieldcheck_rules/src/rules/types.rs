//! Type classification rules.

use super::Outcome;
use crate::Attribute;
use fieldcheck_core::{Rule, Value};

fn string(value: &Value) -> Outcome {
    Outcome::check(matches!(value, Value::String(_)))
}

fn numeric(value: &Value) -> Outcome {
    Outcome::check(value.to_number().is_some())
}

fn integer(value: &Value) -> Outcome {
    Outcome::check(value.to_integer().is_some())
}

/// Booleans, the integers 0 and 1, and their string forms.
fn boolean(value: &Value) -> Outcome {
    let passed = match value {
        Value::Bool(_) => true,
        Value::Int(i) => matches!(i, 0 | 1),
        Value::String(s) => matches!(s.as_str(), "0" | "1" | "true" | "false"),
        _ => false,
    };
    Outcome::check(passed)
}

fn array(value: &Value) -> Outcome {
    Outcome::check(matches!(value, Value::List(_)))
}

fn json(value: &Value) -> Outcome {
    let passed = value
        .as_str()
        .is_some_and(|s| serde_json::from_str::<serde_json::Value>(s).is_ok());
    Outcome::check(passed)
}

impl Attribute<'_> {
    /// The value must be a string.
    pub fn string(self) -> Self {
        let outcome = string(self.value());
        self.apply(Rule::String, outcome)
    }

    /// The value must be a number or a string holding one.
    pub fn numeric(self) -> Self {
        let outcome = numeric(self.value());
        self.apply(Rule::Numeric, outcome)
    }

    /// The value must be a whole number or a string holding one.
    pub fn integer(self) -> Self {
        let outcome = integer(self.value());
        self.apply(Rule::Integer, outcome)
    }

    /// The value must be boolean-like: `true`, `false`, `0`, `1`, `"0"`,
    /// `"1"`, `"true"` or `"false"`.
    pub fn boolean(self) -> Self {
        let outcome = boolean(self.value());
        self.apply(Rule::Boolean, outcome)
    }

    /// The value must be a sequence.
    pub fn array(self) -> Self {
        let outcome = array(self.value());
        self.apply(Rule::Array, outcome)
    }

    /// The value must be a string holding valid JSON.
    pub fn json(self) -> Self {
        let outcome = json(self.value());
        self.apply(Rule::Json, outcome)
    }
}
