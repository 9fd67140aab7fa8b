//! Presence rules.

use super::Outcome;
use crate::Attribute;
use fieldcheck_core::{Rule, Value};

fn required(value: &Value) -> Outcome {
    Outcome::check(!value.is_empty())
}

fn filled(value: &Value) -> Outcome {
    Outcome::check(value.is_null() || !value.is_empty())
}

fn present(value: &Value) -> Outcome {
    Outcome::check(!value.is_null())
}

fn prohibited(value: &Value) -> Outcome {
    Outcome::check(value.is_empty())
}

impl Attribute<'_> {
    /// The value must not be empty. Zero and `false` are not empty.
    pub fn required(self) -> Self {
        let outcome = required(self.value());
        self.apply(Rule::Required, outcome)
    }

    /// The value may be absent, but must not be empty when present.
    pub fn filled(self) -> Self {
        let outcome = filled(self.value());
        self.apply(Rule::Filled, outcome)
    }

    /// The value must be bound, even if empty.
    pub fn present(self) -> Self {
        let outcome = present(self.value());
        self.apply(Rule::Present, outcome)
    }

    /// The value must be empty or absent.
    pub fn prohibited(self) -> Self {
        let outcome = prohibited(self.value());
        self.apply(Rule::Prohibited, outcome)
    }
}
