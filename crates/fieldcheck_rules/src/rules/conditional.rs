//! Cross-field rules.
//!
//! These rules read another field through the validator's session. A field
//! the session does not hold is reported as a missing reference rather than
//! treated as empty.

use super::literal::{is_accepted, is_declined};
use super::{Outcome, collect_values, join_values};
use crate::Attribute;
use fieldcheck_core::{Rule, Value};

fn other(field: &str) -> (&'static str, String) {
    ("other", field.to_string())
}

fn same(value: &Value, field: &str, peer: Option<&Value>) -> Outcome {
    match peer {
        Some(peer) => Outcome::check_with(value.loosely_eq(peer), vec![other(field)]),
        None => Outcome::MissingReference(field.to_string()),
    }
}

fn different(value: &Value, field: &str, peer: Option<&Value>) -> Outcome {
    match peer {
        Some(peer) => Outcome::check_with(!value.loosely_eq(peer), vec![other(field)]),
        None => Outcome::MissingReference(field.to_string()),
    }
}

/// Shared shape of the `*_if` rules: `violated` is only consulted when the
/// peer equals `expected`.
fn when_equals(
    value: &Value,
    field: &str,
    peer: Option<&Value>,
    expected: &Value,
    violated: impl FnOnce(&Value) -> bool,
) -> Outcome {
    let Some(peer) = peer else {
        return Outcome::MissingReference(field.to_string());
    };
    let failed = peer.loosely_eq(expected) && violated(value);
    Outcome::check_with(!failed, vec![other(field), ("value", expected.to_string())])
}

fn required_unless(value: &Value, field: &str, peer: Option<&Value>, allowed: &[Value]) -> Outcome {
    let Some(peer) = peer else {
        return Outcome::MissingReference(field.to_string());
    };
    let exempt = allowed.iter().any(|candidate| candidate.loosely_eq(peer));
    Outcome::check_with(
        exempt || !value.is_empty(),
        vec![other(field), ("values", join_values(allowed))],
    )
}

impl Attribute<'_> {
    fn peer(&self, field: &str) -> Option<&Value> {
        self.validator().resolve(field)
    }

    fn check_field(self, rule: Rule, field: &str) -> Result<Self, Self> {
        if field.trim().is_empty() {
            return Err(self.reject(rule, "referenced field name must not be empty"));
        }
        Ok(self)
    }

    /// The value must equal the session field `<attribute>_confirmation`, or
    /// `field` when one is given.
    pub fn confirmed(self, field: &str) -> Self {
        let field = if field.trim().is_empty() {
            format!("{}_confirmation", self.name())
        } else {
            field.to_string()
        };
        let outcome = same(self.value(), &field, self.peer(&field));
        self.apply(Rule::Confirmed, outcome)
    }

    /// The value must equal the session field `field`.
    pub fn same(self, field: &str) -> Self {
        let this = match self.check_field(Rule::Same, field) {
            Ok(this) => this,
            Err(rejected) => return rejected,
        };
        let outcome = same(this.value(), field, this.peer(field));
        this.apply(Rule::Same, outcome)
    }

    /// The value must differ from the session field `field`.
    pub fn different(self, field: &str) -> Self {
        let this = match self.check_field(Rule::Different, field) {
            Ok(this) => this,
            Err(rejected) => return rejected,
        };
        let outcome = different(this.value(), field, this.peer(field));
        this.apply(Rule::Different, outcome)
    }

    /// The value must be accepted when `field` equals `expected`.
    pub fn accepted_if(self, field: &str, expected: impl Into<Value>) -> Self {
        self.conditional(Rule::AcceptedIf, field, expected.into(), |value| {
            !is_accepted(value)
        })
    }

    /// The value must be declined when `field` equals `expected`.
    pub fn declined_if(self, field: &str, expected: impl Into<Value>) -> Self {
        self.conditional(Rule::DeclinedIf, field, expected.into(), |value| {
            !is_declined(value)
        })
    }

    /// The value must not be empty when `field` equals `expected`.
    ///
    /// ```rust
    /// use fieldcheck_core::{Catalog, Session};
    /// use fieldcheck_rules::Validator;
    ///
    /// let catalog = Catalog::builtin();
    /// let session = Session::new().with("name", "mehrab");
    /// let validator = Validator::new(&catalog, &session);
    ///
    /// let errors = validator
    ///     .attribute("pan")
    ///     .required_if("name", "mehrab")
    ///     .errors()
    ///     .unwrap();
    /// assert_eq!(
    ///     errors.first("pan"),
    ///     Some("The pan field is required when name is mehrab.")
    /// );
    /// ```
    pub fn required_if(self, field: &str, expected: impl Into<Value>) -> Self {
        self.conditional(Rule::RequiredIf, field, expected.into(), Value::is_empty)
    }

    /// The value must not be empty unless `field` equals one of `allowed`.
    pub fn required_unless<I, V>(self, field: &str, allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let this = match self.check_field(Rule::RequiredUnless, field) {
            Ok(this) => this,
            Err(rejected) => return rejected,
        };
        let allowed = collect_values(allowed);
        if allowed.is_empty() {
            return this.reject(Rule::RequiredUnless, "at least one value is required");
        }
        let outcome = required_unless(this.value(), field, this.peer(field), &allowed);
        this.apply(Rule::RequiredUnless, outcome)
    }

    /// The value must be empty when `field` equals `expected`.
    pub fn prohibited_if(self, field: &str, expected: impl Into<Value>) -> Self {
        self.conditional(Rule::ProhibitedIf, field, expected.into(), |value| {
            !value.is_empty()
        })
    }

    fn conditional(
        self,
        rule: Rule,
        field: &str,
        expected: Value,
        violated: impl FnOnce(&Value) -> bool,
    ) -> Self {
        let this = match self.check_field(rule, field) {
            Ok(this) => this,
            Err(rejected) => return rejected,
        };
        let outcome = when_equals(this.value(), field, this.peer(field), &expected, violated);
        this.apply(rule, outcome)
    }
}
