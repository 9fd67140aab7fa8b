//! Set membership rules.
//!
//! Members are compared with [`Value::loosely_eq`], so `1` matches `"1"`.

use super::{Outcome, collect_strings, collect_values, join_values};
use crate::Attribute;
use fieldcheck_core::{Rule, Value};

fn contains(candidates: &[Value], value: &Value) -> bool {
    candidates.iter().any(|candidate| candidate.loosely_eq(value))
}

fn in_list(value: &Value, candidates: &[Value]) -> Outcome {
    match value {
        Value::Null => Outcome::check(false),
        Value::List(_) | Value::Map(_) => Outcome::TypeMismatch("scalar"),
        scalar => Outcome::check_with(
            contains(candidates, scalar),
            vec![("values", join_values(candidates))],
        ),
    }
}

fn not_in(value: &Value, candidates: &[Value]) -> Outcome {
    match value {
        Value::List(_) | Value::Map(_) => Outcome::TypeMismatch("scalar"),
        other => Outcome::check_with(
            !contains(candidates, other),
            vec![("values", join_values(candidates))],
        ),
    }
}

fn in_array(value: &Value, candidates: &[Value]) -> Outcome {
    match value.as_list() {
        Some(items) => Outcome::check_with(
            items.iter().all(|item| contains(candidates, item)),
            vec![("values", join_values(candidates))],
        ),
        None => Outcome::TypeMismatch("array"),
    }
}

fn exists_in_string(value: &Value, haystacks: &[String]) -> Outcome {
    let passed = value.to_text().is_some_and(|needle| {
        !needle.is_empty() && haystacks.iter().any(|haystack| haystack.contains(&needle))
    });
    Outcome::check_with(passed, vec![("values", join_values(haystacks))])
}

fn distinct(value: &Value) -> Outcome {
    match value.as_list() {
        Some(items) => {
            let duplicated = items
                .iter()
                .enumerate()
                .any(|(i, item)| contains(&items[..i], item));
            Outcome::check(!duplicated)
        }
        None => Outcome::TypeMismatch("array"),
    }
}

impl Attribute<'_> {
    /// The value must equal one of `candidates`.
    ///
    /// ```rust
    /// use fieldcheck_core::{Catalog, Session};
    /// use fieldcheck_rules::Validator;
    ///
    /// let catalog = Catalog::builtin();
    /// let session = Session::new();
    /// let validator = Validator::new(&catalog, &session);
    ///
    /// let errors = validator
    ///     .attribute("status")
    ///     .is("archived")
    ///     .in_list(["draft", "published"])
    ///     .errors()
    ///     .unwrap();
    /// assert_eq!(errors.first("status"), Some("The selected status is invalid."));
    /// ```
    pub fn in_list<I, V>(self, candidates: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let candidates = collect_values(candidates);
        if candidates.is_empty() {
            return self.reject(Rule::In, "at least one candidate is required");
        }
        let outcome = in_list(self.value(), &candidates);
        self.apply(Rule::In, outcome)
    }

    /// The value must not equal any of `candidates`.
    pub fn not_in<I, V>(self, candidates: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let candidates = collect_values(candidates);
        if candidates.is_empty() {
            return self.reject(Rule::NotIn, "at least one candidate is required");
        }
        let outcome = not_in(self.value(), &candidates);
        self.apply(Rule::NotIn, outcome)
    }

    /// The value must be a sequence whose every item is one of `candidates`.
    pub fn in_array<I, V>(self, candidates: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let candidates = collect_values(candidates);
        if candidates.is_empty() {
            return self.reject(Rule::InArray, "at least one candidate is required");
        }
        let outcome = in_array(self.value(), &candidates);
        self.apply(Rule::InArray, outcome)
    }

    /// The value must appear as a substring of one of `haystacks`.
    pub fn exists_in_string<I, S>(self, haystacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let haystacks = collect_strings(haystacks);
        if haystacks.is_empty() {
            return self.reject(Rule::ExistsInString, "at least one string is required");
        }
        let outcome = exists_in_string(self.value(), &haystacks);
        self.apply(Rule::ExistsInString, outcome)
    }

    /// The value must be a sequence without repeated items.
    pub fn distinct(self) -> Self {
        let outcome = distinct(self.value());
        self.apply(Rule::Distinct, outcome)
    }
}
