//! Password policy rules.

use super::{Outcome, collect_strings};
use crate::Attribute;
use fieldcheck_core::{Rule, Value};

fn password(value: &Value, policy: impl FnOnce(&str) -> bool) -> Outcome {
    match value.as_str() {
        Some(secret) => Outcome::check(policy(secret)),
        None => Outcome::TypeMismatch("string"),
    }
}

fn has_letter(secret: &str) -> bool {
    secret.chars().any(char::is_alphabetic)
}

fn has_mixed_case(secret: &str) -> bool {
    secret.chars().any(char::is_uppercase) && secret.chars().any(char::is_lowercase)
}

fn has_number(secret: &str) -> bool {
    secret.chars().any(|c| c.is_numeric())
}

fn has_symbol(secret: &str) -> bool {
    secret
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

impl Attribute<'_> {
    /// The password must contain a letter.
    pub fn password_letters(self) -> Self {
        let outcome = password(self.value(), has_letter);
        self.apply(Rule::PasswordLetters, outcome)
    }

    /// The password must contain both an uppercase and a lowercase letter.
    pub fn password_mixed(self) -> Self {
        let outcome = password(self.value(), has_mixed_case);
        self.apply(Rule::PasswordMixed, outcome)
    }

    /// The password must contain a digit.
    pub fn password_numbers(self) -> Self {
        let outcome = password(self.value(), has_number);
        self.apply(Rule::PasswordNumbers, outcome)
    }

    /// The password must contain a symbol.
    pub fn password_symbols(self) -> Self {
        let outcome = password(self.value(), has_symbol);
        self.apply(Rule::PasswordSymbols, outcome)
    }

    /// The password must not appear in `breached`.
    pub fn password_uncompromised<I, S>(self, breached: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let breached = collect_strings(breached);
        let outcome = password(self.value(), |secret| {
            !breached.iter().any(|known| known == secret)
        });
        self.apply(Rule::PasswordUncompromised, outcome)
    }
}
