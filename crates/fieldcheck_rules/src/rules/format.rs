//! Format rules.
//!
//! Scalars are read through their textual form, so `12` is checked as `"12"`.
//! Null, sequences and mappings never match a format.

use super::{Outcome, collect_strings, join_values};
use crate::Attribute;
use chrono::format::{Item, ParseErrorKind, Parsed, StrftimeItems};
use fieldcheck_core::{Rule, ValidationError, Value, parse_timestamp};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidateEmail, ValidateIp, ValidateUrl};

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

fn text_check(value: &Value, predicate: impl FnOnce(String) -> bool) -> Outcome {
    Outcome::check(value.to_text().is_some_and(predicate))
}

fn email(value: &Value) -> Outcome {
    text_check(value, |text| text.validate_email())
}

fn url(value: &Value) -> Outcome {
    text_check(value, |text| text.validate_url())
}

fn ip(value: &Value) -> Outcome {
    text_check(value, |text| text.validate_ip())
}

fn ipv4(value: &Value) -> Outcome {
    text_check(value, |text| text.validate_ipv4())
}

fn ipv6(value: &Value) -> Outcome {
    text_check(value, |text| text.validate_ipv6())
}

fn uuid(value: &Value) -> Outcome {
    text_check(value, |text| UUID_PATTERN.is_match(&text))
}

fn alpha(value: &Value) -> Outcome {
    text_check(value, |text| {
        !text.is_empty() && text.chars().all(char::is_alphabetic)
    })
}

fn alpha_dash(value: &Value) -> Outcome {
    text_check(value, |text| {
        !text.is_empty()
            && text
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    })
}

fn alpha_num(value: &Value) -> Outcome {
    text_check(value, |text| {
        !text.is_empty() && text.chars().all(char::is_alphanumeric)
    })
}

fn matches(value: &Value, pattern: &Regex) -> Outcome {
    text_check(value, |text| pattern.is_match(&text))
}

fn not_matches(value: &Value, pattern: &Regex) -> Outcome {
    text_check(value, |text| !pattern.is_match(&text))
}

fn date(value: &Value) -> Outcome {
    let passed = match value {
        Value::Time(_) => true,
        Value::String(s) => parse_timestamp(s).is_some(),
        _ => false,
    };
    Outcome::check(passed)
}

fn date_format(value: &Value, layout: &str) -> Outcome {
    let passed = value.as_str().is_some_and(|s| {
        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, s, StrftimeItems::new(layout)).is_ok()
            && is_real_date(&parsed)
    });
    Outcome::check_with(passed, vec![("format", layout.to_string())])
}

/// Layouts without a full date only have their fields range-checked.
fn is_real_date(parsed: &Parsed) -> bool {
    match parsed.to_naive_date() {
        Ok(_) => true,
        Err(err) => err.kind() == ParseErrorKind::NotEnough,
    }
}

fn timezone(value: &Value) -> Outcome {
    let passed = value
        .as_str()
        .is_some_and(|s| s.parse::<chrono_tz::Tz>().is_ok());
    Outcome::check(passed)
}

fn starts_with(value: &Value, prefixes: &[String]) -> Outcome {
    let passed = value
        .to_text()
        .is_some_and(|text| prefixes.iter().any(|prefix| text.starts_with(prefix.as_str())));
    Outcome::check_with(passed, vec![("values", join_values(prefixes))])
}

fn ends_with(value: &Value, suffixes: &[String]) -> Outcome {
    let passed = value
        .to_text()
        .is_some_and(|text| suffixes.iter().any(|suffix| text.ends_with(suffix.as_str())));
    Outcome::check_with(passed, vec![("values", join_values(suffixes))])
}

/// Returns true if a strftime layout contains unknown specifiers.
fn is_malformed_layout(layout: &str) -> bool {
    layout.is_empty() || StrftimeItems::new(layout).any(|item| matches!(item, Item::Error))
}

impl Attribute<'_> {
    /// The value must be an email address.
    pub fn email(self) -> Self {
        let outcome = email(self.value());
        self.apply(Rule::Email, outcome)
    }

    /// The value must be an absolute URL.
    pub fn url(self) -> Self {
        let outcome = url(self.value());
        self.apply(Rule::Url, outcome)
    }

    /// The value must be an IPv4 or IPv6 address.
    pub fn ip(self) -> Self {
        let outcome = ip(self.value());
        self.apply(Rule::Ip, outcome)
    }

    /// The value must be an IPv4 address.
    pub fn ipv4(self) -> Self {
        let outcome = ipv4(self.value());
        self.apply(Rule::Ipv4, outcome)
    }

    /// The value must be an IPv6 address.
    pub fn ipv6(self) -> Self {
        let outcome = ipv6(self.value());
        self.apply(Rule::Ipv6, outcome)
    }

    /// The value must be a hyphenated UUID, in either case.
    pub fn uuid(self) -> Self {
        let outcome = uuid(self.value());
        self.apply(Rule::Uuid, outcome)
    }

    /// The value must consist of letters only.
    pub fn alpha(self) -> Self {
        let outcome = alpha(self.value());
        self.apply(Rule::Alpha, outcome)
    }

    /// The value must consist of letters, digits, dashes and underscores.
    pub fn alpha_dash(self) -> Self {
        let outcome = alpha_dash(self.value());
        self.apply(Rule::AlphaDash, outcome)
    }

    /// The value must consist of letters and digits.
    pub fn alpha_num(self) -> Self {
        let outcome = alpha_num(self.value());
        self.apply(Rule::AlphaNum, outcome)
    }

    /// The value must match `pattern`.
    ///
    /// A pattern that does not compile is a configuration error.
    pub fn regex(self, pattern: &str) -> Self {
        match self.validator().regex(pattern) {
            Ok(compiled) => {
                let outcome = matches(self.value(), &compiled);
                self.apply(Rule::Regex, outcome)
            }
            Err(e) => self.fault(ValidationError::invalid_regex(
                Rule::Regex.key(),
                pattern,
                e.to_string(),
            )),
        }
    }

    /// The value must not match `pattern`.
    pub fn not_regex(self, pattern: &str) -> Self {
        match self.validator().regex(pattern) {
            Ok(compiled) => {
                let outcome = not_matches(self.value(), &compiled);
                self.apply(Rule::NotRegex, outcome)
            }
            Err(e) => self.fault(ValidationError::invalid_regex(
                Rule::NotRegex.key(),
                pattern,
                e.to_string(),
            )),
        }
    }

    /// The value must be an instant or a string holding a date.
    pub fn date(self) -> Self {
        let outcome = date(self.value());
        self.apply(Rule::Date, outcome)
    }

    /// The value must be a string in the given strftime layout, e.g. `%Y-%m-%d`.
    pub fn date_format(self, layout: &str) -> Self {
        if is_malformed_layout(layout) {
            return self.reject(
                Rule::DateFormat,
                format!("'{}' is not a valid date layout", layout),
            );
        }
        let outcome = date_format(self.value(), layout);
        self.apply(Rule::DateFormat, outcome)
    }

    /// The value must be an IANA time zone name.
    pub fn timezone(self) -> Self {
        let outcome = timezone(self.value());
        self.apply(Rule::Timezone, outcome)
    }

    /// The value must start with one of `prefixes`.
    pub fn starts_with<I, S>(self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes = collect_strings(prefixes);
        if prefixes.is_empty() {
            return self.reject(Rule::StartsWith, "at least one prefix is required");
        }
        let outcome = starts_with(self.value(), &prefixes);
        self.apply(Rule::StartsWith, outcome)
    }

    /// The value must end with one of `suffixes`.
    pub fn ends_with<I, S>(self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let suffixes = collect_strings(suffixes);
        if suffixes.is_empty() {
            return self.reject(Rule::EndsWith, "at least one suffix is required");
        }
        let outcome = ends_with(self.value(), &suffixes);
        self.apply(Rule::EndsWith, outcome)
    }
}
