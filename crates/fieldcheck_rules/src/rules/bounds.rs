//! Fixed-bound comparison rules.
//!
//! The value is coerced into the rule's domain first: instants for date
//! rules, numbers for numeric bounds, character counts for string bounds. A
//! value that cannot be coerced records a type mismatch.

use super::Outcome;
use crate::Attribute;
use chrono::{DateTime, TimeZone, Utc};
use fieldcheck_core::{Rule, Value};
use std::cmp::Ordering;

const DATE_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

fn compare_instant(
    value: &Value,
    bound: DateTime<Utc>,
    accept: impl FnOnce(Ordering) -> bool,
) -> Outcome {
    match value.to_instant() {
        Some(instant) => Outcome::check_with(
            accept(instant.cmp(&bound)),
            vec![("date", bound.format(DATE_TIME_LAYOUT).to_string())],
        ),
        None => Outcome::TypeMismatch("date"),
    }
}

fn date_equals(value: &Value, bound: DateTime<Utc>) -> Outcome {
    match value.to_instant() {
        Some(instant) => Outcome::check_with(
            instant.date_naive() == bound.date_naive(),
            vec![("date", bound.format("%Y-%m-%d").to_string())],
        ),
        None => Outcome::TypeMismatch("date"),
    }
}

/// Formats a bound without a trailing `.0` for whole numbers.
fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

fn max_numeric(value: &Value, max: f64) -> Outcome {
    match value.to_number() {
        Some(number) => Outcome::check_with(number <= max, vec![("max", format_number(max))]),
        None => Outcome::TypeMismatch("numeric"),
    }
}

fn min_numeric(value: &Value, min: f64) -> Outcome {
    match value.to_number() {
        Some(number) => Outcome::check_with(number >= min, vec![("min", format_number(min))]),
        None => Outcome::TypeMismatch("numeric"),
    }
}

fn char_count(value: &Value) -> Option<usize> {
    value.to_text().map(|text| text.chars().count())
}

fn max_string(value: &Value, max: usize) -> Outcome {
    match char_count(value) {
        Some(count) => Outcome::check_with(count <= max, vec![("max", max.to_string())]),
        None => Outcome::TypeMismatch("string"),
    }
}

fn min_string(value: &Value, min: usize) -> Outcome {
    match char_count(value) {
        Some(count) => Outcome::check_with(count >= min, vec![("min", min.to_string())]),
        None => Outcome::TypeMismatch("string"),
    }
}

/// Returns the number of digits if the value consists of ASCII digits only.
fn digit_count(value: &Value) -> Option<Option<usize>> {
    let text = value.to_text()?;
    let all_digits = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
    Some(all_digits.then_some(text.len()))
}

fn digits(value: &Value, length: usize) -> Outcome {
    match digit_count(value) {
        Some(count) => Outcome::check_with(
            count == Some(length),
            vec![("digits", length.to_string())],
        ),
        None => Outcome::TypeMismatch("numeric"),
    }
}

fn digits_between(value: &Value, min: usize, max: usize) -> Outcome {
    match digit_count(value) {
        Some(count) => Outcome::check_with(
            count.is_some_and(|count| (min..=max).contains(&count)),
            vec![("min", min.to_string()), ("max", max.to_string())],
        ),
        None => Outcome::TypeMismatch("numeric"),
    }
}

impl Attribute<'_> {
    /// The value must be an instant strictly before `date`.
    pub fn before<Tz: TimeZone>(self, date: DateTime<Tz>) -> Self {
        let outcome = compare_instant(self.value(), date.with_timezone(&Utc), Ordering::is_lt);
        self.apply(Rule::Before, outcome)
    }

    /// The value must be an instant strictly after `date`.
    pub fn after<Tz: TimeZone>(self, date: DateTime<Tz>) -> Self {
        let outcome = compare_instant(self.value(), date.with_timezone(&Utc), Ordering::is_gt);
        self.apply(Rule::After, outcome)
    }

    /// The value must be an instant before or equal to `date`.
    pub fn before_or_equal<Tz: TimeZone>(self, date: DateTime<Tz>) -> Self {
        let outcome = compare_instant(self.value(), date.with_timezone(&Utc), Ordering::is_le);
        self.apply(Rule::BeforeOrEqual, outcome)
    }

    /// The value must be an instant after or equal to `date`.
    pub fn after_or_equal<Tz: TimeZone>(self, date: DateTime<Tz>) -> Self {
        let outcome = compare_instant(self.value(), date.with_timezone(&Utc), Ordering::is_ge);
        self.apply(Rule::AfterOrEqual, outcome)
    }

    /// The value must fall on the same calendar day (UTC) as `date`.
    pub fn date_equals<Tz: TimeZone>(self, date: DateTime<Tz>) -> Self {
        let outcome = date_equals(self.value(), date.with_timezone(&Utc));
        self.apply(Rule::DateEquals, outcome)
    }

    /// The value must be a number no greater than `max`.
    pub fn max_numeric(self, max: impl Into<f64>) -> Self {
        let max = max.into();
        if !max.is_finite() {
            return self.reject(Rule::MaxNumeric, "bound must be finite");
        }
        let outcome = max_numeric(self.value(), max);
        self.apply(Rule::MaxNumeric, outcome)
    }

    /// The value must be a number no smaller than `min`.
    pub fn min_numeric(self, min: impl Into<f64>) -> Self {
        let min = min.into();
        if !min.is_finite() {
            return self.reject(Rule::MinNumeric, "bound must be finite");
        }
        let outcome = min_numeric(self.value(), min);
        self.apply(Rule::MinNumeric, outcome)
    }

    /// The value must be at most `max` characters long.
    pub fn max_string(self, max: usize) -> Self {
        let outcome = max_string(self.value(), max);
        self.apply(Rule::MaxString, outcome)
    }

    /// The value must be at least `min` characters long.
    pub fn min_string(self, min: usize) -> Self {
        let outcome = min_string(self.value(), min);
        self.apply(Rule::MinString, outcome)
    }

    /// The value must consist of exactly `length` digits.
    pub fn digits(self, length: usize) -> Self {
        if length == 0 {
            return self.reject(Rule::Digits, "length must be greater than zero");
        }
        let outcome = digits(self.value(), length);
        self.apply(Rule::Digits, outcome)
    }

    /// The value must consist of `min` to `max` digits, inclusive.
    pub fn digits_between(self, min: usize, max: usize) -> Self {
        if max == 0 || min > max {
            return self.reject(
                Rule::DigitsBetween,
                format!("invalid digit range {}..={}", min, max),
            );
        }
        let outcome = digits_between(self.value(), min, max);
        self.apply(Rule::DigitsBetween, outcome)
    }
}
