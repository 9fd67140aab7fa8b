//! Rule keys.
//!
//! Every rule kind has a stable key. The key names the rule in error entries
//! and selects its template in the `errors` section of the message catalog.

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! rules {
    ($($variant:ident => $key:literal,)+) => {
        /// The closed set of rule kinds a chain can apply.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Rule {
            $(
                #[doc = concat!("`", $key, "` rule")]
                $variant,
            )+
        }

        impl Rule {
            /// All rule kinds, in declaration order.
            pub const ALL: &'static [Rule] = &[$(Rule::$variant,)+];

            /// Returns the stable key of this rule.
            pub fn key(&self) -> &'static str {
                match self {
                    $(Rule::$variant => $key,)+
                }
            }

            /// Looks a rule up by key.
            pub fn from_key(key: &str) -> Option<Rule> {
                match key {
                    $($key => Some(Rule::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

rules! {
    // Presence
    Required => "required",
    Filled => "filled",
    Present => "present",
    Prohibited => "prohibited",
    // Type
    String => "string",
    Numeric => "numeric",
    Integer => "integer",
    Boolean => "boolean",
    Array => "array",
    Json => "json",
    // Format
    Email => "email",
    Url => "url",
    ActiveUrl => "active_url",
    Ip => "ip",
    Ipv4 => "ipv4",
    Ipv6 => "ipv6",
    Uuid => "uuid",
    Alpha => "alpha",
    AlphaDash => "alpha_dash",
    AlphaNum => "alpha_num",
    Regex => "regex",
    NotRegex => "not_regex",
    Date => "date",
    DateFormat => "date_format",
    Timezone => "timezone",
    StartsWith => "starts_with",
    EndsWith => "ends_with",
    Mimes => "mimes",
    Image => "image",
    Dimensions => "dimensions",
    // Fixed bounds
    Before => "before",
    After => "after",
    BeforeOrEqual => "before_or_equal",
    AfterOrEqual => "after_or_equal",
    DateEquals => "date_equals",
    MaxNumeric => "max_numeric",
    MinNumeric => "min_numeric",
    MaxString => "max_string",
    MinString => "min_string",
    Digits => "digits",
    DigitsBetween => "digits_between",
    // Set membership
    In => "in",
    NotIn => "not_in",
    InArray => "in_array",
    Exists => "exists",
    ExistsInString => "exists_in_string",
    Unique => "unique",
    Distinct => "distinct",
    // Cross-field
    Confirmed => "confirmed",
    Same => "same",
    Different => "different",
    AcceptedIf => "accepted_if",
    DeclinedIf => "declined_if",
    RequiredIf => "required_if",
    RequiredUnless => "required_unless",
    ProhibitedIf => "prohibited_if",
    // Boolean literals
    Accepted => "accepted",
    Declined => "declined",
    // Password policy
    PasswordLetters => "password_letters",
    PasswordMixed => "password_mixed",
    PasswordNumbers => "password_numbers",
    PasswordSymbols => "password_symbols",
    PasswordUncompromised => "password_uncompromised",
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}
