//! Validation session and cross-field resolution.
//!
//! Cross-field rules (`same`, `required_if`, ...) look peer attributes up through
//! a [`FieldResolver`]. The usual resolver is a [`Session`]: every attribute of
//! one logical validation operation, registered before any chain runs.

use crate::Value;
use std::collections::{BTreeMap, HashMap};

/// Resolves the current value of a named attribute.
///
/// `None` means the attribute was never registered. Rules treat that as a
/// missing reference, not as an empty value.
pub trait FieldResolver: Send + Sync {
    /// Returns the value registered under `field`.
    fn resolve(&self, field: &str) -> Option<&Value>;
}

/// Registry of attribute values for one validation operation.
///
/// # Example
///
/// ```rust
/// use fieldcheck_core::{FieldResolver, Session, Value};
///
/// let session = Session::new()
///     .with("name", "mehrab")
///     .with("age", 30);
///
/// assert_eq!(session.resolve("age"), Some(&Value::Int(30)));
/// assert_eq!(session.resolve("email"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    fields: HashMap<String, Value>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an attribute, consuming and returning the session.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Registers an attribute, returning the value it replaced.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Returns the value registered under `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns true if `field` is registered.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of registered attributes.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the registered attribute names, sorted.
    pub fn fields(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds a session from a JSON object.
    ///
    /// Returns `None` when `json` is not an object.
    pub fn from_json(json: serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Object(entries) => Some(
                entries
                    .into_iter()
                    .map(|(field, value)| (field, Value::from(value)))
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl FieldResolver for Session {
    fn resolve(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

impl FieldResolver for HashMap<String, Value> {
    fn resolve(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

impl FieldResolver for BTreeMap<String, Value> {
    fn resolve(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Session {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}
