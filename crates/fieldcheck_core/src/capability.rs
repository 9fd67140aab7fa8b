//! Injected capabilities for rules that need I/O.
//!
//! `active_url`, `exists` and `unique` never touch the network or a database
//! themselves. The caller injects implementations of the traits below; each
//! call receives the configured timeout and must honour it.

use crate::{CapabilityError, Value};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Answers whether a host name resolves.
pub trait HostResolver: Send + Sync {
    /// Returns true if `host` has address records.
    fn has_records(&self, host: &str, timeout: Duration) -> Result<bool, CapabilityError>;
}

impl<F> HostResolver for F
where
    F: Fn(&str, Duration) -> Result<bool, CapabilityError> + Send + Sync,
{
    fn has_records(&self, host: &str, timeout: Duration) -> Result<bool, CapabilityError> {
        self(host, timeout)
    }
}

/// Answers whether a value is stored in a table column.
pub trait RecordStore: Send + Sync {
    /// Returns true if `column` of `table` holds `value`.
    fn contains(
        &self,
        table: &str,
        column: &str,
        value: &Value,
        timeout: Duration,
    ) -> Result<bool, CapabilityError>;
}

/// Host resolver answering from a fixed set of names.
#[derive(Debug, Clone, Default)]
pub struct StaticHosts {
    hosts: HashSet<String>,
}

impl StaticHosts {
    /// Creates a resolver that knows the given hosts.
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|host| host.into().to_lowercase())
                .collect(),
        }
    }
}

impl HostResolver for StaticHosts {
    fn has_records(&self, host: &str, _timeout: Duration) -> Result<bool, CapabilityError> {
        Ok(self.hosts.contains(&host.to_lowercase()))
    }
}

/// Record store kept in memory.
///
/// Values are compared with [`Value::loosely_eq`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    columns: HashMap<(String, String), Vec<Value>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to a table column.
    pub fn insert(
        &mut self,
        table: impl Into<String>,
        column: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.columns
            .entry((table.into(), column.into()))
            .or_default()
            .push(value.into());
    }

    /// Adds a value to a table column, consuming and returning the store.
    pub fn with(
        mut self,
        table: impl Into<String>,
        column: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.insert(table, column, value);
        self
    }
}

impl RecordStore for InMemoryStore {
    fn contains(
        &self,
        table: &str,
        column: &str,
        value: &Value,
        _timeout: Duration,
    ) -> Result<bool, CapabilityError> {
        let stored = self
            .columns
            .get(&(table.to_string(), column.to_string()))
            .ok_or_else(|| {
                CapabilityError::failed(
                    "record_store",
                    format!("unknown column '{}.{}'", table, column),
                )
            })?;
        Ok(stored.iter().any(|candidate| candidate.loosely_eq(value)))
    }
}
