//! Capability-backed rules.
//!
//! Host resolution and record lookups go through the capabilities injected
//! into the [`Validator`](crate::Validator). When a capability is missing,
//! fails or times out, the configured [`CapabilityPolicy`] decides whether
//! the rule passes or records an unverified failure.
//!
//! [`CapabilityPolicy`]: fieldcheck_core::CapabilityPolicy

use super::Outcome;
use crate::Attribute;
use fieldcheck_core::{CapabilityError, HostResolver, RecordStore, Rule, Value};
use std::time::Duration;
use tracing::debug;

fn host_of(value: &Value) -> Option<String> {
    let text = value.as_str()?;
    let parsed = url::Url::parse(text.trim()).ok()?;
    parsed.host_str().map(str::to_string)
}

fn active_url(value: &Value, hosts: Option<&dyn HostResolver>, timeout: Duration) -> Outcome {
    let Some(host) = host_of(value) else {
        return Outcome::check(false);
    };
    let Some(hosts) = hosts else {
        return Outcome::Unverified(
            CapabilityError::NotConfigured("host_resolver".to_string()),
            Vec::new(),
        );
    };

    debug!("Resolving host '{}'", host);
    match hosts.has_records(&host, timeout) {
        Ok(resolved) => Outcome::check(resolved),
        Err(e) => Outcome::Unverified(e, Vec::new()),
    }
}

/// Looks `value` up; the rule passes when its presence equals `pass_when_found`.
fn lookup(
    value: &Value,
    records: Option<&dyn RecordStore>,
    table: &str,
    column: &str,
    timeout: Duration,
    pass_when_found: bool,
) -> Outcome {
    if value.is_empty() {
        return Outcome::check(!pass_when_found);
    }
    let Some(records) = records else {
        return Outcome::Unverified(
            CapabilityError::NotConfigured("record_store".to_string()),
            Vec::new(),
        );
    };

    debug!("Looking up '{}' in {}.{}", value, table, column);
    match records.contains(table, column, value, timeout) {
        Ok(found) => Outcome::check(found == pass_when_found),
        Err(e) => Outcome::Unverified(e, Vec::new()),
    }
}

impl Attribute<'_> {
    /// The value must be a URL whose host resolves through the injected
    /// [`HostResolver`].
    pub fn active_url(self) -> Self {
        if self.is_faulted() {
            return self;
        }
        let validator = self.validator();
        let outcome = active_url(
            self.value(),
            validator.hosts(),
            validator.config().capability_timeout(),
        );
        self.apply(Rule::ActiveUrl, outcome)
    }

    /// The value must be present in `table.column` of the injected
    /// [`RecordStore`].
    pub fn exists(self, table: &str, column: &str) -> Self {
        self.record_rule(Rule::Exists, table, column, true)
    }

    /// The value must not be present in `table.column` of the injected
    /// [`RecordStore`].
    pub fn unique(self, table: &str, column: &str) -> Self {
        self.record_rule(Rule::Unique, table, column, false)
    }

    fn record_rule(self, rule: Rule, table: &str, column: &str, pass_when_found: bool) -> Self {
        if table.trim().is_empty() || column.trim().is_empty() {
            return self.reject(rule, "table and column must not be empty");
        }
        if self.is_faulted() {
            return self;
        }
        let validator = self.validator();
        let outcome = lookup(
            self.value(),
            validator.records(),
            table,
            column,
            validator.config().capability_timeout(),
            pass_when_found,
        );
        self.apply(rule, outcome)
    }
}
