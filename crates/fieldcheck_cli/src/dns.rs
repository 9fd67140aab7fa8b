//! Host resolution backed by the tokio resolver.

use fieldcheck_core::{CapabilityError, HostResolver};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::debug;

/// Resolves hosts with `tokio::net::lookup_host`.
///
/// Validation runs on a blocking thread; each lookup is driven on the
/// runtime through its handle and bounded by the capability timeout.
pub struct DnsResolver {
    handle: Handle,
}

impl DnsResolver {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }
}

impl HostResolver for DnsResolver {
    fn has_records(&self, host: &str, timeout: Duration) -> Result<bool, CapabilityError> {
        let lookup = tokio::time::timeout(timeout, tokio::net::lookup_host((host, 80)));

        match self.handle.block_on(lookup) {
            Ok(Ok(mut addresses)) => Ok(addresses.next().is_some()),
            Ok(Err(e)) => {
                debug!("No records for '{}': {}", host, e);
                Ok(false)
            }
            Err(_) => Err(CapabilityError::timeout(
                "dns",
                u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            )),
        }
    }
}
