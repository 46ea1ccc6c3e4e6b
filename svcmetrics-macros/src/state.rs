// svcmetrics - Service metrics over Statsd for Rust
//
// Copyright 2026 svcmetrics developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use arc_swap::{ArcSwap, Guard};
use once_cell::sync::Lazy;
use std::sync::Arc;
use svcmetrics::{ClientConfig, MetricResult, NopMetricSink, StatsdClient};
use tracing::{debug, info};

/// Client used before `configure` is called and after `reset_to_noop`
static NOOP: Lazy<Arc<StatsdClient>> = Lazy::new(|| Arc::new(StatsdClient::from_sink("", NopMetricSink)));

/// Global client to be used by the pass-through functions and macros
static HOLDER: Lazy<ArcSwap<StatsdClient>> = Lazy::new(|| ArcSwap::new(Arc::clone(&NOOP)));

/// Borrow the current global client for the duration of a single call.
pub(crate) fn current() -> Guard<Arc<StatsdClient>> {
    HOLDER.load()
}

/// Replace the global client with one sending over UDP to `host:port`, with
/// every key prefixed by `prefix`.
///
/// Calls already in flight finish against the previous client; every call
/// that starts afterwards uses the new one.
///
/// # Errors
///
/// Returns an error, leaving the current global client in place, if the host
/// can't be resolved to an IPv4 address, a local socket can't be bound, or
/// the prefix is invalid.
///
/// # Example
///
/// ```
/// svcmetrics_macros::configure("127.0.0.1", svcmetrics::DEFAULT_PORT, "myapp").unwrap();
/// assert!(svcmetrics_macros::is_configured());
///
/// svcmetrics_macros::reset_to_noop();
/// assert!(!svcmetrics_macros::is_configured());
/// ```
pub fn configure(host: &str, port: u16, prefix: &str) -> MetricResult<()> {
    info!(host, port, prefix, "Reconfiguring metrics.");
    let client = StatsdClient::new(host, port, prefix)?;
    HOLDER.store(Arc::new(client));
    Ok(())
}

/// Same as `configure`, with the destination and prefix taken from `config`.
pub fn configure_with(config: &ClientConfig) -> MetricResult<()> {
    configure(&config.host, config.port, &config.prefix)
}

/// Install an already built client as the global client.
///
/// Useful for clients with a custom sink, error handler, or random source.
///
/// # Example
///
/// ```
/// use svcmetrics::{StatsdClient, NopMetricSink};
///
/// let client = StatsdClient::from_sink("my.prefix", NopMetricSink);
/// svcmetrics_macros::set_global_client(client);
///
/// assert_eq!("my.prefix.", svcmetrics_macros::global_client().prefix());
/// # svcmetrics_macros::reset_to_noop();
/// ```
pub fn set_global_client(client: StatsdClient) {
    debug!(prefix = client.prefix(), "Installing global metrics client.");
    HOLDER.store(Arc::new(client));
}

/// Go back to the no-op client, discarding every metric from now on.
pub fn reset_to_noop() {
    debug!("Resetting metrics to the no-op client.");
    HOLDER.store(Arc::clone(&NOOP));
}

/// Return true if a client other than the no-op default is installed
pub fn is_configured() -> bool {
    !Arc::ptr_eq(&HOLDER.load(), &NOOP)
}

/// Get a handle to the current global client.
///
/// The handle keeps pointing at the same client even if the global client is
/// replaced afterwards.
pub fn global_client() -> Arc<StatsdClient> {
    HOLDER.load_full()
}
