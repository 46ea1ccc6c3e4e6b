// svcmetrics - Service metrics over Statsd for Rust
//
// Copyright 2026 svcmetrics developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A process-wide svcmetrics client and macros for emitting metrics with it.
//!
//! Like logging, code can always emit metrics through this crate whether or
//! not anything consumes them. Until `configure` is called the global client
//! writes to a `NopMetricSink`: every call succeeds and does nothing, and
//! `timeit` still runs and returns the wrapped closure.
//!
//! ## Usage
//!
//! ```rust
//! use svcmetrics_macros::{statsd_count, statsd_gauge, statsd_incr, statsd_timeit, statsd_timing};
//!
//! // No backend yet, all of these are no-ops
//! statsd_incr!("app.started");
//! let answer = statsd_timeit!("app.compute", { 6 * 7 });
//! assert_eq!(42, answer);
//!
//! // Send to a Statsd server from now on
//! svcmetrics_macros::configure("127.0.0.1", svcmetrics::DEFAULT_PORT, "myapp").unwrap();
//!
//! statsd_count!("requests", 3);
//! statsd_timing!("db.query", 12.5);
//! statsd_gauge!("connections", 17);
//!
//! // And back to discarding everything
//! svcmetrics_macros::reset_to_noop();
//! ```
//!
//! ## Errors
//!
//! The functions and macros emitting metrics return nothing. Any error,
//! including an invalid key, is passed to the error handler of the global
//! client, which logs it at `debug` level unless the client was built with
//! another handler and installed via `set_global_client`.
//!
//! ## Timing Functions
//!
//! `timed` wraps a closure so that every call is timed under a fixed metric
//! name, using whatever global client is installed when the call happens.
//!
//! ```rust
//! let mut load_config = svcmetrics_macros::timed_with_prefix("startup", "load_config", || "loaded");
//! assert_eq!("loaded", load_config());
//! ```

#![forbid(unsafe_code)]

use svcmetrics::ext::{MetricBackend, ToCounterValue, ToGaugeValue, ToSetValue, ToTimerValue};
use svcmetrics::prelude::*;
use svcmetrics::{MetricKeys, MetricResult};

pub use crate::state::{configure, configure_with, global_client, is_configured, reset_to_noop, set_global_client};

mod macros;
mod state;

// Run one operation against the global client, handing any error to its
// error handler.
fn with_global<F>(op: F)
where
    F: FnOnce(&svcmetrics::StatsdClient) -> MetricResult<svcmetrics::Emitted>,
{
    let client = state::current();
    if let Err(e) = op(&client) {
        client.consume_error(e);
    }
}

/// Record a timing in milliseconds with the global client
pub fn timing<K, T>(keys: K, time: T)
where
    K: Into<MetricKeys>,
    T: ToTimerValue,
{
    with_global(|c| c.timing(keys, time))
}

/// Record a gauge value with the global client
pub fn gauge<K, T>(keys: K, value: T)
where
    K: Into<MetricKeys>,
    T: ToGaugeValue,
{
    with_global(|c| c.gauge(keys, value))
}

/// Add a value to a set with the global client
pub fn set_add<K, T>(keys: K, value: T)
where
    K: Into<MetricKeys>,
    T: ToSetValue,
{
    with_global(|c| c.set_add(keys, value))
}

/// Increment or decrement a counter with the global client
pub fn count<K, T>(keys: K, value: T)
where
    K: Into<MetricKeys>,
    T: ToCounterValue,
{
    with_global(|c| c.count(keys, value))
}

/// Increment or decrement a counter with the global client, sending it with
/// probability `sample_rate`
pub fn count_sampled<K, T>(keys: K, value: T, sample_rate: f64)
where
    K: Into<MetricKeys>,
    T: ToCounterValue,
{
    with_global(|c| c.count_sampled(keys, value, sample_rate))
}

/// Increment a counter by 1 with the global client
pub fn increment<K>(keys: K)
where
    K: Into<MetricKeys>,
{
    with_global(|c| c.increment(keys))
}

/// Increment a counter by 1 with the global client, sending it with
/// probability `sample_rate`
pub fn increment_sampled<K>(keys: K, sample_rate: f64)
where
    K: Into<MetricKeys>,
{
    with_global(|c| c.increment_sampled(keys, sample_rate))
}

/// Decrement a counter by 1 with the global client
pub fn decrement<K>(keys: K)
where
    K: Into<MetricKeys>,
{
    with_global(|c| c.decrement(keys))
}

/// Decrement a counter by 1 with the global client, sending it with
/// probability `sample_rate`
pub fn decrement_sampled<K>(keys: K, sample_rate: f64)
where
    K: Into<MetricKeys>,
{
    with_global(|c| c.decrement_sampled(keys, sample_rate))
}

/// Call `f` and record how long it took with the global client, returning
/// whatever `f` returned.
///
/// The client in place when the call starts records the timing, even if the
/// global client is replaced while `f` runs.
///
/// # Example
///
/// ```
/// let sum = svcmetrics_macros::timeit("sum", || (1..=10).sum::<u32>());
/// assert_eq!(55, sum);
/// ```
pub fn timeit<K, F, R>(key: K, f: F) -> R
where
    K: Into<MetricKeys>,
    F: FnOnce() -> R,
{
    global_client().timeit(key, f)
}

/// Wrap `f` so that every call is timed under `name` with the global client.
///
/// The global client is looked up on each call, so a wrapper created before
/// `configure` starts sending once a backend is configured.
///
/// # Example
///
/// ```
/// let mut next_id = {
///     let mut id = 0;
///     svcmetrics_macros::timed("next_id", move || {
///         id += 1;
///         id
///     })
/// };
///
/// assert_eq!(1, next_id());
/// assert_eq!(2, next_id());
/// ```
pub fn timed<F, R>(name: &str, f: F) -> impl FnMut() -> R
where
    F: FnMut() -> R,
{
    timed_with_prefix("", name, f)
}

/// Wrap `f` so that every call is timed under `prefix.name` with the global
/// client. An empty prefix is the same as calling `timed`.
pub fn timed_with_prefix<F, R>(prefix: &str, name: &str, mut f: F) -> impl FnMut() -> R
where
    F: FnMut() -> R,
{
    let key = metric_name(prefix, name);
    move || timeit(key.as_str(), &mut f)
}

/// Wrap a function of one argument so that every call is timed under `name`
/// with the global client. Functions of several arguments can take a tuple.
///
/// # Example
///
/// ```
/// let mut parse = svcmetrics_macros::timed_with_arg("parse", |s: &str| s.parse::<u32>());
/// assert_eq!(Ok(12), parse("12"));
/// ```
pub fn timed_with_arg<F, A, R>(name: &str, mut f: F) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
{
    let key = metric_name("", name);
    move |arg| timeit(key.as_str(), || f(arg))
}

fn metric_name(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{}.{}", prefix, name)
    }
}
