// svcmetrics - Service metrics over Statsd for Rust
//
// Copyright 2026 svcmetrics developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Emit a counter using the global client, optionally sampled
///
/// The counter will use the prefix from the global client combined with the
/// provided key(s). The value defaults to 1 when omitted and a third argument
/// is the sample rate.
///
/// Any errors encountered sending metrics will be handled by the error handler
/// registered with the global client.
///
/// # Examples
///
/// ```
/// use svcmetrics_macros::statsd_count;
///
/// statsd_count!("some.counter");
/// statsd_count!("some.counter", 123);
/// statsd_count!(["some.counter", "other.counter"], 4);
/// statsd_count!("some.counter", 1, 0.1);
/// ```
#[macro_export]
macro_rules! statsd_count {
    ($keys:expr) => {
        $crate::count($keys, 1)
    };

    ($keys:expr, $val:expr) => {
        $crate::count($keys, $val)
    };

    ($keys:expr, $val:expr, $rate:expr) => {
        $crate::count_sampled($keys, $val, $rate)
    };
}

/// Increment a counter by 1 using the global client, optionally sampled
///
/// # Examples
///
/// ```
/// use svcmetrics_macros::statsd_incr;
///
/// statsd_incr!("some.counter");
/// statsd_incr!("some.counter", 0.5);
/// ```
#[macro_export]
macro_rules! statsd_incr {
    ($keys:expr) => {
        $crate::increment($keys)
    };

    ($keys:expr, $rate:expr) => {
        $crate::increment_sampled($keys, $rate)
    };
}

/// Decrement a counter by 1 using the global client, optionally sampled
///
/// # Examples
///
/// ```
/// use svcmetrics_macros::statsd_decr;
///
/// statsd_decr!("some.counter");
/// statsd_decr!("some.counter", 0.5);
/// ```
#[macro_export]
macro_rules! statsd_decr {
    ($keys:expr) => {
        $crate::decrement($keys)
    };

    ($keys:expr, $rate:expr) => {
        $crate::decrement_sampled($keys, $rate)
    };
}

/// Emit a timing in milliseconds using the global client
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use svcmetrics_macros::statsd_timing;
///
/// statsd_timing!("some.timer", 334);
/// statsd_timing!("some.timer", 12.5);
/// statsd_timing!("some.timer", Duration::from_millis(334));
/// ```
#[macro_export]
macro_rules! statsd_timing {
    ($keys:expr, $val:expr) => {
        $crate::timing($keys, $val)
    };
}

/// Emit a gauge using the global client
///
/// # Examples
///
/// ```
/// use svcmetrics_macros::statsd_gauge;
///
/// statsd_gauge!("some.gauge", 42);
/// statsd_gauge!("some.gauge", 0.75);
/// ```
#[macro_export]
macro_rules! statsd_gauge {
    ($keys:expr, $val:expr) => {
        $crate::gauge($keys, $val)
    };
}

/// Add a value to a set using the global client
///
/// # Examples
///
/// ```
/// use svcmetrics_macros::statsd_set;
///
/// statsd_set!("some.set", 123);
/// statsd_set!("some.set", "user-123");
/// ```
#[macro_export]
macro_rules! statsd_set {
    ($keys:expr, $val:expr) => {
        $crate::set_add($keys, $val)
    };
}

/// Time a block using the global client and evaluate to its value
///
/// The timing is recorded even if the block panics. Control flow that leaves
/// the block early (`return`, `?`, `break`) is not supported since the block
/// runs inside a closure; have the block evaluate to a `Result` instead.
///
/// # Examples
///
/// ```
/// use svcmetrics_macros::statsd_timeit;
///
/// let rows = statsd_timeit!("db.query", {
///     vec![1, 2, 3]
/// });
///
/// assert_eq!(3, rows.len());
/// ```
#[macro_export]
macro_rules! statsd_timeit {
    ($key:expr, $body:block) => {
        $crate::timeit($key, || $body)
    };

    ($key:expr, $body:expr) => {
        $crate::timeit($key, || $body)
    };
}
