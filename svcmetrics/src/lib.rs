// svcmetrics - Service metrics over Statsd for Rust
//
// Copyright 2026 svcmetrics developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Service metrics over Statsd for Rust.
//!
//! Svcmetrics is a small client for emitting timings, gauges, set members,
//! and counters to a Statsd server using the plain-text wire format
//! `key:value|type[|@rate]`, one metric per UDP datagram.
//!
//! ## Features
//!
//! * Counters (optionally sampled), timers, gauges, and sets over UDP.
//! * Recording the same value under several keys in one call.
//! * Timing a closure with `timeit`, recorded even when the closure panics.
//! * Alternate backends via the `MetricSink` trait.
//! * A process-wide, no-op by default, client in the `svcmetrics-macros` crate.
//!
//! ## Install
//!
//! ```toml
//! [dependencies]
//! svcmetrics = "x.y.z"
//! ```
//!
//! ## Usage
//!
//! ### Simple Use
//!
//! Create a client pointing at a Statsd server and send a few metrics. The
//! prefix is joined to every key with a `.`.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use svcmetrics::prelude::*;
//! use svcmetrics::{StatsdClient, DEFAULT_PORT};
//!
//! let client = StatsdClient::new("metrics.example.com", DEFAULT_PORT, "my.app").unwrap();
//!
//! client.increment("logins").unwrap();
//! client.count_sampled("requests", 1, 0.1).unwrap();
//! client.timing("db.query", 42.5).unwrap();
//! client.timing("db.query", Duration::from_millis(42)).unwrap();
//! client.gauge("connections", 17).unwrap();
//! client.set_add("users", "someone@example.com").unwrap();
//!
//! let rows = client.timeit("db.fetch", || vec![1, 2, 3]);
//! ```
//!
//! ### Multiple Keys
//!
//! Every method accepts a single key or several keys. The same value is
//! recorded under each key, as one datagram per key.
//!
//! ```rust
//! use svcmetrics::prelude::*;
//! use svcmetrics::{StatsdClient, NopMetricSink};
//!
//! let client = StatsdClient::from_sink("app", NopMetricSink);
//! let emitted = client.gauge(["mem.web", "mem.total"], 512).unwrap();
//!
//! assert_eq!(vec!["app.mem.web:512|g", "app.mem.total:512|g"], emitted.payloads());
//! ```
//!
//! ### Sampling
//!
//! Sampled counters are sent with the given probability and carry the rate
//! so that the server can scale them back up. A rate of 1.0 or more always
//! sends and a rate of 0.0 or less never does. The random source may be
//! replaced to make sampling deterministic.
//!
//! ```rust
//! use svcmetrics::prelude::*;
//! use svcmetrics::{StatsdClient, NopMetricSink};
//!
//! let client = StatsdClient::builder("app", NopMetricSink)
//!     .with_random_source(|| 0.05)
//!     .build()
//!     .unwrap();
//!
//! let emitted = client.count_sampled("hits", 1, 0.1).unwrap();
//! assert_eq!(vec!["app.hits:1|c|@0.1"], emitted.payloads());
//! ```
//!
//! ### Implemented Traits
//!
//! Each kind of metric is emitted via its own trait, and `MetricClient`
//! combines all of them. This allows code to accept any client generically,
//! which is useful to swap in a client writing to a `SpyMetricSink` in tests.
//!
//! The methods are generic over the key type (a single `&str`, an array, a
//! `Vec`, and so on) so the traits are not object safe. Accept clients with a
//! generic bound such as `C: MetricClient`, not as `dyn MetricClient`.
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use svcmetrics::prelude::*;
//! use svcmetrics::{StatsdClient, NopMetricSink};
//!
//! pub struct UserDao<C: MetricClient> {
//!     metrics: C,
//! }
//!
//! impl<C: MetricClient> UserDao<C> {
//!     pub fn get_user_by_id(&self, id: u64) -> Option<String> {
//!         let _ = self.metrics.increment("getUserById");
//!         None
//!     }
//! }
//!
//! let dao = UserDao { metrics: StatsdClient::from_sink("dao", NopMetricSink) };
//! assert!(dao.get_user_by_id(123).is_none());
//!
//! // Sharing one client between threads
//! fn record_login<C: MetricClient>(metrics: &C) {
//!     let _ = metrics.increment("logins");
//! }
//!
//! let shared = Arc::new(StatsdClient::from_sink("dao", NopMetricSink));
//! let worker = Arc::clone(&shared);
//! thread::spawn(move || record_login(&*worker)).join().unwrap();
//! record_login(&*shared);
//! ```
//!
//! ### Error Handling
//!
//! Recording methods return an error only for invalid input such as an empty
//! key or a key containing one of the reserved characters `:`, `|`, `,` or a
//! line break. Failures sending datagrams are never returned: they are passed
//! to an error handler, which logs them at `debug` level via `tracing` unless
//! another handler is configured.
//!
//! ```rust
//! use svcmetrics::prelude::*;
//! use svcmetrics::{MetricError, StatsdClient, NopMetricSink};
//!
//! fn my_error_handler(err: MetricError) {
//!     eprintln!("Metric error! {}", err);
//! }
//!
//! let client = StatsdClient::builder("prefix", NopMetricSink)
//!     .with_error_handler(my_error_handler)
//!     .build()
//!     .unwrap();
//!
//! assert!(client.increment("bad:key").is_err());
//! ```
//!
//! ### Custom Metric Sinks
//!
//! The `StatsdClient` hands every datagram to an implementation of the
//! `MetricSink` trait.
//!
//! ```rust
//! use std::io;
//! use svcmetrics::prelude::*;
//! use svcmetrics::{StatsdClient, MetricSink};
//!
//! pub struct StderrMetricSink;
//!
//! impl MetricSink for StderrMetricSink {
//!     fn emit(&self, metric: &str) -> io::Result<usize> {
//!         eprintln!("{}", metric);
//!         Ok(metric.len())
//!     }
//! }
//!
//! let client = StatsdClient::from_sink("my.prefix", StderrMetricSink);
//! client.increment("some.counter").unwrap();
//! ```

#![forbid(unsafe_code)]

/// Port Statsd servers listen on by default
pub const DEFAULT_PORT: u16 = 8125;

/// Host metrics are sent to unless configured otherwise
pub const DEFAULT_HOST: &str = "localhost";

pub use self::builder::{MetricKeys, RandomSource, SeededRandom, ThreadRandom};

pub use self::client::{
    ClientConfig, Counted, CountedExt, Gauged, MetricClient, Setted, StatsdClient, StatsdClientBuilder, Timed,
    TimedExt, TimingGuard,
};

pub use self::sinks::{MetricSink, NopMetricSink, SinkStats, SpyMetricSink, UdpMetricSink};

pub use self::types::{Emitted, ErrorKind, MetricError, MetricResult};

mod builder;
mod client;
pub mod ext;
pub mod prelude;
mod sinks;
mod types;


mod sealed {
    pub trait Sealed {}
}
