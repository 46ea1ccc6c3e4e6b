// svcmetrics - Service metrics over Statsd for Rust
//
// Copyright 2026 svcmetrics developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Export commonly used parts of svcmetrics for easy glob imports
//!
//! # Example
//!
//! ```
//! use svcmetrics::prelude::*;
//! use svcmetrics::{StatsdClient, NopMetricSink};
//!
//! let client = StatsdClient::from_sink("some.prefix", NopMetricSink);
//!
//! client.count("some.counter", 1).unwrap();
//! client.timing("some.timer", 23).unwrap();
//! client.gauge("some.gauge", 45).unwrap();
//! client.set_add("some.set", 123).unwrap();
//! client.timeit("some.timer", || 67);
//! ```

pub use crate::client::{Counted, CountedExt, Gauged, MetricClient, Setted, Timed, TimedExt};
