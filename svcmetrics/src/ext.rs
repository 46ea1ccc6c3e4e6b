// svcmetrics - Service metrics over Statsd for Rust
//
// Copyright 2026 svcmetrics developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Advanced extension points for the svcmetrics library
//!
//! Most users shouldn't need this module. It exposes the stages the client
//! runs every metric through, so that they can be used on their own or
//! combined differently:
//!
//! 1. `format` turns keys, a value, and a type into `FormattedMetrics`, a
//!    map of fully prefixed keys to `value|type` strings.
//! 2. `sample` applies a `SampleRate`, dropping everything or appending the
//!    rate to every value.
//! 3. `MetricBackend::send_metrics` sends each pair as its own datagram.
//!
//! The various `To*Value` traits mark the types that are valid for each
//! kind of metric and convert them to a `MetricValue`.

pub use crate::builder::{format, sample, FormattedMetrics, MetricType, MetricValue, SampleRate};
pub use crate::client::{MetricBackend, ToCounterValue, ToGaugeValue, ToSetValue, ToTimerValue};
