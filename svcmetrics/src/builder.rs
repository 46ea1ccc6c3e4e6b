// svcmetrics - Service metrics over Statsd for Rust
//
// Copyright 2026 svcmetrics developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turning metric requests into wire-ready key/value pairs.
//!
//! Nothing in here does I/O. A request (one or more keys, a value, a type, and
//! a prefix) is formatted into a `FormattedMetrics` map which is then passed
//! through the sampler before the client hands each pair to a sink.

use crate::types::{ErrorKind, MetricError, MetricResult};
use indexmap::IndexMap;
use std::fmt;

pub(crate) mod sample_rate;
pub(crate) mod sampler;

pub use self::sample_rate::SampleRate;
pub use self::sampler::{sample, RandomSource, SeededRandom, ThreadRandom};

/// Characters with meaning in the Statsd wire format that may not appear
/// in metric keys or text values.
const RESERVED: &[char] = &[':', '|', ',', '\n', '\r'];

/// Type of metric that knows how to display itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    Timing,
    Count,
    Gauge,
    Set,
}

impl MetricType {
    /// Suffix used for this type of metric on the wire
    pub fn suffix(&self) -> &'static str {
        match *self {
            MetricType::Timing => "ms",
            MetricType::Count => "c",
            MetricType::Gauge => "g",
            MetricType::Set => "s",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.suffix().fmt(f)
    }
}

/// Holder for metric values that knows how to display itself
///
/// Integers are written in plain decimal. Floats use the shortest
/// representation that round-trips, so `42.5` is written as `42.5` and
/// `512.0` is written as `512`. Text is only valid for sets.
///
/// Typical use of the client shouldn't require interacting with this type.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl MetricValue {
    fn validate(&self) -> MetricResult<()> {
        match self {
            MetricValue::Float(v) if !v.is_finite() => Err(MetricError::from((
                ErrorKind::InvalidInput,
                "metric value must be a finite number",
            ))),
            MetricValue::Text(s) if s.is_empty() => Err(MetricError::from((
                ErrorKind::InvalidInput,
                "metric value must not be empty",
            ))),
            MetricValue::Text(s) if s.contains(RESERVED) => Err(MetricError::from((
                ErrorKind::InvalidInput,
                format!("metric value {:?} contains a reserved character", s),
            ))),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Signed(v) => v.fmt(f),
            MetricValue::Unsigned(v) => v.fmt(f),
            MetricValue::Float(v) => v.fmt(f),
            MetricValue::Text(v) => v.fmt(f),
        }
    }
}

/// One or more metric keys that a single value will be recorded under.
///
/// Most callers never name this type, they pass a `&str` for a single key or
/// a slice, array, or `Vec` of keys to record the same value under each of
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricKeys {
    Single(String),
    Many(Vec<String>),
}

impl MetricKeys {
    /// Normalize to a sequence of keys
    pub fn into_vec(self) -> Vec<String> {
        match self {
            MetricKeys::Single(k) => vec![k],
            MetricKeys::Many(ks) => ks,
        }
    }
}

impl From<&str> for MetricKeys {
    fn from(key: &str) -> Self {
        MetricKeys::Single(key.to_owned())
    }
}

impl From<String> for MetricKeys {
    fn from(key: String) -> Self {
        MetricKeys::Single(key)
    }
}

impl From<&String> for MetricKeys {
    fn from(key: &String) -> Self {
        MetricKeys::Single(key.clone())
    }
}

impl From<&[&str]> for MetricKeys {
    fn from(keys: &[&str]) -> Self {
        MetricKeys::Many(keys.iter().map(|k| (*k).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for MetricKeys {
    fn from(keys: [&str; N]) -> Self {
        MetricKeys::Many(keys.iter().map(|k| (*k).to_owned()).collect())
    }
}

impl<const N: usize> From<&[&str; N]> for MetricKeys {
    fn from(keys: &[&str; N]) -> Self {
        MetricKeys::from(&keys[..])
    }
}

impl From<Vec<&str>> for MetricKeys {
    fn from(keys: Vec<&str>) -> Self {
        MetricKeys::Many(keys.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<String>> for MetricKeys {
    fn from(keys: Vec<String>) -> Self {
        MetricKeys::Many(keys)
    }
}

/// Fully-qualified metric keys mapped to their wire-encoded values.
///
/// Keys are unique: formatting the same fully-qualified key twice keeps the
/// value written last. Iteration follows the order keys were first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedMetrics {
    entries: IndexMap<String, String>,
}

impl FormattedMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key and wire value, replacing any existing value for the key
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn map_values<F>(self, mut f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        FormattedMetrics {
            entries: self.entries.into_iter().map(|(k, v)| (k, f(v))).collect(),
        }
    }

    /// Encode each pair as a single `key:value` datagram payload
    pub fn into_payloads(self) -> Vec<String> {
        self.entries
            .into_iter()
            .map(|(k, v)| {
                let mut out = String::with_capacity(k.len() + 1 + v.len());
                out.push_str(&k);
                out.push(':');
                out.push_str(&v);
                out
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FormattedMetrics
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = FormattedMetrics::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

/// Format one value of the given type under each of the given keys.
///
/// Every key is joined to `prefix` verbatim (no separator is added here) and
/// mapped to `{value}|{type}`.
///
/// # Errors
///
/// Returns an `InvalidInput` error if no keys are given, any key is empty,
/// any fully-qualified key contains a reserved character (`:`, `|`, `,`, or a
/// line break), or the value is a non-finite float or a malformed text value.
///
/// # Example
///
/// ```
/// use svcmetrics::ext::{format, MetricType, MetricValue};
///
/// let metrics = format(["hits", "misses"], MetricValue::Signed(2), MetricType::Count, "cache.").unwrap();
///
/// assert_eq!(Some("2|c"), metrics.get("cache.hits"));
/// assert_eq!(Some("2|c"), metrics.get("cache.misses"));
/// ```
pub fn format<K>(keys: K, value: MetricValue, type_: MetricType, prefix: &str) -> MetricResult<FormattedMetrics>
where
    K: Into<MetricKeys>,
{
    value.validate()?;
    let keys = keys.into().into_vec();
    if keys.is_empty() {
        return Err(MetricError::from((
            ErrorKind::InvalidInput,
            "at least one metric key is required",
        )));
    }

    let wire_value = format!("{}|{}", value, type_);
    let mut out = FormattedMetrics::new();

    for key in keys {
        if key.is_empty() {
            return Err(MetricError::from((ErrorKind::InvalidInput, "metric key must not be empty")));
        }

        let mut full = String::with_capacity(prefix.len() + key.len());
        full.push_str(prefix);
        full.push_str(&key);
        validate_key(&full)?;
        out.insert(full, wire_value.clone());
    }

    Ok(out)
}

/// Ensure a (possibly partial) key doesn't contain any characters that
/// would corrupt the wire format.
pub(crate) fn validate_key(key: &str) -> MetricResult<()> {
    if key.contains(RESERVED) {
        Err(MetricError::from((
            ErrorKind::InvalidInput,
            format!("metric key {:?} contains a reserved character", key),
        )))
    } else {
        Ok(())
    }
}
