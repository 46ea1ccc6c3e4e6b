// svcmetrics - Service metrics over Statsd for Rust
//
// Copyright 2026 svcmetrics developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::builder::{
    self, FormattedMetrics, MetricKeys, MetricType, MetricValue, RandomSource, SampleRate, ThreadRandom,
};
use crate::sealed::Sealed;
use crate::sinks::{MetricSink, UdpMetricSink};
use crate::types::{Emitted, ErrorKind, MetricError, MetricResult};
use crate::{DEFAULT_HOST, DEFAULT_PORT};
use std::fmt;
use std::panic::RefUnwindSafe;
use std::time::{Duration, Instant};
use tracing::debug;

/// Conversion trait for valid values for counters
///
/// This trait must be implemented for any types that are used as counter
/// values (currently only `i64`). This trait is internal to how values are
/// formatted as part of metrics but is exposed publicly for documentation
/// purposes.
///
/// Typical use of the client shouldn't require interacting with this trait.
pub trait ToCounterValue {
    fn try_to_value(self) -> MetricResult<MetricValue>;
}

impl ToCounterValue for i64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(self))
    }
}

/// Conversion trait for valid values for timers
///
/// This trait must be implemented for any types that are used as timer
/// values (currently `u64`, `f64`, and `Duration`). Durations are recorded
/// as a whole number of milliseconds. This trait is internal to how values
/// are formatted as part of metrics but is exposed publicly for documentation
/// purposes.
///
/// Typical use of the client shouldn't require interacting with this trait.
pub trait ToTimerValue {
    fn try_to_value(self) -> MetricResult<MetricValue>;
}

impl ToTimerValue for u64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(self))
    }
}

impl ToTimerValue for f64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Float(self))
    }
}

impl ToTimerValue for Duration {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        let as_millis = self.as_millis();
        if as_millis > u64::MAX as u128 {
            Err(MetricError::from((ErrorKind::InvalidInput, "u64 overflow")))
        } else {
            Ok(MetricValue::Unsigned(as_millis as u64))
        }
    }
}

/// Conversion trait for valid values for gauges
///
/// This trait must be implemented for any types that are used as gauge
/// values (currently `u64` and `f64`). This trait is internal to how values
/// are formatted as part of metrics but is exposed publicly for documentation
/// purposes.
///
/// Typical use of the client shouldn't require interacting with this trait.
pub trait ToGaugeValue {
    fn try_to_value(self) -> MetricResult<MetricValue>;
}

impl ToGaugeValue for u64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(self))
    }
}

impl ToGaugeValue for f64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Float(self))
    }
}

/// Conversion trait for valid values for sets
///
/// This trait must be implemented for any types that are used as set
/// values (currently `i64`, `&str`, and `String`). This trait is internal
/// to how values are formatted as part of metrics but is exposed publicly
/// for documentation purposes.
///
/// Typical use of the client shouldn't require interacting with this trait.
pub trait ToSetValue {
    fn try_to_value(self) -> MetricResult<MetricValue>;
}

impl ToSetValue for i64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(self))
    }
}

impl ToSetValue for &str {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Text(self.to_owned()))
    }
}

impl ToSetValue for String {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Text(self))
    }
}

/// Trait for incrementing and decrementing counters.
///
/// Counters are simple values incremented or decremented by a client. The
/// rates at which these events occur or average values will be determined
/// by the server receiving them. Examples of counter uses include number
/// of logins to a system or requests received.
///
/// Counters are the only type of metric that may be sampled. A sampled
/// counter is only sent with the given probability and carries the rate
/// (`|@0.1`) so the server can scale it back up.
///
/// The following types are valid for counters:
/// * `i64`
///
/// See the [Statsd spec](https://github.com/b/statsd_spec) for more
/// information.
pub trait Counted<T>
where
    T: ToCounterValue,
{
    /// Increment or decrement the counter by the given amount
    fn count<K>(&self, keys: K, count: T) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>,
    {
        self.count_sampled(keys, count, 1.0)
    }

    /// Increment or decrement the counter by the given amount, sending it
    /// with probability `sample_rate`
    fn count_sampled<K>(&self, keys: K, count: T, sample_rate: f64) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>;
}

/// Trait for convenience methods for counters
///
/// This trait specifically implements increment and decrement convenience
/// methods for counters with `i64` types.
pub trait CountedExt: Counted<i64> {
    /// Increment the counter by 1
    fn increment<K>(&self, keys: K) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>,
    {
        self.count(keys, 1)
    }

    /// Increment the counter by 1, sending it with probability `sample_rate`
    fn increment_sampled<K>(&self, keys: K, sample_rate: f64) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>,
    {
        self.count_sampled(keys, 1, sample_rate)
    }

    /// Decrement the counter by 1
    fn decrement<K>(&self, keys: K) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>,
    {
        self.count(keys, -1)
    }

    /// Decrement the counter by 1, sending it with probability `sample_rate`
    fn decrement_sampled<K>(&self, keys: K, sample_rate: f64) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>,
    {
        self.count_sampled(keys, -1, sample_rate)
    }
}

/// Trait for recording timings in milliseconds.
///
/// Timings are a positive number of milliseconds between a start and end
/// time. Examples include time taken to render a web page or time taken
/// for a database call to return. `Duration` values are converted to
/// milliseconds before being recorded.
///
/// The following types are valid for timers:
/// * `u64`
/// * `f64`
/// * `Duration`
///
/// See the [Statsd spec](https://github.com/b/statsd_spec) for more
/// information.
pub trait Timed<T>
where
    T: ToTimerValue,
{
    /// Record a timing in milliseconds with the given key(s)
    fn timing<K>(&self, keys: K, time: T) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>;
}

/// Trait for timing a closure and recording how long it took.
///
/// Any error recording the timing is passed to the error handler of the
/// client, which is why this trait requires `MetricBackend`.
pub trait TimedExt: Timed<f64> + MetricBackend {
    /// Start timing, recording the elapsed wall-clock time in milliseconds
    /// under `key` when the returned guard is dropped.
    fn start_timer<K>(&self, key: K) -> TimingGuard<'_, Self>
    where
        K: Into<MetricKeys>,
        Self: Sized,
    {
        TimingGuard::new(self, key.into())
    }

    /// Call `f`, record how long it took in milliseconds under `key`, and
    /// return whatever `f` returned.
    ///
    /// The timing is recorded even if `f` panics, after which the panic
    /// continues to unwind. Errors sending the timing are passed to the error
    /// handler of the client rather than returned, so `f`'s result always
    /// reaches the caller unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use svcmetrics::prelude::*;
    /// use svcmetrics::{StatsdClient, NopMetricSink};
    ///
    /// let client = StatsdClient::from_sink("my.prefix", NopMetricSink);
    /// let rows = client.timeit("db.query", || vec![1, 2, 3]);
    ///
    /// assert_eq!(3, rows.len());
    /// ```
    fn timeit<K, F, R>(&self, key: K, f: F) -> R
    where
        K: Into<MetricKeys>,
        F: FnOnce() -> R,
        Self: Sized,
    {
        let _guard = self.start_timer(key);
        f()
    }
}

/// Trait for recording gauge values.
///
/// Gauge values are an instantaneous measurement of a value determined
/// by the client. They do not change unless changed by the client. Examples
/// include things like load average or how many connections are active.
///
/// The following types are valid for gauges:
/// * `u64`
/// * `f64`
///
/// See the [Statsd spec](https://github.com/b/statsd_spec) for more
/// information.
pub trait Gauged<T>
where
    T: ToGaugeValue,
{
    /// Record a gauge value with the given key(s)
    fn gauge<K>(&self, keys: K, value: T) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>;
}

/// Trait for recording set values.
///
/// Sets count the number of unique elements in a group. You can use them to,
/// for example, count the unique visitors to your site.
///
/// The following types are valid for sets:
/// * `i64`
/// * `&str`
/// * `String`
///
/// See the [Statsd spec](https://github.com/b/statsd_spec) for more
/// information.
pub trait Setted<T>
where
    T: ToSetValue,
{
    /// Add a value to the set with the given key(s)
    fn set_add<K>(&self, keys: K, value: T) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>;
}

/// Trait that encompasses all other traits for sending metrics.
///
/// If you wish to accept any client generically, this allows you to refer to
/// all the implemented methods for recording metrics using a single bound.
///
/// Every method accepts any key type that converts into `MetricKeys`, which
/// makes the methods generic. As a result these traits can't be used as trait
/// objects: write `C: MetricClient` rather than `Box<dyn MetricClient>`. A
/// client shared between threads through an `Arc` is passed on as `&*arc`.
///
/// ```
/// use std::time::Duration;
/// use svcmetrics::prelude::*;
/// use svcmetrics::{StatsdClient, NopMetricSink};
///
/// fn handle_request<C: MetricClient>(metrics: &C) {
///     metrics.increment("requests").unwrap();
///     metrics.count("bytes.in", 512).unwrap();
///     metrics.timing("request.time", 42).unwrap();
///     metrics.timing("request.time", 42.5).unwrap();
///     metrics.timing("request.time", Duration::from_millis(42)).unwrap();
///     metrics.gauge("connections", 8).unwrap();
///     metrics.gauge("load", 0.7).unwrap();
///     metrics.set_add("users", 12).unwrap();
///     metrics.set_add("users", "someone@example.com").unwrap();
/// }
///
/// handle_request(&StatsdClient::from_sink("prefix", NopMetricSink));
/// ```
pub trait MetricClient:
    Counted<i64>
    + CountedExt
    + Timed<u64>
    + Timed<f64>
    + Timed<Duration>
    + TimedExt
    + Gauged<u64>
    + Gauged<f64>
    + Setted<i64>
    + for<'a> Setted<&'a str>
    + Setted<String>
{
}

/// Typically internal client methods for sending metrics and handling errors.
///
/// This trait exposes methods of the client that would normally be internal
/// but may be useful for consumers of the library to extend it in unforeseen
/// ways. Most consumers of the library shouldn't need to make use of this
/// extension point.
///
/// This trait is not exposed in the `prelude` module since it isn't required
/// to use the client for sending metrics. It is only exposed in the `ext`
/// module which is used to encompass advanced extension points for the library.
///
/// NOTE: This is a sealed trait and so it cannot be implemented outside of the
/// library.
///
/// # Example
///
/// ```
/// use svcmetrics::{StatsdClient, NopMetricSink};
/// use svcmetrics::ext::{format, MetricBackend, MetricType, MetricValue};
///
/// let client = StatsdClient::from_sink("", NopMetricSink);
/// let metrics = format("some.event", MetricValue::Signed(1), MetricType::Count, "custom.").unwrap();
/// let emitted = client.send_metrics(metrics);
///
/// assert_eq!(vec!["custom.some.event:1|c"], emitted.payloads());
/// ```
pub trait MetricBackend: Sealed {
    /// Send each fully formed key and value as its own datagram via the
    /// underlying `MetricSink`.
    ///
    /// Keys are expected to be complete already, including any prefix. Errors
    /// from the sink are passed to `consume_error` and sending continues with
    /// the remaining pairs.
    fn send_metrics(&self, metrics: FormattedMetrics) -> Emitted;

    /// Consume a possible error from attempting to send a metric.
    ///
    /// By default the handler logs the error at `debug` level, meaning that
    /// errors are otherwise discarded.
    fn consume_error(&self, err: MetricError);
}

/// Guard that records the time elapsed since it was created as a timing
/// metric when it is dropped.
///
/// Created by `TimedExt::start_timer`. Since the timing is recorded in the
/// destructor it is also recorded while unwinding from a panic.
#[must_use = "The timing is recorded when the guard is dropped"]
pub struct TimingGuard<'c, C>
where
    C: Timed<f64> + MetricBackend,
{
    client: &'c C,
    keys: Option<MetricKeys>,
    start: Instant,
}

impl<'c, C> TimingGuard<'c, C>
where
    C: Timed<f64> + MetricBackend,
{
    fn new(client: &'c C, keys: MetricKeys) -> Self {
        TimingGuard {
            client,
            keys: Some(keys),
            start: Instant::now(),
        }
    }

    /// Time elapsed since the guard was created
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop timing and record the metric now instead of at the end of scope.
    pub fn finish(mut self) -> MetricResult<Emitted> {
        self.record()
    }

    fn record(&mut self) -> MetricResult<Emitted> {
        match self.keys.take() {
            Some(keys) => {
                let millis = self.start.elapsed().as_secs_f64() * 1000.0;
                self.client.timing(keys, millis)
            }
            None => Ok(Emitted::default()),
        }
    }
}

impl<'c, C> Drop for TimingGuard<'c, C>
where
    C: Timed<f64> + MetricBackend,
{
    fn drop(&mut self) {
        if let Err(e) = self.record() {
            self.client.consume_error(e);
        }
    }
}

impl<'c, C> fmt::Debug for TimingGuard<'c, C>
where
    C: Timed<f64> + MetricBackend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimingGuard")
            .field("keys", &self.keys)
            .field("start", &self.start)
            .finish()
    }
}

/// Destination and prefix for a UDP backed client.
///
/// The defaults point at a Statsd server on `localhost:8125` with no prefix.
///
/// # Example
///
/// ```
/// use svcmetrics::{ClientConfig, StatsdClient};
///
/// let config = ClientConfig {
///     host: "127.0.0.1".to_owned(),
///     prefix: "myapp".to_owned(),
///     ..ClientConfig::default()
/// };
///
/// let client = StatsdClient::from_config(&config).unwrap();
/// assert_eq!("myapp.", client.prefix());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            prefix: String::new(),
        }
    }
}

/// Builder for creating and customizing `StatsdClient` instances.
///
/// Instances of the builder should be created by calling the `::builder()`
/// method on the `StatsdClient` struct.
///
/// # Example
///
/// ```
/// use svcmetrics::prelude::*;
/// use svcmetrics::{MetricError, StatsdClient, NopMetricSink};
///
/// fn my_error_handler(err: MetricError) {
///     println!("Metric error! {}", err);
/// }
///
/// let client = StatsdClient::builder("prefix", NopMetricSink)
///     .with_error_handler(my_error_handler)
///     .build()
///     .unwrap();
///
/// client.count("something", 123).unwrap();
/// ```
pub struct StatsdClientBuilder {
    prefix: String,
    sink: Box<dyn MetricSink + Sync + Send + RefUnwindSafe>,
    errors: Box<dyn Fn(MetricError) + Sync + Send + RefUnwindSafe>,
    random: Box<dyn RandomSource + Sync + Send + RefUnwindSafe>,
}

impl StatsdClientBuilder {
    // Set the required fields and defaults for optional fields
    fn new<T>(prefix: &str, sink: T) -> Self
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        StatsdClientBuilder {
            // required
            prefix: Self::formatted_prefix(prefix),
            sink: Box::new(sink),

            // optional with defaults
            errors: Box::new(log_error_handler),
            random: Box::new(ThreadRandom),
        }
    }

    /// Set an error handler to use for errors encountered sending metrics.
    ///
    /// The error handler is invoked when a `MetricSink` fails to send a
    /// datagram, and for any error while recording a timing via `timeit` or
    /// a `TimingGuard`. These errors are never returned to the caller.
    ///
    /// The error handler should consume the error without panicking. The error
    /// may be logged, printed to stderr, discarded, etc. - this is up to the
    /// implementation.
    pub fn with_error_handler<F>(mut self, errors: F) -> Self
    where
        F: Fn(MetricError) + Sync + Send + RefUnwindSafe + 'static,
    {
        self.errors = Box::new(errors);
        self
    }

    /// Set the source of randomness used to decide whether sampled metrics
    /// are sent.
    ///
    /// The thread-local generator from `rand` is used by default. Supplying a
    /// `SeededRandom` makes sampling decisions reproducible.
    pub fn with_random_source<R>(mut self, random: R) -> Self
    where
        R: RandomSource + Sync + Send + RefUnwindSafe + 'static,
    {
        self.random = Box::new(random);
        self
    }

    /// Construct a new `StatsdClient` instance based on current settings.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if the prefix contains a character
    /// reserved by the Statsd wire format.
    pub fn build(self) -> MetricResult<StatsdClient> {
        builder::validate_key(&self.prefix)?;
        Ok(StatsdClient::from_builder(self))
    }

    fn formatted_prefix(prefix: &str) -> String {
        let trimmed = prefix.trim_end_matches('.');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}.", trimmed)
        }
    }
}

/// Client for Statsd that implements various traits to record metrics.
///
/// # Traits
///
/// The client is the main entry point for users of this library. It supports
/// several traits for recording metrics of different types.
///
/// * `Counted` and `CountedExt` for emitting counters.
/// * `Timed` and `TimedExt` for emitting timings.
/// * `Gauged` for emitting gauge values.
/// * `Setted` for emitting set values.
/// * `MetricClient` for a combination of all of the above.
///
/// Every method accepts either a single key or several keys. When several
/// keys are given the same value is recorded under each of them, as separate
/// datagrams.
///
/// # Errors
///
/// Methods for recording metrics only return errors for invalid input: empty
/// keys, keys containing reserved characters, non-finite values, and so on.
/// Failures sending datagrams are passed to the error handler configured via
/// `StatsdClientBuilder::with_error_handler` and never returned, since metrics
/// are best-effort and shouldn't break the application emitting them.
///
/// # Threading
///
/// The `StatsdClient` is `Send` and `Sync` and can be shared between threads
/// by wrapping it in an `Arc`.
pub struct StatsdClient {
    prefix: String,
    sink: Box<dyn MetricSink + Sync + Send + RefUnwindSafe>,
    errors: Box<dyn Fn(MetricError) + Sync + Send + RefUnwindSafe>,
    random: Box<dyn RandomSource + Sync + Send + RefUnwindSafe>,
}

impl StatsdClient {
    /// Create a new client that sends metrics over UDP to the given host and
    /// port, prefixing every key with `prefix` (a trailing `.` is added to
    /// non-empty prefixes).
    ///
    /// # Example
    ///
    /// ```
    /// use svcmetrics::prelude::*;
    /// use svcmetrics::{StatsdClient, DEFAULT_PORT};
    ///
    /// let client = StatsdClient::new("127.0.0.1", DEFAULT_PORT, "my.stats").unwrap();
    /// client.gauge("some.thing", 7).unwrap();
    /// ```
    ///
    /// # Failures
    ///
    /// This method may fail if:
    ///
    /// * The host can't be resolved to an IPv4 address.
    /// * A local UDP socket can't be bound.
    /// * The prefix contains a character reserved by the Statsd wire format.
    pub fn new(host: &str, port: u16, prefix: &str) -> MetricResult<Self> {
        let sink = UdpMetricSink::connect(host, port)?;
        Self::builder(prefix, sink).build()
    }

    /// Create a new UDP client from a `ClientConfig`
    pub fn from_config(config: &ClientConfig) -> MetricResult<Self> {
        Self::new(&config.host, config.port, &config.prefix)
    }

    /// Create a new client instance that will use the given prefix for
    /// all metrics emitted to the given `MetricSink` implementation.
    ///
    /// This method never fails. A prefix containing a character reserved by
    /// the Statsd wire format is not rejected here, instead every call made
    /// with the client returns an `InvalidInput` error. Use
    /// `StatsdClient::builder` to catch an invalid prefix up front.
    ///
    /// # No-op Example
    ///
    /// ```
    /// use svcmetrics::{StatsdClient, NopMetricSink};
    ///
    /// let prefix = "my.stats";
    /// let client = StatsdClient::from_sink(prefix, NopMetricSink);
    /// ```
    pub fn from_sink<T>(prefix: &str, sink: T) -> Self
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        Self::from_builder(Self::builder(prefix, sink))
    }

    /// Create a new builder with the provided prefix and metric sink.
    ///
    /// A prefix and a metric sink are required to create a new client
    /// instance. All other optional customizations can be set by calling
    /// methods on the returned builder. Any customizations that aren't
    /// set by the caller will use defaults.
    ///
    /// Note, though a metric prefix is required, you may pass an empty
    /// string as a prefix. In this case, the metrics emitted will use only
    /// the bare keys supplied when you call the various methods to emit
    /// metrics.
    ///
    /// General defaults:
    ///
    /// * Errors sending metrics are logged at `debug` level and discarded.
    /// * Sampling decisions use the thread-local generator from `rand`.
    pub fn builder<T>(prefix: &str, sink: T) -> StatsdClientBuilder
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        StatsdClientBuilder::new(prefix, sink)
    }

    /// Prefix prepended to every key, including the trailing `.` if non-empty
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Format, sample, and send a single metric request.
    fn emit<K>(&self, keys: K, value: MetricValue, type_: MetricType, sample_rate: f64) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>,
    {
        let rate = SampleRate::try_from(sample_rate)?;
        let formatted = builder::format(keys, value, type_, &self.prefix)?;
        let sampled = builder::sample(formatted, rate, self.random.as_ref());
        Ok(self.send_metrics(sampled))
    }

    // Create a new StatsdClient by consuming the builder
    fn from_builder(builder: StatsdClientBuilder) -> Self {
        StatsdClient {
            prefix: builder.prefix,
            sink: builder.sink,
            errors: builder.errors,
            random: builder.random,
        }
    }
}

impl Sealed for StatsdClient {}

impl MetricBackend for StatsdClient {
    fn send_metrics(&self, metrics: FormattedMetrics) -> Emitted {
        let payloads = metrics.into_payloads();
        for payload in &payloads {
            if let Err(e) = self.sink.emit(payload) {
                self.consume_error(MetricError::from(e));
            }
        }

        Emitted::new(payloads)
    }

    fn consume_error(&self, err: MetricError) {
        (self.errors)(err);
    }
}

impl fmt::Debug for StatsdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StatsdClient {{ prefix: {:?}, sink: ..., errors: ..., random: ... }}",
            self.prefix,
        )
    }
}

impl<T> Counted<T> for StatsdClient
where
    T: ToCounterValue,
{
    fn count_sampled<K>(&self, keys: K, count: T, sample_rate: f64) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>,
    {
        self.emit(keys, count.try_to_value()?, MetricType::Count, sample_rate)
    }
}

impl CountedExt for StatsdClient {}

impl<T> Timed<T> for StatsdClient
where
    T: ToTimerValue,
{
    fn timing<K>(&self, keys: K, time: T) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>,
    {
        self.emit(keys, time.try_to_value()?, MetricType::Timing, 1.0)
    }
}

impl TimedExt for StatsdClient {}

impl<T> Gauged<T> for StatsdClient
where
    T: ToGaugeValue,
{
    fn gauge<K>(&self, keys: K, value: T) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>,
    {
        self.emit(keys, value.try_to_value()?, MetricType::Gauge, 1.0)
    }
}

impl<T> Setted<T> for StatsdClient
where
    T: ToSetValue,
{
    fn set_add<K>(&self, keys: K, value: T) -> MetricResult<Emitted>
    where
        K: Into<MetricKeys>,
    {
        self.emit(keys, value.try_to_value()?, MetricType::Set, 1.0)
    }
}

impl MetricClient for StatsdClient {}

#[allow(clippy::needless_pass_by_value)]
fn log_error_handler(err: MetricError) {
    debug!(error = %err, kind = ?err.kind(), "Failed to send metric.");
}
