use super::sample_rate::SampleRate;
use super::FormattedMetrics;
use rand::{Rng, RngCore};
use std::fmt;
use std::sync::Mutex;

/// Source of uniformly distributed random values in `[0, 1)` used to decide
/// whether a sampled metric call is sent.
///
/// The client uses `ThreadRandom` unless told otherwise. Tests (or callers
/// that need reproducible sampling) can supply a `SeededRandom` or any
/// `Fn() -> f64` closure.
pub trait RandomSource {
    fn next_unit(&self) -> f64;
}

/// `RandomSource` backed by the thread-local generator from `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// `RandomSource` backed by a caller supplied generator, typically a seeded
/// one so that sampling decisions are reproducible.
pub struct SeededRandom<R> {
    rng: Mutex<R>,
}

impl<R> SeededRandom<R>
where
    R: RngCore,
{
    pub fn new(rng: R) -> Self {
        SeededRandom { rng: Mutex::new(rng) }
    }
}

impl<R> RandomSource for SeededRandom<R>
where
    R: RngCore,
{
    fn next_unit(&self) -> f64 {
        // A poisoned lock only means another draw panicked, the generator is fine
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen::<f64>()
    }
}

impl<R> fmt::Debug for SeededRandom<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SeededRandom { .. }")
    }
}

impl<F> RandomSource for F
where
    F: Fn() -> f64,
{
    fn next_unit(&self) -> f64 {
        (self)()
    }
}

/// Apply a sample rate to formatted metrics.
///
/// A single draw decides the fate of every pair so that all keys of one
/// metric call are sampled consistently. Pairs that are kept get the rate
/// appended to their value (`|@0.1`) unless the rate is 1.0 or more, in
/// which case the metrics are returned untouched.
///
/// # Example
///
/// ```
/// use svcmetrics::ext::{format, sample, MetricType, MetricValue, SampleRate};
///
/// let metrics = format("hits", MetricValue::Signed(1), MetricType::Count, "").unwrap();
/// let rate = SampleRate::try_from(0.25).unwrap();
///
/// let kept = sample(metrics.clone(), rate, &|| 0.1);
/// assert_eq!(Some("1|c|@0.25"), kept.get("hits"));
///
/// let dropped = sample(metrics, rate, &|| 0.9);
/// assert!(dropped.is_empty());
/// ```
pub fn sample<S>(metrics: FormattedMetrics, rate: SampleRate, source: &S) -> FormattedMetrics
where
    S: RandomSource + ?Sized,
{
    if rate.is_always() {
        return metrics;
    }

    if rate.is_never() || metrics.is_empty() {
        return FormattedMetrics::new();
    }

    if source.next_unit() <= rate.value() {
        let suffix = rate.suffix();
        metrics.map_values(|mut v| {
            v.push_str(&suffix);
            v
        })
    } else {
        FormattedMetrics::new()
    }
}
