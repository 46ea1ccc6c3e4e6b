use crate::types::{ErrorKind, MetricError};
use std::fmt;

/// Represents the sample rate of a metric. This is the probability that a
/// single metric call is actually sent to the Statsd server, which uses the
/// `|@rate` suffix to scale what it receives back up to a true count.
///
/// Rates of 1.0 or more are always sent and rates of 0.0 or less are never
/// sent. Only rates strictly between the two involve a random draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRate {
    value: f64,
}

impl SampleRate {
    /// A rate that sends every metric
    pub const ALWAYS: SampleRate = SampleRate { value: 1.0 };

    pub fn value(&self) -> f64 {
        self.value
    }

    /// True if the rate means every metric is sent
    pub fn is_always(&self) -> bool {
        self.value >= 1.0
    }

    /// True if the rate means no metric is ever sent
    pub fn is_never(&self) -> bool {
        self.value <= 0.0
    }

    /// Wire suffix appended to sampled values, e.g. `|@0.1`
    pub(crate) fn suffix(&self) -> String {
        format!("|@{}", self)
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::ALWAYS
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl TryFrom<f64> for SampleRate {
    type Error = MetricError;

    fn try_from(rate: f64) -> Result<Self, Self::Error> {
        if rate.is_nan() {
            Err(MetricError::from((ErrorKind::InvalidInput, "Sample rate must be a number")))
        } else {
            Ok(SampleRate { value: rate })
        }
    }
}
