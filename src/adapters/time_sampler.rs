use crate::adapters::random_source::RandomSource;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;
use std::sync::Arc;

/// 1800-01-01T01:01:01Z as Unix seconds, inclusive
pub const RANGE_START_SECS: i64 = -5_364_658_739;

/// 2100-01-01T01:01:01Z as Unix seconds, exclusive
pub const RANGE_END_SECS: i64 = 4_102_448_461;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// How a sampled instant is serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeLayout {
    /// `YYYY-MM-DD`
    Date,
    /// RFC 3339 with second precision
    DateTime,
    /// RFC 3339 with millisecond precision
    Time,
}

/// Uniform instants over `[1800-01-01T01:01:01Z, 2100-01-01T01:01:01Z)`.
///
/// Calendar arithmetic (leap years, month lengths) is left to `chrono`.
#[derive(Debug, Clone)]
pub struct TimeSampler {
    random: Arc<RandomSource>,
}

impl TimeSampler {
    pub fn new(random: Arc<RandomSource>) -> Self {
        Self { random }
    }

    pub fn sample(&self) -> DateTime<Utc> {
        self.random.with_rng(|rng| Self::sample_with(rng))
    }

    pub fn sample_with<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
        let secs = rng.gen_range(RANGE_START_SECS..RANGE_END_SECS);
        let nanos = rng.gen_range(0..NANOS_PER_SEC);
        DateTime::<Utc>::default() + Duration::seconds(secs) + Duration::nanoseconds(nanos)
    }

    pub fn generate(&self, layout: TimeLayout) -> String {
        Self::format(self.sample(), layout)
    }

    pub fn format(instant: DateTime<Utc>, layout: TimeLayout) -> String {
        match layout {
            TimeLayout::Date => instant.format("%Y-%m-%d").to_string(),
            TimeLayout::DateTime => instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimeLayout::Time => instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
