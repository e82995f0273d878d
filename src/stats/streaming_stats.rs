use super::histogram::{boundaries, LogHistogram};
use serde::Serialize;

/// Streaming summary of non-negative integer observations (byte lengths).
///
/// Keeps exact count/sum/min/max plus a [`LogHistogram`] for approximate percentiles,
/// so memory usage does not depend on the number of observations.
///
/// # Remarks
///
/// Percentiles are reported as the upper boundary of the bucket the rank falls in,
/// so they overestimate by at most one bucket width (roughly 1.5x).
#[derive(Debug, Clone, Default)]
pub struct StreamingStats {
    count: u64,
    sum: u128,
    min: Option<u64>,
    max: u64,
    histogram: LogHistogram,
}

impl StreamingStats {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes one value.
    #[inline]
    pub fn add(&mut self, value: u64) {
        self.count += 1;
        self.sum += value as u128;
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
        self.max = self.max.max(value);
        self.histogram.record(value);
    }

    /// Number of observed values.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of all observed values.
    pub fn sum(&self) -> u128 {
        self.sum
    }

    /// Smallest observed value, 0 if nothing was observed.
    pub fn min(&self) -> u64 {
        self.min.unwrap_or(0)
    }

    /// Largest observed value, 0 if nothing was observed.
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Mean of all observed values, 0 if nothing was observed.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    /// Approximate `p`-th percentile, `p` in `0.0..=100.0`.
    ///
    /// Returns the upper boundary of the first bucket whose cumulative count reaches
    /// `ceil(count * p / 100)`, or 0.0 if nothing was observed.
    pub fn percentile(&self, p: f64) -> f64 {
        if self.count == 0 {
            return 0.0;
        }

        let target = (self.count as f64 * p.clamp(0.0, 100.0) / 100.0).ceil() as u64;
        match self.histogram.upper_bound_for_rank(target) {
            Some(boundary) => boundary as f64,
            None => self.max as f64,
        }
    }

    /// The underlying histogram.
    pub fn histogram(&self) -> &LogHistogram {
        &self.histogram
    }

    /// Per-bucket counts, parallel to [`Self::boundaries`].
    pub fn bucket_counts(&self) -> &[u64] {
        self.histogram.counts()
    }

    /// Upper boundaries of the histogram buckets.
    pub fn boundaries(&self) -> &'static [u64] {
        boundaries()
    }

    /// Snapshot of the values shown in reports.
    pub fn summary(&self) -> LengthSummary {
        LengthSummary {
            count: self.count,
            min: self.min(),
            max: self.max(),
            avg: self.average(),
            p50: self.percentile(50.0),
            p90: self.percentile(90.0),
            p99: self.percentile(99.0),
        }
    }
}

/// Report-time snapshot of a [`StreamingStats`], in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LengthSummary {
    pub count: u64,
    pub min: u64,
    pub max: u64,
    pub avg: f64,
    pub p50: f64,
    pub p90: f64,
    pub p99: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::histogram::bucket_index;
    use rstest::rstest;

    #[test]
    fn empty_stats_do_not_divide_by_zero() {
        let stats = StreamingStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.average(), 0.0);
        assert_eq!(stats.percentile(50.0), 0.0);
        assert_eq!(stats.min(), 0);
        assert_eq!(stats.max(), 0);
    }

    #[test]
    fn aggregates_are_exact() {
        let mut stats = StreamingStats::new();
        for value in [10, 3, 250, 0, 7] {
            stats.add(value);
        }

        assert_eq!(stats.count(), 5);
        assert_eq!(stats.sum(), 270);
        assert_eq!(stats.min(), 0);
        assert_eq!(stats.max(), 250);
        assert_eq!(stats.average(), 54.0);
        assert_eq!(stats.histogram().total(), stats.count());
        assert_eq!(stats.bucket_counts().len(), stats.boundaries().len());
        assert_eq!(stats.bucket_counts().iter().sum::<u64>(), 5);
    }

    #[rstest(p, expected,
        case(0.0, 1.0),    // Rank 0 is met by the first (empty) bucket
        case(50.0, 63.0),
        case(90.0, 94.0),
        case(99.0, 141.0),
        case(100.0, 141.0)
    )]
    fn percentiles_of_one_to_hundred(p: f64, expected: f64) {
        let mut stats = StreamingStats::new();
        (1..=100).for_each(|value| stats.add(value));
        assert_eq!(stats.percentile(p), expected);
    }

    #[rstest(values, p, expected,
        case(vec![0, 0, 0], 50.0, 1.0),
        case(vec![5], 50.0, 6.0),
        case(vec![1000], 99.0, 1066.0)
    )]
    fn percentiles_of_small_inputs(values: Vec<u64>, p: f64, expected: f64) {
        let mut stats = StreamingStats::new();
        values.into_iter().for_each(|value| stats.add(value));
        assert_eq!(stats.percentile(p), expected);
    }

    #[test]
    fn extreme_percentiles_bracket_observed_range() {
        let inputs: [&[u64]; 4] = [
            &[0],
            &[1, 2, 3],
            &[17, 4_000, 90_000, 12],
            &[5_000_000, 5_000_001, 600],
        ];

        for values in inputs {
            let mut stats = StreamingStats::new();
            values.iter().for_each(|&value| stats.add(value));

            let max_bucket = bucket_index(stats.max());
            let max_lower = if max_bucket == 0 {
                0
            } else {
                boundaries()[max_bucket - 1]
            };
            assert!(stats.percentile(100.0) >= max_lower as f64);

            let min_upper = boundaries()[bucket_index(stats.min())];
            assert!(stats.percentile(0.0) <= min_upper as f64);
        }
    }

    #[test]
    fn summary_matches_accessors() {
        let mut stats = StreamingStats::new();
        (1..=100).for_each(|value| stats.add(value));

        let summary = stats.summary();
        assert_eq!(summary.count, 100);
        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 100);
        assert_eq!(summary.avg, 50.5);
        assert_eq!(summary.p50, 63.0);
        assert_eq!(summary.p90, 94.0);
        assert_eq!(summary.p99, 141.0);
    }
}
