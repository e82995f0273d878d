//! Logarithmic histogram with a fixed boundary table.
//!
//! The boundary table starts at 1 and grows by roughly 1.5x per bucket until it covers
//! [`MAX_TRACKED_VALUE`], followed by a [`SENTINEL_BOUNDARY`] which catches everything
//! larger. The table is computed once and shared by every histogram, so a histogram
//! is just one counter per bucket regardless of how many values it has seen.

use once_cell::sync::Lazy;

/// Largest value that still receives its own geometric boundary (~100MB per line).
pub const MAX_TRACKED_VALUE: u64 = 100_000_000;

/// Upper boundary of the final bucket.
pub const SENTINEL_BOUNDARY: u64 = 1_000_000_000_000_000_000;

static BOUNDARIES: Lazy<Box<[u64]>> = Lazy::new(build_boundaries);

fn build_boundaries() -> Box<[u64]> {
    let mut boundaries = Vec::new();
    let mut value = 1u64;
    while value <= MAX_TRACKED_VALUE {
        boundaries.push(value);
        value = (value + 1).max(value * 3 / 2);
    }

    boundaries.push(SENTINEL_BOUNDARY);
    boundaries.into_boxed_slice()
}

/// Returns the shared, strictly increasing bucket boundary table.
///
/// Bucket `i` holds values `v` with `boundaries[i - 1] <= v < boundaries[i]`.
/// Bucket 0 holds everything below `boundaries[0]`, i.e. zero.
pub fn boundaries() -> &'static [u64] {
    &BOUNDARIES
}

/// Returns the index of the bucket a value falls into.
///
/// # Remarks
/// Values at or above [`SENTINEL_BOUNDARY`] are placed in the last bucket.
#[inline]
pub fn bucket_index(value: u64) -> usize {
    let boundaries = boundaries();
    boundaries
        .partition_point(|&boundary| boundary <= value)
        .min(boundaries.len() - 1)
}

/// Per-bucket counters over the shared boundary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogHistogram {
    counts: Box<[u64]>,
}

impl Default for LogHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl LogHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: vec![0; boundaries().len()].into_boxed_slice(),
        }
    }

    /// Counts a value, returning the index of the bucket it landed in.
    #[inline]
    pub fn record(&mut self, value: u64) -> usize {
        let index = bucket_index(value);
        self.counts[index] += 1;
        index
    }

    /// Counters, parallel to [`boundaries`].
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of recorded values.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Upper boundary of the first bucket whose cumulative count reaches `target`.
    ///
    /// Returns [`None`] if the histogram holds fewer than `target` values.
    pub fn upper_bound_for_rank(&self, target: u64) -> Option<u64> {
        let mut cumulative = 0u64;
        for (count, boundary) in self.counts.iter().zip(boundaries()) {
            cumulative += count;
            if cumulative >= target {
                return Some(*boundary);
            }
        }

        None
    }
}
