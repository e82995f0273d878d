use crate::api::input_file::InputFile;
use crate::stats::streaming_stats::LengthSummary;
use hashbrown::HashMap;
use serde::Serialize;

/// Fixed line length buckets: exclusive upper bound in bytes, and label.
pub const LENGTH_BUCKETS: [(u64, &str); 5] = [
    (200, "<200B"),
    (500, "200-500B"),
    (1024, "500B-1KB"),
    (5120, "1-5KB"),
    (u64::MAX, ">5KB"),
];

/// Complete output of a profiling run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Data files that were scanned, in scan order.
    pub files: Vec<FileEntry>,

    /// Names of files which could not be opened or read to the end.
    pub skipped_files: Vec<String>,

    /// Sum of the sizes of all data files.
    pub total_file_size: u64,

    /// Number of non-empty lines.
    pub total_lines: u64,

    /// Number of non-empty lines which are not JSON objects.
    pub parse_errors: u64,

    /// Tally of `payload.bodies[0].type`.
    pub body_types: FrequencyTable,

    /// Tally of `content_type`.
    pub content_types: FrequencyTable,

    /// Tally of `chat_type`.
    pub chat_types: FrequencyTable,

    /// Byte lengths of whole (trimmed) lines.
    pub line_lengths: LengthSummary,

    /// Byte lengths of the serialized first body, 0 for records without one.
    pub body_lengths: LengthSummary,

    /// Line counts per entry of [`LENGTH_BUCKETS`].
    pub length_buckets: Vec<FrequencyEntry>,
}

impl AnalysisReport {
    /// Average number of file bytes per valid line, 0 if there are no lines.
    pub fn average_line_size(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            self.total_file_size as f64 / self.total_lines as f64
        }
    }
}

/// Name and size of a scanned data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

impl From<&InputFile> for FileEntry {
    fn from(file: &InputFile) -> Self {
        Self {
            name: file.name.clone(),
            size: file.size,
        }
    }
}

/// A label with its count and share of all lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub label: String,
    pub count: u64,

    /// Share of the total line count, `0.0..=100.0`.
    pub percentage: f64,
}

impl FrequencyEntry {
    pub fn new(label: impl Into<String>, count: u64, total: u64) -> Self {
        Self {
            label: label.into(),
            count,
            percentage: percentage(count, total),
        }
    }
}

/// Labels ordered by descending count; equal counts keep the order labels were first seen in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    pub entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Count for a label, 0 if it was never seen.
    pub fn count_of(&self, label: &str) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map_or(0, |entry| entry.count)
    }
}

/// Counts occurrences of string labels.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter {
    index: HashMap<String, usize>,
    counts: Vec<(String, u64)>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `label`.
    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.counts.len());
                self.counts.push((label.to_string(), 1));
            }
        }
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sorts the tallies into a table, with percentages relative to `total`.
    pub fn into_table(self, total: u64) -> FrequencyTable {
        let mut counts = self.counts;
        // Stable sort; ties stay in first-seen order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        FrequencyTable {
            entries: counts
                .into_iter()
                .map(|(label, count)| FrequencyEntry::new(label, count, total))
                .collect(),
        }
    }
}

/// Line counts per fixed length bucket.
#[derive(Debug, Clone, Default)]
pub struct LengthBuckets {
    counts: [u64; LENGTH_BUCKETS.len()],
}

impl LengthBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a line of `len` bytes.
    pub fn record(&mut self, len: u64) {
        let slot = LENGTH_BUCKETS
            .iter()
            .position(|&(upper, _)| len < upper)
            .unwrap_or(LENGTH_BUCKETS.len() - 1);
        self.counts[slot] += 1;
    }

    /// One entry per bucket, in bucket order, including empty buckets.
    pub fn into_entries(self, total: u64) -> Vec<FrequencyEntry> {
        LENGTH_BUCKETS
            .iter()
            .zip(self.counts)
            .map(|(&(_, label), count)| FrequencyEntry::new(label, count, total))
            .collect()
    }
}

/// `count` as a percentage of `total`, 0 when `total` is 0.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
