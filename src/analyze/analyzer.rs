//! Profiling pass over a set of JSONL data files.
//!
//! Every file is streamed line by line exactly once; nothing but the tallies in
//! [`RecordProfiler`] is kept in memory.

use super::record::{extract_fields, EMPTY_BODIES};
use super::report::{AnalysisReport, FileEntry, FrequencyCounter, LengthBuckets};
use crate::api::input_file::{total_size, InputFile};
use crate::api::traits::progress::{fraction, Progress};
use crate::stats::streaming_stats::StreamingStats;
use crate::utilities::io::line_reader::LineReader;
use tracing::{debug, warn};

/// Number of lines between two progress reports.
const PROGRESS_INTERVAL_LINES: u64 = 4096;

/// Accumulates the statistics of individual lines.
#[derive(Debug, Clone, Default)]
pub struct RecordProfiler {
    total_lines: u64,
    parse_errors: u64,
    body_types: FrequencyCounter,
    content_types: FrequencyCounter,
    chat_types: FrequencyCounter,
    length_buckets: LengthBuckets,
    line_stats: StreamingStats,
    body_stats: StreamingStats,
}

impl RecordProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profiles one trimmed, non-empty line.
    ///
    /// The line always counts towards the totals and the line length statistics;
    /// the field tallies and body statistics only include lines which parse as a JSON object.
    pub fn observe_line(&mut self, line: &str) {
        let line_bytes = line.len() as u64;
        self.total_lines += 1;
        self.line_stats.add(line_bytes);
        self.length_buckets.record(line_bytes);

        let fields = match extract_fields(line) {
            Ok(fields) => fields,
            Err(_) => {
                self.parse_errors += 1;
                return;
            }
        };

        self.content_types.increment(&fields.content_type);
        self.chat_types.increment(&fields.chat_type);
        match fields.first_body {
            Some(body) => {
                self.body_types.increment(&body.body_type);
                self.body_stats.add(body.serialized_len);
            }
            None => {
                self.body_types.increment(EMPTY_BODIES);
                self.body_stats.add(0);
            }
        }
    }

    /// Number of lines observed so far.
    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    /// Builds the final report.
    ///
    /// # Arguments
    /// * `files` - The data files that were scanned
    /// * `skipped_files` - Names of files that could not be read completely
    pub fn into_report(self, files: &[InputFile], skipped_files: Vec<String>) -> AnalysisReport {
        let total = self.total_lines;
        AnalysisReport {
            files: files.iter().map(FileEntry::from).collect(),
            skipped_files,
            total_file_size: total_size(files),
            total_lines: total,
            parse_errors: self.parse_errors,
            body_types: self.body_types.into_table(total),
            content_types: self.content_types.into_table(total),
            chat_types: self.chat_types.into_table(total),
            line_lengths: self.line_stats.summary(),
            body_lengths: self.body_stats.summary(),
            length_buckets: self.length_buckets.into_entries(total),
        }
    }
}

/// Profiles every line of the given files, in order.
///
/// A file which cannot be opened is skipped with a warning. A read error (including
/// invalid UTF-8) stops reading that file with a warning; lines read before the error
/// stay counted.
///
/// # Arguments
/// * `files` - The data files to scan, in scan order
/// * `progress` - Receives the fraction of bytes processed
pub fn analyze_files<P: Progress + ?Sized>(files: &[InputFile], progress: &P) -> AnalysisReport {
    let total_bytes = total_size(files);
    let mut profiler = RecordProfiler::new();
    let mut skipped_files = Vec::new();
    let mut bytes_done = 0u64;

    for file in files {
        let mut reader = match LineReader::open(&file.path) {
            Ok(reader) => reader,
            Err(e) => {
                warn!("Unable to open {}, skipping: {}", file.name, e);
                skipped_files.push(file.name.clone());
                continue;
            }
        };

        debug!("Analyzing {} ({} bytes)", file.name, file.size);
        loop {
            match reader.next_line() {
                Ok(Some(line)) => profiler.observe_line(line),
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read {}, skipping remainder: {}", file.name, e);
                    skipped_files.push(file.name.clone());
                    break;
                }
            }

            if profiler.total_lines() % PROGRESS_INTERVAL_LINES == 0 {
                progress.report_progress(fraction(bytes_done + reader.bytes_read(), total_bytes));
            }
        }

        bytes_done += reader.bytes_read();
        progress.report_progress(fraction(bytes_done, total_bytes));
    }

    debug!(
        "Analyzed {} lines from {} files",
        profiler.total_lines(),
        files.len()
    );
    profiler.into_report(files, skipped_files)
}
