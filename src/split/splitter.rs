//! Two-pass partitioning of the lines of a set of files into part files.
//!
//! The first pass counts the non-empty lines so that the [`PartitionPlan`] can be
//! computed; the second pass re-reads the files in the same order and writes every line
//! to the currently open part, rolling over to the next part once the current one holds
//! its planned number of lines.
//!
//! The input files must not change between the two passes.

use super::plan::PartitionPlan;
use crate::api::input_file::{total_size, InputFile};
use crate::api::traits::progress::{fraction, Progress, ScaledProgress};
use crate::utilities::io::line_reader::LineReader;
use core::num::NonZeroU64;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Number of lines between two progress reports.
const PROGRESS_INTERVAL_LINES: u64 = 4096;

/// Buffer size used for each part file writer.
const WRITE_BUFFER_SIZE: usize = 256 * 1024;

/// Errors that can occur while partitioning.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

type Result<T> = core::result::Result<T, SplitError>;

/// A part file written by the second pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartOutput {
    /// Full path of the part file.
    pub path: PathBuf,

    /// Number of lines written to it.
    pub lines: u64,

    /// Number of bytes written to it, line terminators included.
    pub bytes: u64,
}

/// Result of partitioning a set of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    /// The plan the second pass followed.
    pub plan: PartitionPlan,

    /// Part files in part order.
    pub parts: Vec<PartOutput>,
}

impl SplitSummary {
    /// Lines counted by the first pass.
    pub fn total_lines(&self) -> u64 {
        self.plan.total_lines()
    }

    /// Lines written by the second pass.
    pub fn lines_written(&self) -> u64 {
        self.parts.iter().map(|part| part.lines).sum()
    }
}

/// First pass: counts the trimmed, non-empty lines of all files.
///
/// # Arguments
/// * `files` - The data files, in split order
/// * `progress` - Receives the fraction of bytes processed
pub fn count_lines<P: Progress + ?Sized>(files: &[InputFile], progress: &P) -> Result<u64> {
    let total_bytes = total_size(files);
    let mut bytes_done = 0u64;
    let mut total_lines = 0u64;

    for file in files {
        let mut reader = LineReader::open(&file.path).map_err(|source| read_error(file, source))?;
        while reader
            .next_line()
            .map_err(|source| read_error(file, source))?
            .is_some()
        {
            total_lines += 1;
            if total_lines % PROGRESS_INTERVAL_LINES == 0 {
                progress.report_progress(fraction(bytes_done + reader.bytes_read(), total_bytes));
            }
        }

        bytes_done += reader.bytes_read();
        progress.report_progress(fraction(bytes_done, total_bytes));
    }

    debug!("Counted {} lines in {} files", total_lines, files.len());
    Ok(total_lines)
}

/// Second pass: writes the lines of all files into the part files of `plan`.
///
/// Each line is written trimmed and followed by `\n`. A part is closed once it holds its
/// planned number of lines, unless it is the final part; the final part takes any lines
/// beyond the plan. Nothing is created when the plan has no parts.
///
/// # Arguments
/// * `files` - The data files, in the same order as for [`count_lines`]
/// * `plan` - The plan computed from the line count
/// * `output_dir` - Directory receiving the part files; created if missing
/// * `progress` - Receives the fraction of bytes processed
pub fn write_parts<P: Progress + ?Sized>(
    files: &[InputFile],
    plan: &PartitionPlan,
    output_dir: &Path,
    progress: &P,
) -> Result<SplitSummary> {
    let mut parts = Vec::with_capacity(plan.parts() as usize);
    if plan.parts() == 0 {
        return Ok(SplitSummary { plan: *plan, parts });
    }

    fs::create_dir_all(output_dir).map_err(|source| SplitError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    debug!(
        "Writing {} parts of {} lines, first {} with one extra",
        plan.parts(),
        plan.base(),
        plan.remainder()
    );

    let total_bytes = total_size(files);
    let mut bytes_done = 0u64;
    let mut lines_seen = 0u64;

    let mut current_part = 1u64;
    let mut capacity = plan.capacity(current_part);
    let mut writer = PartWriter::create(output_dir.join(plan.file_name(current_part)))?;

    for file in files {
        let mut reader = LineReader::open(&file.path).map_err(|source| read_error(file, source))?;
        while let Some(line) = reader
            .next_line()
            .map_err(|source| read_error(file, source))?
        {
            writer.write_line(line)?;
            lines_seen += 1;

            if writer.lines >= capacity && current_part < plan.parts() {
                parts.push(writer.finish()?);
                current_part += 1;
                capacity = plan.capacity(current_part);
                writer = PartWriter::create(output_dir.join(plan.file_name(current_part)))?;
            }

            if lines_seen % PROGRESS_INTERVAL_LINES == 0 {
                progress.report_progress(fraction(bytes_done + reader.bytes_read(), total_bytes));
            }
        }

        bytes_done += reader.bytes_read();
        progress.report_progress(fraction(bytes_done, total_bytes));
    }

    parts.push(writer.finish()?);

    let summary = SplitSummary { plan: *plan, parts };
    if summary.lines_written() != plan.total_lines() {
        warn!(
            "Input changed between passes: planned {} lines, wrote {}",
            plan.total_lines(),
            summary.lines_written()
        );
    }

    Ok(summary)
}

/// Runs both passes: counts the lines, plans `target_parts` parts and writes them.
///
/// Progress of the counting pass maps to `0.0..=0.5`, the writing pass to `0.5..=1.0`.
pub fn split_files<P: Progress + ?Sized>(
    files: &[InputFile],
    output_dir: &Path,
    target_parts: NonZeroU64,
    progress: &P,
) -> Result<SplitSummary> {
    let total_lines = count_lines(files, &ScaledProgress::new(progress, 0.0, 0.5))?;
    let plan = PartitionPlan::new(total_lines, target_parts);
    if plan.was_reduced() {
        warn!(
            "Only {} lines for {} requested parts, writing {} parts",
            total_lines,
            plan.requested_parts(),
            plan.parts()
        );
    }

    write_parts(
        files,
        &plan,
        output_dir,
        &ScaledProgress::new(progress, 0.5, 0.5),
    )
}

fn read_error(file: &InputFile, source: io::Error) -> SplitError {
    SplitError::Read {
        path: file.path.clone(),
        source,
    }
}

/// The currently open part file.
struct PartWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: u64,
    bytes: u64,
}

impl PartWriter {
    fn create(path: PathBuf) -> Result<Self> {
        match File::create(&path) {
            Ok(file) => Ok(Self {
                writer: BufWriter::with_capacity(WRITE_BUFFER_SIZE, file),
                path,
                lines: 0,
                bytes: 0,
            }),
            Err(source) => Err(SplitError::Write { path, source }),
        }
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let result = self
            .writer
            .write_all(line.as_bytes())
            .and_then(|()| self.writer.write_all(b"\n"));

        match result {
            Ok(()) => {
                self.lines += 1;
                self.bytes += line.len() as u64 + 1;
                Ok(())
            }
            Err(source) => Err(SplitError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn finish(mut self) -> Result<PartOutput> {
        match self.writer.flush() {
            Ok(()) => Ok(PartOutput {
                path: self.path,
                lines: self.lines,
                bytes: self.bytes,
            }),
            Err(source) => Err(SplitError::Write {
                path: self.path,
                source,
            }),
        }
    }
}
