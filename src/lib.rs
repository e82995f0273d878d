//! # jsonl-sampler
//!
//! Tools for characterizing and re-chunking large collections of line-delimited JSON
//! (`.jsonl`) records without loading them into memory.
//!
//! - [`analyze`] profiles a set of files into an [`analyze::report::AnalysisReport`],
//!   using bounded-memory [`stats`] for approximate percentiles.
//! - [`split`] partitions the concatenated lines of a set of files into N contiguous
//!   part files in two passes (count, then write).
//! - [`select`] picks a deterministic (even-stride) or seeded random subset of part files.

/// Public High Level API
pub mod api {
    /// Fatal configuration errors, reported before any data pass begins.
    pub mod errors;

    /// Describes a single input file handed to the analyzer, splitter or selector.
    pub mod input_file;

    /// Defaults and validation for the split and select workflows.
    pub mod settings;

    pub mod traits {
        /// Progress reporting for long running passes.
        pub mod progress;
    }
}

/// Bounded-memory summaries of streams of non-negative integers.
pub mod stats {
    /// Fixed logarithmic boundary table and its bucket counters.
    pub mod histogram;

    /// Count/sum/min/max plus histogram based percentiles.
    pub mod streaming_stats;
}

/// Data-shape profiling of JSONL records.
pub mod analyze {
    /// Streams input files into a report.
    pub mod analyzer;

    /// Best-effort field extraction from a single JSON line.
    pub mod record;

    /// ASCII table rendering of a finished report.
    pub mod render;

    /// The report structure and its tallies.
    pub mod report;
}

/// Exact two-pass partitioning of lines into part files.
pub mod split {
    /// Lines-per-part arithmetic and part file naming.
    pub mod plan;

    /// The counting and writing passes.
    pub mod splitter;
}

/// Subset selection of part files.
pub mod select {
    /// Copies selected files into an output directory.
    pub mod copy;

    /// Even-stride and seeded random selection.
    pub mod selection;
}

pub mod utilities {
    #[cfg(test)]
    pub mod tests {
        pub mod fixtures;
    }

    pub mod io {
        /// Lists data files and part files in a directory.
        pub mod file_finder;

        /// Reads trimmed, non-empty lines with a reused buffer.
        pub mod line_reader;
    }
}

pub mod prelude {
    pub use crate::analyze::analyzer::analyze_files;
    pub use crate::analyze::render::render_report;
    pub use crate::analyze::report::AnalysisReport;
    pub use crate::api::errors::ConfigError;
    pub use crate::api::input_file::InputFile;
    pub use crate::api::settings::{SelectSettings, SplitSettings};
    pub use crate::api::traits::progress::{NoProgress, Progress, ProgressCallback};
    pub use crate::select::copy::{copy_selected, SelectError};
    pub use crate::select::selection::{select_files, SelectionAmount, SelectionMode};
    pub use crate::split::plan::PartitionPlan;
    pub use crate::split::splitter::{
        count_lines, split_files, write_parts, SplitError, SplitSummary,
    };
    pub use crate::stats::streaming_stats::{LengthSummary, StreamingStats};
    pub use crate::utilities::io::file_finder::{find_data_files, find_part_files};
}
