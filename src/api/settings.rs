use crate::api::errors::ConfigError;
use crate::select::selection::{SelectionAmount, SelectionMode};
use core::num::NonZeroU64;
use std::path::{Path, PathBuf};

/// Number of parts produced by the splitter when none is specified.
pub const DEFAULT_PARTS: u64 = 100;

/// Directory the splitter writes part files to when none is specified.
pub const DEFAULT_SPLIT_OUTPUT_DIR: &str = "./output";

/// Fraction of part files selected when neither a ratio nor a count is specified.
pub const DEFAULT_SELECT_RATIO: f64 = 0.1;

/// Directory the selector copies files to when none is specified.
pub const DEFAULT_SELECT_OUTPUT_DIR: &str = "./selected";

/// Controls how the input directory is partitioned into part files.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSettings {
    /// Directory holding the data files to partition.
    pub input_dir: PathBuf,

    /// Directory receiving the `part_*.jsonl` files.
    pub output_dir: PathBuf,

    /// Requested number of parts.
    ///
    /// # Remarks
    /// Reduced to the total line count when the input has fewer lines than this.
    pub parts: u64,
}

impl SplitSettings {
    /// Creates a new `SplitSettings` with default values.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: PathBuf::from(DEFAULT_SPLIT_OUTPUT_DIR),
            parts: DEFAULT_PARTS,
        }
    }

    /// Checks the settings, returning the part count as a non-zero value.
    pub fn validate(&self) -> Result<NonZeroU64, ConfigError> {
        validate_input_dir(&self.input_dir)?;
        NonZeroU64::new(self.parts).ok_or(ConfigError::InvalidParts)
    }
}

/// Controls which part files are selected and where they are copied.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectSettings {
    /// Directory holding the `part_*.jsonl` files.
    pub input_dir: PathBuf,

    /// Directory receiving the copies of the selected files.
    pub output_dir: PathBuf,

    /// Fraction of files to select. Mutually exclusive with [`Self::count`].
    pub ratio: Option<f64>,

    /// Exact number of files to select. Mutually exclusive with [`Self::ratio`].
    pub count: Option<usize>,

    /// How the files are picked.
    pub mode: SelectionMode,

    /// Seed for [`SelectionMode::Random`]. Ignored in even mode.
    pub seed: Option<u64>,
}

impl SelectSettings {
    /// Creates a new `SelectSettings` with default values.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: PathBuf::from(DEFAULT_SELECT_OUTPUT_DIR),
            ratio: None,
            count: None,
            mode: SelectionMode::default(),
            seed: None,
        }
    }

    /// Checks the settings, returning how many files should be selected.
    pub fn validate(&self) -> Result<SelectionAmount, ConfigError> {
        validate_input_dir(&self.input_dir)?;
        self.amount()
    }

    /// Resolves the ratio/count pair into a single [`SelectionAmount`].
    pub fn amount(&self) -> Result<SelectionAmount, ConfigError> {
        match (self.ratio, self.count) {
            (Some(_), Some(_)) => Err(ConfigError::ConflictingAmount),
            (None, Some(0)) => Err(ConfigError::InvalidCount),
            (None, Some(count)) => Ok(SelectionAmount::Count(count)),
            (Some(ratio), None) if !ratio.is_finite() || ratio <= 0.0 => {
                Err(ConfigError::InvalidRatio(ratio))
            }
            (Some(ratio), None) => Ok(SelectionAmount::Ratio(ratio)),
            (None, None) => Ok(SelectionAmount::Ratio(DEFAULT_SELECT_RATIO)),
        }
    }
}

/// Ensures the given path exists and is a directory.
pub fn validate_input_dir(path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::PathNotFound(path.to_path_buf()));
    }

    if !path.is_dir() {
        return Err(ConfigError::NotADirectory(path.to_path_buf()));
    }

    Ok(())
}
