use derive_new::new;
use std::path::PathBuf;

/// A file found on disk which is fed to one of the passes.
///
/// # Remarks
///
/// The size is captured once at discovery time and is only used for progress
/// reporting and summaries; the passes themselves never trust it.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct InputFile {
    /// Full path to the file.
    pub path: PathBuf,

    /// File name without any directory components.
    pub name: String,

    /// Size of the file in bytes when it was discovered.
    pub size: u64,
}

/// Sums the sizes of all given files.
pub fn total_size(files: &[InputFile]) -> u64 {
    files.iter().map(|file| file.size).sum()
}
