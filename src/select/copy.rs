use crate::api::input_file::InputFile;
use crate::api::traits::progress::{fraction, Progress};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while copying selected files.
#[derive(Error, Debug)]
pub enum SelectError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Copies `files` into `output_dir`, keeping their file names.
///
/// The directory is created if missing; existing files of the same name are overwritten.
///
/// # Returns
/// The destination paths, in the order of `files`.
pub fn copy_selected<P: Progress + ?Sized>(
    files: &[InputFile],
    output_dir: &Path,
    progress: &P,
) -> Result<Vec<PathBuf>, SelectError> {
    fs::create_dir_all(output_dir).map_err(|source| SelectError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut copied = Vec::with_capacity(files.len());
    for (x, file) in files.iter().enumerate() {
        let destination = output_dir.join(&file.name);
        fs::copy(&file.path, &destination).map_err(|source| SelectError::Copy {
            from: file.path.clone(),
            to: destination.clone(),
            source,
        })?;

        copied.push(destination);
        progress.report_progress(fraction(x as u64 + 1, files.len() as u64));
    }

    debug!("Copied {} files to {}", copied.len(), output_dir.display());
    Ok(copied)
}
