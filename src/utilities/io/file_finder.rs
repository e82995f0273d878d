use crate::api::errors::ConfigError;
use crate::api::input_file::InputFile;
use crate::api::settings::validate_input_dir;
use std::fs::*;
use std::io;
use std::path::*;
use tracing::warn;

/// Prefix of every file written by the splitter.
pub const PART_FILE_PREFIX: &str = "part_";

/// Extension of every file written by the splitter.
pub const PART_FILE_EXTENSION: &str = ".jsonl";

/// Iterates through the regular files directly inside a given directory,
/// passing each file accepted by `filter` to the provided callback function.
///
/// Subdirectories are not descended into. Symlinks are followed; entries that cannot
/// be stat'ed, such as dangling symlinks, are skipped with a warning.
///
/// # Arguments
///
/// * `directory_path` - The full path to the directory to search
/// * `filter` - Decides from the file name whether a file is reported
/// * `callback` - Function that will be called for each file found
///
/// # Errors
///
/// Returns an error if the directory itself cannot be listed.
pub fn find_files<P, Filt, F>(directory_path: P, mut filter: Filt, mut callback: F) -> io::Result<()>
where
    P: AsRef<Path>,
    Filt: FnMut(&str) -> bool,
    F: FnMut(InputFile),
{
    for entry in read_dir(directory_path.as_ref())? {
        let entry = entry?;
        let path = entry.path();
        let metadata = match metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if filter(&name) {
            callback(InputFile::new(path, name, metadata.len()));
        }
    }

    Ok(())
}

/// Lists the data files of a directory: every regular file whose name does not
/// start with a dot, sorted by name.
pub fn find_data_files<P: AsRef<Path>>(directory_path: P) -> io::Result<Vec<InputFile>> {
    let mut files = Vec::new();
    find_files(
        directory_path,
        |name| !name.starts_with('.'),
        |file| files.push(file),
    )?;
    sort_by_name(&mut files);
    Ok(files)
}

/// Lists the part files (`part_*.jsonl`) of a directory, sorted by name.
pub fn find_part_files<P: AsRef<Path>>(directory_path: P) -> io::Result<Vec<InputFile>> {
    let mut files = Vec::new();
    find_files(directory_path, is_part_file_name, |file| files.push(file))?;
    sort_by_name(&mut files);
    Ok(files)
}

/// Whether a file name matches `part_*.jsonl`.
pub fn is_part_file_name(name: &str) -> bool {
    name.len() >= PART_FILE_PREFIX.len() + PART_FILE_EXTENSION.len()
        && name.starts_with(PART_FILE_PREFIX)
        && name.ends_with(PART_FILE_EXTENSION)
}

/// Validates `directory_path` and lists its data files, failing if there are none.
pub fn resolve_data_files(directory_path: &Path) -> Result<Vec<InputFile>, ConfigError> {
    validate_input_dir(directory_path)?;
    let files = find_data_files(directory_path).map_err(|source| ConfigError::ListDirectory {
        path: directory_path.to_path_buf(),
        source,
    })?;

    if files.is_empty() {
        return Err(ConfigError::NoDataFiles(directory_path.to_path_buf()));
    }

    Ok(files)
}

/// Validates `directory_path` and lists its part files, failing if there are none.
pub fn resolve_part_files(directory_path: &Path) -> Result<Vec<InputFile>, ConfigError> {
    validate_input_dir(directory_path)?;
    let files = find_part_files(directory_path).map_err(|source| ConfigError::ListDirectory {
        path: directory_path.to_path_buf(),
        source,
    })?;

    if files.is_empty() {
        return Err(ConfigError::NoPartFiles(directory_path.to_path_buf()));
    }

    Ok(files)
}

fn sort_by_name(files: &mut [InputFile]) {
    files.sort_by(|a, b| a.name.cmp(&b.name));
}
