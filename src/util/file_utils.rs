// External crates
use std::fs;
use std::path::{Path, PathBuf};

// Local modules
use crate::error::DataError;

/// Parse the class label out of a sequence filename.
///
/// The convention is `<name>-<label>.<ext>`: the stem is split on `-` and
/// the second component must be a non-negative integer.
///
/// # Arguments
///
/// * `file_name` - Bare filename (no directory components)
///
/// # Returns
///
/// Returns the parsed label, or a `Parse` error when the filename does not
/// follow the convention.
pub fn parse_label(file_name: &str) -> Result<usize, DataError> {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| DataError::Parse {
            name: file_name.to_string(),
            reason: "missing filename stem".to_string(),
        })?;

    let label_part = stem.split('-').nth(1).ok_or_else(|| DataError::Parse {
        name: file_name.to_string(),
        reason: "no `-` label separator in stem".to_string(),
    })?;

    label_part.parse::<usize>().map_err(|_| DataError::Parse {
        name: file_name.to_string(),
        reason: format!("label component {:?} is not a non-negative integer", label_part),
    })
}

/// Read one sequence file as raw text and return its symbols as bytes.
///
/// The file handle is released as soon as the content is read, on error
/// paths included. Non-UTF-8 content is rejected as a `Decode` error
/// rather than decoded with a guessed fallback encoding.
pub fn read_sequence_file(path: &Path) -> Result<Vec<u8>, DataError> {
    let raw = fs::read(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let body = String::from_utf8(raw).map_err(|_| DataError::Decode {
        path: path.to_path_buf(),
    })?;

    Ok(body.into_bytes())
}

/// List the `.txt` sequence files in a directory, sorted by filename.
///
/// Sorting makes the corpus order (and therefore the train/test split and
/// the batch walk) deterministic across platforms.
pub fn list_sequence_files(dir: &Path) -> Result<Vec<PathBuf>, DataError> {
    let entries = fs::read_dir(dir).map_err(|source| DataError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DataError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        } else {
            log::debug!("Skipping non-sequence entry: {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}
