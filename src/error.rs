// External crates
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the data layer (corpus loading, padding, batching).
///
/// None of these are recovered locally: the caller either gets a full
/// corpus or a visible failure with no partial result.
#[derive(Debug, Error)]
pub enum DataError {
    /// Directory or file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8 text.
    #[error("file {path} is not valid UTF-8 text")]
    Decode { path: PathBuf },

    /// Filename does not follow the `<name>-<label>.<ext>` convention.
    #[error("filename {name:?} does not match `<name>-<label>.<ext>`: {reason}")]
    Parse { name: String, reason: String },

    /// Corpus-level precondition violated (zero files, empty file,
    /// sequence longer than the padding length).
    #[error("{0}")]
    Config(String),
}
