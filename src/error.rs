//! Error types for conversion and batch processing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the library.
///
/// Malformed doc comments are never an error: the pipeline always degrades
/// to a best-effort rendering. Only the language lookup and the batch I/O
/// layer can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// No converter is registered under the requested name.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file-name or file-contents filter is not a valid regex.
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("only one of an output directory or an output file may be given")]
    ConflictingOutputs,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
