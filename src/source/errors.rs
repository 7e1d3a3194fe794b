/// Errors from the I/O layer: config stores and dotfiles.
use std::path::PathBuf;

use thiserror::Error;

/// Typed errors from reading config vars or appending to dotfiles.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No config key matched the hint.
    #[error("No config var matches '{hint}'")]
    KeyNotFound {
        /// The hint that was searched.
        hint: String,
    },

    /// Several config keys matched the hint with similar confidence.
    #[error("Ambiguous config var '{hint}'. Candidates:\n  {}", candidates.join("\n  "))]
    AmbiguousKey {
        /// The hint that was searched.
        hint: String,
        /// Every key that matched.
        candidates: Vec<String>,
    },

    /// The config vars file could not be read.
    #[error("Cannot read config file {}: {source}", path.display())]
    ConfigRead {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config vars file is not a JSON object of strings.
    #[error("Invalid config file {}: {source}", path.display())]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A dotfile that should be appended to does not exist.
    #[error("File does not exist: {}", path.display())]
    FileMissing {
        /// The missing file.
        path: PathBuf,
    },

    /// A dotfile exists but cannot be opened for appending.
    #[error("Unable to write to {}", path.display())]
    NotWritable {
        /// The read-only file.
        path: PathBuf,
    },

    /// No home directory, so no default dotfile path.
    #[error("Cannot determine the home directory; pass the file path explicitly")]
    NoHomeDir,

    /// Any other I/O failure while appending.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
